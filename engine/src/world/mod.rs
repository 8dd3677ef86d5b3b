//! World Module
//!
//! Seeded scenery placement for the walk scene.

pub mod random;
pub mod scenery;

pub use random::SeededRandom;
pub use scenery::{Placement, Scenery, SceneryConfig, SceneryKind};
