//! Physics module for Forest Walk
//!
//! Static obstacle collision for the walking player. Built from scratch on
//! glam math; there is no physics library dependency.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**. The ground plane is y = 0 and obstacles rest on it.
//!
//! # Submodules
//!
//! - [`collision`] - Obstacle boxes, point-vs-box overlap and axis-sliding resolution

pub mod collision;

pub use collision::{CollisionConfig, MoveResolution, ObstacleBox, ObstacleSet};
