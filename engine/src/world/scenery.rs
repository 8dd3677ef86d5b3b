//! Procedural Scenery Placement
//!
//! Scatters trees and rocks over the ground plane from a fixed seed and lines
//! the road with fence posts. The result is an ordered list generated once at
//! load; the renderer and the collision set both read the same list, so what
//! the player sees is exactly what they bump into.
//!
//! Layout: an asphalt road runs along the z axis through the origin. Trees
//! and rocks are kept off it; fence posts stand on both edges.

use serde::{Deserialize, Serialize};

use super::random::SeededRandom;

/// Kind of scenery object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneryKind {
    Tree,
    Rock,
    FencePost,
}

/// One placed object on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: SceneryKind,
    pub x: f32,
    pub z: f32,
}

/// Scenery generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneryConfig {
    pub seed: u32,
    /// Tree candidates drawn (some land on the road and are dropped).
    pub tree_count: usize,
    /// Trees are drawn from `[-tree_spread, tree_spread]` on both axes.
    pub tree_spread: f32,
    /// Rock candidates drawn.
    pub rock_count: usize,
    pub rock_spread: f32,
    /// Half-width of the strip along the z axis kept clear of trees and rocks.
    pub road_half_width: f32,
    /// Half-length of the road; trees beyond it may stand at any x.
    pub road_half_length: f32,
    /// Distance between fence posts along the road. `<= 0` disables the fence.
    pub fence_spacing: f32,
    /// Fence posts stand at `x = ±fence_offset`.
    pub fence_offset: f32,
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tree_count: 100,
            tree_spread: 20.0,
            rock_count: 400,
            rock_spread: 22.0,
            road_half_width: 2.5,
            road_half_length: 20.0,
            fence_spacing: 4.0,
            fence_offset: 2.0,
        }
    }
}

/// Ordered scenery placements for one scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenery {
    placements: Vec<Placement>,
}

impl Scenery {
    /// Use a precomputed placement list as-is.
    pub fn from_placements(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    /// Generate placements: trees, then rocks, then fence posts (left edge
    /// then right edge, each running toward +z).
    pub fn generate(config: &SceneryConfig) -> Self {
        let mut rng = SeededRandom::new(config.seed);
        let mut placements = Vec::with_capacity(config.tree_count + config.rock_count);

        for _ in 0..config.tree_count {
            let x = rng.range(-config.tree_spread, config.tree_spread);
            let z = rng.range(-config.tree_spread, config.tree_spread);
            if x.abs() > config.road_half_width || z.abs() > config.road_half_length {
                placements.push(Placement {
                    kind: SceneryKind::Tree,
                    x,
                    z,
                });
            }
        }

        for _ in 0..config.rock_count {
            let x = rng.range(-config.rock_spread, config.rock_spread);
            let z = rng.range(-config.rock_spread, config.rock_spread);
            if x.abs() > config.road_half_width {
                placements.push(Placement {
                    kind: SceneryKind::Rock,
                    x,
                    z,
                });
            }
        }

        if config.fence_spacing > 0.0 {
            let posts = (2.0 * config.road_half_length / config.fence_spacing).floor() as usize + 1;
            for side in [-1.0, 1.0] {
                for i in 0..posts {
                    placements.push(Placement {
                        kind: SceneryKind::FencePost,
                        x: side * config.fence_offset,
                        z: -config.road_half_length + i as f32 * config.fence_spacing,
                    });
                }
            }
        }

        let scenery = Self { placements };
        tracing::info!(
            seed = config.seed,
            trees = scenery.count(SceneryKind::Tree),
            rocks = scenery.count(SceneryKind::Rock),
            fence_posts = scenery.count(SceneryKind::FencePost),
            "generated scenery"
        );
        scenery
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placements of one kind, in generation order.
    pub fn of_kind(&self, kind: SceneryKind) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |p| p.kind == kind)
    }

    pub fn count(&self, kind: SceneryKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
