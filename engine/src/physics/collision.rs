//! Collision Detection
//!
//! The player is a point with a collision radius; scenery obstacles are
//! axis-aligned boxes. A point collides with a box when it is closer than
//! `radius + half_extent` on every axis at once.
//!
//! Horizontal moves are resolved with axis sliding: if the full move is
//! blocked, the x-only and z-only components are tried on their own so the
//! player glides along a wall instead of stopping dead. Height changes are
//! never tested.
//!
//! # Example
//!
//! ```ignore
//! use forest_walk_engine::physics::{ObstacleBox, ObstacleSet};
//! use glam::Vec3;
//!
//! let obstacles = ObstacleSet::new(vec![ObstacleBox::new(Vec3::ZERO, Vec3::splat(0.5))]);
//! let resolved = obstacles.resolve_horizontal(old_position, tentative, 0.3);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::world::{Scenery, SceneryKind};

/// Collision tuning and per-kind obstacle shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// When false, tentative moves are always accepted.
    pub enabled: bool,
    /// Player collision radius.
    pub player_radius: f32,
    /// Half-extents of a tree trunk box (trunk is 0.2 wide and 1.0 tall).
    pub tree_half_extents: Vec3,
    /// Half-extents of a fence post box.
    pub fence_half_extents: Vec3,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            player_radius: 0.3,
            tree_half_extents: Vec3::new(0.1, 0.5, 0.1),
            fence_half_extents: Vec3::new(0.05, 0.5, 0.05),
        }
    }
}

/// Static axis-aligned obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleBox {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl ObstacleBox {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Box resting on the ground plane (y = 0) at `(x, z)`.
    pub fn on_ground(x: f32, z: f32, half_extents: Vec3) -> Self {
        Self::new(Vec3::new(x, half_extents.y, z), half_extents)
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Check if a point with `radius` overlaps this box on all three axes.
    ///
    /// Strict inequality: touching exactly at `radius + half_extent` is free.
    #[inline]
    pub fn collides(&self, point: Vec3, radius: f32) -> bool {
        let distance = (point - self.center).abs();
        let reach = self.half_extents + Vec3::splat(radius);
        distance.cmplt(reach).all()
    }
}

/// Outcome of resolving one horizontal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResolution {
    /// The full move was free.
    Full,
    /// Full move blocked; only the x component was applied.
    SlideX,
    /// Full move blocked; only the z component was applied.
    SlideZ,
    /// Both components blocked; the player stays put.
    Blocked,
}

/// Immutable set of obstacles, built once per scene.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    boxes: Vec<ObstacleBox>,
}

impl ObstacleSet {
    pub fn new(boxes: Vec<ObstacleBox>) -> Self {
        Self { boxes }
    }

    /// Build obstacles from scenery placements.
    ///
    /// Trees and fence posts become boxes resting on the ground; rocks are
    /// decorative and are skipped.
    pub fn from_scenery(scenery: &Scenery, config: &CollisionConfig) -> Self {
        let boxes: Vec<ObstacleBox> = scenery
            .placements()
            .iter()
            .filter_map(|placement| {
                let half = match placement.kind {
                    SceneryKind::Tree => config.tree_half_extents,
                    SceneryKind::FencePost => config.fence_half_extents,
                    SceneryKind::Rock => return None,
                };
                Some(ObstacleBox::on_ground(placement.x, placement.z, half))
            })
            .collect();

        tracing::info!(
            obstacles = boxes.len(),
            placements = scenery.len(),
            "built obstacle set from scenery"
        );
        Self { boxes }
    }

    pub fn boxes(&self) -> &[ObstacleBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Check a candidate position against every obstacle.
    pub fn any_collision(&self, point: Vec3, radius: f32) -> bool {
        self.boxes.iter().any(|b| b.collides(point, radius))
    }

    /// Resolve a horizontal move from `old` toward `tentative`.
    ///
    /// The height of `tentative` is kept in every candidate. If the full
    /// `(x, z)` move collides, x-only (old z) and z-only (old x) are tested
    /// independently; the first free one wins, x before z.
    pub fn resolve_horizontal(&self, old: Vec3, tentative: Vec3, radius: f32) -> (Vec3, MoveResolution) {
        if !self.any_collision(tentative, radius) {
            return (tentative, MoveResolution::Full);
        }

        let x_only = Vec3::new(tentative.x, tentative.y, old.z);
        if !self.any_collision(x_only, radius) {
            return (x_only, MoveResolution::SlideX);
        }

        let z_only = Vec3::new(old.x, tentative.y, tentative.z);
        if !self.any_collision(z_only, radius) {
            return (z_only, MoveResolution::SlideZ);
        }

        (Vec3::new(old.x, tentative.y, old.z), MoveResolution::Blocked)
    }
}
