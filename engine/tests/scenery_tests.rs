//! Scenery Tests - Seeded Placement and Obstacle Conversion
//!
//! The same placement list feeds rendering and collision, so these tests
//! check both sides against one generated scene.

use glam::Vec3;

use forest_walk_engine::config::WalkConfig;
use forest_walk_engine::input::{InputAction, KeyboardState};
use forest_walk_engine::physics::{CollisionConfig, MoveResolution, ObstacleSet};
use forest_walk_engine::player::FirstPersonController;
use forest_walk_engine::world::{Placement, Scenery, SceneryConfig, SceneryKind, SeededRandom};

#[test]
fn test_generation_is_deterministic() {
    let config = SceneryConfig::default();
    let first = Scenery::generate(&config);
    let second = Scenery::generate(&config);

    assert_eq!(first.placements(), second.placements());
    assert!(!first.is_empty());
}

#[test]
fn test_seed_sequence_is_stable() {
    let mut rng = SeededRandom::new(42);
    let sequence: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();

    let mut again = SeededRandom::new(42);
    for value in sequence {
        assert_eq!(again.next_u32(), value);
    }
}

#[test]
fn test_road_is_clear() {
    let config = SceneryConfig::default();
    let scenery = Scenery::generate(&config);

    for placement in scenery.placements() {
        match placement.kind {
            SceneryKind::Tree => assert!(
                placement.x.abs() > config.road_half_width || placement.z.abs() > config.road_half_length
            ),
            SceneryKind::Rock => assert!(placement.x.abs() > config.road_half_width),
            SceneryKind::FencePost => assert_eq!(placement.x.abs(), config.fence_offset),
        }
    }
}

#[test]
fn test_obstacles_skip_rocks() {
    let scenery = Scenery::generate(&SceneryConfig::default());
    let obstacles = ObstacleSet::from_scenery(&scenery, &CollisionConfig::default());

    let expected = scenery.count(SceneryKind::Tree) + scenery.count(SceneryKind::FencePost);
    assert_eq!(obstacles.len(), expected);
    assert!(scenery.count(SceneryKind::Rock) > 0);
}

#[test]
fn test_obstacle_shapes_rest_on_ground() {
    let collision = CollisionConfig::default();
    let scenery = Scenery::from_placements(vec![
        Placement {
            kind: SceneryKind::Tree,
            x: 4.0,
            z: -3.0,
        },
        Placement {
            kind: SceneryKind::Rock,
            x: 6.0,
            z: 6.0,
        },
        Placement {
            kind: SceneryKind::FencePost,
            x: -2.0,
            z: 8.0,
        },
    ]);
    let obstacles = ObstacleSet::from_scenery(&scenery, &collision);
    let boxes = obstacles.boxes();

    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0].center, Vec3::new(4.0, 0.5, -3.0));
    assert_eq!(boxes[0].half_extents, collision.tree_half_extents);
    assert_eq!(boxes[0].min().y, 0.0);
    assert_eq!(boxes[1].center, Vec3::new(-2.0, 0.5, 8.0));
    assert_eq!(boxes[1].half_extents, collision.fence_half_extents);
}

#[test]
fn test_collision_disabled_builds_no_obstacles() {
    let scenery = Scenery::generate(&SceneryConfig::default());
    let controller = FirstPersonController::new(WalkConfig::free_walk(), &scenery);
    assert!(controller.obstacles().is_empty());
}

#[test]
fn test_walk_down_the_road_unobstructed() {
    let config = WalkConfig::default();
    let scenery = Scenery::generate(&config.scenery);
    let mut controller = FirstPersonController::new(config, &scenery);
    assert!(!controller.obstacles().is_empty());

    let mut keyboard = KeyboardState::new();
    keyboard.handle_action(InputAction::Forward, true);

    // 10 units along -z from the spawn point stays between the fences
    for _ in 0..200 {
        let report = controller.update(1.0 / 60.0, &keyboard);
        assert_eq!(report.resolution, MoveResolution::Full);
    }
    assert!((controller.position().z - (-5.0)).abs() < 1e-3);
}

#[test]
fn test_fence_stops_sideways_walk() {
    let config = WalkConfig::default();
    let scenery = Scenery::generate(&config.scenery);
    let mut controller = FirstPersonController::new(config, &scenery);

    // Spawn z = 5 sits between the posts at z = 4 and z = 8; walk up to
    // z = 4 first so a post is directly in the way
    let mut keyboard = KeyboardState::new();
    keyboard.handle_action(InputAction::Forward, true);
    for _ in 0..20 {
        controller.update(1.0 / 60.0, &keyboard);
    }
    assert!((controller.position().z - 4.0).abs() < 1e-3);

    keyboard.handle_action(InputAction::Forward, false);
    keyboard.handle_action(InputAction::Left, true);
    for _ in 0..120 {
        controller.update(1.0 / 60.0, &keyboard);
    }

    // Post at x = -2 with half width 0.05 and radius 0.3
    assert!(controller.position().x >= -2.0 + 0.35 - 1e-4);
}
