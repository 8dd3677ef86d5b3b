//! Forest Walk - Headless Replay
//!
//! Drives the first-person controller through a fixed input script at 60 Hz
//! and logs the camera path. Useful for checking tuning changes without a
//! window.
//!
//! Run with: `cargo run --bin forest_walk -- [config.json]`
//!
//! The script walks forward down the road, turns toward the tree line,
//! strafes, jumps, looks around, walks into the fence and finally presses
//! Escape.

use std::path::PathBuf;

use winit::keyboard::KeyCode;

use forest_walk_engine::config::{ConfigError, WalkConfig};
use forest_walk_engine::input::{KeyBindings, KeyboardState};
use forest_walk_engine::player::FirstPersonController;
use forest_walk_engine::world::Scenery;

const FRAME_TIME: f32 = 1.0 / 60.0;

/// Log the camera every this many frames.
const LOG_INTERVAL: u32 = 30;

/// One segment of the replay script.
struct Segment {
    label: &'static str,
    frames: u32,
    keys: &'static [KeyCode],
    /// Cursor travel per frame in pixels.
    cursor_step: (f64, f64),
}

const SCRIPT: &[Segment] = &[
    Segment {
        label: "walk down the road",
        frames: 90,
        keys: &[KeyCode::KeyW],
        cursor_step: (0.0, 0.0),
    },
    Segment {
        label: "turn toward the trees",
        frames: 30,
        keys: &[],
        cursor_step: (30.0, 0.0),
    },
    Segment {
        label: "strafe",
        frames: 60,
        keys: &[KeyCode::KeyA],
        cursor_step: (0.0, 0.0),
    },
    Segment {
        label: "jump",
        frames: 60,
        keys: &[KeyCode::Space, KeyCode::KeyW],
        cursor_step: (0.0, 0.0),
    },
    Segment {
        label: "look up and back down",
        frames: 40,
        keys: &[],
        cursor_step: (0.0, -25.0),
    },
    Segment {
        label: "level out",
        frames: 40,
        keys: &[],
        cursor_step: (0.0, 25.0),
    },
    Segment {
        label: "diagonal into the fence",
        frames: 120,
        keys: &[KeyCode::KeyW, KeyCode::KeyD],
        cursor_step: (0.0, 0.0),
    },
    Segment {
        label: "quit",
        frames: 1,
        keys: &[KeyCode::Escape],
        cursor_step: (0.0, 0.0),
    },
];

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => WalkConfig::load(&PathBuf::from(path))?,
        None => {
            tracing::info!("no config given, using defaults");
            WalkConfig::default()
        }
    };

    let scenery = Scenery::generate(&config.scenery);
    let mut controller = FirstPersonController::new(config, &scenery);
    let bindings = KeyBindings::default();
    let mut keyboard = KeyboardState::new();

    let mut cursor = (640.0, 360.0);
    controller.handle_cursor_position(cursor.0, cursor.1);

    let mut frame = 0u32;
    'script: for segment in SCRIPT {
        tracing::info!(segment = segment.label, frames = segment.frames, "segment");

        for &key in segment.keys {
            keyboard.handle_key(&bindings, key, true);
        }

        for _ in 0..segment.frames {
            if segment.cursor_step != (0.0, 0.0) {
                cursor.0 += segment.cursor_step.0;
                cursor.1 += segment.cursor_step.1;
                controller.handle_cursor_position(cursor.0, cursor.1);
            }

            if keyboard.quit_requested() {
                break 'script;
            }

            let report = controller.update(FRAME_TIME, &keyboard);
            keyboard.end_frame();

            if report.jumped {
                tracing::info!(frame, "jump");
            }
            if frame % LOG_INTERVAL == 0 {
                let position = controller.position();
                let forward = controller.forward();
                tracing::info!(
                    frame,
                    x = position.x,
                    y = position.y,
                    z = position.z,
                    yaw = controller.camera().yaw(),
                    pitch = controller.camera().pitch(),
                    forward = ?forward,
                    "camera"
                );
            }
            frame += 1;
        }

        for &key in segment.keys {
            keyboard.handle_key(&bindings, key, false);
        }
    }

    let position = controller.position();
    tracing::info!(frames = frame, final_position = ?position, "replay finished");
    Ok(())
}
