//! Cursor Tracker
//!
//! Converts absolute cursor positions (as delivered by cursor-moved events
//! with the cursor captured) into look deltas. The first sample after
//! activation only sets the baseline, so the camera does not snap toward
//! wherever the cursor happened to be.
//!
//! # Example
//!
//! ```rust,ignore
//! use forest_walk_engine::input::CursorTracker;
//!
//! let mut cursor = CursorTracker::new();
//! assert_eq!(cursor.sample(640.0, 360.0), (0.0, 0.0)); // baseline
//! let (dx, dy) = cursor.sample(650.0, 350.0);
//! // dx = 10.0, dy = 10.0 (cursor moved up, so dy is positive)
//! ```

/// Tracks the previous cursor position and produces per-sample deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorTracker {
    /// Previous cursor position, `None` until the first sample after activation.
    last: Option<(f64, f64)>,
}

impl CursorTracker {
    /// Create a tracker waiting for its first sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position and return the look delta `(dx, dy)`.
    ///
    /// `dx` is positive when the cursor moves right. `dy` is positive when
    /// the cursor moves up: screen Y grows downward, so it is inverted here.
    pub fn sample(&mut self, x: f64, y: f64) -> (f32, f32) {
        let delta = match self.last {
            Some((last_x, last_y)) => ((x - last_x) as f32, (last_y - y) as f32),
            None => (0.0, 0.0),
        };
        self.last = Some((x, y));
        delta
    }

    /// Forget the baseline. The next sample yields a zero delta.
    ///
    /// Call when the cursor is (re)captured.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Check whether a baseline has been recorded.
    pub fn has_baseline(&self) -> bool {
        self.last.is_some()
    }
}
