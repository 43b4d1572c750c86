//! Animation parameter sink
//!
//! The blend tree itself lives in an external animation system; the
//! controllers only write named float parameters into it once per frame.

use std::collections::HashMap;

/// Horizontal speed after collision resolution, for blend-tree thresholds
pub const PARAM_SPEED: &str = "Speed";

/// Raw input magnitude in [0, 1], for animation playback rate
///
/// Kept separate from `Speed` so clip playback does not slow down when a
/// collision eats part of the displacement.
pub const PARAM_MOTION_SPEED: &str = "MotionSpeed";

/// Accepts named float parameters for the animation system
pub trait AnimationSink {
    /// Write a float parameter by name
    fn set_float(&mut self, name: &str, value: f32);
}

/// In-memory parameter store
///
/// Stands in for an engine animator in tests and the headless demo.
#[derive(Debug, Clone, Default)]
pub struct AnimatorParams {
    values: HashMap<String, f32>,
}

impl AnimatorParams {
    /// Create an empty parameter store
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a parameter, defaulting to 0 when never written
    pub fn get_float(&self, name: &str) -> f32 {
        self.values.get(name).copied().unwrap_or(0.0)
    }
}

impl AnimationSink for AnimatorParams {
    fn set_float(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_string(), value);
    }
}
