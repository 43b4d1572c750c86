//! Look controller configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Which local Euler component procedural bending writes
///
/// Rig-convention dependent: which axis a bone bends around when the
/// character looks up or down is determined by the bone's local axis
/// orientation, so rigs authored in different tools need different axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BendAxis {
    /// Bend around the local X axis
    X,
    /// Bend around the local Z axis
    Z,
}

impl BendAxis {
    /// Read the bend component of an Euler triple
    pub fn component(&self, euler: Vec3) -> f32 {
        match self {
            BendAxis::X => euler.x,
            BendAxis::Z => euler.z,
        }
    }

    /// Overwrite the bend component of an Euler triple, leaving the others
    pub fn write(&self, euler: &mut Vec3, angle: f32) {
        match self {
            BendAxis::X => euler.x = angle,
            BendAxis::Z => euler.z = angle,
        }
    }
}

/// Look controller configuration
///
/// Angles are in degrees. Positive pitch looks up, negative looks down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookConfig {
    /// Mouse sensitivity (degrees per input unit per second)
    pub sensitivity: f32,
    /// Minimum pitch angle for the head/spine (looking down)
    pub pitch_min: f32,
    /// Maximum pitch angle for the head/spine (looking up)
    pub pitch_max: f32,
    /// Extra downward range granted to the camera beyond `pitch_min`
    pub extra_down_pitch: f32,
    /// Time constant for camera pitch smoothing, in seconds
    pub smoothing_time: f32,
    /// Fraction of the look pitch applied to the mesh (0-1)
    pub head_weight: f32,
    /// Minimum bend angle for the head bone (looking down)
    pub head_pitch_min: f32,
    /// Maximum bend angle for the head bone (looking up)
    pub head_pitch_max: f32,
    /// Name of the head bone
    pub head_bone: String,
    /// Spine bone names, ordered bottom to top
    pub spine_bones: Vec<String>,
    /// Per-spine-bone bend weights (should sum to at most 1)
    pub spine_weights: Vec<f32>,
    /// Euler component procedural bending writes
    pub bend_axis: BendAxis,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 10.0,
            pitch_min: -75.0,
            pitch_max: 75.0,
            extra_down_pitch: 15.0,
            smoothing_time: 0.12,
            head_weight: 0.643,
            // The head bends farther up than down
            head_pitch_min: -43.4,
            head_pitch_max: 75.0,
            head_bone: "head".to_string(),
            spine_bones: vec![
                "spine_01".to_string(),
                "spine_02".to_string(),
                "spine_03".to_string(),
            ],
            spine_weights: vec![0.1, 0.15, 0.2],
            bend_axis: BendAxis::X,
        }
    }
}
