//! Look controller: mouse look, camera smoothing, and spine bending

use glam::Quat;
use tracing::{debug, warn};
use vantage_core::{Transform, Vec3};
use vantage_rig::{BoneAccess, BoneId, RigError};

use crate::input::InputState;

use super::LookConfig;

/// Rest-pose data captured once at initialization
///
/// Bend angles are additive on top of these baselines, so repeated frames
/// never accumulate drift into the rig.
struct RestPose {
    head: BoneId,
    head_angle: f32,
    spine: Vec<SpineBone>,
    /// Camera anchor offset from the head bone, in body-local space
    camera_offset: Vec3,
}

struct SpineBone {
    bone: BoneId,
    rest_angle: f32,
    weight: f32,
}

/// Look controller
///
/// Owns yaw/pitch accumulation, rotates the body about the vertical axis,
/// places the camera anchor against the head bone with a smoothed pitch,
/// and bends the spine/head chain proportionally to the look pitch.
///
/// Two-phase construction: [`LookController::new`] followed by
/// [`LookController::initialize`] once the rig and camera anchor exist.
pub struct LookController {
    /// Configuration
    pub config: LookConfig,
    /// Accumulated yaw in degrees (unbounded)
    yaw: f32,
    /// Accumulated pitch in degrees (clamped each frame)
    pitch: f32,
    /// Smoothed pitch currently displayed by the camera
    current_pitch: f32,
    /// Smoothing velocity for the camera pitch
    pitch_velocity: f32,
    /// Rest pose captured at initialization
    rest: Option<RestPose>,
}

impl LookController {
    /// Create a new look controller
    pub fn new(config: LookConfig) -> Self {
        Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
            current_pitch: 0.0,
            pitch_velocity: 0.0,
            rest: None,
        }
    }

    /// Capture the rig's rest pose and the camera anchor offset
    ///
    /// Must run before the first frame, after the rig is in its authored
    /// pose. Resolves every configured bone name, records the bend-axis
    /// rest angle for each, records the camera anchor's offset from the
    /// head bone in body-local space, and zeroes the smoothing state so
    /// the camera does not jump on the first frame.
    pub fn initialize(
        &mut self,
        rig: &impl BoneAccess,
        body: &Transform,
        camera: &Transform,
    ) -> Result<(), RigError> {
        let axis = self.config.bend_axis;

        let head = rig
            .resolve(&self.config.head_bone)
            .ok_or_else(|| RigError::UnknownBone(self.config.head_bone.clone()))?;
        let head_angle = axis.component(rig.local_euler(head));

        if self.config.spine_weights.len() > self.config.spine_bones.len() {
            warn!(
                bones = self.config.spine_bones.len(),
                weights = self.config.spine_weights.len(),
                "more spine weights than spine bones; extra weights ignored"
            );
        }
        let weight_sum: f32 = self.config.spine_weights.iter().sum();
        if weight_sum > 1.0 {
            warn!(weight_sum, "spine weights sum above 1; bending may look exaggerated");
        }

        let mut spine = Vec::with_capacity(self.config.spine_bones.len());
        for (i, name) in self.config.spine_bones.iter().enumerate() {
            let bone = rig
                .resolve(name)
                .ok_or_else(|| RigError::UnknownBone(name.clone()))?;
            spine.push(SpineBone {
                bone,
                rest_angle: axis.component(rig.local_euler(bone)),
                weight: self.config.spine_weights.get(i).copied().unwrap_or(0.0),
            });
        }

        // Rig poses are body-local; the head's world position composes
        // with the body transform
        let head_world = body.position + body.rotation * rig.world_position(head);
        let camera_offset = body.rotation.inverse() * (camera.position - head_world);

        self.current_pitch = 0.0;
        self.pitch_velocity = 0.0;
        self.rest = Some(RestPose {
            head,
            head_angle,
            spine,
            camera_offset,
        });

        debug!(
            head = %self.config.head_bone,
            spine_bones = self.config.spine_bones.len(),
            "look controller initialized"
        );
        Ok(())
    }

    /// Whether `initialize` has run
    pub fn is_initialized(&self) -> bool {
        self.rest.is_some()
    }

    /// Accumulated yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Clamped look pitch in degrees (positive looks up)
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Smoothed pitch currently applied to the camera
    pub fn current_pitch(&self) -> f32 {
        self.current_pitch
    }

    /// The pitch applied to the mesh: weighted and clamped to the head's
    /// anatomical range, so the head never bends as far as the camera looks
    pub fn head_pitch(&self) -> f32 {
        // max/min rather than f32::clamp: an inverted range from bad
        // tuning data must not panic
        (self.pitch * self.config.head_weight)
            .max(self.config.head_pitch_min)
            .min(self.config.head_pitch_max)
    }

    /// Early update: sample look input, accumulate yaw/pitch, rotate body
    ///
    /// The body only ever yaws; pitch is applied to the camera anchor and
    /// the spine chain in [`LookController::late_update`].
    pub fn update(&mut self, input: &InputState, body: &mut Transform, dt: f32) {
        let look = input.look_delta();

        self.yaw += look.x * self.config.sensitivity * dt;
        self.pitch -= look.y * self.config.sensitivity * dt;

        // The camera may look further down than the head may bend; the
        // max/min form tolerates an inverted range instead of panicking
        let down_limit = self.config.pitch_min - self.config.extra_down_pitch;
        self.pitch = self.pitch.max(down_limit).min(self.config.pitch_max);

        // Mouse right turns the body clockwise seen from above
        body.set_yaw_degrees(-self.yaw);
    }

    /// Late update: place the camera and bend the spine/head chain
    ///
    /// Must run after movement and animation have settled the body for the
    /// frame, otherwise the camera and bend are computed against a stale
    /// pose.
    pub fn late_update(
        &mut self,
        rig: &mut impl BoneAccess,
        body: &Transform,
        camera: &mut Transform,
        dt: f32,
    ) {
        let Some(rest) = &self.rest else {
            return;
        };

        // Keep the anchor rigidly attached to the head through any
        // skeletal motion, against the frame's final body pose
        let head_world = body.position + body.rotation * rig.world_position(rest.head);
        camera.position = head_world + body.rotation * rest.camera_offset;

        // The displayed pitch lags the raw target by the smoothing time
        let (smoothed, velocity) = smooth_damp(
            self.current_pitch,
            self.pitch,
            self.pitch_velocity,
            self.config.smoothing_time,
            dt,
        );
        self.current_pitch = smoothed;
        self.pitch_velocity = velocity;
        camera.rotation = body.rotation * Quat::from_rotation_x(self.current_pitch.to_radians());

        let head_pitch = self.head_pitch();
        let axis = self.config.bend_axis;

        for s in &rest.spine {
            let mut euler = rig.local_euler(s.bone);
            axis.write(&mut euler, s.rest_angle + head_pitch * s.weight);
            rig.set_local_euler(s.bone, euler);
        }

        let mut euler = rig.local_euler(rest.head);
        axis.write(&mut euler, rest.head_angle + head_pitch);
        rig.set_local_euler(rest.head, euler);
    }
}

/// Critically damped spring smoothing toward a moving target
///
/// Returns the new value and velocity. Converges without overshoot for a
/// continuous target and only reaches the target in the limit; the value
/// is never snapped onto the target.
fn smooth_damp(
    current: f32,
    target: f32,
    velocity: f32,
    smooth_time: f32,
    dt: f32,
) -> (f32, f32) {
    let omega = 2.0 / smooth_time.max(0.0001);
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (velocity + omega * change) * dt;
    let new_velocity = (velocity - omega * temp) * exp;
    (target + (change + temp) * exp, new_velocity)
}
