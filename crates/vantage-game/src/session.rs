//! Per-frame session driving both controllers in a fixed phase order

use tracing::info;
use vantage_core::Transform;
use vantage_rig::{BoneAccess, RigError};

use crate::animation::AnimationSink;
use crate::input::{InputHandler, InputState};
use crate::locomotion::{LocomotionConfig, LocomotionController};
use crate::look::{LookConfig, LookController};
use crate::mover::CharacterMover;

/// One player character: body transform plus both controllers
///
/// Enforces the per-frame ordering the bend math depends on:
/// [`PlayerSession::update`] (input sampling, body yaw, body movement)
/// strictly before [`PlayerSession::late_update`] (camera placement and
/// bone writes), so the late phase always observes the frame's final body
/// pose.
pub struct PlayerSession {
    /// The character's root transform
    pub body: Transform,
    /// Look controller
    pub look: LookController,
    /// Locomotion controller
    pub locomotion: LocomotionController,
    active: bool,
}

impl PlayerSession {
    /// Create a session; call [`PlayerSession::initialize`] before stepping
    pub fn new(look: LookConfig, locomotion: LocomotionConfig) -> Self {
        Self {
            body: Transform::default(),
            look: LookController::new(look),
            locomotion: LocomotionController::new(locomotion),
            active: false,
        }
    }

    /// Capture rest pose and camera offset from the rig's authored pose
    pub fn initialize(
        &mut self,
        rig: &impl BoneAccess,
        camera: &Transform,
    ) -> Result<(), RigError> {
        self.look.initialize(rig, &self.body, camera)
    }

    /// Whether the session is currently sampling input
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin sampling input: capture the cursor and start reacting
    pub fn activate(&mut self, input: &mut InputHandler) {
        self.active = true;
        input.set_cursor_captured(true);
        info!("player session activated");
    }

    /// Stop sampling input, releasing the cursor
    ///
    /// The body simply stays at its last pose; nothing is reset.
    pub fn deactivate(&mut self, input: &mut InputHandler) {
        self.active = false;
        input.set_cursor_captured(false);
        input.state.clear_all();
        info!("player session deactivated");
    }

    /// Early update phase: look accumulation, body yaw, body movement
    pub fn update(
        &mut self,
        input: &InputState,
        mover: &mut impl CharacterMover,
        animator: &mut impl AnimationSink,
        dt: f32,
    ) {
        if !self.active {
            return;
        }
        self.look.update(input, &mut self.body, dt);
        self.locomotion
            .update(input, &mut self.body, mover, animator, dt);
    }

    /// Late update phase: camera placement and procedural bone writes
    pub fn late_update(
        &mut self,
        rig: &mut impl BoneAccess,
        camera: &mut Transform,
        dt: f32,
    ) {
        if !self.active {
            return;
        }
        self.look.late_update(rig, &self.body, camera, dt);
    }

    /// Run one full frame: early update, then late update
    pub fn step(
        &mut self,
        input: &InputState,
        rig: &mut impl BoneAccess,
        camera: &mut Transform,
        mover: &mut impl CharacterMover,
        animator: &mut impl AnimationSink,
        dt: f32,
    ) {
        self.update(input, mover, animator, dt);
        self.late_update(rig, camera, dt);
    }
}
