//! Character mover seam
//!
//! Collision resolution belongs to the engine's physics layer; the
//! locomotion controller hands it a world-space displacement and reads
//! back the resolved velocity. [`KinematicMover`] is the collision-free
//! reference implementation used by tests and the headless demo.

use glam::Vec3;

/// Accepts per-frame displacements and resolves them against the world
pub trait CharacterMover {
    /// Apply a world-space displacement for this frame
    fn move_by(&mut self, displacement: Vec3, dt: f32);

    /// Position after the last move
    fn position(&self) -> Vec3;

    /// Velocity resolved by the last move
    fn velocity(&self) -> Vec3;
}

/// Mover that applies displacements verbatim, with no collision
#[derive(Debug, Clone, Default)]
pub struct KinematicMover {
    position: Vec3,
    velocity: Vec3,
}

impl KinematicMover {
    /// Create a mover at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mover at a position
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }

    /// Teleport without affecting velocity history
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
    }
}

impl CharacterMover for KinematicMover {
    fn move_by(&mut self, displacement: Vec3, dt: f32) {
        self.position += displacement;
        self.velocity = if dt > 0.0 {
            displacement / dt
        } else {
            Vec3::ZERO
        };
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }
}
