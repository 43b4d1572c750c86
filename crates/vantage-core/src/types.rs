//! Core types used throughout the Vantage controller

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the right direction (positive X in local space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction (positive Y in local space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Set the rotation to a pure yaw (rotation about the vertical axis)
    pub fn set_yaw_degrees(&mut self, yaw: f32) {
        self.rotation = Quat::from_rotation_y(yaw.to_radians());
    }

    /// Transform a direction from local space into world space
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert!((t.forward() - -Vec3::Z).length() < 0.001);
    }

    #[test]
    fn test_yaw_only_rotation() {
        let mut t = Transform::default();
        t.set_yaw_degrees(90.0);

        // Facing should swing in the horizontal plane, with no vertical lean
        let forward = t.forward();
        assert!(forward.y.abs() < 0.001);
        assert!((forward.length() - 1.0).abs() < 0.001);

        let up = t.up();
        assert!((up - Vec3::Y).length() < 0.001);
    }

    #[test]
    fn test_transform_direction() {
        let mut t = Transform::default();
        t.set_yaw_degrees(0.0);
        let world = t.transform_direction(Vec3::X);
        assert!((world - Vec3::X).length() < 0.001);

        t.set_yaw_degrees(180.0);
        let world = t.transform_direction(Vec3::X);
        assert!((world - -Vec3::X).length() < 0.001);
    }
}
