//! Bone hierarchy with Euler-angle local rotations
//!
//! Local rotations are stored as per-axis Euler angles in degrees rather
//! than quaternions so that overwriting a single rotation component leaves
//! the other two components bit-for-bit untouched. Procedural bending only
//! ever claims one axis of a bone; whatever an animation layer wrote to the
//! remaining axes must survive the write.

use glam::{EulerRot, Quat, Vec3};
use vantage_core::Transform;

/// Handle to a bone within a [`Skeleton`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoneId(pub usize);

/// Errors raised while wiring controllers to a rig
#[derive(Debug, Clone, thiserror::Error)]
pub enum RigError {
    #[error("Unknown bone: {0}")]
    UnknownBone(String),
}

/// A single bone: name, optional parent, and local pose
#[derive(Debug, Clone)]
pub struct Bone {
    /// Bone name, unique within the skeleton
    pub name: String,
    /// Parent bone, or None for the root
    pub parent: Option<BoneId>,
    /// Position relative to the parent
    pub local_position: Vec3,
    /// Local rotation as Euler angles in degrees (applied in YXZ order)
    pub local_euler: Vec3,
}

/// Read/write access to a set of named bones
///
/// The controller crates are written against this trait so their logic can
/// run against the in-crate [`Skeleton`] in tests or against an adapter
/// over an engine's skeletal system in production.
pub trait BoneAccess {
    /// Look up a bone handle by name
    fn resolve(&self, name: &str) -> Option<BoneId>;

    /// Get a bone's local rotation as Euler angles in degrees
    fn local_euler(&self, bone: BoneId) -> Vec3;

    /// Set a bone's local rotation from Euler angles in degrees
    fn set_local_euler(&mut self, bone: BoneId, euler: Vec3);

    /// Get a bone's position in world space
    fn world_position(&self, bone: BoneId) -> Vec3;
}

/// A bone hierarchy
///
/// Bones must be added parent-first; the root carries `parent == None`.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    bones: Vec<Bone>,
}

impl Skeleton {
    /// Create an empty skeleton
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bone and return its handle
    pub fn add_bone(
        &mut self,
        name: impl Into<String>,
        parent: Option<BoneId>,
        local_position: Vec3,
    ) -> BoneId {
        let id = BoneId(self.bones.len());
        self.bones.push(Bone {
            name: name.into(),
            parent,
            local_position,
            local_euler: Vec3::ZERO,
        });
        id
    }

    /// Number of bones
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Whether the skeleton has no bones
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Get a bone by handle
    pub fn bone(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id.0)
    }

    /// Compute a bone's world-space transform by walking the parent chain
    pub fn world_transform(&self, id: BoneId) -> Transform {
        let Some(bone) = self.bones.get(id.0) else {
            return Transform::default();
        };

        let parent = match bone.parent {
            Some(parent_id) => self.world_transform(parent_id),
            None => Transform::default(),
        };

        Transform::from_position_rotation(
            parent.position + parent.rotation * bone.local_position,
            parent.rotation * local_rotation(bone.local_euler),
        )
    }
}

/// Build the local rotation quaternion from Euler degrees (YXZ order)
fn local_rotation(euler: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians(),
    )
}

impl BoneAccess for Skeleton {
    fn resolve(&self, name: &str) -> Option<BoneId> {
        self.bones
            .iter()
            .position(|b| b.name == name)
            .map(BoneId)
    }

    fn local_euler(&self, bone: BoneId) -> Vec3 {
        self.bones
            .get(bone.0)
            .map(|b| b.local_euler)
            .unwrap_or(Vec3::ZERO)
    }

    fn set_local_euler(&mut self, bone: BoneId, euler: Vec3) {
        if let Some(b) = self.bones.get_mut(bone.0) {
            b.local_euler = euler;
        }
    }

    fn world_position(&self, bone: BoneId) -> Vec3 {
        self.world_transform(bone).position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spine_chain() -> (Skeleton, BoneId, BoneId) {
        let mut skeleton = Skeleton::new();
        let pelvis = skeleton.add_bone("pelvis", None, Vec3::new(0.0, 1.0, 0.0));
        let spine = skeleton.add_bone("spine_01", Some(pelvis), Vec3::new(0.0, 0.3, 0.0));
        let head = skeleton.add_bone("head", Some(spine), Vec3::new(0.0, 0.4, 0.0));
        (skeleton, spine, head)
    }

    #[test]
    fn test_resolve_by_name() {
        let (skeleton, spine, head) = spine_chain();
        assert_eq!(skeleton.resolve("spine_01"), Some(spine));
        assert_eq!(skeleton.resolve("head"), Some(head));
        assert_eq!(skeleton.resolve("tail"), None);
    }

    #[test]
    fn test_single_axis_write_preserves_others() {
        let (mut skeleton, spine, _) = spine_chain();
        skeleton.set_local_euler(spine, Vec3::new(1.5, -20.0, 7.25));

        let mut e = skeleton.local_euler(spine);
        e.x = 30.0;
        skeleton.set_local_euler(spine, e);

        let after = skeleton.local_euler(spine);
        assert_eq!(after.x, 30.0);
        assert_eq!(after.y, -20.0);
        assert_eq!(after.z, 7.25);
    }

    #[test]
    fn test_world_position_stacks_offsets() {
        let (skeleton, _, head) = spine_chain();
        let pos = skeleton.world_position(head);
        assert!((pos - Vec3::new(0.0, 1.7, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_world_position_follows_parent_rotation() {
        let (mut skeleton, _, head) = spine_chain();
        let pelvis = skeleton.resolve("pelvis").unwrap();

        // Pitch the pelvis 90 degrees; children above it should swing forward
        skeleton.set_local_euler(pelvis, Vec3::new(90.0, 0.0, 0.0));
        let pos = skeleton.world_position(head);
        assert!((pos.y - 1.0).abs() < 0.001);
        assert!((pos.z - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_invalid_handle_is_tolerated() {
        let (mut skeleton, _, _) = spine_chain();
        let bogus = BoneId(99);
        skeleton.set_local_euler(bogus, Vec3::ONE);
        assert_eq!(skeleton.local_euler(bogus), Vec3::ZERO);
        assert_eq!(skeleton.world_position(bogus), Vec3::ZERO);
    }
}
