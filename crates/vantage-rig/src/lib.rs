//! Vantage Rig - Skeleton model and bone access
//!
//! Provides a named bone hierarchy with local Euler-angle rotations and the
//! [`BoneAccess`] trait that the controller crates use to read and write
//! bone poses without depending on a concrete skeletal backend.

pub mod skeleton;

pub use skeleton::{Bone, BoneAccess, BoneId, RigError, Skeleton};
