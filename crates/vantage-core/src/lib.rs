//! Vantage Core - Foundational types for the Vantage character controller
//!
//! This crate provides the types shared by the rig and gameplay crates:
//! - Mathematical primitives (re-exported from glam)
//! - Transform for body and camera placement
//! - Frame timing with delta clamping

pub mod time;
pub mod types;

pub use glam::{Quat, Vec2, Vec3};
pub use time::{FrameTime, TimeConfig};
pub use types::Transform;
