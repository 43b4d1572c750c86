//! Locomotion module
//!
//! Provides walk/sprint movement and animation parameter feeding.

mod config;
mod controller;

pub use config::LocomotionConfig;
pub use controller::LocomotionController;
