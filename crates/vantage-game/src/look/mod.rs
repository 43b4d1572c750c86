//! Look controller module
//!
//! Provides mouse look with smoothed camera pitch and procedural
//! spine/head bending driven by the look pitch.

mod config;
mod controller;

pub use config::{BendAxis, LookConfig};
pub use controller::LookController;
