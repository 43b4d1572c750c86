//! Vantage Game - First-person controller logic
//!
//! Provides the look controller (mouse look, camera smoothing, procedural
//! spine bending), the locomotion controller (walk/sprint movement and
//! animation parameters), input handling, and the per-frame session that
//! sequences them.

pub mod animation;
pub mod input;
pub mod locomotion;
pub mod look;
pub mod mover;
pub mod session;

pub use animation::{AnimationSink, AnimatorParams, PARAM_MOTION_SPEED, PARAM_SPEED};
pub use input::{InputAction, InputBindings, InputHandler, InputState};
pub use locomotion::{LocomotionConfig, LocomotionController};
pub use look::{BendAxis, LookConfig, LookController};
pub use mover::{CharacterMover, KinematicMover};
pub use session::PlayerSession;
