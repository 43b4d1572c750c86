//! Locomotion controller: walk/sprint movement and animation feeding

use glam::{Vec2, Vec3};
use vantage_core::Transform;

use crate::animation::{AnimationSink, PARAM_MOTION_SPEED, PARAM_SPEED};
use crate::input::{InputAction, InputState};
use crate::mover::CharacterMover;

use super::LocomotionConfig;

/// Locomotion controller
///
/// Maps the 2D move axis and sprint state into a world-space displacement,
/// delegates collision to the mover, and feeds the animation system the
/// resolved speed plus the raw input magnitude.
pub struct LocomotionController {
    /// Configuration
    pub config: LocomotionConfig,
    /// Last-sampled move vector
    move_input: Vec2,
    /// Last-sampled sprint state
    sprinting: bool,
}

impl LocomotionController {
    /// Create a new locomotion controller
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            config,
            move_input: Vec2::ZERO,
            sprinting: false,
        }
    }

    /// Last-sampled move vector
    pub fn move_input(&self) -> Vec2 {
        self.move_input
    }

    /// Whether sprint was held last frame
    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Per-frame update: sample input, move the body, feed the animator
    pub fn update(
        &mut self,
        input: &InputState,
        body: &mut Transform,
        mover: &mut impl CharacterMover,
        animator: &mut impl AnimationSink,
        dt: f32,
    ) {
        self.move_input = input.move_axis();
        self.sprinting = input.is_held(InputAction::Sprint);

        // X is strafe, Y is forward; zero input stays a zero vector
        let local = Vec3::new(self.move_input.x, 0.0, -self.move_input.y).normalize_or_zero();
        let direction = body.transform_direction(local);
        let speed = self.config.speed(self.sprinting);

        mover.move_by(direction * speed * dt, dt);
        body.position = mover.position();

        // Actual post-collision speed drives blend-tree thresholds; the
        // raw input magnitude drives playback rate independently of any
        // collision slowdown
        let velocity = mover.velocity();
        let horizontal_speed = Vec3::new(velocity.x, 0.0, velocity.z).length();
        animator.set_float(PARAM_SPEED, horizontal_speed);
        animator.set_float(PARAM_MOTION_SPEED, self.move_input.length().min(1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimatorParams;
    use crate::mover::KinematicMover;

    const DT: f32 = 1.0 / 60.0;

    fn held(actions: &[InputAction]) -> InputState {
        let mut state = InputState::new();
        for action in actions {
            state.held.insert(*action);
        }
        state
    }

    #[test]
    fn test_idle_writes_zeroes() {
        let mut controller = LocomotionController::new(LocomotionConfig::default());
        let mut body = Transform::default();
        let mut mover = KinematicMover::new();
        let mut animator = AnimatorParams::new();

        controller.update(&held(&[]), &mut body, &mut mover, &mut animator, DT);

        assert_eq!(body.position, Vec3::ZERO);
        assert_eq!(animator.get_float(PARAM_SPEED), 0.0);
        assert_eq!(animator.get_float(PARAM_MOTION_SPEED), 0.0);
    }

    #[test]
    fn test_sprint_strafe_distance_and_direction() {
        let mut controller = LocomotionController::new(LocomotionConfig::default());
        let mut body = Transform::default();
        body.set_yaw_degrees(37.0);
        let right = body.right();
        let mut mover = KinematicMover::new();
        let mut animator = AnimatorParams::new();

        let input = held(&[InputAction::MoveRight, InputAction::Sprint]);
        controller.update(&input, &mut body, &mut mover, &mut animator, DT);

        let expected = controller.config.sprint_speed * DT;
        assert!((body.position.length() - expected).abs() < 0.001);
        assert!((body.position.normalize() - right).length() < 0.001);
    }

    #[test]
    fn test_walk_speed_without_sprint() {
        let mut controller = LocomotionController::new(LocomotionConfig::default());
        let mut body = Transform::default();
        let mut mover = KinematicMover::new();
        let mut animator = AnimatorParams::new();

        let input = held(&[InputAction::MoveForward]);
        controller.update(&input, &mut body, &mut mover, &mut animator, DT);

        let expected = controller.config.walk_speed * DT;
        assert!((body.position.length() - expected).abs() < 0.001);
        assert!(
            (animator.get_float(PARAM_SPEED) - controller.config.walk_speed).abs() < 0.001
        );
        assert!(!controller.is_sprinting());
    }

    #[test]
    fn test_diagonal_input_is_normalized() {
        let mut controller = LocomotionController::new(LocomotionConfig::default());
        let mut body = Transform::default();
        let mut mover = KinematicMover::new();
        let mut animator = AnimatorParams::new();

        let input = held(&[InputAction::MoveForward, InputAction::MoveRight]);
        controller.update(&input, &mut body, &mut mover, &mut animator, DT);

        // Diagonal movement must not be faster than straight movement
        let expected = controller.config.walk_speed * DT;
        assert!((body.position.length() - expected).abs() < 0.001);
    }

    #[test]
    fn test_motion_speed_is_clamped_input_magnitude() {
        let mut controller = LocomotionController::new(LocomotionConfig::default());
        let mut body = Transform::default();
        let mut mover = KinematicMover::new();
        let mut animator = AnimatorParams::new();

        // Diagonal keyboard input has magnitude sqrt(2); the parameter is
        // clamped into [0, 1] for playback rate
        let input = held(&[InputAction::MoveForward, InputAction::MoveLeft]);
        controller.update(&input, &mut body, &mut mover, &mut animator, DT);
        assert_eq!(animator.get_float(PARAM_MOTION_SPEED), 1.0);
    }

    #[test]
    fn test_forward_moves_along_facing() {
        let mut controller = LocomotionController::new(LocomotionConfig::default());
        let mut body = Transform::default();
        body.set_yaw_degrees(90.0);
        let forward = body.forward();
        let mut mover = KinematicMover::new();
        let mut animator = AnimatorParams::new();

        let input = held(&[InputAction::MoveForward]);
        controller.update(&input, &mut body, &mut mover, &mut animator, DT);

        assert!((body.position.normalize() - forward).length() < 0.001);
    }
}
