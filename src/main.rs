//! Vantage - headless first-person controller demo
//!
//! Runs the look and locomotion controllers through a scripted 60 Hz
//! session against the in-crate skeleton, mover, and animator, logging the
//! resulting pose every second. Feeding the input handler synthetic winit
//! events stands in for a real window's event pump.

mod settings;

use anyhow::{Context, Result};
use glam::Vec3;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use vantage_core::{FrameTime, Transform};
use vantage_game::{
    AnimatorParams, InputAction, InputHandler, KinematicMover, PlayerSession, PARAM_MOTION_SPEED,
    PARAM_SPEED,
};
use vantage_rig::{BoneAccess, Skeleton};

use settings::ControllerSettings;

/// Build the reference biped: pelvis, three spine bones, head
fn build_rig() -> Skeleton {
    let mut skeleton = Skeleton::new();
    let pelvis = skeleton.add_bone("pelvis", None, Vec3::new(0.0, 0.95, 0.0));
    let s1 = skeleton.add_bone("spine_01", Some(pelvis), Vec3::new(0.0, 0.15, 0.0));
    let s2 = skeleton.add_bone("spine_02", Some(s1), Vec3::new(0.0, 0.18, 0.0));
    let s3 = skeleton.add_bone("spine_03", Some(s2), Vec3::new(0.0, 0.18, 0.0));
    skeleton.add_bone("head", Some(s3), Vec3::new(0.0, 0.25, 0.0));
    skeleton
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting Vantage controller demo...");

    let settings = ControllerSettings::load();
    if let Err(e) = settings.save() {
        tracing::warn!("Could not persist settings: {}", e);
    }

    let mut rig = build_rig();
    let head = rig
        .resolve(&settings.look.head_bone)
        .context("Head bone missing from rig")?;
    let mut camera =
        Transform::from_position(rig.world_position(head) + Vec3::new(0.0, 0.06, -0.12));

    let mut session = PlayerSession::new(settings.look.clone(), settings.locomotion.clone());
    session
        .initialize(&rig, &camera)
        .context("Failed to initialize look controller")?;

    let mut time = FrameTime::new(settings.time.clone());
    let mut input = InputHandler::new();
    let mut mover = KinematicMover::new();
    let mut animator = AnimatorParams::new();

    session.activate(&mut input);

    const DT: f32 = 1.0 / 60.0;
    for frame in 0u32..480 {
        // Scripted input: look around, then walk, then sprint
        match frame {
            0..=119 => {
                let sweep = if frame < 60 { (2.0, 3.0) } else { (-2.0, -1.5) };
                input.handle_mouse_motion(sweep);
            }
            120 => input.handle_keyboard(
                PhysicalKey::Code(KeyCode::KeyW),
                ElementState::Pressed,
            ),
            300 => input.handle_keyboard(
                PhysicalKey::Code(KeyCode::ShiftLeft),
                ElementState::Pressed,
            ),
            450 => input.handle_keyboard(
                PhysicalKey::Code(KeyCode::Escape),
                ElementState::Pressed,
            ),
            _ => {}
        }

        time.update(DT);
        session.step(
            &input.state,
            &mut rig,
            &mut camera,
            &mut mover,
            &mut animator,
            time.delta_time,
        );
        let pause_requested = input.state.is_just_pressed(InputAction::Pause);
        input.end_frame();

        if pause_requested {
            info!(frame, "pause requested, releasing cursor");
            session.deactivate(&mut input);
            break;
        }

        if (frame + 1) % 60 == 0 {
            info!(
                frame = frame + 1,
                yaw = session.look.yaw(),
                pitch = session.look.pitch(),
                head_bend = session.look.head_pitch(),
                position = %session.body.position,
                speed = animator.get_float(PARAM_SPEED),
                motion = animator.get_float(PARAM_MOTION_SPEED),
                "tick"
            );
        }
    }

    if session.is_active() {
        session.deactivate(&mut input);
    }
    info!(
        total_time = time.total_time,
        frames = time.frame_count,
        "demo complete"
    );
    Ok(())
}
