//! Fixed-rate frame loop
//!
//! The frontend owns the window, keyboard and drawing. Each frame the loop
//! asks it for input, advances the simulation one step, hands it the world to
//! draw, then sleeps out the rest of the frame budget.

use std::time::{Duration, Instant};

use crate::sim::{GamePhase, TickInput, World, tick};

/// Longest step fed to the simulation after a stall
pub const MAX_FRAME_DT: f32 = 0.1;

/// The presentation layer driving a run
pub trait Frontend {
    /// Controls requested for the coming frame
    fn poll_input(&mut self, world: &World) -> TickInput;

    /// Draw the world after a tick
    fn present(&mut self, world: &World);
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub phase: GamePhase,
    pub score: u64,
    pub ticks: u64,
}

/// Run until the ship is destroyed or the frontend quits
pub fn run<F: Frontend>(world: &mut World, frontend: &mut F) -> Outcome {
    let frame_rate = world.config.window.frame_rate.max(1);
    let budget = Duration::from_secs_f64(1.0 / f64::from(frame_rate));
    log::info!("Starting run at {} fps", frame_rate);

    let mut last = Instant::now();
    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
        last = frame_start;

        let input = frontend.poll_input(world);
        let phase = tick(world, &input, dt);
        frontend.present(world);

        if phase != GamePhase::Playing {
            break;
        }

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = budget.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
    }

    let outcome = Outcome {
        phase: world.phase,
        score: world.score(),
        ticks: world.time_ticks,
    };
    log::info!("Run over: {:?}", outcome);
    outcome
}
