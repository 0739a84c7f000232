//! Astro Blaster entry point
//!
//! Runs a headless demo: an autopilot spins the ship and fires whenever the
//! engine has cooled, logging the HUD once a second until the ship is lost.
//! Pass a JSON config path as the first argument to override the defaults.

use astro_blaster::GameConfig;
use astro_blaster::driver::{Frontend, run};
use astro_blaster::sim::{Intent, TickInput, World};

/// Stop the demo after this many frames if the ship survives
const MAX_DEMO_FRAMES: u64 = 60 * 60;

/// Scripted pilot standing in for keyboard input
struct Autopilot {
    frame: u64,
    frame_rate: u64,
}

impl Frontend for Autopilot {
    fn poll_input(&mut self, world: &World) -> TickInput {
        self.frame += 1;
        if self.frame > MAX_DEMO_FRAMES {
            return [Intent::Quit].into_iter().collect();
        }

        let mut input = TickInput::default();
        input.apply(Intent::RotateCw);

        let hud = world.hud();
        if hud.temperature < hud.max_temperature / 2.0 {
            input.apply(Intent::Shoot);
        }
        // Short bursts of thrust to keep the ship moving around
        if self.frame % 90 < 10 {
            input.apply(Intent::Accelerate);
        }
        input
    }

    fn present(&mut self, world: &World) {
        if self.frame % self.frame_rate == 0 {
            let hud = world.hud();
            log::info!(
                "t={}s hp={}/{} heat={:.1}/{:.0} score={} entities={}",
                self.frame / self.frame_rate,
                hud.hp,
                hud.max_hp,
                hud.temperature,
                hud.max_temperature,
                hud.score,
                world.len()
            );
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Astro Blaster (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };

    let mut world = World::new(config);
    let mut pilot = Autopilot {
        frame: 0,
        frame_rate: u64::from(world.config.window.frame_rate.max(1)),
    };

    let outcome = run(&mut world, &mut pilot);
    println!(
        "Game over ({:?}) after {} ticks - final score: {}",
        outcome.phase, outcome.ticks, outcome.score
    );
}
