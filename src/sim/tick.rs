//! Fixed step simulation tick
//!
//! Order within a tick: input → spawner → kinematics → collision scan →
//! collision drain → removal of the dead → phase check.

use super::collision;
use super::entity::{Entity, Role};
use super::spawner;
use super::world::{GamePhase, World};

/// One control the frontend can request for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Accelerate,
    Decelerate,
    RotateCw,
    RotateCcw,
    Shoot,
    ToggleHud,
    Quit,
}

/// Everything requested for a single tick. Any combination is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub accelerate: bool,
    pub decelerate: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub shoot: bool,
    /// Show/hide the HUD (one-shot)
    pub toggle_hud: bool,
    /// End the run (one-shot)
    pub quit: bool,
}

impl TickInput {
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Accelerate => self.accelerate = true,
            Intent::Decelerate => self.decelerate = true,
            Intent::RotateCw => self.rotate_cw = true,
            Intent::RotateCcw => self.rotate_ccw = true,
            Intent::Shoot => self.shoot = true,
            Intent::ToggleHud => self.toggle_hud = true,
            Intent::Quit => self.quit = true,
        }
    }
}

impl FromIterator<Intent> for TickInput {
    fn from_iter<I: IntoIterator<Item = Intent>>(iter: I) -> Self {
        let mut input = Self::default();
        for intent in iter {
            input.apply(intent);
        }
        input
    }
}

/// Advance the world by one step of `dt` seconds and return the phase after it
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> GamePhase {
    if world.phase != GamePhase::Playing {
        return world.phase;
    }

    if input.quit {
        world.phase = GamePhase::Quit;
        log::info!("Quit after {} ticks, score {}", world.time_ticks, world.score());
        return world.phase;
    }
    if input.toggle_hud {
        world.hud_visible = !world.hud_visible;
    }

    world.time_ticks += 1;
    world.clock += dt;

    apply_controls(world, input);
    spawner::tick(world);

    let area = world.area;
    for entity in world.entities_mut() {
        if entity.body.is_alive() {
            entity.update(&area);
        }
    }

    collision::clean_non_collidables(world);
    collision::scan(world);
    collision::drain(world);
    world.remove_dead();

    if world.player().is_none() {
        world.phase = GamePhase::GameOver;
        log::info!(
            "Ship destroyed after {} ticks, final score {}",
            world.time_ticks,
            world.score()
        );
    }
    world.phase
}

/// Cool the engine, then apply rotation, thrust and firing to the player
fn apply_controls(world: &mut World, input: &TickInput) {
    let bullet_size = world.config.bullet.size;
    let shooter = world.player_id();
    let Some(Entity { body, role: Role::Player(player), .. }) = world.player_mut() else {
        return;
    };

    player.cool_engine();
    if input.rotate_cw {
        player.rotate(true);
    }
    if input.rotate_ccw {
        player.rotate(false);
    }
    if input.accelerate {
        player.accelerate(body);
    }
    if input.decelerate {
        player.decelerate(body);
    }

    let shot = if input.shoot {
        player.shoot(body, bullet_size)
    } else {
        None
    };
    if let Some(shot) = shot {
        let bullet = world.spawn_bullet(shooter, shot);
        log::debug!("Bullet {:?} fired at {:.0}°", bullet, shot.rotation);
    }
}
