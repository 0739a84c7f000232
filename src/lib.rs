//! Astro Blaster - An Asteroids-style arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, spawning, game state)
//! - `driver`: Fixed-rate frame loop around an external frontend
//! - `config`: Data-driven game balance and window settings

pub mod config;
pub mod driver;
pub mod sim;

pub use config::GameConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Default frame rate for the driver loop
    pub const FRAME_RATE: u32 = 60;

    /// Side of the square sprite every ship and asteroid occupies
    pub const SPRITE_SIZE: f32 = 32.0;
    pub const BULLET_SIZE: f32 = 8.0;

    /// Player defaults
    pub const PLAYER_MAX_HP: i32 = 100;
    pub const PLAYER_COLLISION_DAMAGE: i32 = 10;
    pub const ROTATION_SPEED: f32 = 5.0; // degrees per tick
    pub const ACCELERATION: f32 = 0.1;
    pub const MAX_VELOCITY: f32 = 5.0;
    /// Symmetric so a bounce (-0.9 × speed) never leaves the thrust window
    pub const MIN_VELOCITY: f32 = -MAX_VELOCITY;
    /// Velocity divisor applied whenever the heading changes
    pub const INERTIA: f32 = 1.5;
    /// Heat added per unit of speed on each thrust
    pub const HEAT_FACTOR: f32 = 1.0;
    pub const MAX_TEMPERATURE: f32 = 100.0;
    /// Heat shed every tick
    pub const COOLDOWN: f32 = 0.5;
    pub const SHOT_HEAT: f32 = 5.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 8.0;
    pub const BULLET_HP: i32 = 1;
    pub const BULLET_DAMAGE: i32 = 10;

    /// Asteroid defaults
    pub const ASTEROID_HP: i32 = 20;
    pub const ASTEROID_DAMAGE: i32 = 10;
    pub const ASTEROID_SPEED: f32 = 2.0;
    pub const ASTEROID_FRAMES: u8 = 8;
    /// Seconds between asteroid spawns
    pub const SPAWN_INTERVAL: f32 = 0.2;

    /// Speed kept after bouncing off the play-area edge
    pub const BOUNCE_DAMPING: f32 = 0.9;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Heading for a rotation in degrees. 0° points up the screen, positive angles
/// turn the nose to the left.
#[inline]
pub fn heading_from_degrees(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(-radians.sin(), -radians.cos())
}
