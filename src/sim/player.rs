//! Player ship controls: rotation, thrust, heat and firing
//!
//! The ship has no explicit state enum. Idle vs thrusting falls out of
//! velocity and temperature; every control is a silent no-op when its gate
//! isn't met so that mashing keys never needs error handling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use crate::config::PlayerTuning;
use crate::wrap_degrees;

/// Player-only state carried alongside the shared [`Body`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Degrees in [0, 360); 0 points up the screen
    pub rotation: f32,
    /// Engine heat in [0, max_temperature]
    pub temperature: f32,
    pub score: u64,
    pub tuning: PlayerTuning,
}

/// Where and how a newly fired bullet starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    /// Top-left corner of the bullet's bounding box
    pub pos: Vec2,
    /// Firing angle in degrees
    pub rotation: f32,
}

impl Player {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            rotation: 0.0,
            temperature: 0.0,
            score: 0,
            tuning,
        }
    }

    /// Turn by `rotation_speed` degrees. Only the stored angle changes; the
    /// heading follows on the next thrust.
    pub fn rotate(&mut self, clockwise: bool) {
        let delta = if clockwise {
            -self.tuning.rotation_speed
        } else {
            self.tuning.rotation_speed
        };
        self.rotation = wrap_degrees(self.rotation + delta);
    }

    pub fn accelerate(&mut self, body: &mut Body) -> bool {
        self.thrust(body, self.tuning.acceleration)
    }

    pub fn decelerate(&mut self, body: &mut Body) -> bool {
        self.thrust(body, -self.tuning.acceleration)
    }

    /// Apply a velocity change if both the speed and heat gates allow it.
    /// On failure neither velocity nor temperature is touched.
    fn thrust(&mut self, body: &mut Body, delta: f32) -> bool {
        let candidate = body.velocity + delta;
        if candidate < self.tuning.min_velocity
            || candidate > self.tuning.max_velocity
            || self.overheated()
        {
            return false;
        }

        body.velocity = candidate;
        self.heat(candidate.abs() * self.tuning.heat_factor);
        body.adjust_trajectory(self.rotation, self.tuning.inertia);
        true
    }

    /// Shed one tick of heat
    pub fn cool_engine(&mut self) {
        self.temperature = (self.temperature - self.tuning.cooldown).max(0.0);
    }

    /// Fire from the sprite's nose if the engine has headroom
    pub fn shoot(&mut self, body: &Body, bullet_size: f32) -> Option<Shot> {
        if self.overheated() {
            return None;
        }
        self.heat(self.tuning.shot_heat);

        let center = body.pos + Vec2::splat(body.size / 2.0);
        let nose = center + crate::heading_from_degrees(self.rotation) * (body.size / 2.0);
        Some(Shot {
            pos: nose - Vec2::splat(bullet_size / 2.0),
            rotation: self.rotation,
        })
    }

    #[inline]
    pub fn overheated(&self) -> bool {
        self.temperature >= self.tuning.max_temperature
    }

    fn heat(&mut self, amount: f32) {
        self.temperature = (self.temperature + amount).min(self.tuning.max_temperature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn ship() -> (Player, Body) {
        let player = Player::new(PlayerTuning::default());
        let mut body = Body::new(Vec2::new(400.0, 300.0), SPRITE_SIZE, PLAYER_MAX_HP, 10);
        body.heading = crate::heading_from_degrees(0.0);
        (player, body)
    }

    #[test]
    fn test_rotate_wraps() {
        let (mut player, _) = ship();
        player.rotate(true);
        assert_eq!(player.rotation, 360.0 - ROTATION_SPEED);
        player.rotate(false);
        assert_eq!(player.rotation, 0.0);
        player.rotate(false);
        assert_eq!(player.rotation, ROTATION_SPEED);
    }

    #[test]
    fn test_accelerate_from_center() {
        let (mut player, mut body) = ship();
        body.velocity = 1.0;

        assert!(player.accelerate(&mut body));
        assert!((body.velocity - 1.1).abs() < 1e-6);
        assert!((player.temperature - 1.1 * HEAT_FACTOR).abs() < 1e-6);
        assert_eq!(body.heading, crate::heading_from_degrees(0.0));
    }

    #[test]
    fn test_accelerate_at_max_velocity_is_noop() {
        let (mut player, mut body) = ship();
        body.velocity = MAX_VELOCITY;
        player.temperature = 10.0;

        assert!(!player.accelerate(&mut body));
        assert_eq!(body.velocity, MAX_VELOCITY);
        assert_eq!(player.temperature, 10.0);
    }

    #[test]
    fn test_accelerate_when_overheated_is_noop() {
        let (mut player, mut body) = ship();
        body.velocity = 1.0;
        player.temperature = MAX_TEMPERATURE;

        assert!(!player.accelerate(&mut body));
        assert_eq!(body.velocity, 1.0);
        assert_eq!(player.temperature, MAX_TEMPERATURE);
    }

    #[test]
    fn test_decelerate_at_min_velocity_is_noop() {
        let (mut player, mut body) = ship();
        body.velocity = MIN_VELOCITY;

        assert!(!player.decelerate(&mut body));
        assert_eq!(body.velocity, MIN_VELOCITY);
        assert_eq!(player.temperature, 0.0);
    }

    #[test]
    fn test_decelerate_when_overheated_is_noop() {
        let (mut player, mut body) = ship();
        body.velocity = 1.0;
        player.temperature = MAX_TEMPERATURE + 1.0;

        assert!(!player.decelerate(&mut body));
        assert_eq!(body.velocity, 1.0);
        assert_eq!(player.temperature, MAX_TEMPERATURE + 1.0);
    }

    #[test]
    fn test_decelerate_heats_by_speed() {
        let (mut player, mut body) = ship();
        body.velocity = 1.0;

        assert!(player.decelerate(&mut body));
        assert!((body.velocity - 0.9).abs() < 1e-6);
        assert!((player.temperature - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_thrust_after_turning_applies_inertia() {
        let (mut player, mut body) = ship();
        body.velocity = 1.9;
        player.rotate(false);

        assert!(player.accelerate(&mut body));
        assert!((body.velocity - 2.0 / INERTIA).abs() < 1e-5);
        assert_eq!(body.heading, crate::heading_from_degrees(ROTATION_SPEED));
    }

    #[test]
    fn test_cool_engine_floors_at_zero() {
        let (mut player, _) = ship();
        player.temperature = 1.2;
        for _ in 0..10 {
            player.cool_engine();
            assert!(player.temperature >= 0.0);
        }
        assert_eq!(player.temperature, 0.0);
    }

    #[test]
    fn test_shoot_from_nose() {
        let (mut player, body) = ship();
        let shot = player.shoot(&body, BULLET_SIZE).unwrap();

        // Nose of a ship pointing up is the middle of its top edge
        let expected = Vec2::new(
            400.0 + SPRITE_SIZE / 2.0 - BULLET_SIZE / 2.0,
            300.0 - BULLET_SIZE / 2.0,
        );
        assert!((shot.pos - expected).length() < 1e-4);
        assert_eq!(shot.rotation, 0.0);
        assert_eq!(player.temperature, SHOT_HEAT);
    }

    #[test]
    fn test_shoot_when_overheated() {
        let (mut player, body) = ship();
        player.temperature = MAX_TEMPERATURE;
        assert!(player.shoot(&body, BULLET_SIZE).is_none());
        assert_eq!(player.temperature, MAX_TEMPERATURE);
    }

    #[test]
    fn test_heat_is_capped() {
        let (mut player, body) = ship();
        player.temperature = MAX_TEMPERATURE - 1.0;
        assert!(player.shoot(&body, BULLET_SIZE).is_some());
        assert_eq!(player.temperature, MAX_TEMPERATURE);
        assert!(player.overheated());
    }
}
