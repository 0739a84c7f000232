//! Entities and their shared kinematic state
//!
//! Every simulated object is an [`Entity`]: a [`Body`] holding position,
//! heading, speed and collision bookkeeping, plus a [`Role`] carrying the
//! per-variant state (player controls, asteroid animation, bullet owner).

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rect::Rect;
use crate::consts::*;

/// Identity handle for an entity. Ids are never reused, so a handle to a
/// removed entity simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Type tag for drawing and dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Asteroid,
    Bullet,
}

/// Kinematic and collision state shared by every entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Direction of travel, roughly unit length
    pub heading: Vec2,
    /// Speed along `heading` (negative after a bounce)
    pub velocity: f32,
    pub hp: i32,
    /// Damage dealt to whatever this entity runs into
    pub collision_damage: i32,
    /// Side of the square bounding box
    pub size: f32,
    /// Most recent partner this entity was recorded colliding with
    pub last_collided: Option<EntityId>,
    /// Entities this one never collides with
    pub non_collidables: BTreeSet<EntityId>,
}

impl Body {
    pub fn new(pos: Vec2, size: f32, hp: i32, collision_damage: i32) -> Self {
        Self {
            pos,
            heading: Vec2::ZERO,
            velocity: 0.0,
            hp,
            collision_damage,
            size,
            last_collided: None,
            non_collidables: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn kill(&mut self) {
        self.hp = 0;
    }

    /// Where this body would be after one more step
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.heading * self.velocity
    }

    /// Inelastic bounce: flip direction and lose some speed
    pub fn reverse_direction(&mut self) {
        self.velocity = -(self.velocity * BOUNCE_DAMPING);
    }

    /// Move one step if the next position stays inside `area`, otherwise
    /// bounce in place. Returns whether the body moved.
    pub fn step(&mut self, area: &Rect) -> bool {
        let next = self.next_pos();
        if area.contains_point(next) {
            self.pos = next;
            true
        } else {
            self.reverse_direction();
            false
        }
    }

    /// Move one step unconditionally; dies once fully outside `area`
    pub fn drift(&mut self, area: &Rect) {
        self.pos = self.next_pos();
        if !self.bounds().overlaps(area) {
            self.kill();
        }
    }

    /// Recompute the heading from `rotation` (degrees). Any change in heading
    /// bleeds off speed by the `inertia` divisor.
    pub fn adjust_trajectory(&mut self, rotation: f32, inertia: f32) {
        let heading = crate::heading_from_degrees(rotation);
        if heading != self.heading {
            self.velocity /= inertia;
        }
        self.heading = heading;
    }

    /// Handle the default response to being hit by `damage`
    pub fn take_hit(&mut self, damage: i32) {
        self.hp -= damage;
        self.reverse_direction();
    }
}

/// Asteroid state beyond the shared body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Asteroid {
    /// Sprite cycle index
    pub frame: u8,
}

impl Asteroid {
    pub fn animate(&mut self) {
        self.frame = (self.frame + 1) % ASTEROID_FRAMES;
    }
}

/// Bullet state beyond the shared body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Who fired it, credited with the score on a hit
    pub shooter: EntityId,
    /// Firing angle in degrees
    pub rotation: f32,
}

/// Per-variant state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Role {
    Player(Player),
    Asteroid(Asteroid),
    Bullet(Bullet),
}

/// A live simulated object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub body: Body,
    pub role: Role,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self.role {
            Role::Player(_) => EntityKind::Player,
            Role::Asteroid(_) => EntityKind::Asteroid,
            Role::Bullet(_) => EntityKind::Bullet,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match &self.role {
            Role::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match &mut self.role {
            Role::Player(player) => Some(player),
            _ => None,
        }
    }

    /// Rotation in degrees used for drawing
    pub fn rotation(&self) -> f32 {
        match &self.role {
            Role::Player(player) => player.rotation,
            Role::Bullet(bullet) => bullet.rotation,
            Role::Asteroid(_) => 0.0,
        }
    }

    /// Advance kinematics by one tick. The player is kept on screen by
    /// bouncing; asteroids and bullets fly off and expire.
    pub fn update(&mut self, area: &Rect) {
        match &mut self.role {
            Role::Player(_) => {
                self.body.step(area);
            }
            Role::Asteroid(asteroid) => {
                asteroid.animate();
                self.body.drift(area);
            }
            Role::Bullet(_) => self.body.drift(area),
        }
    }

    /// Read-only snapshot for the frontend
    pub fn view(&self) -> EntityView {
        EntityView {
            id: self.id,
            kind: self.kind(),
            pos: self.body.pos,
            rotation: self.rotation(),
            frame: match &self.role {
                Role::Asteroid(asteroid) => asteroid.frame,
                _ => 0,
            },
        }
    }
}

/// What the frontend needs to draw one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub rotation: f32,
    /// Animation frame (asteroids only)
    pub frame: u8,
}
