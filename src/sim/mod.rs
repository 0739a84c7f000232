//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (creation order of entities)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod player;
pub mod rect;
pub mod spawner;
pub mod tick;
pub mod world;

pub use collision::{CollisionRecord, clean_non_collidables, drain, scan};
pub use entity::{Asteroid, Body, Bullet, Entity, EntityId, EntityKind, EntityView, Role};
pub use player::{Player, Shot};
pub use rect::Rect;
pub use spawner::Spawner;
pub use tick::{Intent, TickInput, tick};
pub use world::{GamePhase, HudView, World};
