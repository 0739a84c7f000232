//! World context: the entity set and everything a tick touches
//!
//! One `World` is owned by the frame driver and passed explicitly to each
//! subsystem. Entities are kept in creation order and removed by identity.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionRecord;
use super::entity::{Asteroid, Body, Bullet, Entity, EntityId, EntityView, Role};
use super::player::{Player, Shot};
use super::rect::Rect;
use super::spawner::Spawner;
use crate::config::GameConfig;
use crate::consts::SPRITE_SIZE;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player ship destroyed
    GameOver,
    /// Frontend asked to stop
    Quit,
}

/// What the HUD meters show
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub temperature: f32,
    pub max_temperature: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub score: u64,
    /// Toggled by the player; the core only tracks it
    pub visible: bool,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    /// Play area, `[0, width) × [0, height)`
    pub area: Rect,
    /// Live entities in creation order
    entities: Vec<Entity>,
    /// Pending collision records for this tick
    pub collisions: Vec<CollisionRecord>,
    pub spawner: Spawner,
    rng: Pcg32,
    /// Simulated seconds since start
    pub clock: f32,
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub hud_visible: bool,
    player_id: EntityId,
    /// Score at the moment the player was removed
    final_score: u64,
    next_id: u32,
}

impl World {
    /// Create a world with the player ship at the centre of the screen
    pub fn new(config: GameConfig) -> Self {
        let area = Rect::new(0.0, 0.0, config.window.width, config.window.height);
        let mut world = Self {
            area,
            entities: Vec::new(),
            collisions: Vec::new(),
            spawner: Spawner::new(config.asteroid.spawn_interval),
            rng: Pcg32::seed_from_u64(config.seed),
            clock: 0.0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            hud_visible: true,
            player_id: EntityId(0),
            final_score: 0,
            next_id: 1,
            config,
        };

        let center = Vec2::new(world.area.width() / 2.0, world.area.height() / 2.0);
        world.player_id = world.spawn_player(center);
        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an entity to the live set
    pub fn spawn(&mut self, body: Body, role: Role) -> EntityId {
        let id = self.next_entity_id();
        self.entities.push(Entity { id, body, role });
        id
    }

    fn spawn_player(&mut self, pos: Vec2) -> EntityId {
        let tuning = self.config.player;
        let mut body = Body::new(pos, SPRITE_SIZE, tuning.max_hp, tuning.collision_damage);
        let player = Player::new(tuning);
        body.heading = crate::heading_from_degrees(player.rotation);
        self.spawn(body, Role::Player(player))
    }

    /// Spawn an asteroid moving along `heading` at the configured speed
    pub fn spawn_asteroid(&mut self, pos: Vec2, heading: Vec2) -> EntityId {
        let tuning = self.config.asteroid;
        let mut body = Body::new(pos, SPRITE_SIZE, tuning.hp, tuning.damage);
        body.heading = heading;
        body.velocity = tuning.speed;
        let id = self.spawn(body, Role::Asteroid(Asteroid::default()));
        log::debug!("Asteroid {:?} spawned at ({:.0}, {:.0})", id, pos.x, pos.y);
        id
    }

    /// Spawn a bullet for `shooter`. The bullet is exempt from colliding with
    /// its shooter and with the shooter's other live bullets, both ways.
    pub fn spawn_bullet(&mut self, shooter: EntityId, shot: Shot) -> EntityId {
        let tuning = self.config.bullet;
        let mut body = Body::new(shot.pos, tuning.size, tuning.hp, tuning.damage);
        body.heading = crate::heading_from_degrees(shot.rotation);
        body.velocity = tuning.speed;
        body.non_collidables.insert(shooter);

        let siblings: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|e| matches!(&e.role, Role::Bullet(b) if b.shooter == shooter))
            .map(|e| e.id)
            .collect();
        body.non_collidables.extend(siblings.iter().copied());

        let id = self.spawn(
            body,
            Role::Bullet(Bullet {
                shooter,
                rotation: shot.rotation,
            }),
        );

        if let Some(owner) = self.get_mut(shooter) {
            owner.body.non_collidables.insert(id);
        }
        for sibling in siblings {
            if let Some(sibling) = self.get_mut(sibling) {
                sibling.body.non_collidables.insert(id);
            }
        }
        id
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let i = self.index_of(id)?;
        Some(&mut self.entities[i])
    }

    pub fn player_id(&self) -> EntityId {
        self.player_id
    }

    /// The player entity, if it is still in the live set
    pub fn player(&self) -> Option<&Entity> {
        self.get(self.player_id)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        let id = self.player_id;
        self.get_mut(id)
    }

    /// Live entities in creation order
    pub fn entity_slice(&self) -> &[Entity] {
        &self.entities
    }

    pub(crate) fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Drawing snapshot of every live entity
    pub fn entities(&self) -> impl Iterator<Item = EntityView> + '_ {
        self.entities.iter().map(Entity::view)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn score(&self) -> u64 {
        self.player()
            .and_then(Entity::as_player)
            .map_or(self.final_score, |p| p.score)
    }

    pub fn hud(&self) -> HudView {
        let tuning = self.config.player;
        let (temperature, hp) = self
            .player()
            .and_then(|e| e.as_player().map(|p| (p.temperature, e.body.hp)))
            .unwrap_or((0.0, 0));
        HudView {
            temperature,
            max_temperature: tuning.max_temperature,
            hp: hp.max(0),
            max_hp: tuning.max_hp,
            score: self.score(),
            visible: self.hud_visible,
        }
    }

    /// Drop every entity with hp ≤ 0. Returns how many were removed.
    pub fn remove_dead(&mut self) -> usize {
        let dead_player_score = self
            .player()
            .filter(|e| !e.body.is_alive())
            .and_then(Entity::as_player)
            .map(|p| p.score);
        if let Some(score) = dead_player_score {
            self.final_score = score;
        }
        let before = self.entities.len();
        self.entities.retain(|e| e.body.is_alive());
        before - self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entity::EntityKind;

    #[test]
    fn test_new_world_has_centered_player() {
        let world = World::new(GameConfig::default());
        assert_eq!(world.len(), 1);
        let player = world.player().unwrap();
        assert_eq!(player.kind(), EntityKind::Player);
        assert_eq!(player.body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(player.body.hp, PLAYER_MAX_HP);
        assert_eq!(world.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut world = World::new(GameConfig::default());
        let a = world.spawn_asteroid(Vec2::ZERO, Vec2::new(1.0, 0.0));
        world.get_mut(a).unwrap().body.kill();
        world.remove_dead();
        assert!(world.get(a).is_none());

        let b = world.spawn_asteroid(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert_ne!(a, b);
        assert!(world.get(a).is_none());
    }

    #[test]
    fn test_entities_keep_creation_order() {
        let mut world = World::new(GameConfig::default());
        let a = world.spawn_asteroid(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0));
        let b = world.spawn_asteroid(Vec2::new(50.0, 10.0), Vec2::new(1.0, 0.0));
        let c = world.spawn_asteroid(Vec2::new(90.0, 10.0), Vec2::new(1.0, 0.0));
        world.get_mut(b).unwrap().body.kill();
        world.remove_dead();

        let ids: Vec<_> = world.entities().map(|v| v.id).collect();
        assert_eq!(ids, vec![world.player_id(), a, c]);
    }

    #[test]
    fn test_bullet_exemptions() {
        let mut world = World::new(GameConfig::default());
        let shooter = world.player_id();
        let shot = Shot {
            pos: Vec2::new(410.0, 290.0),
            rotation: 0.0,
        };
        let first = world.spawn_bullet(shooter, shot);
        let second = world.spawn_bullet(shooter, shot);

        let player = world.player().unwrap();
        assert!(player.body.non_collidables.contains(&first));
        assert!(player.body.non_collidables.contains(&second));

        let first_body = &world.get(first).unwrap().body;
        assert!(first_body.non_collidables.contains(&shooter));
        assert!(first_body.non_collidables.contains(&second));

        let second_body = &world.get(second).unwrap().body;
        assert!(second_body.non_collidables.contains(&shooter));
        assert!(second_body.non_collidables.contains(&first));
    }

    #[test]
    fn test_hud_reports_final_score_after_death() {
        let mut world = World::new(GameConfig::default());
        {
            let player = world.player_mut().unwrap();
            player.as_player_mut().unwrap().score = 12;
            player.body.kill();
        }
        world.remove_dead();

        assert!(world.player().is_none());
        let hud = world.hud();
        assert_eq!(hud.score, 12);
        assert_eq!(hud.hp, 0);
        assert_eq!(hud.max_hp, PLAYER_MAX_HP);
    }
}
