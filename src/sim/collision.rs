//! Pairwise collision detection and deferred resolution
//!
//! Detection compares every live entity against every other one (O(n²)) and
//! only queues what it finds. Nothing is damaged or removed until the whole
//! scan is finished, so the entity set never changes under the scan.

use serde::{Deserialize, Serialize};

use super::entity::{Body, EntityId, Role};
use super::rect::Rect;
use super::world::World;

/// A queued hit: `subject` ran into `cause` and must react to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionRecord {
    pub subject: EntityId,
    pub cause: EntityId,
}

/// Whether `body` should register a hit against entity `other` occupying `other_bounds`.
/// Repeat contacts with the last partner and exempted entities are ignored.
#[inline]
pub fn collides_with(body: &Body, other: EntityId, other_bounds: &Rect) -> bool {
    body.bounds().overlaps(other_bounds)
        && body.last_collided != Some(other)
        && !body.non_collidables.contains(&other)
}

/// Forget exemptions for entities that are no longer live
pub fn clean_non_collidables(world: &mut World) {
    let live: Vec<EntityId> = world
        .entity_slice()
        .iter()
        .filter(|e| e.body.is_alive())
        .map(|e| e.id)
        .collect();
    // Ids are handed out in creation order, so `live` is sorted
    for entity in world.entities_mut() {
        entity
            .body
            .non_collidables
            .retain(|id| live.binary_search(id).is_ok());
    }
}

/// Scan all live pairs and queue a record for each new contact.
/// Returns the number of records queued.
pub fn scan(world: &mut World) -> usize {
    let mut found = Vec::new();
    let entities = world.entities_mut();

    for i in 0..entities.len() {
        if !entities[i].body.is_alive() {
            continue;
        }
        for j in 0..entities.len() {
            let other = &entities[j];
            if i == j || !other.body.is_alive() {
                continue;
            }
            let (other_id, other_bounds) = (other.id, other.body.bounds());

            let subject = &mut entities[i];
            if collides_with(&subject.body, other_id, &other_bounds) {
                subject.body.last_collided = Some(other_id);
                found.push(CollisionRecord {
                    subject: subject.id,
                    cause: other_id,
                });
            }
        }
    }

    let count = found.len();
    world.collisions.extend(found);
    count
}

/// Resolve queued records, most recently found first
pub fn drain(world: &mut World) {
    while let Some(record) = world.collisions.pop() {
        resolve(world, record);
    }
}

/// Apply one record. Bullets die and credit their shooter; everything else
/// takes the cause's damage and bounces. Dead subjects are skipped.
pub fn resolve(world: &mut World, record: CollisionRecord) {
    let Some(damage) = world.get(record.cause).map(|e| e.body.collision_damage) else {
        return;
    };
    let Some(subject) = world.get_mut(record.subject) else {
        return;
    };
    if !subject.body.is_alive() {
        return;
    }

    let shooter = match &subject.role {
        Role::Bullet(bullet) => Some(bullet.shooter),
        Role::Player(_) | Role::Asteroid(_) => None,
    };

    match shooter {
        Some(shooter) => {
            subject.body.kill();
            log::debug!("Bullet {:?} hit {:?}", record.subject, record.cause);
            if let Some(player) = world.get_mut(shooter).and_then(|e| e.as_player_mut()) {
                player.score += 1;
            }
        }
        None => {
            subject.body.take_hit(damage);
            log::debug!(
                "{:?} hit by {:?} for {}, hp now {}",
                record.subject,
                record.cause,
                damage,
                subject.body.hp
            );
        }
    }
}
