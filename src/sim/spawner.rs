//! Timed asteroid spawning along the screen edges

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::rect::Rect;
use super::world::World;

/// Spawn timer, measured on the world clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds between spawns
    pub interval: f32,
    /// Clock reading at the last spawn
    pub last_spawn: f32,
}

impl Spawner {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            last_spawn: 0.0,
        }
    }

    /// Whether more than `interval` has passed since the last spawn.
    /// Resets the timer when it fires.
    pub fn due(&mut self, clock: f32) -> bool {
        if clock - self.last_spawn > self.interval {
            self.last_spawn = clock;
            true
        } else {
            false
        }
    }
}

/// Random point on one of the four edges of `area`, each edge equally likely
pub fn edge_point(rng: &mut impl Rng, area: &Rect) -> Vec2 {
    let along_x = rng.random_range(area.x1..area.x2);
    let along_y = rng.random_range(area.y1..area.y2);
    match rng.random_range(0..4) {
        0 => Vec2::new(along_x, area.y1),
        1 => Vec2::new(along_x, area.y2 - 1.0),
        2 => Vec2::new(area.x1, along_y),
        _ => Vec2::new(area.x2 - 1.0, along_y),
    }
}

/// Random heading with components in {-1, 0, 1}, redrawn until dx != dy
pub fn random_heading(rng: &mut impl Rng) -> Vec2 {
    loop {
        let dx = rng.random_range(-1..=1);
        let dy = rng.random_range(-1..=1);
        if dx != dy {
            return Vec2::new(dx as f32, dy as f32);
        }
    }
}

/// Spawn one asteroid if the timer has elapsed
pub fn tick(world: &mut World) -> Option<EntityId> {
    if !world.spawner.due(world.clock) {
        return None;
    }
    let area = world.area;
    let pos = edge_point(world.rng_mut(), &area);
    let heading = random_heading(world.rng_mut());
    Some(world.spawn_asteroid(pos, heading))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::entity::EntityKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_due_after_interval() {
        let mut spawner = Spawner::new(0.2);
        assert!(!spawner.due(0.1));
        assert!(!spawner.due(0.2));
        assert!(spawner.due(0.25));
        assert_eq!(spawner.last_spawn, 0.25);
        assert!(!spawner.due(0.4));
        assert!(spawner.due(0.5));
    }

    #[test]
    fn test_heading_never_diagonal_degenerate() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            let heading = random_heading(&mut rng);
            assert_ne!(heading.x, heading.y);
            assert!([-1.0, 0.0, 1.0].contains(&heading.x));
            assert!([-1.0, 0.0, 1.0].contains(&heading.y));
        }
    }

    #[test]
    fn test_edge_points_lie_on_an_edge() {
        let area = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let mut edges = [false; 4];
        for _ in 0..500 {
            let p = edge_point(&mut rng, &area);
            assert!(area.contains_point(p));
            let on_top = p.y == 0.0;
            let on_bottom = p.y == 599.0;
            let on_left = p.x == 0.0;
            let on_right = p.x == 799.0;
            assert!(on_top || on_bottom || on_left || on_right);
            edges[0] |= on_top;
            edges[1] |= on_bottom;
            edges[2] |= on_left;
            edges[3] |= on_right;
        }
        assert!(edges.iter().all(|&hit| hit));
    }

    #[test]
    fn test_tick_spawns_asteroid_when_due() {
        let mut world = World::new(GameConfig::default());
        assert!(tick(&mut world).is_none());

        world.clock = 0.3;
        let id = tick(&mut world).unwrap();
        let asteroid = world.get(id).unwrap();
        assert_eq!(asteroid.kind(), EntityKind::Asteroid);
        assert_eq!(asteroid.body.velocity, world.config.asteroid.speed);

        // Timer was reset
        assert!(tick(&mut world).is_none());
    }
}
