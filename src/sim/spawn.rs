//! Periodic target spawning
//!
//! Two independent fixed-interval timers, one per target kind. Each fires
//! with randomized world-space spawn state and hands the new target to the
//! caller through a registration callback; nothing is stored internally.
//! The RNG is injected so runs can be replayed from a seed.

use glam::Vec3;
use rand::Rng;

use super::entity::{Target, TargetKind};
use crate::consts::{CAR_SPAWN_INTERVAL_SEC, HIGH_VALUE_CHANCE, HUMAN_SPAWN_INTERVAL_SEC};

/// Road lanes cars drive in (worldY rows)
const CAR_LANES: [f32; 2] = [0.62, 0.88];

#[derive(Debug, Clone)]
pub struct SpawnSystem {
    human_timer_sec: f32,
    car_timer_sec: f32,
    next_id: u32,
}

impl Default for SpawnSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnSystem {
    pub fn new() -> Self {
        Self {
            human_timer_sec: HUMAN_SPAWN_INTERVAL_SEC,
            car_timer_sec: CAR_SPAWN_INTERVAL_SEC,
            next_id: 1,
        }
    }

    /// Advance both spawn timers, registering any newly due targets.
    ///
    /// A large `dt` fires at most one spawn per kind; the cadence is a
    /// fixed interval, not a catch-up queue.
    pub fn tick(&mut self, dt: f32, rng: &mut impl Rng, mut register: impl FnMut(Target)) {
        self.human_timer_sec -= dt;
        if self.human_timer_sec <= 0.0 {
            self.human_timer_sec = HUMAN_SPAWN_INTERVAL_SEC;
            register(self.spawn_human(rng));
        }

        self.car_timer_sec -= dt;
        if self.car_timer_sec <= 0.0 {
            self.car_timer_sec = CAR_SPAWN_INTERVAL_SEC;
            register(self.spawn_car(rng));
        }
    }

    fn spawn_human(&mut self, rng: &mut impl Rng) -> Target {
        let high_value = rng.random_bool(HIGH_VALUE_CHANCE);
        let pos = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-0.35..=0.45),
            rng.random_range(8.6..=10.2),
        );
        let z_speed = rng.random_range(0.55..=0.95);
        Target::new(self.alloc_id(), TargetKind::Human, high_value, pos, z_speed)
    }

    fn spawn_car(&mut self, rng: &mut impl Rng) -> Target {
        let pos = Vec3::new(
            rng.random_range(-1.0..=1.0),
            CAR_LANES[rng.random_range(0..CAR_LANES.len())],
            rng.random_range(8.6..=10.2),
        );
        let z_speed = rng.random_range(1.0..=1.5);
        Target::new(self.alloc_id(), TargetKind::Car, false, pos, z_speed)
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn run(seconds: f32, seed: u64) -> Vec<Target> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut spawner = SpawnSystem::new();
        let mut spawned = Vec::new();
        let dt = 1.0 / 120.0;
        let steps = (seconds / dt) as usize;
        for _ in 0..steps {
            spawner.tick(dt, &mut rng, |t| spawned.push(t));
        }
        spawned
    }

    #[test]
    fn test_spawn_cadence() {
        let spawned = run(10.0, 1);
        let humans = spawned
            .iter()
            .filter(|t| t.kind == TargetKind::Human)
            .count();
        let cars = spawned.iter().filter(|t| t.kind == TargetKind::Car).count();
        // 10s at 0.95s / 1.7s intervals
        assert_eq!(humans, 10);
        assert_eq!(cars, 5);
    }

    #[test]
    fn test_spawn_state_within_ranges() {
        for target in run(30.0, 2) {
            assert!(target.pos.x >= -1.0 && target.pos.x <= 1.0);
            assert!(target.pos.z >= 8.6 && target.pos.z <= 10.2);
            assert!(!target.hit);
            match target.kind {
                TargetKind::Human => {
                    assert!(target.pos.y >= -0.35 && target.pos.y <= 0.45);
                    assert!(target.z_speed >= 0.55 && target.z_speed <= 0.95);
                }
                TargetKind::Car => {
                    assert!(CAR_LANES.contains(&target.pos.y));
                    assert!(target.z_speed >= 1.0 && target.z_speed <= 1.5);
                    assert!(!target.high_value);
                }
            }
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let spawned = run(20.0, 3);
        let mut ids: Vec<u32> = spawned.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), spawned.len());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let a = run(15.0, 9);
        let b = run(15.0, 9);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.kind, y.kind);
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.z_speed, y.z_speed);
            assert_eq!(x.high_value, y.high_value);
        }
    }
}
