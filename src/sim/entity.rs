//! World-space entities: targets (humans, cars) and projectiles
//!
//! Targets are a tagged variant, not a class hierarchy: one record with a
//! kind tag and a per-kind constant table for score and chaos yield.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{
    FAR_Z, HIT_REMOVAL_DELAY_SEC, OUT_OF_RANGE_Z, WIND_IMPACT_FACTOR, WORLD_X_MAX, WORLD_X_MIN,
    WORLD_Y_MAX, WORLD_Y_MIN,
};
use crate::{clamp01, lerp};

/// What kind of target an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Human,
    Car,
}

/// Score and chaos yield for a target variant
#[derive(Debug, Clone, Copy)]
pub struct TargetYield {
    pub score_value: u32,
    pub chaos_value: f32,
}

/// Per-kind yield table. High-value humans are a sub-variant of Human,
/// not a third kind: mission objectives only distinguish human vs car.
pub fn target_yield(kind: TargetKind, high_value: bool) -> TargetYield {
    match (kind, high_value) {
        (TargetKind::Human, false) => TargetYield {
            score_value: 14,
            chaos_value: 9.0,
        },
        (TargetKind::Human, true) => TargetYield {
            score_value: 32,
            chaos_value: 18.0,
        },
        (TargetKind::Car, _) => TargetYield {
            score_value: 22,
            chaos_value: 14.0,
        },
    }
}

/// A ground-level target moving through the world toward the viewer.
///
/// Position axes: x lateral, y vertical row offset, z depth (larger is
/// farther away).
#[derive(Debug, Clone)]
pub struct Target {
    pub id: u32,
    pub kind: TargetKind,
    pub high_value: bool,
    pub pos: Vec3,
    /// Forward speed along the depth axis (worldZ units per second)
    pub z_speed: f32,
    pub hit: bool,
    /// Countdown to removal once hit (seconds)
    removal_sec: f32,
}

impl Target {
    pub fn new(id: u32, kind: TargetKind, high_value: bool, pos: Vec3, z_speed: f32) -> Self {
        Self {
            id,
            kind,
            high_value,
            pos,
            z_speed,
            hit: false,
            removal_sec: 0.0,
        }
    }

    /// Score/chaos yield for this target's variant
    pub fn yield_values(&self) -> TargetYield {
        target_yield(self.kind, self.high_value)
    }

    /// Advance along the depth axis. Hit targets are frozen; their removal
    /// countdown runs instead.
    pub fn tick(&mut self, dt: f32) {
        if self.hit {
            self.removal_sec -= dt;
        } else {
            self.pos.z -= self.z_speed * dt;
        }
    }

    /// Mark as hit. Idempotent: a second hit is a no-op and reports false.
    pub fn mark_hit(&mut self) -> bool {
        if self.hit {
            return false;
        }
        self.hit = true;
        self.removal_sec = HIT_REMOVAL_DELAY_SEC;
        true
    }

    /// Unhit and past the interaction zone (exited the near plane side)
    pub fn out_of_range(&self) -> bool {
        !self.hit && self.pos.z < OUT_OF_RANGE_Z
    }

    /// True while the target should stay in the world
    pub fn alive(&self) -> bool {
        if self.hit {
            self.removal_sec > 0.0
        } else {
            !self.out_of_range() && self.pos.z <= FAR_Z + 2.0
        }
    }

    /// Eligible for impact matching
    pub fn targetable(&self) -> bool {
        !self.hit
    }
}

/// Depth the projectile starts from (just in front of the viewer)
const START_Z: f32 = 0.85;

/// A falling drop in flight. Launch parameters are fixed at release; flight
/// is a straight interpolation from the start point to the impact point.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub start: Vec3,
    pub impact_point: Vec3,
    pub travel_sec: f32,
    pub elapsed_sec: f32,
    pub score_multiplier: f32,
    resolved: bool,
}

impl Projectile {
    /// Launch from the launcher's normalized position, bending the impact
    /// point laterally by the current wind. More charge means a closer
    /// impact depth and a shorter flight.
    pub fn launch(x: f32, y: f32, wind: f32, charge_ratio: f32) -> Self {
        let charge = clamp01(charge_ratio);
        Self {
            start: Vec3::new(x, y, START_Z),
            impact_point: Vec3::new(
                (x + wind * WIND_IMPACT_FACTOR).clamp(WORLD_X_MIN, WORLD_X_MAX),
                (y + 0.08).clamp(WORLD_Y_MIN, WORLD_Y_MAX),
                lerp(2.9, 2.1, charge),
            ),
            travel_sec: lerp(0.8, 0.45, charge),
            elapsed_sec: 0.0,
            score_multiplier: 1.0 + charge * 0.2,
            resolved: false,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed_sec += dt;
    }

    /// Normalized flight progress in [0, 1]
    pub fn progress(&self) -> f32 {
        clamp01(self.elapsed_sec / self.travel_sec)
    }

    /// Interpolated world position along the flight path
    pub fn world_position(&self) -> Vec3 {
        self.start.lerp(self.impact_point, self.progress())
    }

    /// Flight timer has completed and the impact has not been consumed yet
    pub fn impact_ready(&self) -> bool {
        !self.resolved && self.progress() >= 1.0
    }

    /// Consume the impact. Yields the impact point exactly once over the
    /// projectile's lifetime; later calls return None.
    pub fn consume_impact(&mut self) -> Option<Impact> {
        if !self.impact_ready() {
            return None;
        }
        self.resolved = true;
        Some(Impact {
            point: self.impact_point,
            score_multiplier: self.score_multiplier,
        })
    }

    /// The impact has been consumed; the projectile is done
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// A resolved impact point, handed to the resolver once
#[derive(Debug, Clone, Copy)]
pub struct Impact {
    pub point: Vec3,
    pub score_multiplier: f32,
}
