//! The flying actor that charges and releases drops
//!
//! Owns no target or projectile references: movement updates mutate its own
//! normalized position, and `release_drop` communicates through a returned
//! `DropSpec`. Rejected operations return `None` rather than erroring.

use glam::Vec2;

use crate::clamp01;
use crate::consts::{
    DROP_COOLDOWN_MS, LAUNCHER_ACCEL, LAUNCHER_DRAG, LAUNCHER_MAX_SPEED, MAX_CHARGE_MS,
};

/// Parameters of a released drop, consumed by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropSpec {
    pub x: f32,
    pub y: f32,
    pub charge_ratio: f32,
}

/// Directional input for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    pos: Vec2,
    vel: Vec2,
    charging: bool,
    charge_start_ms: f32,
    last_drop_ms: f32,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            charging: false,
            charge_start_ms: 0.0,
            // Far enough in the past that the first drop is never gated
            last_drop_ms: -DROP_COOLDOWN_MS,
        }
    }

    /// Normalized position in [-1, 1] x [-0.95, 0.95]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Advance flight physics: accelerate toward held directions, drag to a
    /// stop otherwise, clamp to the flight envelope.
    pub fn tick(&mut self, dt: f32, input: FlightInput) {
        self.vel.x = axis_velocity(self.vel.x, input.left, input.right, dt);
        self.vel.y = axis_velocity(self.vel.y, input.up, input.down, dt);

        self.pos.x = (self.pos.x + self.vel.x * dt).clamp(-1.0, 1.0);
        self.pos.y = (self.pos.y + self.vel.y * dt).clamp(-0.95, 0.95);
    }

    /// Begin charging a drop. Silently ignored while on cooldown.
    pub fn start_charge(&mut self, now_ms: f32) {
        if !self.can_drop(now_ms) {
            return;
        }
        self.charging = true;
        self.charge_start_ms = now_ms;
    }

    /// Release the held drop. Returns `None` (nothing happened) while on
    /// cooldown; otherwise starts the cooldown and reports the launch spec.
    pub fn release_drop(&mut self, now_ms: f32) -> Option<DropSpec> {
        if !self.can_drop(now_ms) {
            self.charging = false;
            return None;
        }

        let charge_ratio = self.charge_ratio(now_ms);
        self.last_drop_ms = now_ms;
        self.charging = false;

        Some(DropSpec {
            x: self.pos.x,
            y: self.pos.y,
            charge_ratio,
        })
    }

    /// Current charge ratio while holding, 0 when idle
    pub fn charge_preview_ratio(&self, now_ms: f32) -> f32 {
        self.charge_ratio(now_ms)
    }

    pub fn cooldown_remaining_ms(&self, now_ms: f32) -> f32 {
        (DROP_COOLDOWN_MS - (now_ms - self.last_drop_ms)).max(0.0)
    }

    /// HUD line describing the drop state
    pub fn drop_status_text(&self, now_ms: f32) -> String {
        let cooldown = self.cooldown_remaining_ms(now_ms);
        if cooldown > 0.0 {
            return format!("Drop Cooldown: {:.1}s", cooldown / 1000.0);
        }

        let charge = self.charge_preview_ratio(now_ms);
        if charge > 0.0 {
            return format!("Charge: {}%", (charge * 100.0).round() as u32);
        }

        "Drop: hold to charge, release to drop".to_string()
    }

    fn can_drop(&self, now_ms: f32) -> bool {
        now_ms - self.last_drop_ms >= DROP_COOLDOWN_MS
    }

    fn charge_ratio(&self, now_ms: f32) -> f32 {
        if !self.charging {
            return 0.0;
        }
        clamp01((now_ms - self.charge_start_ms) / MAX_CHARGE_MS)
    }
}

/// One axis of thrust-or-drag velocity integration
fn axis_velocity(current: f32, negative: bool, positive: bool, dt: f32) -> f32 {
    if negative && !positive {
        return (current - LAUNCHER_ACCEL * dt).max(-LAUNCHER_MAX_SPEED);
    }
    if positive && !negative {
        return (current + LAUNCHER_ACCEL * dt).min(LAUNCHER_MAX_SPEED);
    }

    let drag = LAUNCHER_DRAG * dt;
    if current.abs() <= drag {
        return 0.0;
    }
    current - current.signum() * drag
}
