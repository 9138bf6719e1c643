//! Sky Splat - a pseudo-3D arcade drop game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world space, perspective projection,
//!   impact resolution, combo scoring, mission tracking)
//! - `levels`: Data-driven mission configuration
//! - `highscores`: Best-score-per-mode persistence

pub mod highscores;
pub mod levels;
pub mod sim;

pub use highscores::BestScores;
pub use levels::{ChaosRule, LevelConfig, ObjectiveSpec, TargetKind};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Reference screen dimensions for projection
    pub const SCREEN_WIDTH: f32 = 960.0;
    pub const SCREEN_HEIGHT: f32 = 540.0;

    /// Depth band of the world (worldZ axis, larger is farther)
    pub const NEAR_Z: f32 = 0.7;
    pub const FAR_Z: f32 = 10.5;

    /// World-space bounds for the lateral / vertical axes
    pub const WORLD_X_MIN: f32 = -1.15;
    pub const WORLD_X_MAX: f32 = 1.15;
    pub const WORLD_Y_MIN: f32 = -0.95;
    pub const WORLD_Y_MAX: f32 = 1.1;

    /// A target closer than this (unhit) has left the interaction zone
    pub const OUT_OF_RANGE_Z: f32 = 0.45;

    /// How long a hit target stays frozen before removal (seconds)
    pub const HIT_REMOVAL_DELAY_SEC: f32 = 0.6;

    /// Launcher flight envelope (normalized units per second)
    pub const LAUNCHER_ACCEL: f32 = 3.8;
    pub const LAUNCHER_MAX_SPEED: f32 = 2.5;
    pub const LAUNCHER_DRAG: f32 = 6.4;

    /// Drop timing
    pub const DROP_COOLDOWN_MS: f32 = 600.0;
    pub const MAX_CHARGE_MS: f32 = 800.0;

    /// Wind contribution to the lateral impact point
    pub const WIND_IMPACT_FACTOR: f32 = 0.22;

    /// Combo window duration
    pub const COMBO_WINDOW_MS: f32 = 1200.0;

    /// Spawn cadence (seconds)
    pub const HUMAN_SPAWN_INTERVAL_SEC: f32 = 0.95;
    pub const CAR_SPAWN_INTERVAL_SEC: f32 = 1.7;
    /// Chance a spawned human is the high-value variant
    pub const HIGH_VALUE_CHANCE: f64 = 0.22;
}

/// Linear interpolation between `a` and `b` by `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp a charge/progress ratio to [0, 1]
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}
