//! Game session orchestration
//!
//! Owns every entity collection and system state, and drives them in a
//! fixed order each tick: wind, spawning, target motion, launcher flight,
//! projectile motion, impact resolution, scoring and mission bookkeeping.
//! Systems never hold references into each other; all coupling flows
//! through this module.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Projectile, Target};
use super::launcher::{DropSpec, FlightInput, Launcher};
use super::mission::MissionSystem;
use super::resolver;
use super::score::ScoreComboSystem;
use super::spawn::SpawnSystem;
use super::wind::WindSystem;
use crate::levels::LevelConfig;

/// Which game mode a session runs; also the key for persisted best scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Arcade,
    Chaos,
}

impl GameMode {
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Arcade => "Arcade",
            GameMode::Chaos => "Chaos Missions",
        }
    }
}

/// How long an arcade run lasts
const ARCADE_TIME_LIMIT_SEC: f32 = 60.0;

/// Session construction parameters
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for wind and spawning; same seed and inputs replay exactly
    pub seed: u64,
    /// Mission level, or `None` for a timed arcade run
    pub level: Option<LevelConfig>,
    /// Variant gate: reject drops while a projectile is still in flight
    pub single_projectile: bool,
}

impl SessionConfig {
    pub fn arcade(seed: u64) -> Self {
        Self {
            seed,
            level: None,
            single_projectile: false,
        }
    }

    pub fn mission(seed: u64, level: LevelConfig) -> Self {
        Self {
            seed,
            level: Some(level),
            single_projectile: false,
        }
    }
}

/// Emitted once when a session terminates
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub score: u64,
    pub mode: GameMode,
    pub success: bool,
    pub summary: String,
}

/// Aggregate state for the HUD, one query per frame
#[derive(Debug, Clone)]
pub struct HudState {
    pub score: u64,
    pub combo: u32,
    pub chaos_meter: u32,
    pub time_remaining_sec: f32,
    pub objectives_text: String,
    pub wind_indicator: String,
    pub drop_status: String,
}

pub struct GameSession {
    mode: GameMode,
    rng: Pcg32,
    wind: WindSystem,
    spawner: SpawnSystem,
    launcher: Launcher,
    scoring: ScoreComboSystem,
    mission: Option<MissionSystem>,
    arcade_time_left_sec: f32,
    targets: Vec<Target>,
    projectiles: Vec<Projectile>,
    flight_input: FlightInput,
    single_projectile: bool,
    clock_ms: f32,
    outcome: Option<SessionOutcome>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let mission = config.level.as_ref().map(MissionSystem::new);
        let mode = if mission.is_some() {
            GameMode::Chaos
        } else {
            GameMode::Arcade
        };

        Self {
            mode,
            rng: Pcg32::seed_from_u64(config.seed),
            wind: WindSystem::new(),
            spawner: SpawnSystem::new(),
            launcher: Launcher::new(),
            scoring: ScoreComboSystem::default(),
            mission,
            arcade_time_left_sec: ARCADE_TIME_LIMIT_SEC,
            targets: Vec::new(),
            projectiles: Vec::new(),
            flight_input: FlightInput::default(),
            single_projectile: config.single_projectile,
            clock_ms: 0.0,
            outcome: None,
        }
    }

    /// Set the directional input applied on subsequent ticks
    pub fn set_flight_input(&mut self, input: FlightInput) {
        self.flight_input = input;
    }

    /// Begin charging a drop. No-op while on cooldown or after the run ends.
    pub fn start_charge(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        self.launcher.start_charge(self.clock_ms);
    }

    /// Release the held drop and launch a projectile. Returns `None` when
    /// rejected (cooldown, single-projectile gate, or finished run) - the
    /// caller treats that as "nothing happened".
    pub fn release_drop(&mut self) -> Option<DropSpec> {
        if self.outcome.is_some() {
            return None;
        }
        if self.single_projectile && !self.projectiles.is_empty() {
            return None;
        }

        let drop = self.launcher.release_drop(self.clock_ms)?;
        self.projectiles.push(Projectile::launch(
            drop.x,
            drop.y,
            self.wind.value(),
            drop.charge_ratio,
        ));
        log::debug!(
            "drop released at ({:.2}, {:.2}) charge {:.2}",
            drop.x,
            drop.y,
            drop.charge_ratio
        );
        Some(drop)
    }

    /// Advance the whole simulation by `dt_sec`. No-op once finished.
    pub fn tick(&mut self, dt_sec: f32) {
        if self.outcome.is_some() {
            return;
        }

        self.clock_ms += dt_sec * 1000.0;

        self.wind.tick(dt_sec, &mut self.rng);

        let targets = &mut self.targets;
        self.spawner.tick(dt_sec, &mut self.rng, |target| {
            targets.push(target);
        });

        for target in &mut self.targets {
            target.tick(dt_sec);
        }
        self.targets.retain(|t| t.alive());

        self.launcher.tick(dt_sec, self.flight_input);

        for i in 0..self.projectiles.len() {
            self.projectiles[i].tick(dt_sec);
            if let Some(impact) = self.projectiles[i].consume_impact() {
                self.resolve_impact(impact);
            }
        }
        self.projectiles.retain(|p| !p.is_resolved());

        self.scoring.tick(dt_sec * 1000.0);
        match &mut self.mission {
            Some(mission) => mission.tick(dt_sec),
            None => {
                self.arcade_time_left_sec = (self.arcade_time_left_sec - dt_sec).max(0.0);
            }
        }

        self.check_termination();
    }

    fn resolve_impact(&mut self, impact: super::entity::Impact) {
        match resolver::resolve(&impact, &self.targets) {
            Some(index) => {
                let target = &mut self.targets[index];
                if !target.mark_hit() {
                    return;
                }
                let yield_values = target.yield_values();
                let kind = target.kind;
                let base =
                    (yield_values.score_value as f32 * impact.score_multiplier).round() as u32;
                let gained = self.scoring.on_hit(base);
                if let Some(mission) = &mut self.mission {
                    mission.register_hit(kind, yield_values.chaos_value);
                }
                log::debug!("hit {kind:?} for {gained} points");
            }
            None => {
                self.scoring.on_miss();
                log::debug!(
                    "drop missed at ({:.2}, {:.2})",
                    impact.point.x,
                    impact.point.y
                );
            }
        }
    }

    fn check_termination(&mut self) {
        let (done, success) = match &self.mission {
            Some(mission) => (mission.is_finished(), mission.is_complete()),
            None => (self.arcade_time_left_sec <= 0.0, true),
        };
        if !done {
            return;
        }

        let summary = match &self.mission {
            Some(mission) => mission.summary(),
            None => format!("Score {}", self.scoring.score()),
        };
        let outcome = SessionOutcome {
            score: self.scoring.score(),
            mode: self.mode,
            success,
            summary,
        };
        log::info!(
            "{} run finished: score {} ({})",
            outcome.mode.label(),
            outcome.score,
            if outcome.success { "success" } else { "failed" }
        );
        self.outcome = Some(outcome);
    }

    /// The terminal outcome, present once the run has ended
    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Aggregate state for HUD rendering
    pub fn hud(&self) -> HudState {
        HudState {
            score: self.scoring.score(),
            combo: self.scoring.combo(),
            chaos_meter: self.mission.as_ref().map_or(0, |m| m.chaos_meter()),
            time_remaining_sec: self.time_remaining_sec(),
            objectives_text: self
                .mission
                .as_ref()
                .map_or_else(String::new, |m| m.objectives_text()),
            wind_indicator: self.wind.indicator_text(),
            drop_status: self.launcher.drop_status_text(self.clock_ms),
        }
    }

    pub fn time_remaining_sec(&self) -> f32 {
        match &self.mission {
            Some(mission) => mission.time_remaining_sec(),
            None => self.arcade_time_left_sec,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Live targets, for rendering via `perspective::project`
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// In-flight projectiles, for rendering
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn wind_value(&self) -> f32 {
        self.wind.value()
    }
}
