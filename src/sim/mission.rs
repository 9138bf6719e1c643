//! Mission objectives and the chaos meter
//!
//! Built once from an immutable level config, mutated only by `register_hit`
//! and the per-frame `tick`. Terminal states (complete or failed) latch:
//! after either holds, further calls are no-ops and both flags are frozen.

use crate::levels::{ChaosRule, LevelConfig, TargetKind};

/// Progress against one objective
#[derive(Debug, Clone)]
pub struct ObjectiveProgress {
    pub label: String,
    pub kind: TargetKind,
    pub target: u32,
    pub current: u32,
}

#[derive(Debug, Clone)]
pub struct MissionSystem {
    objectives: Vec<ObjectiveProgress>,
    chaos_rule: ChaosRule,
    chaos_meter: f32,
    time_remaining_sec: f32,
    /// Set on the first tick/hit that observes a terminal condition
    outcome: Option<bool>,
}

impl MissionSystem {
    pub fn new(level: &LevelConfig) -> Self {
        Self {
            objectives: level
                .objectives
                .iter()
                .map(|spec| ObjectiveProgress {
                    label: spec.label.clone(),
                    kind: spec.kind,
                    target: spec.target,
                    current: 0,
                })
                .collect(),
            chaos_rule: level.chaos_rule,
            chaos_meter: 0.0,
            time_remaining_sec: level.time_limit_sec,
            outcome: None,
        }
    }

    /// Drain the clock and, in the decay variant, the chaos meter
    pub fn tick(&mut self, dt_sec: f32) {
        if self.outcome.is_some() {
            return;
        }

        self.time_remaining_sec = (self.time_remaining_sec - dt_sec).max(0.0);
        if let ChaosRule::DecayPerSec(rate) = self.chaos_rule {
            self.chaos_meter = (self.chaos_meter - rate * dt_sec).max(0.0);
        }

        self.latch_outcome();
    }

    /// Credit a hit: bump the chaos meter and the first objective matching
    /// the target kind, both clamped.
    pub fn register_hit(&mut self, kind: TargetKind, chaos_gain: f32) {
        if self.outcome.is_some() {
            return;
        }

        self.chaos_meter = (self.chaos_meter + chaos_gain).min(100.0);

        if let Some(objective) = self.objectives.iter_mut().find(|o| o.kind == kind) {
            objective.current = (objective.current + 1).min(objective.target);
        }

        self.latch_outcome();
    }

    pub fn is_complete(&self) -> bool {
        match self.outcome {
            Some(success) => success,
            None => self.completion_holds(),
        }
    }

    pub fn is_failed(&self) -> bool {
        match self.outcome {
            Some(success) => !success,
            None => self.time_remaining_sec <= 0.0 && !self.completion_holds(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Chaos meter rounded to an integer in [0, 100]
    pub fn chaos_meter(&self) -> u32 {
        self.chaos_meter.round() as u32
    }

    pub fn time_remaining_sec(&self) -> f32 {
        self.time_remaining_sec
    }

    /// HUD line, e.g. "Hit Humans: 2/5 | Hit Cars: 0/2"
    pub fn objectives_text(&self) -> String {
        self.objectives
            .iter()
            .map(|o| format!("{}: {}/{}", o.label, o.current, o.target))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Results line, e.g. "Hit Humans: 5/5 | Hit Cars: 2/2 | Chaos 61/100"
    pub fn summary(&self) -> String {
        format!("{} | Chaos {}/100", self.objectives_text(), self.chaos_meter())
    }

    fn completion_holds(&self) -> bool {
        let objectives_met = self.objectives.iter().all(|o| o.current >= o.target);
        let chaos_met = match self.chaos_rule {
            ChaosRule::DecayPerSec(_) => true,
            ChaosRule::TargetChaos(threshold) => self.chaos_meter >= threshold,
        };
        objectives_met && chaos_met
    }

    fn latch_outcome(&mut self) {
        if self.completion_holds() {
            self.outcome = Some(true);
        } else if self.time_remaining_sec <= 0.0 {
            self.outcome = Some(false);
        }
    }
}
