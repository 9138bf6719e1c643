//! Mission level configuration
//!
//! Immutable, data-driven input to the mission system. Configs can be built
//! in code or deserialized from JSON supplied by the embedding layer.

use serde::{Deserialize, Serialize};

pub use crate::sim::entity::TargetKind;

/// One mission objective: hit `target` entities of `kind`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveSpec {
    pub id: String,
    pub label: String,
    pub kind: TargetKind,
    pub target: u32,
}

/// How the chaos meter relates to completion.
///
/// The two historical variants of the meter: either it decays over time and
/// only the objectives gate completion, or it holds its level and completion
/// additionally requires reaching a threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChaosRule {
    /// Meter decays toward 0 at this rate (units per second)
    DecayPerSec(f32),
    /// Meter holds; completion also requires `chaos >= threshold`
    TargetChaos(f32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: String,
    pub name: String,
    pub time_limit_sec: f32,
    pub objectives: Vec<ObjectiveSpec>,
    pub chaos_rule: ChaosRule,
}

impl LevelConfig {
    /// Level 1: Beach Day Breakdown
    pub fn level1() -> Self {
        Self {
            id: "level1".to_string(),
            name: "Beach Day Breakdown".to_string(),
            time_limit_sec: 90.0,
            chaos_rule: ChaosRule::DecayPerSec(3.0),
            objectives: vec![
                ObjectiveSpec {
                    id: "human_hits".to_string(),
                    label: "Hit Humans".to_string(),
                    kind: TargetKind::Human,
                    target: 5,
                },
                ObjectiveSpec {
                    id: "car_hits".to_string(),
                    label: "Hit Cars".to_string(),
                    kind: TargetKind::Car,
                    target: 2,
                },
            ],
        }
    }

    /// Level 2: Boardwalk Mayhem
    pub fn level2() -> Self {
        Self {
            id: "level2".to_string(),
            name: "Boardwalk Mayhem".to_string(),
            time_limit_sec: 100.0,
            chaos_rule: ChaosRule::DecayPerSec(4.0),
            objectives: vec![
                ObjectiveSpec {
                    id: "human_hits".to_string(),
                    label: "Hit Humans".to_string(),
                    kind: TargetKind::Human,
                    target: 8,
                },
                ObjectiveSpec {
                    id: "car_hits".to_string(),
                    label: "Hit Cars".to_string(),
                    kind: TargetKind::Car,
                    target: 4,
                },
            ],
        }
    }
}
