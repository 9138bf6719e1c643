//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick order only
//! - Seeded, injected RNG only
//! - No rendering or platform dependencies

pub mod entity;
pub mod launcher;
pub mod mission;
pub mod perspective;
pub mod resolver;
pub mod score;
pub mod session;
pub mod spawn;
pub mod wind;

pub use entity::{Impact, Projectile, Target, TargetKind, TargetYield, target_yield};
pub use launcher::{DropSpec, FlightInput, Launcher};
pub use mission::{MissionSystem, ObjectiveProgress};
pub use perspective::{Projection, project};
pub use resolver::resolve;
pub use score::ScoreComboSystem;
pub use session::{GameMode, GameSession, HudState, SessionConfig, SessionOutcome};
pub use spawn::SpawnSystem;
pub use wind::WindSystem;
