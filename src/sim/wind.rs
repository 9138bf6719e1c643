//! Wind drift
//!
//! A smoothly varying scalar in [-1, 1]. Every few seconds a new random
//! target is picked; the current value exponentially approaches it, so the
//! drift never jumps. The RNG is injected for deterministic replay.

use rand::Rng;

/// Exponential approach rate toward the wind target
const APPROACH_RATE: f32 = 0.55;

#[derive(Debug, Clone)]
pub struct WindSystem {
    value: f32,
    target: f32,
    refresh_sec: f32,
}

impl Default for WindSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl WindSystem {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            refresh_sec: 0.0,
        }
    }

    /// Advance the wind by `dt` seconds, drawing a new target when due
    pub fn tick(&mut self, dt: f32, rng: &mut impl Rng) {
        self.refresh_sec -= dt;
        if self.refresh_sec <= 0.0 {
            self.target = rng.random_range(-100..=100) as f32 / 100.0;
            self.refresh_sec = rng.random_range(2..=5) as f32;
        }

        let factor = (dt * APPROACH_RATE).min(1.0);
        self.value += (self.target - self.value) * factor;
    }

    /// Current wind value in [-1, 1]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// HUD indicator string, e.g. "Wind: -> steady"
    pub fn indicator_text(&self) -> String {
        let magnitude = self.value.abs();
        if magnitude < 0.15 {
            return "Wind: calm".to_string();
        }

        let arrow = if self.value > 0.0 { "->" } else { "<-" };
        let strength = if magnitude > 0.75 {
            "strong"
        } else if magnitude > 0.35 {
            "steady"
        } else {
            "light"
        };
        format!("Wind: {arrow} {strength}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_wind_stays_bounded() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut wind = WindSystem::new();
        for _ in 0..10_000 {
            wind.tick(1.0 / 120.0, &mut rng);
            assert!(wind.value() >= -1.0 && wind.value() <= 1.0);
        }
    }

    #[test]
    fn test_wind_approaches_target_without_jumps() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut wind = WindSystem::new();
        let mut last = wind.value();
        for _ in 0..5_000 {
            wind.tick(1.0 / 120.0, &mut rng);
            // Exponential approach at 120 Hz cannot move far in one step
            assert!((wind.value() - last).abs() < 0.02);
            last = wind.value();
        }
    }

    #[test]
    fn test_wind_deterministic_with_seed() {
        let mut a = (Pcg32::seed_from_u64(42), WindSystem::new());
        let mut b = (Pcg32::seed_from_u64(42), WindSystem::new());
        for _ in 0..1_000 {
            a.1.tick(1.0 / 120.0, &mut a.0);
            b.1.tick(1.0 / 120.0, &mut b.0);
        }
        assert_eq!(a.1.value(), b.1.value());
    }

    #[test]
    fn test_indicator_text_thresholds() {
        let mut wind = WindSystem::new();
        assert_eq!(wind.indicator_text(), "Wind: calm");
        wind.value = 0.2;
        assert_eq!(wind.indicator_text(), "Wind: -> light");
        wind.value = -0.5;
        assert_eq!(wind.indicator_text(), "Wind: <- steady");
        wind.value = 0.9;
        assert_eq!(wind.indicator_text(), "Wind: -> strong");
    }
}
