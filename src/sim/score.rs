//! Combo scoring
//!
//! Two conceptual states: combo active (window > 0) and idle (window == 0,
//! multiplier == 1). Hits inside the window escalate the multiplier; a miss
//! or the window running dry resets it immediately.

use crate::consts::COMBO_WINDOW_MS;

#[derive(Debug, Clone)]
pub struct ScoreComboSystem {
    score: u64,
    combo_multiplier: u32,
    combo_window_remaining_ms: f32,
    combo_window_ms: f32,
}

impl Default for ScoreComboSystem {
    fn default() -> Self {
        Self::new(COMBO_WINDOW_MS)
    }
}

impl ScoreComboSystem {
    pub fn new(combo_window_ms: f32) -> Self {
        Self {
            score: 0,
            combo_multiplier: 1,
            combo_window_remaining_ms: 0.0,
            combo_window_ms,
        }
    }

    /// Drain the combo window. The multiplier resets exactly when the
    /// window reaches zero, even without a miss.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.combo_window_remaining_ms <= 0.0 {
            return;
        }

        self.combo_window_remaining_ms = (self.combo_window_remaining_ms - dt_ms).max(0.0);
        if self.combo_window_remaining_ms == 0.0 {
            self.combo_multiplier = 1;
        }
    }

    /// Register a hit worth `base_value` points. Returns the points gained
    /// after the combo multiplier.
    pub fn on_hit(&mut self, base_value: u32) -> u64 {
        if self.combo_window_remaining_ms > 0.0 {
            self.combo_multiplier += 1;
        } else {
            self.combo_multiplier = 1;
        }

        let gained = (base_value as f32 * self.combo_multiplier as f32).round() as u64;
        self.score += gained;
        self.combo_window_remaining_ms = self.combo_window_ms;
        gained
    }

    /// A miss breaks the combo immediately, no grace period
    pub fn on_miss(&mut self) {
        self.combo_multiplier = 1;
        self.combo_window_remaining_ms = 0.0;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_growth() {
        let mut scoring = ScoreComboSystem::new(1200.0);
        assert_eq!(scoring.on_hit(10), 10);
        assert_eq!(scoring.combo(), 1);
        scoring.tick(100.0);
        assert_eq!(scoring.on_hit(10), 20);
        assert_eq!(scoring.combo(), 2);
        scoring.tick(100.0);
        assert_eq!(scoring.on_hit(10), 30);
        assert_eq!(scoring.combo(), 3);
        assert_eq!(scoring.score(), 60);
    }

    #[test]
    fn test_idle_combo_decays_exactly_at_window() {
        let mut scoring = ScoreComboSystem::new(1200.0);
        scoring.on_hit(10);
        scoring.tick(100.0);
        scoring.on_hit(10);
        assert_eq!(scoring.combo(), 2);

        // One ms short: still active
        scoring.tick(1199.0);
        assert_eq!(scoring.combo(), 2);
        scoring.tick(1.0);
        assert_eq!(scoring.combo(), 1);
    }

    #[test]
    fn test_miss_breaks_combo_immediately() {
        let mut scoring = ScoreComboSystem::new(1200.0);
        scoring.on_hit(10);
        scoring.tick(10.0);
        scoring.on_hit(10);
        assert_eq!(scoring.combo(), 2);

        scoring.on_miss();
        assert_eq!(scoring.combo(), 1);
        // Next hit starts over at x1
        assert_eq!(scoring.on_hit(10), 10);
    }

    #[test]
    fn test_hit_after_expiry_starts_fresh() {
        let mut scoring = ScoreComboSystem::new(1200.0);
        scoring.on_hit(10);
        scoring.tick(2000.0);
        assert_eq!(scoring.on_hit(10), 10);
        assert_eq!(scoring.combo(), 1);
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut scoring = ScoreComboSystem::new(1200.0);
        scoring.tick(5000.0);
        assert_eq!(scoring.combo(), 1);
        assert_eq!(scoring.score(), 0);
    }
}
