use crate::settings::Settings;

/// Per-run counters. The high score survives `reset_stats` but not the
/// process.
#[derive(Clone, Debug, Default)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self::default();
        stats.reset_stats(settings);
        stats
    }

    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Raise the high score if the current score beats it. Returns true when
    /// a new record was set.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
