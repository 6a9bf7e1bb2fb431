//! Play statistics across sessions

use serde::{Deserialize, Serialize};

/// Aggregate counters persisted as the `gameStats` record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl Stats {
    /// Fold one finished game into the counters
    ///
    /// # Examples
    /// ```
    /// use codebreaker::game::Stats;
    ///
    /// let stats = Stats::default().record_outcome(true).record_outcome(true);
    /// assert_eq!(stats.current_streak, 2);
    /// assert_eq!(stats.record_outcome(false).max_streak, 2);
    /// ```
    #[must_use]
    pub const fn record_outcome(self, won: bool) -> Self {
        let current_streak = if won { self.current_streak + 1 } else { 0 };
        Self {
            games_played: self.games_played + 1,
            games_won: self.games_won + won as u32,
            current_streak,
            max_streak: if current_streak > self.max_streak {
                current_streak
            } else {
                self.max_streak
            },
        }
    }

    /// Share of games won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}
