//! Player and PlayerStanding data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = String;

/// A player on the roster. Identity is the id; names are for display only.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player with an already-generated id.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Derived per-player record. Recomputed from the match list on every request, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStanding {
    pub player: Player,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u64,
    pub points_against: u64,
    pub point_diff: i64,
    pub games_played: u32,
    /// Average point differential, rounded to 2 decimals (0 with no games).
    pub apd: f64,
    /// Whole-number win percentage (0 with no games).
    pub win_pct: u32,
}

impl PlayerStanding {
    /// Empty record for a player who has not played yet.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            point_diff: 0,
            games_played: 0,
            apd: 0.0,
            win_pct: 0,
        }
    }

    /// Record one game: own team's score, opponent's score.
    pub fn add_game(&mut self, own: u32, opponent: u32) {
        self.games_played += 1;
        self.points_for += u64::from(own);
        self.points_against += u64::from(opponent);
        if own > opponent {
            self.wins += 1;
        } else if opponent > own {
            self.losses += 1;
        }
    }

    /// Fill in point_diff, apd and win_pct from the raw counters.
    pub fn finalize(&mut self) {
        // Totals are sums of u32 scores, far below i64::MAX.
        self.point_diff = self.points_for as i64 - self.points_against as i64;
        if self.games_played == 0 {
            self.apd = 0.0;
            self.win_pct = 0;
            return;
        }
        let games = f64::from(self.games_played);
        self.apd = (self.point_diff as f64 / games * 100.0).round() / 100.0;
        self.win_pct = (100.0 * f64::from(self.wins) / games).round() as u32;
    }
}
