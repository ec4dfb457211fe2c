//! Match (game) and Side for 2v2 doubles.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match.
pub type MatchId = String;

/// Two players sharing a side of the net.
pub type Team = [Player; 2];

/// Which side of a match a player is on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    One,
    Two,
}

/// A single 2v2 match. Scores are set together when the result is recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// Round number, starting at 1.
    pub round: u32,
    pub team1: Team,
    pub team2: Team,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score1: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score2: Option<u32>,
    pub completed: bool,
}

impl GameMatch {
    /// New, unplayed match.
    pub fn new(id: impl Into<MatchId>, round: u32, team1: Team, team2: Team) -> Self {
        Self {
            id: id.into(),
            round,
            team1,
            team2,
            score1: None,
            score2: None,
            completed: false,
        }
    }

    /// Set both scores and mark the match completed.
    pub fn record_score(&mut self, score1: u32, score2: u32) {
        self.score1 = Some(score1);
        self.score2 = Some(score2);
        self.completed = true;
    }

    /// `(score1, score2)` if the match is completed with both scores present.
    pub fn result(&self) -> Option<(u32, u32)> {
        if !self.completed {
            return None;
        }
        Some((self.score1?, self.score2?))
    }

    /// Winning side, or None if unplayed or level.
    pub fn winner(&self) -> Option<Side> {
        let (s1, s2) = self.result()?;
        match s1.cmp(&s2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::One => &self.team1,
            Side::Two => &self.team2,
        }
    }

    /// Side the given player is on, if they are in this match.
    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        if self.team1.iter().any(|p| p.id == player_id) {
            Some(Side::One)
        } else if self.team2.iter().any(|p| p.id == player_id) {
            Some(Side::Two)
        } else {
            None
        }
    }

    /// All four players, team1 first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team1.iter().chain(self.team2.iter())
    }

    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.players().map(|p| &p.id)
    }

    /// True when the four players are pairwise distinct.
    pub fn has_distinct_players(&self) -> bool {
        let ids: Vec<&PlayerId> = self.player_ids().collect();
        ids.iter()
            .enumerate()
            .all(|(i, a)| ids[i + 1..].iter().all(|b| a != b))
    }
}
