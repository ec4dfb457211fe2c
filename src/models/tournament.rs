//! TournamentState and TournamentError.

use crate::logic::{compute_standings, IdGenerator};
use crate::models::game::{GameMatch, MatchId};
use crate::models::player::{Player, PlayerId, PlayerStanding};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Highest score accepted for one side of a match.
pub const MAX_SCORE: u32 = 999;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Not enough players to start (need at least 4).
    NotEnoughPlayers,
    /// The roster is locked once the first round has been generated.
    AlreadyStarted,
    /// Rounds and scores need a started tournament.
    NotStarted,
    /// Player name was empty after trimming.
    EmptyPlayerName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    PlayerNotFound(PlayerId),
    MatchNotFound(MatchId),
    /// A score above [`MAX_SCORE`].
    InvalidScore(u32),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEnoughPlayers => write!(f, "Need at least 4 players to start"),
            TournamentError::AlreadyStarted => write!(f, "Tournament has already started"),
            TournamentError::NotStarted => write!(f, "Tournament has not started yet"),
            TournamentError::EmptyPlayerName => write!(f, "Player name cannot be empty"),
            TournamentError::DuplicatePlayerName => write!(f, "A player with this name already exists"),
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::InvalidScore(score) => {
                write!(f, "Score {} is out of range (0 to {})", score, MAX_SCORE)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Full tournament state: roster, every match generated so far, and whether play has begun.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentState {
    pub players: Vec<Player>,
    /// Match history across all rounds, in generation order.
    pub matches: Vec<GameMatch>,
    #[serde(default)]
    pub tournament_started: bool,
}

impl TournamentState {
    /// Empty roster, no matches, not started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with an initial roster (still not started).
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::new()
        }
    }

    pub fn get_player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_match(&self, id: &str) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Add a player before the tournament starts. Names must be unique (case-insensitive).
    pub fn add_player(
        &mut self,
        name: impl AsRef<str>,
        ids: &mut impl IdGenerator,
    ) -> Result<PlayerId, TournamentError> {
        if self.tournament_started {
            return Err(TournamentError::AlreadyStarted);
        }
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let folded = name.to_lowercase();
        if self.players.iter().any(|p| p.name.to_lowercase() == folded) {
            return Err(TournamentError::DuplicatePlayerName);
        }
        let id = ids.next_id();
        self.players.push(Player::new(id.clone(), name));
        Ok(id)
    }

    /// Remove a player by id (only before the tournament starts).
    pub fn remove_player(&mut self, player_id: &str) -> Result<(), TournamentError> {
        if self.tournament_started {
            return Err(TournamentError::AlreadyStarted);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| TournamentError::PlayerNotFound(player_id.to_string()))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Record (or correct) a match score: sets both scores and marks it completed.
    /// Scores above [`MAX_SCORE`] are rejected and leave the match untouched.
    pub fn record_score(
        &mut self,
        match_id: &str,
        score1: u32,
        score2: u32,
    ) -> Result<(), TournamentError> {
        if let Some(&bad) = [score1, score2].iter().find(|&&s| s > MAX_SCORE) {
            return Err(TournamentError::InvalidScore(bad));
        }
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
        m.record_score(score1, score2);
        Ok(())
    }

    /// Back to the empty initial state. Scores, matches and roster are all dropped.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current ranked standings, recomputed from the match list.
    pub fn standings(&self) -> Vec<PlayerStanding> {
        compute_standings(&self.players, &self.matches)
    }

    /// Distinct round numbers present in the match list, ascending.
    pub fn round_numbers(&self) -> Vec<u32> {
        self.matches
            .iter()
            .map(|m| m.round)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn matches_in_round(&self, round: u32) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    /// Roster players not in any match of the given round.
    pub fn players_on_bye(&self, round: u32) -> Vec<&Player> {
        let playing: HashSet<&PlayerId> = self
            .matches_in_round(round)
            .flat_map(|m| m.player_ids())
            .collect();
        self.players
            .iter()
            .filter(|p| !playing.contains(&p.id))
            .collect()
    }

    pub fn completed_match_count(&self) -> usize {
        self.matches.iter().filter(|m| m.completed).count()
    }
}
