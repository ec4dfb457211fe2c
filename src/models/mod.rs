//! Data structures for the round robin: players, matches, standings, tournament state.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, Side, Team};
pub use player::{Player, PlayerId, PlayerStanding};
pub use tournament::{TournamentError, TournamentState, MAX_SCORE};
