//! Schedule orchestration: first round, next round, and the state transitions that use them.

use crate::logic::ids::IdGenerator;
use crate::logic::round::{generate_round, PLAYERS_PER_MATCH};
use crate::models::{GameMatch, Player, TournamentError, TournamentState};
use rand::Rng;

/// Round 1 for a fresh roster. Empty with fewer than 4 players.
pub fn generate_initial_schedule<R, I>(players: &[Player], rng: &mut R, ids: &mut I) -> Vec<GameMatch>
where
    R: Rng + ?Sized,
    I: IdGenerator + ?Sized,
{
    generate_round(players, &[], 1, rng, ids)
}

/// One past the highest round in `matches` (1 when there are none).
pub fn next_round_number(matches: &[GameMatch]) -> u32 {
    matches.iter().map(|m| m.round).max().unwrap_or(0) + 1
}

/// The round after the latest one in `existing_matches`. Existing matches are not touched.
pub fn generate_next_round<R, I>(
    players: &[Player],
    existing_matches: &[GameMatch],
    rng: &mut R,
    ids: &mut I,
) -> Vec<GameMatch>
where
    R: Rng + ?Sized,
    I: IdGenerator + ?Sized,
{
    generate_round(
        players,
        existing_matches,
        next_round_number(existing_matches),
        rng,
        ids,
    )
}

/// Start the tournament: require 4 players, lock the roster and generate round 1.
pub fn start_tournament<R, I>(
    state: &mut TournamentState,
    rng: &mut R,
    ids: &mut I,
) -> Result<(), TournamentError>
where
    R: Rng + ?Sized,
    I: IdGenerator + ?Sized,
{
    if state.tournament_started {
        return Err(TournamentError::AlreadyStarted);
    }
    if state.players.len() < PLAYERS_PER_MATCH {
        return Err(TournamentError::NotEnoughPlayers);
    }
    state.matches = generate_initial_schedule(&state.players, rng, ids);
    state.tournament_started = true;
    Ok(())
}

/// Append the next round to the match history. Returns how many matches were added.
pub fn add_round<R, I>(
    state: &mut TournamentState,
    rng: &mut R,
    ids: &mut I,
) -> Result<usize, TournamentError>
where
    R: Rng + ?Sized,
    I: IdGenerator + ?Sized,
{
    if !state.tournament_started {
        return Err(TournamentError::NotStarted);
    }
    let new_matches = generate_next_round(&state.players, &state.matches, rng, ids);
    let added = new_matches.len();
    state.matches.extend(new_matches);
    Ok(added)
}
