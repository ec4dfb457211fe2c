//! Bye tracking: how many rounds each player has sat out.

use crate::models::{GameMatch, Player, PlayerId};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Count byes per roster player over every round present in `matches`.
///
/// A player is credited one bye for each round in which they appear in no match.
/// Ids in matches that are not on the roster are ignored.
pub fn count_byes(players: &[Player], matches: &[GameMatch]) -> HashMap<PlayerId, u32> {
    let mut playing_by_round: BTreeMap<u32, HashSet<&str>> = BTreeMap::new();
    for m in matches {
        playing_by_round
            .entry(m.round)
            .or_default()
            .extend(m.player_ids().map(String::as_str));
    }

    players
        .iter()
        .map(|p| {
            let byes = playing_by_round
                .values()
                .filter(|playing| !playing.contains(p.id.as_str()))
                .count() as u32;
            (p.id.clone(), byes)
        })
        .collect()
}
