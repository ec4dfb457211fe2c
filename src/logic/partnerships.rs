//! Partnership ledger: which pairs of players have already been teammates.

use crate::models::{GameMatch, Team};
use std::collections::HashSet;

/// Order-independent key for two teammates: the ids sorted and joined with `-`.
pub type PartnershipKey = String;

pub fn partnership_key(a: &str, b: &str) -> PartnershipKey {
    if a <= b {
        format!("{}-{}", a, b)
    } else {
        format!("{}-{}", b, a)
    }
}

pub fn team_key(team: &Team) -> PartnershipKey {
    partnership_key(&team[0].id, &team[1].id)
}

/// Every partnership used by a team in `matches` (played or not).
pub fn used_partnerships(matches: &[GameMatch]) -> HashSet<PartnershipKey> {
    matches
        .iter()
        .flat_map(|m| [team_key(&m.team1), team_key(&m.team2)])
        .collect()
}
