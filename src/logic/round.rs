//! Round generation: pick who sits out, then split the rest into 2v2 matches
//! that favour partnerships nobody has used yet.

use crate::logic::byes::count_byes;
use crate::logic::ids::IdGenerator;
use crate::logic::partnerships::{partnership_key, team_key, used_partnerships, PartnershipKey};
use crate::models::{GameMatch, Player, Team};
use rand::Rng;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Players per match (2v2).
pub const PLAYERS_PER_MATCH: usize = 4;

/// Score for each team in a candidate split whose partnership is new.
const NOVEL_PARTNERSHIP_SCORE: f64 = 2.0;

/// Upper bound (exclusive) of the random jitter added to every candidate.
const TIEBREAK_JITTER: f64 = 0.5;

/// The three ways to split four players into two teams of two.
const SPLITS: [[usize; 4]; 3] = [[0, 1, 2, 3], [0, 2, 1, 3], [0, 3, 1, 2]];

/// Generate the matches for one round (uncompleted, `round = round_number`).
///
/// 1. Count byes over `existing_matches`.
/// 2. Sort players by bye count, most byes first; ties broken randomly.
/// 3. The first `floor(n / 4) * 4` play, the rest sit out.
/// 4. Fill match slots one at a time: search every 4-subset of the unassigned players
///    and each of its 3 team splits, scoring +2 per novel partnership plus jitter in
///    `[0, 0.5)`, and take the best.
///
/// Returns no matches with fewer than 4 players.
pub fn generate_round<R, I>(
    players: &[Player],
    existing_matches: &[GameMatch],
    round_number: u32,
    rng: &mut R,
    ids: &mut I,
) -> Vec<GameMatch>
where
    R: Rng + ?Sized,
    I: IdGenerator + ?Sized,
{
    if players.len() < PLAYERS_PER_MATCH {
        return Vec::new();
    }

    let playing = select_playing(players, existing_matches, rng);
    let mut ledger = used_partnerships(existing_matches);
    let slots = playing.len() / PLAYERS_PER_MATCH;
    let mut unassigned = playing;
    let mut matches = Vec::with_capacity(slots);
    let mut novel = 0;

    for _ in 0..slots {
        let Some(candidate) = best_split(&unassigned, &ledger, rng) else {
            break;
        };
        unassigned.retain(|p| {
            candidate
                .team1
                .iter()
                .chain(&candidate.team2)
                .all(|taken| taken.id != p.id)
        });

        for team in [&candidate.team1, &candidate.team2] {
            if ledger.insert(team_key(team)) {
                novel += 1;
            }
        }
        matches.push(GameMatch::new(
            ids.next_id(),
            round_number,
            candidate.team1,
            candidate.team2,
        ));
    }

    log::debug!(
        "round {}: {} matches, {} on bye, {} new partnerships",
        round_number,
        matches.len(),
        players.len() - matches.len() * PLAYERS_PER_MATCH,
        novel
    );
    matches
}

/// Players who play this round, in bye-priority order.
fn select_playing<'a, R: Rng + ?Sized>(
    players: &'a [Player],
    existing_matches: &[GameMatch],
    rng: &mut R,
) -> Vec<&'a Player> {
    let byes = count_byes(players, existing_matches);
    let mut with_tiebreak: Vec<(&Player, u32, u32)> = players
        .iter()
        .map(|p| (p, byes.get(&p.id).copied().unwrap_or(0), rng.gen::<u32>()))
        .collect();
    with_tiebreak.sort_by_key(|&(_, byes, tiebreak)| (Reverse(byes), tiebreak));

    let playing_count = players.len() / PLAYERS_PER_MATCH * PLAYERS_PER_MATCH;
    with_tiebreak
        .into_iter()
        .take(playing_count)
        .map(|(p, _, _)| p)
        .collect()
}

/// Best-scoring (subset, split) for one match slot.
struct Candidate {
    team1: Team,
    team2: Team,
}

/// Exhaustive search over 4-subsets of `available` and their 3 splits.
/// None when fewer than 4 players remain.
fn best_split<R: Rng + ?Sized>(
    available: &[&Player],
    ledger: &HashSet<PartnershipKey>,
    rng: &mut R,
) -> Option<Candidate> {
    let n = available.len();
    if n < PLAYERS_PER_MATCH {
        return None;
    }

    let mut best: Option<(f64, [&Player; 4])> = None;
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for l in k + 1..n {
                    let four = [available[i], available[j], available[k], available[l]];
                    for split in SPLITS {
                        let ordered = split.map(|idx| four[idx]);
                        let score =
                            split_score(&ordered, ledger) + rng.gen_range(0.0..TIEBREAK_JITTER);
                        if best.as_ref().map_or(true, |(top, _)| score > *top) {
                            best = Some((score, ordered));
                        }
                    }
                }
            }
        }
    }

    best.map(|(_, [a, b, c, d])| Candidate {
        team1: [a.clone(), b.clone()],
        team2: [c.clone(), d.clone()],
    })
}

/// `[a, b, c, d]` means team `a, b` against team `c, d`.
fn split_score(ordered: &[&Player; 4], ledger: &HashSet<PartnershipKey>) -> f64 {
    let [a, b, c, d] = ordered;
    [(a, b), (c, d)]
        .into_iter()
        .filter(|(x, y)| !ledger.contains(&partnership_key(&x.id, &y.id)))
        .count() as f64
        * NOVEL_PARTNERSHIP_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: usize) -> Vec<Player> {
        (0..n).map(|i| Player::new(format!("p{i}"), format!("P{i}"))).collect()
    }

    #[test]
    fn split_score_counts_novel_partnerships() {
        let ps = players(4);
        let refs = [&ps[0], &ps[1], &ps[2], &ps[3]];
        let mut ledger = HashSet::new();
        assert_eq!(split_score(&refs, &ledger), 4.0);
        ledger.insert(partnership_key("p1", "p0"));
        assert_eq!(split_score(&refs, &ledger), 2.0);
        ledger.insert(partnership_key("p2", "p3"));
        assert_eq!(split_score(&refs, &ledger), 0.0);
    }

    #[test]
    fn best_split_needs_four_players() {
        let ps = players(3);
        let refs: Vec<&Player> = ps.iter().collect();
        let mut rng = rand::thread_rng();
        assert!(best_split(&refs, &HashSet::new(), &mut rng).is_none());
    }
}
