//! Standings: per-player records from completed matches, ranked with head-to-head tiebreaks.

use crate::models::{GameMatch, Player, PlayerStanding, Side};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Direct meetings between two players, from the first player's point of view.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeadToHead {
    /// Meetings the first player won.
    pub wins: u32,
    /// Meetings the second player won.
    pub losses: u32,
    /// Sum of (own score - opposing score) over the meetings.
    pub point_diff: i64,
}

/// Compare `a` and `b` over completed matches where they were on opposite teams.
pub fn head_to_head(a: &str, b: &str, matches: &[GameMatch]) -> HeadToHead {
    let mut h2h = HeadToHead::default();
    for m in matches {
        let Some((s1, s2)) = m.result() else {
            continue;
        };
        let (Some(side_a), Some(side_b)) = (m.side_of(a), m.side_of(b)) else {
            continue;
        };
        if side_a == side_b {
            continue;
        }
        let (own, opp) = if side_a == Side::One {
            (s1, s2)
        } else {
            (s2, s1)
        };
        match m.winner() {
            Some(side) if side == side_a => h2h.wins += 1,
            Some(_) => h2h.losses += 1,
            None => {}
        }
        h2h.point_diff += i64::from(own) - i64::from(opp);
    }
    h2h
}

/// Ranked standings, one entry per roster player.
///
/// Order: wins, head-to-head wins, point differential, head-to-head point
/// differential, points for. Level scores count as neither a win nor a loss.
pub fn compute_standings(players: &[Player], matches: &[GameMatch]) -> Vec<PlayerStanding> {
    let mut standings: Vec<PlayerStanding> =
        players.iter().cloned().map(PlayerStanding::new).collect();
    let index: HashMap<&str, usize> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.as_str(), i))
        .collect();

    for m in matches {
        let Some((s1, s2)) = m.result() else {
            continue;
        };
        for (side, own, opp) in [(Side::One, s1, s2), (Side::Two, s2, s1)] {
            for p in m.team(side) {
                if let Some(&i) = index.get(p.id.as_str()) {
                    standings[i].add_game(own, opp);
                }
            }
        }
    }

    for s in &mut standings {
        s.finalize();
    }

    rank(&mut standings, |a, b| compare(a, b, matches));
    standings
}

/// `Less` when `a` ranks above `b`.
fn compare(a: &PlayerStanding, b: &PlayerStanding, matches: &[GameMatch]) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| {
        let h2h = head_to_head(&a.player.id, &b.player.id, matches);
        h2h.losses
            .cmp(&h2h.wins)
            .then_with(|| b.point_diff.cmp(&a.point_diff))
            .then_with(|| 0.cmp(&h2h.point_diff))
            .then_with(|| b.points_for.cmp(&a.points_for))
    })
}

/// Stable insertion sort. Head-to-head cycles make `compare` non-transitive, which
/// `slice::sort_by` is allowed to panic on.
fn rank<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_is_stable_for_equal_keys() {
        let mut items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        rank(&mut items, |x, y| x.0.cmp(&y.0));
        assert_eq!(items, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn rank_tolerates_cyclic_comparator() {
        // rock < paper < scissors < rock
        let beats = |x: &u8, y: &u8| (x + 1) % 3 == *y;
        let mut items = vec![0u8, 1, 2];
        rank(&mut items, |x, y| {
            if beats(x, y) {
                Ordering::Less
            } else if beats(y, x) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        assert_eq!(items.len(), 3);
    }
}
