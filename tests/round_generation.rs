//! Integration tests for round generation: match counts, byes, partnership variety.

use pickleball_round_robin::{
    count_byes, generate_initial_schedule, generate_next_round, generate_round, next_round_number,
    partnership_key, used_partnerships, GameMatch, Player, SequentialIds,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("p{i}"), format!("P{i}"))).collect()
}

fn assert_distinct_players(m: &GameMatch) {
    let ids: HashSet<&String> = m.player_ids().collect();
    assert_eq!(ids.len(), 4, "match {} repeats a player", m.id);
    assert!(m.has_distinct_players());
}

#[test]
fn fewer_than_four_players_gives_no_matches() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut ids = SequentialIds::new("m");
    for n in 0..4 {
        assert!(generate_initial_schedule(&roster(n), &mut rng, &mut ids).is_empty());
    }
}

#[test]
fn initial_schedule_has_floor_n_over_4_matches() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut ids = SequentialIds::new("m");
    for n in 4..=17 {
        let players = roster(n);
        let matches = generate_initial_schedule(&players, &mut rng, &mut ids);
        assert_eq!(matches.len(), n / 4, "n = {n}");

        let mut seen = HashSet::new();
        for m in &matches {
            assert_distinct_players(m);
            assert_eq!(m.round, 1);
            assert!(!m.completed);
            assert_eq!(m.score1, None);
            assert_eq!(m.score2, None);
            for id in m.player_ids() {
                assert!(seen.insert(id.clone()), "{id} plays twice in one round");
            }
        }
    }
}

#[test]
fn four_players_make_one_full_match() {
    let players = roster(4);
    let mut rng = StdRng::seed_from_u64(3);
    let mut ids = SequentialIds::new("m");
    let matches = generate_initial_schedule(&players, &mut rng, &mut ids);
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.id, "m1");
    assert_eq!(m.round, 1);
    assert!(!m.completed);
    let ids: HashSet<&String> = m.player_ids().collect();
    let expected: HashSet<&String> = players.iter().map(|p| &p.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn next_round_number_follows_highest_round() {
    assert_eq!(next_round_number(&[]), 1);
    let players = roster(8);
    let mut rng = StdRng::seed_from_u64(11);
    let mut ids = SequentialIds::new("m");
    let mut history = generate_round(&players, &[], 3, &mut rng, &mut ids);
    assert_eq!(next_round_number(&history), 4);

    let next = generate_next_round(&players, &history, &mut rng, &mut ids);
    assert!(next.iter().all(|m| m.round == 4));
    history.extend(next);
    assert_eq!(next_round_number(&history), 5);
}

#[test]
fn generation_does_not_touch_existing_matches() {
    let players = roster(9);
    let mut rng = StdRng::seed_from_u64(5);
    let mut ids = SequentialIds::new("m");
    let history = generate_initial_schedule(&players, &mut rng, &mut ids);
    let before = history.clone();
    let _ = generate_next_round(&players, &history, &mut rng, &mut ids);
    assert_eq!(history, before);
}

#[test]
fn eight_players_two_rounds_no_repeat_partners_and_no_byes() {
    let players = roster(8);
    let mut rng = StdRng::seed_from_u64(42);
    let mut ids = SequentialIds::new("m");

    let round1 = generate_initial_schedule(&players, &mut rng, &mut ids);
    let round2 = generate_next_round(&players, &round1, &mut rng, &mut ids);
    assert_eq!(round1.len(), 2);
    assert_eq!(round2.len(), 2);

    let first = used_partnerships(&round1);
    let second = used_partnerships(&round2);
    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 4);
    assert!(first.is_disjoint(&second));

    let mut history = round1;
    history.extend(round2);
    let byes = count_byes(&players, &history);
    assert_eq!(byes.len(), 8);
    assert!(byes.values().all(|&b| b == 0));
}

#[test]
fn byes_spread_evenly_across_rounds() {
    for n in [5usize, 6, 7, 9, 10, 11] {
        let players = roster(n);
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut ids = SequentialIds::new("m");
        let mut history: Vec<GameMatch> = Vec::new();

        for _ in 0..(2 * n) {
            let round = generate_next_round(&players, &history, &mut rng, &mut ids);
            assert_eq!(round.len(), n / 4);
            history.extend(round);

            let byes = count_byes(&players, &history);
            let max = byes.values().copied().max().unwrap();
            let min = byes.values().copied().min().unwrap();
            assert!(max - min <= 1, "n = {n}: byes {byes:?}");
        }
    }
}

#[test]
fn five_players_each_sit_out_once_in_five_rounds() {
    let players = roster(5);
    let mut rng = StdRng::seed_from_u64(99);
    let mut ids = SequentialIds::new("m");
    let mut history = Vec::new();
    for _ in 0..5 {
        let round = generate_next_round(&players, &history, &mut rng, &mut ids);
        history.extend(round);
    }
    let byes = count_byes(&players, &history);
    assert!(byes.values().all(|&b| b == 1), "{byes:?}");
}

#[test]
fn count_byes_empty_history_is_all_zero() {
    let players = roster(6);
    let byes = count_byes(&players, &[]);
    assert_eq!(byes.len(), 6);
    assert!(byes.values().all(|&b| b == 0));
}

#[test]
fn count_byes_credits_absent_players_per_round() {
    let p = roster(6);
    let team = |a: usize, b: usize| [p[a].clone(), p[b].clone()];
    let history = vec![
        GameMatch::new("m1", 1, team(0, 1), team(2, 3)),
        GameMatch::new("m2", 2, team(0, 4), team(1, 5)),
        GameMatch::new("m3", 3, team(2, 4), team(3, 5)),
    ];
    let byes = count_byes(&p, &history);
    assert_eq!(byes["p0"], 1);
    assert_eq!(byes["p1"], 1);
    assert_eq!(byes["p2"], 1);
    assert_eq!(byes["p3"], 1);
    assert_eq!(byes["p4"], 1);
    assert_eq!(byes["p5"], 1);
}

#[test]
fn partnership_keys_ignore_order() {
    assert_eq!(partnership_key("b", "a"), partnership_key("a", "b"));
    let p = roster(4);
    let m = GameMatch::new(
        "m1",
        1,
        [p[1].clone(), p[0].clone()],
        [p[2].clone(), p[3].clone()],
    );
    let used = used_partnerships(&[m]);
    assert!(used.contains(&partnership_key("p0", "p1")));
    assert!(used.contains(&partnership_key("p3", "p2")));
    assert!(!used.contains(&partnership_key("p0", "p2")));
}

#[test]
fn seeded_generation_is_reproducible() {
    let players = roster(10);
    let a = generate_initial_schedule(&players, &mut StdRng::seed_from_u64(8), &mut SequentialIds::new("m"));
    let b = generate_initial_schedule(&players, &mut StdRng::seed_from_u64(8), &mut SequentialIds::new("m"));
    assert_eq!(a, b);
}
