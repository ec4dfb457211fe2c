//! CSV standings export and roster import.

use crate::models::PlayerStanding;
use serde::Serialize;

#[derive(Serialize)]
struct StandingRow<'a> {
    rank: usize,
    name: &'a str,
    wins: u32,
    losses: u32,
    points_for: u64,
    points_against: u64,
    point_diff: i64,
    games_played: u32,
    apd: f64,
    win_pct: u32,
}

/// Ranked standings as CSV with a header row. Rank is 1-based position.
pub fn standings_to_csv(standings: &[PlayerStanding]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for (i, s) in standings.iter().enumerate() {
        wtr.serialize(StandingRow {
            rank: i + 1,
            name: &s.player.name,
            wins: s.wins,
            losses: s.losses,
            points_for: s.points_for,
            points_against: s.points_against,
            point_diff: s.point_diff,
            games_played: s.games_played,
            apd: s.apd,
            win_pct: s.win_pct,
        })?;
    }
    wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

/// Player names from the first column of header-less CSV. Blank names are skipped.
pub fn parse_player_names(input: &str) -> Result<Vec<String>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());
    let mut names = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(name) = record.get(0).filter(|n| !n.is_empty()) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
