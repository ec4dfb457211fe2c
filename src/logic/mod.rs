//! Round robin logic: ids, bye tracking, partnerships, round generation, standings.

mod byes;
mod ids;
mod partnerships;
mod round;
mod schedule;
mod standings;

pub use byes::count_byes;
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use partnerships::{partnership_key, team_key, used_partnerships, PartnershipKey};
pub use round::{generate_round, PLAYERS_PER_MATCH};
pub use schedule::{
    add_round, generate_initial_schedule, generate_next_round, next_round_number, start_tournament,
};
pub use standings::{compute_standings, head_to_head, HeadToHead};
