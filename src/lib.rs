//! Pickleball round robin: library with models, scheduling logic, standings and storage.

pub mod config;
pub mod csv_io;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::ServerConfig;
pub use csv_io::{parse_player_names, standings_to_csv};
pub use logic::{
    add_round, compute_standings, count_byes, generate_initial_schedule, generate_next_round,
    generate_round, head_to_head, next_round_number, partnership_key, start_tournament,
    used_partnerships, HeadToHead, IdGenerator, RandomIds, SequentialIds,
};
pub use models::{
    GameMatch, MatchId, Player, PlayerId, PlayerStanding, Side, Team, TournamentError,
    TournamentState, MAX_SCORE,
};
pub use service::{TournamentService, UpdateError};
pub use store::{StoreError, TournamentStore, STORAGE_KEY};
