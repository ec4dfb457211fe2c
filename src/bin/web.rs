//! Single binary web server: REST API over the round robin state, saved to a JSON file.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, DATA_DIR.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use pickleball_round_robin::{
    add_round, parse_player_names, standings_to_csv, start_tournament, GameMatch, Player,
    RandomIds, ServerConfig, TournamentError, TournamentService, TournamentState, TournamentStore,
    UpdateError,
};
use serde::{Deserialize, Serialize};

/// Shared state: the one tournament plus where it is saved.
type AppState = Data<TournamentService>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ScoreBody {
    score1: u32,
    score2: u32,
}

/// Path segment: player id (e.g. /api/tournament/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: String,
}

/// Path segment: match id (e.g. /api/tournament/matches/{match_id}/score)
#[derive(Deserialize)]
struct MatchPath {
    match_id: String,
}

/// One round as the schedule view shows it.
#[derive(Serialize)]
struct RoundView<'a> {
    round: u32,
    matches: Vec<&'a GameMatch>,
    completed: usize,
    total: usize,
    on_bye: Vec<&'a Player>,
}

fn error_response(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn update_response(result: Result<TournamentState, UpdateError>) -> HttpResponse {
    match result {
        Ok(t) => HttpResponse::Ok().json(&t),
        Err(UpdateError::Tournament(e)) => error_response(e),
        Err(UpdateError::Store(e)) => {
            log::error!("Failed to persist tournament: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Run `f` against the tournament; it only takes effect once saved.
async fn apply<F>(state: &TournamentService, f: F) -> HttpResponse
where
    F: FnOnce(&mut TournamentState) -> Result<(), TournamentError>,
{
    update_response(state.update(f).await)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pickleball-round-robin",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full tournament state.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.snapshot().await)
}

/// Add a player (before start).
#[post("/api/tournament/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    apply(&state, |t| t.add_player(&body.name, &mut RandomIds).map(|_| ())).await
}

/// Add players from CSV, one name per row. All or nothing.
#[post("/api/tournament/players/import")]
async fn api_import_players(state: AppState, body: String) -> HttpResponse {
    let names = match parse_player_names(&body) {
        Ok(names) => names,
        Err(e) => return error_response(e),
    };
    apply(&state, |t| {
        for name in &names {
            t.add_player(name, &mut RandomIds)?;
        }
        log::info!("Imported {} players", names.len());
        Ok(())
    })
    .await
}

/// Remove a player by id (before start).
#[delete("/api/tournament/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    apply(&state, |t| t.remove_player(&path.player_id)).await
}

/// Start the tournament and generate round 1.
#[post("/api/tournament/start")]
async fn api_start_tournament(state: AppState) -> HttpResponse {
    apply(&state, |t| {
        start_tournament(t, &mut rand::thread_rng(), &mut RandomIds)?;
        log::info!("Tournament started with {} players", t.players.len());
        Ok(())
    })
    .await
}

/// Generate and append the next round.
#[post("/api/tournament/rounds")]
async fn api_add_round(state: AppState) -> HttpResponse {
    apply(&state, |t| {
        let added = add_round(t, &mut rand::thread_rng(), &mut RandomIds)?;
        log::info!("Added round with {} matches", added);
        Ok(())
    })
    .await
}

/// Rounds with their matches, progress, and who sits out.
#[get("/api/tournament/rounds")]
async fn api_get_rounds(state: AppState) -> HttpResponse {
    let body = state
        .read(|t| {
            let rounds: Vec<RoundView> = t
                .round_numbers()
                .into_iter()
                .map(|round| {
                    let matches: Vec<&GameMatch> = t.matches_in_round(round).collect();
                    RoundView {
                        round,
                        completed: matches.iter().filter(|m| m.completed).count(),
                        total: matches.len(),
                        matches,
                        on_bye: t.players_on_bye(round),
                    }
                })
                .collect();
            serde_json::json!({
                "rounds": rounds,
                "completed": t.completed_match_count(),
                "total": t.matches.len(),
            })
        })
        .await;
    HttpResponse::Ok().json(body)
}

/// Record or correct a match score.
#[put("/api/tournament/matches/{match_id}/score")]
async fn api_record_score(state: AppState, path: Path<MatchPath>, body: Json<ScoreBody>) -> HttpResponse {
    apply(&state, |t| {
        if !t.tournament_started {
            return Err(TournamentError::NotStarted);
        }
        t.record_score(&path.match_id, body.score1, body.score2)
    })
    .await
}

/// Ranked standings.
#[get("/api/tournament/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.read(|t| t.standings()).await)
}

/// Ranked standings as a CSV download.
#[get("/api/tournament/standings.csv")]
async fn api_standings_csv(state: AppState) -> HttpResponse {
    let standings = state.read(|t| t.standings()).await;
    match standings_to_csv(&standings) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"standings.csv\""))
            .body(bytes),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reset everything: roster, matches and the saved file.
#[post("/api/tournament/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let result = state.reset().await;
    if result.is_ok() {
        log::info!("Tournament reset");
    }
    update_response(result)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let service = TournamentService::open(TournamentStore::new(&config.data_dir)).await;
    let loaded = service.snapshot().await;
    log::info!(
        "Loaded tournament from {} ({} players, {} matches)",
        service.store().path().display(),
        loaded.players.len(),
        loaded.matches.len()
    );

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(service);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_get_tournament)
            .service(api_import_players)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_start_tournament)
            .service(api_add_round)
            .service(api_get_rounds)
            .service(api_record_score)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_reset)
    })
    .bind(bind)?
    .run()
    .await
}
