//! Single binary web server: JSON API over the debate round engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Game timing comes from DEBATE_SECONDS, ROLL_STEPS, ROLL_INTERVAL_MS, VICTORY_THRESHOLD.

use actix_web::{
    get, post,
    web::{Bytes, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use debate_party::{
    Effect, GameConfig, GameError, Intent, RollOutcome, Table, ThreadRandom, TickOutcome,
    TimerKey,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use uuid::Uuid;

type TableId = Uuid;

/// Per-table entry: table state + last activity time (for auto-cleanup).
struct TableEntry {
    table: Table,
    last_activity: Instant,
}

type Tables = Arc<RwLock<HashMap<TableId, TableEntry>>>;

/// In-memory state: many tables by ID. Entries are removed after 12h inactivity.
struct AppState {
    tables: Tables,
    config: GameConfig,
}

/// Inactivity threshold: tables not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct CreatedTable {
    id: TableId,
    default_victory_threshold: u32,
    snapshot: debate_party::Snapshot,
}

#[derive(Serialize)]
struct ImportResponse {
    added: usize,
    snapshot: debate_party::Snapshot,
}

/// Path segment: table id (e.g. /api/tables/{id})
#[derive(Deserialize)]
struct TablePath {
    id: TableId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No table" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn rejected(e: GameError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "debate-party",
    })
}

/// Create a new table on the menu (client stores the id for subsequent requests).
#[post("/api/tables")]
async fn api_create_table(state: Data<AppState>) -> HttpResponse {
    let table = Table::new(state.config);
    let id = Uuid::new_v4();
    let body = CreatedTable {
        id,
        default_victory_threshold: state.config.default_victory_threshold,
        snapshot: table.snapshot(),
    };
    let mut g = match state.tables.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.insert(
        id,
        TableEntry {
            table,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(body)
}

/// Current snapshot of a table (404 if not found). Touching it refreshes last_activity.
#[get("/api/tables/{id}")]
async fn api_get_table(state: Data<AppState>, path: Path<TablePath>) -> HttpResponse {
    let mut g = match state.tables.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.table.snapshot())
        }
        None => not_found(),
    }
}

/// Apply one intent and return the new snapshot. Schedules the ticker or roll task it asks for.
#[post("/api/tables/{id}/intents")]
async fn api_dispatch(
    state: Data<AppState>,
    path: Path<TablePath>,
    body: Json<Intent>,
) -> HttpResponse {
    let (effect, snapshot) = {
        let mut g = match state.tables.write() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        let entry = match g.get_mut(&path.id) {
            Some(e) => e,
            None => return not_found(),
        };
        entry.last_activity = Instant::now();
        match entry.table.dispatch(body.into_inner(), &mut ThreadRandom) {
            Ok(effect) => (effect, entry.table.snapshot()),
            Err(e) => return rejected(e),
        }
    };
    match effect {
        Effect::StartTicker(key) => spawn_ticker(state.tables.clone(), path.id, key),
        Effect::StartRoll(key) => {
            let interval = Duration::from_millis(state.config.roll_interval_ms);
            spawn_roll(state.tables.clone(), path.id, key, interval)
        }
        Effect::None => {}
    }
    HttpResponse::Ok().json(snapshot)
}

/// Import custom topics from a headerless CSV body (first column). Menu only.
#[post("/api/tables/{id}/topics/import")]
async fn api_import_topics(
    state: Data<AppState>,
    path: Path<TablePath>,
    body: Bytes,
) -> HttpResponse {
    let mut g = match state.tables.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let table = &mut entry.table;
    match table.import_topics(body.as_ref()) {
        Ok(added) => {
            log::debug!("Import into table {} added {}", path.id, added);
            HttpResponse::Ok().json(ImportResponse {
                added,
                snapshot: table.snapshot(),
            })
        }
        Err(e) => rejected(e),
    }
}

/// Tick the debate clock once per second until the key goes stale.
/// Phase change, return to menu and table removal all make it stale.
fn spawn_ticker(tables: Tables, id: TableId, key: TimerKey) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.tick().await;
        loop {
            interval.tick().await;
            let outcome = match tables.write() {
                Ok(mut g) => match g.get_mut(&id) {
                    Some(entry) => entry.table.tick(key),
                    None => TickOutcome::Stale,
                },
                Err(_) => TickOutcome::Stale,
            };
            match outcome {
                TickOutcome::Stale => break,
                TickOutcome::Ticked(0) => log::debug!("Debate clock ran out on table {}", id),
                _ => {}
            }
        }
    });
}

/// Step the criterion roll animation until it settles or the key goes stale.
fn spawn_roll(tables: Tables, id: TableId, key: TimerKey, every: Duration) {
    actix_web::rt::spawn(async move {
        loop {
            tokio::time::sleep(every).await;
            let outcome = match tables.write() {
                Ok(mut g) => match g.get_mut(&id) {
                    Some(entry) => entry.table.advance_roll(key, &mut ThreadRandom),
                    None => RollOutcome::Stale,
                },
                Err(_) => RollOutcome::Stale,
            };
            match outcome {
                RollOutcome::Rolling(_) => continue,
                RollOutcome::Settled(c) => {
                    log::debug!("Table {} rolled {}", id, c.label());
                    break;
                }
                RollOutcome::Stale => break,
            }
        }
    });
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    let config = GameConfig::from_env();
    log::info!("Starting server at http://{}:{} with {:?}", bind.0, bind.1, config);

    let tables: Tables = Arc::new(RwLock::new(HashMap::new()));
    let state = Data::new(AppState {
        tables: tables.clone(),
        config,
    });

    // Background task: every 30 minutes, remove tables inactive for 12+ hours
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match tables.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive table(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_table)
            .service(api_get_table)
            .service(api_dispatch)
            .service(api_import_topics)
    })
    .bind(bind)?
    .run()
    .await
}
