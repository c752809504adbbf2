//! Store diagnostics endpoint
//!
//! Reports backend and database status for quick manual checks. The
//! endpoint never fails: every error along the way is captured into the
//! response body as a status string.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Collection names are truncated to this many entries in the response
const MAX_COLLECTIONS: usize = 10;

/// Driver error messages are truncated to this many characters
const MAX_ERROR_LEN: usize = 50;

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    backend: String,
    database: String,
    database_url: String,
    database_name: String,
    connection_status: String,
    collections: Vec<String>,
}

/// Create the diagnostics router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(run_diagnostics))
        .with_state(state)
}

/// Check whether the database is available and accessible
///
/// Always returns 200; store problems show up as status strings.
async fn run_diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut database = "❌ Not Available".to_string();
    let mut connection_status = "Not Connected".to_string();
    let mut collections = Vec::new();

    if let Some(ref db) = state.db {
        database = "✅ Available".to_string();
        connection_status = "Connected".to_string();

        match db.list_collection_names().await {
            Ok(names) => {
                collections = names.into_iter().take(MAX_COLLECTIONS).collect();
                database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate(&e.to_string(), MAX_ERROR_LEN)
                );
            }
        }
    }

    // Env presence is checked at request time, not from the cached config.
    Json(DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database,
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status,
        collections,
    })
}

fn env_presence(key: &str) -> String {
    if std::env::var(key).is_ok() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
