use axum::extract::{Query, State};
use axum::response::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::suggest::Suggestion;

use super::state::AppState;

// ─── GET /suggestions ────────────────────────────────────────────

/// Query parameters. Unknown keys are ignored and a repeated key keeps its
/// first value.
#[derive(Debug, Default, PartialEq)]
pub struct SuggestQuery {
    pub q: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl SuggestQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut query.q,
                "latitude" => &mut query.latitude,
                "longitude" => &mut query.longitude,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SuggestionsResponse> {
    let start = Instant::now();
    let params = SuggestQuery::from_pairs(pairs);

    let term = params.q.as_deref().unwrap_or("");
    let suggestions = state.engine.suggest(
        term,
        params.latitude.as_deref().unwrap_or(""),
        params.longitude.as_deref().unwrap_or(""),
    );

    let elapsed = start.elapsed();
    eprintln!("[{}] {}",
        Utc::now().format("%H:%M:%S"),
        request_line(term, suggestions.len(), elapsed.as_secs_f64() * 1000.0),
    );

    Json(SuggestionsResponse { suggestions })
}

/// The term is Debug-formatted so control characters stay on one line.
fn request_line(term: &str, results: usize, millis: f64) -> String {
    format!("GET /suggestions?q={:?} -> {} results ({:.1}ms)", term, results, millis)
}
