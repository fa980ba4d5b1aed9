//! JSON matching endpoint — exercises the core pipeline without any remote
//! call. The skills field accepts the same loose shapes as every other
//! boundary: a comma-delimited string or a list of strings.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::normalize::{normalize, RawSkills};
use crate::matching::MatchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub skills: Value,
    #[serde(default)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    /// The query as the normalizer canonicalized it.
    pub query_skills: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub matches: Vec<MatchResult>,
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let raw = RawSkills::from_json(&req.skills)?;
    let top_n = req.top_n.unwrap_or(state.config.top_n);
    let matches = state.matcher.top_matches(&raw, top_n)?;

    Ok(Json(MatchResponse {
        query_skills: normalize(&raw),
        generated_at: Utc::now(),
        matches,
    }))
}
