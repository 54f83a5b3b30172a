//! Axum route handlers for the Scoring API.
//!
//! Scoring is CPU-bound, so each request moves onto a blocking thread that
//! fans out to the rayon pool.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::candidate::CandidateRecord;
use crate::errors::AppError;
use crate::requirements::extract_requirements;
use crate::requirements::handlers::require_job_description;
use crate::scoring::ranking::RankingRun;
use crate::scoring::ScoreResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreCandidateRequest {
    pub job_description: String,
    #[serde(default)]
    pub candidate: CandidateRecord,
}

#[derive(Debug, Deserialize)]
pub struct RankCandidatesRequest {
    pub job_description: String,
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
}

#[derive(Debug, Serialize)]
pub struct RankCandidatesResponse {
    pub run: RankingRun,
    /// Input records with `score` and `score_breakdown`, best first.
    pub candidates: Vec<CandidateRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates/score
pub async fn handle_score_candidate(
    State(state): State<AppState>,
    Json(request): Json<ScoreCandidateRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    require_job_description(&request.job_description)?;

    let engine = state.engine.clone();
    let result = tokio::task::spawn_blocking(move || {
        let requirements = extract_requirements(&request.job_description);
        engine.score_candidate(&requirements, &request.candidate)
    })
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/candidates/rank
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(request): Json<RankCandidatesRequest>,
) -> Result<Json<RankCandidatesResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let engine = state.engine.clone();
    let ranking = tokio::task::spawn_blocking(move || {
        let requirements = extract_requirements(&request.job_description);
        engine.rank(&requirements, &request.candidates)
    })
    .await?;

    Ok(Json(RankCandidatesResponse {
        run: ranking.run,
        candidates: ranking
            .candidates
            .into_iter()
            .map(|ranked| ranked.record)
            .collect(),
    }))
}
