//! Axum route handlers for the Outreach API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::candidate::CandidateRecord;
use crate::errors::AppError;
use crate::outreach::job::JobContext;
use crate::outreach::writer::{write_batch, OutreachMessage, DEFAULT_TOP_N};
use crate::requirements::handlers::require_job_description;
use crate::scoring::ranking::RankingRun;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OutreachRequest {
    pub job_description: String,
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
    /// How many of the best-ranked candidates to write to. Defaults to 2.
    pub top: Option<usize>,
    pub company_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OutreachResponse {
    pub run: RankingRun,
    pub backend: &'static str,
    pub messages: Vec<OutreachMessage>,
}

/// POST /api/v1/outreach
///
/// Ranks the candidates, then writes one message for each of the top N.
pub async fn handle_outreach(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<OutreachResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let company_name = request
        .company_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| state.config.outreach_company_name.clone());
    let job = JobContext::new(&request.job_description, &company_name);

    let engine = state.engine.clone();
    let requirements = job.requirements.clone();
    let candidates = request.candidates;
    let ranking = tokio::task::spawn_blocking(move || engine.rank(&requirements, &candidates)).await?;

    let top = request.top.unwrap_or(DEFAULT_TOP_N);
    let messages = write_batch(state.outreach.as_ref(), &ranking, &job, top).await;

    Ok(Json(OutreachResponse {
        run: ranking.run,
        backend: state.outreach.backend(),
        messages,
    }))
}
