use std::time::Instant;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::candidate::CandidateRecord;
use crate::requirements::RequirementRecord;
use crate::scoring::engine::{ScoreResult, ScoringEngine};

/// Summary of one ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankingRun {
    pub id: Uuid,
    pub received: usize,
    /// Candidates with a non-empty breakdown.
    pub scored: usize,
    pub elapsed_ms: u64,
}

/// A copy of the input record with `score` and `score_breakdown` attached.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub record: CandidateRecord,
    pub result: ScoreResult,
}

#[derive(Debug, Clone)]
pub struct Ranking {
    pub run: RankingRun,
    /// Sorted by total, highest first. Ties keep input order.
    pub candidates: Vec<RankedCandidate>,
}

impl ScoringEngine {
    pub fn rank(&self, requirements: &RequirementRecord, candidates: &[CandidateRecord]) -> Ranking {
        let started = Instant::now();
        let results = self.score_batch(requirements, candidates);

        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .zip(results)
            .map(|(record, result)| RankedCandidate {
                record: attach_score(record, &result),
                result,
            })
            .collect();
        ranked.sort_by(|a, b| b.result.total.total_cmp(&a.result.total));

        let run = RankingRun {
            id: Uuid::new_v4(),
            received: candidates.len(),
            scored: ranked.iter().filter(|c| !c.result.breakdown.is_empty()).count(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            run_id = %run.id,
            received = run.received,
            scored = run.scored,
            elapsed_ms = run.elapsed_ms,
            "Ranked candidates"
        );

        Ranking {
            run,
            candidates: ranked,
        }
    }
}

/// Non-mapping records are replaced by a mapping holding only the score fields.
fn attach_score(record: &CandidateRecord, result: &ScoreResult) -> CandidateRecord {
    let mut fields = record.as_object().cloned().unwrap_or_else(Map::new);
    fields.insert("score".to_string(), Value::from(result.total));
    fields.insert(
        "score_breakdown".to_string(),
        serde_json::to_value(&result.breakdown).unwrap_or(Value::Null),
    );
    CandidateRecord::new(Value::Object(fields))
}
