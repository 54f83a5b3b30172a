//! Outreach writers — pluggable, trait-based message generation for ranked candidates.
//!
//! Default: `TemplateOutreachWriter` (deterministic, no network).
//! `LlmOutreachWriter` personalizes through the LLM client and falls back to
//! the template on any failure.
//!
//! `AppState` holds an `Arc<dyn OutreachWriter>`, chosen at startup via config.

use async_trait::async_trait;
use serde::Serialize;

use crate::candidate::CandidateProfile;
use crate::outreach::job::JobContext;
use crate::scoring::category::Category;
use crate::scoring::ranking::{RankedCandidate, Ranking};

/// Categories scoring at or above this are called out as strengths.
pub const STRENGTH_THRESHOLD: u8 = 8;

pub const DEFAULT_TOP_N: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutreachMessage {
    pub candidate: String,
    pub linkedin_url: String,
    pub message: String,
}

/// Writes one message for one ranked candidate. Never fails; implementations
/// degrade to a deterministic message instead.
#[async_trait]
pub trait OutreachWriter: Send + Sync {
    async fn write(&self, candidate: &RankedCandidate, job: &JobContext) -> String;

    /// "template" | "llm"
    fn backend(&self) -> &'static str;
}

/// What writers know about a candidate, pulled from the ranked record.
pub struct CandidateBrief {
    pub first_name: String,
    pub profile: CandidateProfile,
    pub strengths: Vec<Category>,
}

impl CandidateBrief {
    pub fn from_ranked(candidate: &RankedCandidate) -> Self {
        let first_name = candidate
            .record
            .str_field("name")
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("there")
            .to_string();
        let strengths = candidate
            .result
            .breakdown
            .iter()
            .filter(|(_, score)| **score >= STRENGTH_THRESHOLD)
            .map(|(category, _)| *category)
            .collect();
        Self {
            first_name,
            profile: CandidateProfile::from_record(&candidate.record),
            strengths,
        }
    }

    /// Strengths as readable phrases ("career trajectory").
    pub fn strength_phrases(&self) -> Vec<String> {
        self.strengths
            .iter()
            .map(|category| category.as_str().replace('_', " "))
            .collect()
    }
}

/// Writes messages for the top `top` candidates of a ranking, in rank order.
pub async fn write_batch(
    writer: &dyn OutreachWriter,
    ranking: &Ranking,
    job: &JobContext,
    top: usize,
) -> Vec<OutreachMessage> {
    let mut messages = Vec::with_capacity(top.min(ranking.candidates.len()));
    for candidate in ranking.candidates.iter().take(top) {
        let message = writer.write(candidate, job).await;
        messages.push(OutreachMessage {
            candidate: candidate.record.str_field("name").unwrap_or_default().to_string(),
            linkedin_url: candidate
                .record
                .str_field("linkedin_url")
                .unwrap_or_default()
                .to_string(),
            message,
        });
    }
    messages
}
