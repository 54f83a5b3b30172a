//! Scoring engine — runs every category scorer over one candidate and folds
//! the breakdown into a weighted total.
//!
//! The engine owns the validated reference tables behind an `Arc` and is
//! shared read-only across request handlers and rayon workers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::{CandidateProfile, CandidateRecord};
use crate::requirements::RequirementRecord;
use crate::scoring::aggregate::aggregate;
use crate::scoring::category::{CategoryScorer, ScoreBreakdown, ScoringContext};
use crate::scoring::company::CompanyScorer;
use crate::scoring::education::EducationScorer;
use crate::scoring::location::LocationScorer;
use crate::scoring::reference::{ConfigError, ReferenceTables};
use crate::scoring::skills::SkillsScorer;
use crate::scoring::tenure::TenureScorer;
use crate::scoring::trajectory::TrajectoryScorer;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted total in [0, 10].
    pub total: f64,
    pub breakdown: ScoreBreakdown,
}

pub struct ScoringEngine {
    tables: Arc<ReferenceTables>,
    scorers: Vec<Box<dyn CategoryScorer>>,
    /// Pinned reference date. `None` means today.
    reference_date: Option<NaiveDate>,
}

impl ScoringEngine {
    /// Validates the tables and builds the engine with all six category scorers.
    pub fn new(tables: ReferenceTables) -> Result<Self, ConfigError> {
        tables.validate()?;
        Ok(Self {
            tables: Arc::new(tables),
            scorers: vec![
                Box::new(EducationScorer),
                Box::new(TrajectoryScorer),
                Box::new(CompanyScorer),
                Box::new(SkillsScorer),
                Box::new(LocationScorer),
                Box::new(TenureScorer),
            ],
            reference_date: None,
        })
    }

    /// Pins the date that "Present" resolves to.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub(crate) fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn score_candidate(
        &self,
        requirements: &RequirementRecord,
        candidate: &CandidateRecord,
    ) -> ScoreResult {
        self.score_on(requirements, candidate, self.reference_date())
    }

    /// Scores every candidate on the rayon pool. Output order matches input order.
    pub fn score_batch(
        &self,
        requirements: &RequirementRecord,
        candidates: &[CandidateRecord],
    ) -> Vec<ScoreResult> {
        let today = self.reference_date();
        candidates
            .par_iter()
            .map(|candidate| self.score_on(requirements, candidate, today))
            .collect()
    }

    pub(crate) fn score_on(
        &self,
        requirements: &RequirementRecord,
        candidate: &CandidateRecord,
        today: NaiveDate,
    ) -> ScoreResult {
        if candidate.is_empty() {
            return ScoreResult::default();
        }

        let profile = CandidateProfile::from_record(candidate);
        let ctx = ScoringContext {
            candidate: &profile,
            requirements,
            tables: &self.tables,
            today,
        };

        let breakdown: ScoreBreakdown = self
            .scorers
            .iter()
            .map(|scorer| (scorer.category(), scorer.score(&ctx)))
            .collect();
        let total = aggregate(&breakdown, &self.tables.weights);

        debug!(
            candidate = candidate.str_field("name").unwrap_or("<unnamed>"),
            total,
            ?breakdown,
            "Scored candidate"
        );

        ScoreResult { total, breakdown }
    }
}
