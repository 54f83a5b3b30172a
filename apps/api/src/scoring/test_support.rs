use chrono::NaiveDate;
use serde_json::Value;

use crate::candidate::{CandidateProfile, CandidateRecord};
use crate::requirements::RequirementRecord;
use crate::scoring::category::{CategoryScorer, ScoringContext};
use crate::scoring::reference::ReferenceTables;

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn requirements_with_skills(skills: &[&str]) -> RequirementRecord {
    RequirementRecord {
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        ..RequirementRecord::default()
    }
}

pub fn score_with_tables(
    scorer: &dyn CategoryScorer,
    candidate: Value,
    requirements: &RequirementRecord,
    tables: &ReferenceTables,
) -> u8 {
    let profile = CandidateProfile::from_record(&CandidateRecord::new(candidate));
    let ctx = ScoringContext {
        candidate: &profile,
        requirements,
        tables,
        today: fixed_today(),
    };
    scorer.score(&ctx)
}

pub fn score(scorer: &dyn CategoryScorer, candidate: Value) -> u8 {
    score_with_tables(
        scorer,
        candidate,
        &RequirementRecord::default(),
        &ReferenceTables::default(),
    )
}
