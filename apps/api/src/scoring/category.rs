use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::candidate::CandidateProfile;
use crate::requirements::RequirementRecord;
use crate::scoring::reference::ReferenceTables;

/// Score used whenever a category has no usable data.
pub const DEFAULT_SCORE: u8 = 5;
pub const MAX_SCORE: u8 = 10;

/// The six fixed rubric categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Education,
    CareerTrajectory,
    CompanyRelevance,
    ExperienceMatch,
    LocationMatch,
    Tenure,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Education,
        Category::CareerTrajectory,
        Category::CompanyRelevance,
        Category::ExperienceMatch,
        Category::LocationMatch,
        Category::Tenure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::CareerTrajectory => "career_trajectory",
            Category::CompanyRelevance => "company_relevance",
            Category::ExperienceMatch => "experience_match",
            Category::LocationMatch => "location_match",
            Category::Tenure => "tenure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category name → integer score in [0, 10].
pub type ScoreBreakdown = BTreeMap<Category, u8>;

/// Everything a category scorer may look at for one candidate.
pub struct ScoringContext<'a> {
    pub candidate: &'a CandidateProfile,
    pub requirements: &'a RequirementRecord,
    pub tables: &'a ReferenceTables,
    /// Date that "Present" resolves to.
    pub today: NaiveDate,
}

/// One rubric category. Implementations never fail: missing or malformed
/// data degrades to the category default.
pub trait CategoryScorer: Send + Sync {
    fn category(&self) -> Category;

    fn score(&self, ctx: &ScoringContext<'_>) -> u8;
}

/// Case-insensitive substring test. `needle` is lowercased here; callers pass
/// an already-lowercased haystack.
pub fn contains_ci(haystack_lower: &str, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    !needle.is_empty() && haystack_lower.contains(&needle)
}

/// True when any table entry is a case-insensitive substring of `text`.
pub fn any_match(text: &str, table: &[String]) -> bool {
    let lower = text.to_lowercase();
    table.iter().any(|entry| contains_ci(&lower, entry))
}
