use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::candidate::entries::{skill_name, EducationEntry, ExperienceEntry};
use crate::candidate::record::CandidateRecord;

/// Normalized, read-only view of a candidate used by every category scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub headline: String,
}

impl CandidateProfile {
    /// Builds the normalized view. Never fails; malformed entries are skipped.
    pub fn from_record(record: &CandidateRecord) -> Self {
        Self {
            education: adapt(record.resolve_list("education"), "education", EducationEntry::from_value),
            experience: adapt(
                record.resolve_list("experience"),
                "experience",
                ExperienceEntry::from_value,
            ),
            skills: adapt(record.resolve_list("skills"), "skills", skill_name),
            location: resolve_location(record),
            headline: record.resolve_str("headline").unwrap_or_default().to_string(),
        }
    }

    /// Headline plus every experience entry's searchable text, lowercased.
    pub fn experience_text(&self) -> String {
        let mut text = self.headline.to_lowercase();
        for entry in &self.experience {
            text.push(' ');
            text.push_str(&entry.searchable_text().to_lowercase());
        }
        text
    }
}

fn adapt<T>(values: &[Value], field: &str, adapter: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    let adapted: Vec<T> = values.iter().filter_map(adapter).collect();
    if adapted.len() < values.len() {
        debug!(
            field,
            skipped = values.len() - adapted.len(),
            "Skipped malformed candidate entries"
        );
    }
    adapted
}

/// `location` as a string or `{city, country}` mapping, then `locationName`.
fn resolve_location(record: &CandidateRecord) -> Option<String> {
    if let Some(value) = record.resolve_field("location") {
        match value {
            Value::String(s) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Value::Object(map) => {
                let parts: Vec<&str> = ["city", "country"]
                    .iter()
                    .filter_map(|k| map.get(*k).and_then(Value::as_str))
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect();
                if !parts.is_empty() {
                    return Some(parts.join(", "));
                }
            }
            _ => {}
        }
    }
    record.resolve_str("locationName").map(str::to_string)
}
