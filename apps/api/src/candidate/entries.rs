//! Tagged entry variants and the provider alias adapter.
//!
//! Every known provider key alias is mapped onto the structured variant here,
//! so the scorers never look at raw JSON keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SCHOOL_KEYS: &[&str] = &["school", "schoolName", "institution"];
const DEGREE_KEYS: &[&str] = &["degree", "degreeName"];
const FIELD_KEYS: &[&str] = &["field", "fieldOfStudy"];
const EDUCATION_DATE_KEYS: &[&str] = &["dates", "dateRange"];

const TITLE_KEYS: &[&str] = &["title", "jobTitle"];
const COMPANY_KEYS: &[&str] = &["company", "companyName"];
const EXPERIENCE_DATE_KEYS: &[&str] = &["dates", "dateRange", "duration"];
const DESCRIPTION_KEYS: &[&str] = &["description"];

const SKILL_NAME_KEYS: &[&str] = &["name", "skillName"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationDetails {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub dates: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EducationEntry {
    Structured(EducationDetails),
    Freeform(String),
}

impl EducationEntry {
    /// Adapts one raw entry. Values that are neither mappings nor strings are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::Structured(EducationDetails {
                school: first_str(map, SCHOOL_KEYS),
                degree: first_str(map, DEGREE_KEYS),
                field: first_str(map, FIELD_KEYS),
                dates: first_str(map, EDUCATION_DATE_KEYS),
            })),
            Value::String(label) => non_empty(label).map(Self::Freeform),
            _ => None,
        }
    }

    /// School name, or the whole label for freeform entries.
    pub fn school(&self) -> Option<&str> {
        match self {
            Self::Structured(details) => details.school.as_deref(),
            Self::Freeform(label) => Some(label),
        }
    }

    /// Degree text, or the whole label for freeform entries.
    pub fn degree(&self) -> Option<&str> {
        match self {
            Self::Structured(details) => details.degree.as_deref(),
            Self::Freeform(label) => Some(label),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDetails {
    pub title: Option<String>,
    pub company: Option<String>,
    pub dates: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExperienceEntry {
    Structured(ExperienceDetails),
    Freeform(String),
}

impl ExperienceEntry {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::Structured(ExperienceDetails {
                title: first_str(map, TITLE_KEYS),
                company: first_str(map, COMPANY_KEYS),
                dates: first_str(map, EXPERIENCE_DATE_KEYS),
                description: first_str(map, DESCRIPTION_KEYS),
            })),
            Value::String(label) => non_empty(label).map(Self::Freeform),
            _ => None,
        }
    }

    pub fn structured(&self) -> Option<&ExperienceDetails> {
        match self {
            Self::Structured(details) => Some(details),
            Self::Freeform(_) => None,
        }
    }

    /// Job title. Freeform labels yield the text before the last standalone "at".
    pub fn title(&self) -> Option<String> {
        match self {
            Self::Structured(details) => details.title.clone(),
            Self::Freeform(label) => {
                let words: Vec<&str> = label.split_whitespace().collect();
                match words.iter().rposition(|w| w.eq_ignore_ascii_case("at")) {
                    Some(at) => non_empty(&words[..at].join(" ")),
                    None => non_empty(label),
                }
            }
        }
    }

    /// Employer name. Freeform labels like "ML Engineer at Google" yield the
    /// text after the last standalone "at".
    pub fn company(&self) -> Option<String> {
        match self {
            Self::Structured(details) => details.company.clone(),
            Self::Freeform(label) => company_from_label(label),
        }
    }

    /// Text searched for skill and domain keywords.
    pub fn searchable_text(&self) -> String {
        match self {
            Self::Structured(details) => [details.title.as_deref(), details.description.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" "),
            Self::Freeform(label) => label.clone(),
        }
    }
}

/// Skill names from either plain strings or `{name}` records.
pub fn skill_name(value: &Value) -> Option<String> {
    match value {
        Value::String(name) => non_empty(name),
        Value::Object(map) => first_str(map, SKILL_NAME_KEYS),
        _ => None,
    }
}

fn company_from_label(label: &str) -> Option<String> {
    let words: Vec<&str> = label.split_whitespace().collect();
    let at = words.iter().rposition(|w| w.eq_ignore_ascii_case("at"))?;
    let company = words[at + 1..].join(" ");
    non_empty(&company)
}

/// First alias holding a non-empty string. A nested `{name}` mapping also counts.
fn first_str(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match map.get(*key)? {
        Value::String(s) => non_empty(s),
        Value::Object(inner) => inner.get("name").and_then(Value::as_str).and_then(non_empty),
        _ => None,
    })
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
