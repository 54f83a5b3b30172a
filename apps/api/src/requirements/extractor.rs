//! Requirement Extractor — turns a raw job description into a `RequirementRecord`.
//!
//! Pure text heuristics, no LLM call. Never fails: input without usable lines
//! yields an empty record.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::requirements::keywords::extract_keywords;

/// Normalized requirements extracted once per job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    pub title: String,
    /// Deduplicated, in order of first appearance.
    pub required_skills: Vec<String>,
    pub location: String,
    pub education_signal: String,
    /// At most 15 unique keywords, deterministic for identical input.
    pub keywords: Vec<String>,
}

static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(requirements|qualifications|skills|what you.ll need).*:")
        .expect("section header regex is valid")
});

// The terminating `\n[A-Z]` stays case-sensitive so only capitalized lines end the block.
static SKILLS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)(?:skills|requirements|qualifications|experience with):\s*(.*?)(?:\n\n|(?-i:\n[A-Z])|\z)",
    )
    .expect("skills block regex is valid")
});

static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)location[:\s]+([^.]+)").expect("location regex is valid")
});

static EDUCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:education|degree)[:\s]+([^.]+)").expect("education regex is valid")
});

/// Parses a job description into a `RequirementRecord`.
pub fn extract_requirements(job_description: &str) -> RequirementRecord {
    RequirementRecord {
        title: extract_title(job_description),
        required_skills: extract_skills(job_description),
        location: first_capture(&LOCATION, job_description),
        education_signal: first_capture(&EDUCATION, job_description),
        keywords: extract_keywords(job_description),
    }
}

fn extract_title(text: &str) -> String {
    let Some(line) = text.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return String::new();
    };

    let title = if let Some((head, _)) = line.split_once(':') {
        head
    } else if let Some((head, _)) = line.split_once(',') {
        head
    } else {
        line
    };
    title.trim().to_string()
}

fn extract_skills(text: &str) -> Vec<String> {
    let mut skills = bulleted_skills(text);
    if skills.is_empty() {
        skills = block_skills(text);
    }
    dedup_preserving_order(skills)
}

/// Collects bullet lines that follow a requirements-style section header.
fn bulleted_skills(text: &str) -> Vec<String> {
    let mut skills = Vec::new();
    let mut in_requirements = false;

    for line in text.lines().map(str::trim) {
        if SECTION_HEADER.is_match(line) {
            in_requirements = true;
            continue;
        }

        if in_requirements && starts_uppercase(line) && line.contains(':') {
            in_requirements = false;
        }

        if in_requirements && (line.starts_with('-') || line.starts_with('•')) {
            let skill = line.trim_start_matches(['-', '•']).trim();
            if !skill.is_empty() {
                skills.push(skill.to_string());
            }
        }
    }

    skills
}

/// Fallback for postings that list skills inline after a label.
fn block_skills(text: &str) -> Vec<String> {
    let Some(block) = SKILLS_BLOCK.captures(text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    block
        .as_str()
        .lines()
        .map(|l| l.trim_matches(['-', '•', ' ', '\t', '\r']))
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

fn first_capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
