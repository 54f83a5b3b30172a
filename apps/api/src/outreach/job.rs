use std::sync::LazyLock;

use regex::Regex;

use crate::requirements::{extract_requirements, RequirementRecord};

static SALARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)salary:?\s*\$?([\d,]+)[-\s]*[kK]?[-\s]*\$?([\d,]+)[kK]?")
        .expect("salary regex is valid")
});

const SUMMARY_MAX_CHARS: usize = 500;

/// Everything a writer needs to know about the job being recruited for.
#[derive(Debug, Clone)]
pub struct JobContext {
    pub description: String,
    pub requirements: RequirementRecord,
    pub company_name: String,
    /// Rendered as "$A-Bk".
    pub salary_range: Option<String>,
}

impl JobContext {
    pub fn new(description: &str, company_name: &str) -> Self {
        Self {
            description: description.to_string(),
            requirements: extract_requirements(description),
            company_name: company_name.trim().to_string(),
            salary_range: extract_salary_range(description),
        }
    }

    /// Non-empty description lines that don't start with "requirement", capped at 500 chars.
    pub fn summary(&self) -> String {
        let joined = self
            .description
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter(|line| !line.to_lowercase().starts_with("requirement"))
            .collect::<Vec<_>>()
            .join("\n");
        joined.chars().take(SUMMARY_MAX_CHARS).collect()
    }
}

pub fn extract_salary_range(text: &str) -> Option<String> {
    let caps = SALARY.captures(text)?;
    Some(format!("${}-{}k", &caps[1], &caps[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_with_k_suffix() {
        assert_eq!(
            extract_salary_range("Salary: $150-200k plus equity").as_deref(),
            Some("$150-200k")
        );
    }

    #[test]
    fn test_salary_with_both_bounds_marked() {
        assert_eq!(
            extract_salary_range("SALARY $140k - $210K").as_deref(),
            Some("$140-210k")
        );
    }

    #[test]
    fn test_no_salary() {
        assert_eq!(extract_salary_range("Competitive pay"), None);
        assert_eq!(extract_salary_range("Salary: negotiable"), None);
    }

    #[test]
    fn test_context_extracts_requirements() {
        let job = JobContext::new(
            "ML Engineer: Research\nLocation: Mountain View, CA.\nSalary: $150-200k",
            " Acme ",
        );
        assert_eq!(job.requirements.title, "ML Engineer");
        assert_eq!(job.requirements.location, "Mountain View, CA");
        assert_eq!(job.company_name, "Acme");
        assert_eq!(job.salary_range.as_deref(), Some("$150-200k"));
    }

    #[test]
    fn test_summary_skips_requirement_lines_and_blanks() {
        let job = JobContext::new(
            "Build models.\n\nRequirements:\n- Python\nrequirement: PhD\nShip fast.",
            "Acme",
        );
        assert_eq!(job.summary(), "Build models.\n- Python\nShip fast.");
    }

    #[test]
    fn test_summary_is_capped() {
        let job = JobContext::new(&"é".repeat(800), "Acme");
        assert_eq!(job.summary().chars().count(), 500);
    }
}
