use async_trait::async_trait;

use crate::outreach::job::JobContext;
use crate::outreach::writer::{CandidateBrief, OutreachWriter};
use crate::scoring::ranking::RankedCandidate;

pub const SIGNATURE: &str = "[Recruiter Name]";

/// Deterministic fill-in-the-blanks message. Used directly when no LLM key is
/// configured, and as the fallback for the LLM writer.
pub struct TemplateOutreachWriter;

#[async_trait]
impl OutreachWriter for TemplateOutreachWriter {
    async fn write(&self, candidate: &RankedCandidate, job: &JobContext) -> String {
        render(&CandidateBrief::from_ranked(candidate), job)
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

pub fn render(brief: &CandidateBrief, job: &JobContext) -> String {
    let mut paragraphs = Vec::new();

    paragraphs.push(format!("Hi {},", brief.first_name));

    let headline = brief.profile.headline.trim();
    paragraphs.push(if headline.is_empty() {
        "I came across your profile and was impressed by your background.".to_string()
    } else {
        format!("I came across your profile and was impressed by your background as {headline}.")
    });

    let job_title = match job.requirements.title.trim() {
        "" => "new engineer",
        title => title,
    };
    let team = match job.company_name.as_str() {
        "" => "our team".to_string(),
        company => format!("our team at {company}"),
    };
    let recent = brief.profile.experience.first();
    let recent_title = recent
        .and_then(|entry| entry.title())
        .unwrap_or_else(|| "a professional".to_string());
    let recent_company = recent
        .and_then(|entry| entry.company())
        .unwrap_or_else(|| "your company".to_string());
    paragraphs.push(format!(
        "I'm reaching out because we're looking for a {job_title} to join {team}. \
         Based on your experience as {recent_title} at {recent_company}, \
         I believe you could be a great fit for this role."
    ));

    let strengths = brief.strength_phrases();
    if !strengths.is_empty() {
        paragraphs.push(format!(
            "Your profile stood out to us for its {}.",
            join_phrases(&strengths)
        ));
    }

    let location = job.requirements.location.trim();
    if let Some(salary) = &job.salary_range {
        if !location.is_empty() {
            paragraphs.push(format!(
                "We're offering {salary} + equity for this role in {location}."
            ));
        }
    }

    paragraphs.push(
        "Would you be open to a 15-minute chat to discuss this opportunity further?".to_string(),
    );
    paragraphs.push(format!("Best regards,\n{SIGNATURE}"));

    paragraphs.join("\n\n")
}

/// "a", "a and b", "a, b and c".
fn join_phrases(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateRecord;
    use crate::scoring::category::Category;
    use crate::scoring::ScoreResult;
    use serde_json::json;

    fn ranked(record: serde_json::Value, scores: &[(Category, u8)]) -> RankedCandidate {
        RankedCandidate {
            record: CandidateRecord::new(record),
            result: ScoreResult {
                total: 0.0,
                breakdown: scores.iter().copied().collect(),
            },
        }
    }

    #[tokio::test]
    async fn test_full_template() {
        let job = JobContext::new(
            "Senior ML Engineer\nLocation: Mountain View, CA.\nSalary: $150-200k",
            "Acme",
        );
        let candidate = ranked(
            json!({
                "name": "Ada Lovelace",
                "headline": "ML Engineer at Google",
                "experience": [{"title": "ML Engineer", "company": "Google"}]
            }),
            &[(Category::Education, 10), (Category::Tenure, 9), (Category::LocationMatch, 6)],
        );

        let message = TemplateOutreachWriter.write(&candidate, &job).await;

        assert!(message.starts_with("Hi Ada,\n\n"));
        assert!(message.contains("your background as ML Engineer at Google."));
        assert!(message.contains("looking for a Senior ML Engineer to join our team at Acme"));
        assert!(message.contains("experience as ML Engineer at Google, I believe"));
        assert!(message.contains("for its education and tenure."));
        assert!(message.contains("We're offering $150-200k + equity for this role in Mountain View, CA."));
        assert!(message.contains("15-minute chat"));
        assert!(message.ends_with("Best regards,\n[Recruiter Name]"));
    }

    #[tokio::test]
    async fn test_sparse_candidate_uses_placeholders() {
        let job = JobContext::new("Data Scientist", "Acme");
        let message = TemplateOutreachWriter.write(&ranked(json!({}), &[]), &job).await;

        assert!(message.starts_with("Hi there,"));
        assert!(message.contains("impressed by your background."));
        assert!(message.contains("experience as a professional at your company"));
        assert!(!message.contains("stood out"));
        assert!(!message.contains("We're offering"));
    }

    #[tokio::test]
    async fn test_salary_line_needs_location() {
        let job = JobContext::new("Data Scientist\nSalary: $100-120k", "Acme");
        let message = TemplateOutreachWriter.write(&ranked(json!({"name": "Bo"}), &[]), &job).await;
        assert!(!message.contains("We're offering"));
    }

    #[tokio::test]
    async fn test_freeform_recent_experience() {
        let job = JobContext::new("Data Scientist", "");
        let message = TemplateOutreachWriter
            .write(&ranked(json!({"experience": ["Research Engineer at DeepMind"]}), &[]), &job)
            .await;
        assert!(message.contains("join our team."));
        assert!(message.contains("experience as Research Engineer at DeepMind"));
    }

    #[test]
    fn test_join_phrases() {
        let items = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(join_phrases(&items(&["a"])), "a");
        assert_eq!(join_phrases(&items(&["a", "b"])), "a and b");
        assert_eq!(join_phrases(&items(&["a", "b", "c"])), "a, b and c");
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(TemplateOutreachWriter.backend(), "template");
    }
}
