// Prompt construction for LLM-backed outreach messages.

use serde_json::{json, Value};

use crate::outreach::job::JobContext;
use crate::outreach::template::SIGNATURE;
use crate::outreach::writer::CandidateBrief;

const MAX_EXPERIENCES: usize = 2;
const MAX_SKILLS: usize = 5;

/// Compact candidate view: top experiences, first education entry, top skills.
pub fn candidate_summary(brief: &CandidateBrief) -> Value {
    let experience: Vec<Value> = brief
        .profile
        .experience
        .iter()
        .take(MAX_EXPERIENCES)
        .map(|entry| {
            json!({
                "title": entry.title().unwrap_or_default(),
                "company": entry.company().unwrap_or_default(),
                "dates": entry.structured().and_then(|d| d.dates.clone()).unwrap_or_default(),
            })
        })
        .collect();
    let education: Vec<Value> = brief
        .profile
        .education
        .iter()
        .take(1)
        .map(|entry| {
            json!({
                "school": entry.school().unwrap_or_default(),
                "degree": entry.degree().unwrap_or_default(),
            })
        })
        .collect();
    let skills: Vec<&str> = brief
        .profile
        .skills
        .iter()
        .take(MAX_SKILLS)
        .map(String::as_str)
        .collect();

    json!({
        "name": brief.first_name,
        "headline": brief.profile.headline,
        "experience": experience,
        "education": education,
        "skills": skills,
    })
}

pub fn build_outreach_prompt(brief: &CandidateBrief, job: &JobContext) -> String {
    let candidate = serde_json::to_string_pretty(&candidate_summary(brief)).unwrap_or_default();
    let strengths = match brief.strength_phrases() {
        phrases if phrases.is_empty() => "Unknown".to_string(),
        phrases => phrases.join(", "),
    };
    let salary_line = job
        .salary_range
        .as_deref()
        .map(|salary| format!("Salary: {salary}\n"))
        .unwrap_or_default();

    format!(
        "Write a personalized LinkedIn outreach message for this candidate.\n\n\
         Company: {company}\n\
         Job Title: {title}\n\
         Location: {location}\n\
         {salary_line}\n\
         Job Summary:\n{summary}\n\n\
         Candidate:\n{candidate}\n\n\
         Candidate strengths: {strengths}\n\n\
         Rules:\n\
         1. Address them by first name ({first_name}).\n\
         2. Keep the message under 150 words.\n\
         3. Mention something specific from their background that relates to the job.\n\
         4. Be friendly and professional.\n\
         5. Ask for a 15-minute chat about the opportunity.\n\
         6. Sign as \"{signature}\".\n\
         7. Avoid generic phrases like \"I hope this message finds you well\".",
        company = job.company_name,
        title = job.requirements.title,
        location = job.requirements.location,
        summary = job.summary(),
        first_name = brief.first_name,
        signature = SIGNATURE,
    )
}
