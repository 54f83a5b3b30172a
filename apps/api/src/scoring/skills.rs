use crate::scoring::category::{contains_ci, Category, CategoryScorer, ScoringContext, DEFAULT_SCORE};

/// Domain keyword hits needed before a weak skill match is nudged up by one.
const DOMAIN_BOOST_HITS: usize = 3;
const DOMAIN_BOOST_CEILING: u8 = 8;

/// Experience match: overlap between required skills and the candidate's
/// listed or inferred skills.
pub struct SkillsScorer;

impl CategoryScorer for SkillsScorer {
    fn category(&self) -> Category {
        Category::ExperienceMatch
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> u8 {
        let experience_text = ctx.candidate.experience_text();

        let candidate_skills: Vec<String> = if ctx.candidate.skills.is_empty() {
            ctx.tables
                .skill_vocabulary
                .iter()
                .filter(|skill| contains_ci(&experience_text, skill))
                .map(|skill| skill.to_lowercase())
                .collect()
        } else {
            ctx.candidate
                .skills
                .iter()
                .map(|skill| skill.trim().to_lowercase())
                .filter(|skill| !skill.is_empty())
                .collect()
        };

        let required = &ctx.requirements.required_skills;
        let matching = required
            .iter()
            .map(|skill| skill.to_lowercase())
            .filter(|req| {
                candidate_skills
                    .iter()
                    .any(|have| req.contains(have.as_str()) || have.contains(req.as_str()))
            })
            .count();

        let mut score = skill_match_score(matching, required.len());

        let domain_hits = ctx
            .tables
            .domain_keywords
            .iter()
            .filter(|keyword| contains_ci(&experience_text, keyword))
            .count();
        if domain_hits >= DOMAIN_BOOST_HITS && score < DOMAIN_BOOST_CEILING {
            score += 1;
        }

        score
    }
}

fn skill_match_score(matching: usize, required: usize) -> u8 {
    let pct = matching as f64 / required.max(1) as f64;
    if pct >= 0.9 {
        10
    } else if pct >= 0.7 {
        9
    } else if pct >= 0.5 {
        8
    } else if pct >= 0.3 {
        7
    } else if matching > 0 {
        6
    } else {
        DEFAULT_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::reference::ReferenceTables;
    use crate::scoring::test_support::{requirements_with_skills, score, score_with_tables};
    use serde_json::{json, Value};

    fn score_against(required: &[&str], candidate: Value) -> u8 {
        score_with_tables(
            &SkillsScorer,
            candidate,
            &requirements_with_skills(required),
            &ReferenceTables::default(),
        )
    }

    #[test]
    fn test_half_match_scores_eight() {
        let s = score_against(
            &["python", "pytorch"],
            json!({"skills": ["Python", "Deep Learning"]}),
        );
        assert_eq!(s, 8);
    }

    #[test]
    fn test_full_match_scores_ten() {
        let s = score_against(
            &["Python", "PyTorch"],
            json!({"skills": ["python", {"name": "pytorch"}]}),
        );
        assert_eq!(s, 10);
    }

    #[test]
    fn test_match_is_two_way_substring() {
        // "Machine Learning" contains "learning"; "ML" is inside "ML Ops".
        let s = score_against(
            &["learning", "ML Ops", "Go", "Kubernetes"],
            json!({"skills": ["Machine Learning", "ML"]}),
        );
        assert_eq!(s, 8);
    }

    #[test]
    fn test_threshold_ladder() {
        assert_eq!(skill_match_score(7, 10), 9);
        assert_eq!(skill_match_score(3, 10), 7);
        assert_eq!(skill_match_score(1, 10), 6);
        assert_eq!(skill_match_score(0, 10), 5);
        assert_eq!(skill_match_score(0, 0), 5);
    }

    #[test]
    fn test_skills_inferred_from_experience_text() {
        let s = score_against(
            &["PyTorch", "NLP"],
            json!({
                "headline": "Engineer",
                "experience": [{"title": "Engineer", "description": "Built NLP pipelines in PyTorch"}]
            }),
        );
        assert_eq!(s, 10);
    }

    #[test]
    fn test_domain_keywords_boost_weak_match() {
        let s = score_against(
            &["Kubernetes"],
            json!({
                "skills": ["Excel"],
                "headline": "Deep learning research with PyTorch"
            }),
        );
        assert_eq!(s, 6);
    }

    #[test]
    fn test_boost_never_applies_at_eight_or_above() {
        let s = score_against(
            &["Python"],
            json!({
                "skills": ["Python"],
                "headline": "Deep learning research with PyTorch"
            }),
        );
        assert_eq!(s, 10);
    }

    #[test]
    fn test_blank_candidate_skills_never_match() {
        let s = score_against(&["Rust"], json!({"skills": ["  "]}));
        assert_eq!(s, 5);
    }

    #[test]
    fn test_no_requirements_no_data_is_default() {
        assert_eq!(score(&SkillsScorer, json!({})), 5);
    }
}
