use crate::scoring::category::{any_match, Category, CategoryScorer, ScoringContext, DEFAULT_SCORE};

const TOP_COMPANY: u8 = 10;
const RELEVANT_INDUSTRY: u8 = 8;

/// Company relevance: best employer across all experience entries.
pub struct CompanyScorer;

impl CategoryScorer for CompanyScorer {
    fn category(&self) -> Category {
        Category::CompanyRelevance
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> u8 {
        ctx.candidate
            .experience
            .iter()
            .filter_map(|entry| entry.company())
            .map(|company| {
                if any_match(&company, &ctx.tables.top_companies) {
                    TOP_COMPANY
                } else if any_match(&company, &ctx.tables.industry_keywords) {
                    RELEVANT_INDUSTRY
                } else {
                    0
                }
            })
            .max()
            .filter(|best| *best > 0)
            .unwrap_or(DEFAULT_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::RequirementRecord;
    use crate::scoring::reference::ReferenceTables;
    use crate::scoring::test_support::{score, score_with_tables};
    use serde_json::json;

    #[test]
    fn test_top_company_scores_ten() {
        let s = score(&CompanyScorer, json!({"experience": [{"company": "OpenAI"}]}));
        assert_eq!(s, 10);
    }

    #[test]
    fn test_unknown_company_scores_default() {
        let s = score(&CompanyScorer, json!({"experience": [{"company": "Random Cafe"}]}));
        assert_eq!(s, 5);
    }

    #[test]
    fn test_industry_keyword_scores_eight() {
        let s = score(
            &CompanyScorer,
            json!({"experience": [{"companyName": "Acme Software Inc"}]}),
        );
        assert_eq!(s, 8);
    }

    #[test]
    fn test_best_entry_wins() {
        let s = score(
            &CompanyScorer,
            json!({"experience": [
                {"company": "Random Cafe"},
                {"company": "Acme Research Labs"},
                {"company": "Google"}
            ]}),
        );
        assert_eq!(s, 10);
    }

    #[test]
    fn test_freeform_label_company() {
        let s = score(&CompanyScorer, json!({"experience": ["ML Engineer at Anthropic"]}));
        assert_eq!(s, 10);
    }

    #[test]
    fn test_no_experience_is_default() {
        assert_eq!(score(&CompanyScorer, json!({"headline": "Engineer"})), 5);
    }

    #[test]
    fn test_custom_company_table() {
        let tables = ReferenceTables {
            top_companies: vec!["Random Cafe".to_string()],
            ..ReferenceTables::default()
        };
        let s = score_with_tables(
            &CompanyScorer,
            json!({"experience": [{"company": "Random Cafe"}]}),
            &RequirementRecord::default(),
            &tables,
        );
        assert_eq!(s, 10);
    }
}
