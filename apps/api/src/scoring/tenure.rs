use crate::candidate::dates::{parse_range, range_years};
use crate::scoring::category::{Category, CategoryScorer, ScoringContext, DEFAULT_SCORE};

/// Tenure: average length of dated roles. Undated or unparseable roles are ignored.
pub struct TenureScorer;

impl CategoryScorer for TenureScorer {
    fn category(&self) -> Category {
        Category::Tenure
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> u8 {
        let spans: Vec<f64> = ctx
            .candidate
            .experience
            .iter()
            .filter_map(|entry| entry.structured()?.dates.as_deref())
            .filter_map(|dates| parse_range(dates, ctx.today))
            .map(|(start, end)| range_years(start, end))
            .collect();

        if spans.is_empty() {
            return DEFAULT_SCORE;
        }
        let average = spans.iter().sum::<f64>() / spans.len() as f64;
        tenure_score(average)
    }
}

fn tenure_score(average_years: f64) -> u8 {
    if average_years >= 3.0 {
        10
    } else if average_years >= 2.0 {
        9
    } else if average_years >= 1.5 {
        8
    } else if average_years >= 1.0 {
        7
    } else {
        DEFAULT_SCORE
    }
}
