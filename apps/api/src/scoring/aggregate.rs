use crate::scoring::category::{ScoreBreakdown, MAX_SCORE};
use crate::scoring::reference::CategoryWeights;

/// Weighted total: Σ(weight × category score), clamped to [0, 10]. Not rounded.
pub fn aggregate(breakdown: &ScoreBreakdown, weights: &CategoryWeights) -> f64 {
    breakdown
        .iter()
        .map(|(category, score)| weights.weight(*category) * f64::from(*score))
        .sum::<f64>()
        .clamp(0.0, f64::from(MAX_SCORE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::category::Category;

    fn breakdown(scores: [u8; 6]) -> ScoreBreakdown {
        Category::ALL.into_iter().zip(scores).collect()
    }

    #[test]
    fn test_weighted_total_with_default_weights() {
        // 1.6 + 1.2 + 1.05 + 2.25 + 1.0 + 0.5
        let total = aggregate(&breakdown([8, 6, 7, 9, 10, 5]), &CategoryWeights::default());
        assert!((total - 7.6).abs() < 1e-9, "Total was {total}");
    }

    #[test]
    fn test_all_tens_is_ten() {
        let total = aggregate(&breakdown([10; 6]), &CategoryWeights::default());
        assert!((total - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_defaults_is_five() {
        let total = aggregate(&breakdown([5; 6]), &CategoryWeights::default());
        assert!((total - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_breakdown_is_zero() {
        assert_eq!(aggregate(&ScoreBreakdown::new(), &CategoryWeights::default()), 0.0);
    }

    #[test]
    fn test_custom_weights() {
        let weights = CategoryWeights {
            education: 1.0,
            career_trajectory: 0.0,
            company_relevance: 0.0,
            experience_match: 0.0,
            location_match: 0.0,
            tenure: 0.0,
        };
        let total = aggregate(&breakdown([3, 10, 10, 10, 10, 10]), &weights);
        assert!((total - 3.0).abs() < 1e-9);
    }
}
