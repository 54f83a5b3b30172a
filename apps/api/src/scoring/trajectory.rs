use chrono::NaiveDate;

use crate::candidate::dates::parse_range_start;
use crate::candidate::entries::ExperienceDetails;
use crate::scoring::category::{Category, CategoryScorer, ScoringContext, DEFAULT_SCORE};

const SENIORITY_TERMS: &[&str] = &["senior", "lead", "manager", "director", "vp", "head", "chief"];

/// Career trajectory: counts seniority terms gained from one role to the next.
pub struct TrajectoryScorer;

impl CategoryScorer for TrajectoryScorer {
    fn category(&self) -> Category {
        Category::CareerTrajectory
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> u8 {
        let roles: Vec<&ExperienceDetails> = ctx
            .candidate
            .experience
            .iter()
            .filter_map(|entry| entry.structured())
            .collect();
        if roles.is_empty() {
            return DEFAULT_SCORE;
        }

        let roles = chronological(roles, ctx.today);
        match growth_indicators(&roles) {
            n if n >= 2 => 8,
            1 => 7,
            _ if roles.len() >= 3 => 6,
            _ => DEFAULT_SCORE,
        }
    }
}

/// Sorts roles with a parseable start date among their own slots. Roles
/// without one stay where they were.
fn chronological(roles: Vec<&ExperienceDetails>, today: NaiveDate) -> Vec<&ExperienceDetails> {
    let starts: Vec<Option<NaiveDate>> = roles
        .iter()
        .map(|role| role.dates.as_deref().and_then(|d| parse_range_start(d, today)))
        .collect();

    let mut dated: Vec<(NaiveDate, &ExperienceDetails)> = starts
        .iter()
        .zip(&roles)
        .filter_map(|(start, role)| start.map(|s| (s, *role)))
        .collect();
    dated.sort_by_key(|(start, _)| *start);

    let mut dated = dated.into_iter().map(|(_, role)| role);
    starts
        .iter()
        .zip(&roles)
        .map(|(start, role)| match start {
            Some(_) => dated.next().unwrap_or(*role),
            None => *role,
        })
        .collect()
}

fn growth_indicators(roles: &[&ExperienceDetails]) -> usize {
    roles
        .windows(2)
        .filter_map(|pair| {
            let earlier = pair[0].title.as_deref()?.to_lowercase();
            let later = pair[1].title.as_deref()?.to_lowercase();
            Some(
                SENIORITY_TERMS
                    .iter()
                    .filter(|term| later.contains(**term) && !earlier.contains(**term))
                    .count(),
            )
        })
        .sum()
}
