use crate::scoring::category::{
    any_match, contains_ci, Category, CategoryScorer, ScoringContext, DEFAULT_SCORE,
};

const TARGET_CITY: u8 = 10;
const NEARBY_CITY: u8 = 8;
const SAME_REGION: u8 = 7;
const REMOTE: u8 = 6;

/// Location match against the target city, its metro area and region.
pub struct LocationScorer;

impl CategoryScorer for LocationScorer {
    fn category(&self) -> Category {
        Category::LocationMatch
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> u8 {
        let tables = ctx.tables;
        let location = match ctx.candidate.location.as_deref() {
            Some(location) => location.to_lowercase(),
            None => {
                let headline = ctx.candidate.headline.to_lowercase();
                if headline.contains("remote") {
                    return REMOTE;
                }
                match std::iter::once(&tables.target_location)
                    .chain(&tables.nearby_locations)
                    .find(|city| contains_ci(&headline, city))
                {
                    Some(city) => city.to_lowercase(),
                    None => return DEFAULT_SCORE,
                }
            }
        };

        let mut score = DEFAULT_SCORE;
        if contains_ci(&location, &tables.target_location) {
            score = TARGET_CITY;
        } else {
            if any_match(&location, &tables.nearby_locations) {
                score = NEARBY_CITY;
            }
            if tables
                .target_regions
                .iter()
                .any(|region| contains_token(&location, region))
            {
                score = score.max(SAME_REGION);
            }
        }
        if location.contains("remote") {
            score = score.max(REMOTE);
        }
        score
    }
}

/// Substring match that must end at a word boundary, so `", ca"` does not
/// match `", canada"`. Alphanumeric needles must also start on one.
fn contains_token(haystack_lower: &str, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    let starts_alnum = needle.starts_with(|c: char| c.is_alphanumeric());
    haystack_lower.match_indices(&needle).any(|(at, _)| {
        let before = haystack_lower[..at].chars().next_back();
        let after = haystack_lower[at + needle.len()..].chars().next();
        let bounded_before = !starts_alnum || !before.is_some_and(char::is_alphanumeric);
        bounded_before && !after.is_some_and(char::is_alphanumeric)
    })
}
