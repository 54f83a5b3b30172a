use crate::scoring::category::{
    any_match, Category, CategoryScorer, ScoringContext, DEFAULT_SCORE, MAX_SCORE,
};

/// Degree keywords matched as substrings of the degree text, strongest first.
const DEGREE_LEVELS: &[(&str, u8)] = &[
    ("phd", 10),
    ("doctorate", 10),
    ("ph.d", 10),
    ("master", 8),
    ("ms", 8),
    ("msc", 8),
    ("ma", 8),
    ("bachelor", 6),
    ("bs", 6),
    ("bsc", 6),
    ("ba", 6),
];

const ELITE_SCHOOL: u8 = 10;
const STANDARD_SCHOOL: u8 = 6;
const PROGRESSION: u8 = 8;

/// Education: best of degree level, school prestige, and degree progression.
pub struct EducationScorer;

impl CategoryScorer for EducationScorer {
    fn category(&self) -> Category {
        Category::Education
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> u8 {
        let education = &ctx.candidate.education;
        if education.is_empty() {
            return DEFAULT_SCORE;
        }

        let mut degree_score = 0;
        let mut school_score = 0;

        for entry in education {
            if let Some(degree) = entry.degree() {
                degree_score = degree_score.max(degree_level(degree));
            }
            if let Some(school) = entry.school() {
                let prestige = if any_match(school, &ctx.tables.elite_universities) {
                    ELITE_SCHOOL
                } else {
                    STANDARD_SCHOOL
                };
                school_score = school_score.max(prestige);
            }
        }

        let progression_score = if education.len() >= 2 { PROGRESSION } else { 0 };

        match degree_score.max(school_score).max(progression_score) {
            0 => DEFAULT_SCORE,
            best => best.min(MAX_SCORE),
        }
    }
}

fn degree_level(degree: &str) -> u8 {
    let degree = degree.to_lowercase();
    DEGREE_LEVELS
        .iter()
        .filter(|(keyword, _)| degree.contains(keyword))
        .map(|(_, level)| *level)
        .max()
        .unwrap_or(0)
}
