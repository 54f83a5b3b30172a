//! Keyword extraction for job descriptions.
//!
//! Technical vocabulary hits come first (vocabulary order), followed by the
//! most frequent remaining tokens. Ties are broken by first-seen position so
//! the output is stable for identical input.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

const MAX_KEYWORDS: usize = 15;
const TOP_FREQUENT: usize = 20;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation regex is valid"));

const STOPWORDS: &[&str] = &[
    "the", "and", "to", "of", "a", "in", "for", "with", "on", "at", "from", "by", "about", "as",
    "into", "like", "through", "after", "over", "between", "out", "is", "am", "are", "was", "were",
    "be", "been", "being", "have", "has", "had", "do", "does", "did", "but", "if", "or", "because",
    "until", "while", "that", "this", "these", "those", "then", "than", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "too", "very", "can", "will", "just", "should",
    "now", "role", "we", "our", "you", "your",
];

/// Always reported when present anywhere in the lowercased posting.
const TECHNICAL_TERMS: &[&str] = &[
    // languages
    "python", "javascript", "java", "c++", "typescript", "ruby", "go", "rust", "php", "scala",
    "kotlin",
    // frameworks
    "react", "angular", "vue", "django", "flask", "spring", "node", "express", "laravel", "rails",
    // data science / ml
    "machine learning", "deep learning", "tensorflow", "pytorch", "keras", "sklearn", "pandas",
    "numpy", "neural networks", "nlp", "computer vision", "reinforcement learning", "data mining",
    "statistics",
    // cloud
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "cloud",
    // databases
    "sql", "nosql", "mongodb", "postgresql", "mysql", "oracle", "cassandra", "redis",
    "elasticsearch",
    // practices
    "rest", "api", "microservices", "ci/cd", "git", "agile", "scrum", "devops", "testing",
];

/// Extracts up to 15 keywords from a job description.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");

    let stopwords: HashSet<&str> = STOPWORDS.iter().copied().collect();

    // token -> (count, first position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() > 2 && !stopwords.contains(t))
        .enumerate()
    {
        counts.entry(token).or_insert((0, position)).0 += 1;
    }

    let mut frequent: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    frequent.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let found_terms = TECHNICAL_TERMS
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .map(str::to_string);

    let top_words = frequent
        .into_iter()
        .take(TOP_FREQUENT)
        .filter(|(_, count, _)| *count > 1)
        .map(|(token, _, _)| token.to_string());

    let mut seen = HashSet::new();
    found_terms
        .chain(top_words)
        .filter(|kw| seen.insert(kw.clone()))
        .take(MAX_KEYWORDS)
        .collect()
}
