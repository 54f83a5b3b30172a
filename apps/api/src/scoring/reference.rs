//! Reference tables — the read-only vocabulary every scorer matches against.
//!
//! Loaded once at startup, validated, then shared behind an `Arc`. A table
//! that fails validation is a fatal configuration error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::category::Category;

const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Category weights must sum to 1.0 (got {sum})")]
    WeightsDoNotSumToOne { sum: f64 },

    #[error("Weight for {category} must be within [0, 1] (got {weight})")]
    WeightOutOfRange { category: Category, weight: f64 },

    #[error("Reference table '{0}' must not be empty")]
    EmptyTable(&'static str),

    #[error("Failed to read reference tables from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid reference tables file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-category weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub education: f64,
    pub career_trajectory: f64,
    pub company_relevance: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub tenure: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            education: 0.20,
            career_trajectory: 0.20,
            company_relevance: 0.15,
            experience_match: 0.25,
            location_match: 0.10,
            tenure: 0.10,
        }
    }
}

impl CategoryWeights {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Education => self.education,
            Category::CareerTrajectory => self.career_trajectory,
            Category::CompanyRelevance => self.company_relevance,
            Category::ExperienceMatch => self.experience_match,
            Category::LocationMatch => self.location_match,
            Category::Tenure => self.tenure,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|c| self.weight(*c)).sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let weight = self.weight(category);
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::WeightOutOfRange { category, weight });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::WeightsDoNotSumToOne { sum });
        }
        Ok(())
    }
}

/// All lookup vocabulary used by the category scorers.
///
/// Deserializing a partial JSON document keeps defaults for omitted fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    pub elite_universities: Vec<String>,
    pub top_companies: Vec<String>,
    /// Substrings marking a company as in a relevant industry.
    pub industry_keywords: Vec<String>,
    /// Canonical ML/AI skills, used to infer skills from free text.
    pub skill_vocabulary: Vec<String>,
    /// Domain terms that can nudge the experience-match score upward.
    pub domain_keywords: Vec<String>,
    pub target_location: String,
    pub nearby_locations: Vec<String>,
    /// State or region substrings worth at least a 7 for location.
    pub target_regions: Vec<String>,
    pub weights: CategoryWeights,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            elite_universities: strings(&[
                "MIT",
                "Stanford",
                "Carnegie Mellon",
                "UC Berkeley",
                "Harvard",
                "Princeton",
                "California Institute of Technology",
                "ETH Zurich",
                "University of Oxford",
                "University of Cambridge",
                "Imperial College London",
                "University of Washington",
                "Georgia Tech",
                "University of Illinois",
                "University of Toronto",
                "University of Montreal",
                "University of Michigan",
                "Cornell University",
                "Columbia University",
                "University of Pennsylvania",
                "UCLA",
                "UCSD",
                "NYU",
                "University of Texas",
                "University of Wisconsin",
            ]),
            top_companies: strings(&[
                "Google",
                "DeepMind",
                "OpenAI",
                "Microsoft",
                "Meta",
                "Apple",
                "Amazon",
                "Anthropic",
                "Inflection AI",
                "Hugging Face",
                "Cohere",
                "Stability AI",
                "Midjourney",
                "GitHub",
                "Cursor",
                "Replit",
                "Databricks",
                "Scale AI",
                "Nvidia",
                "Intel",
                "IBM",
                "Salesforce",
                "Adobe",
                "Twitter",
                "LinkedIn",
                "Snapchat",
                "TikTok",
                "Netflix",
                "Uber",
                "Lyft",
                "Airbnb",
                "Spotify",
                "Pinterest",
                "Stripe",
                "Waymo",
                "Tesla",
                "Cruise",
                "Aurora",
            ]),
            industry_keywords: strings(&[
                "ai",
                "ml",
                "machine learning",
                "artificial intelligence",
                "tech",
                "software",
                "data",
                "research",
                "nlp",
                "computer vision",
            ]),
            skill_vocabulary: strings(&[
                "machine learning",
                "deep learning",
                "artificial intelligence",
                "neural networks",
                "natural language processing",
                "NLP",
                "computer vision",
                "reinforcement learning",
                "transformer models",
                "GPT",
                "BERT",
                "large language models",
                "LLMs",
                "PyTorch",
                "TensorFlow",
                "Keras",
                "JAX",
                "scikit-learn",
                "data science",
                "AI research",
                "model training",
                "fine-tuning",
                "prompt engineering",
                "vector embeddings",
                "transfer learning",
                "generative AI",
                "diffusion models",
                "multimodal models",
            ]),
            domain_keywords: strings(&[
                "machine learning",
                "deep learning",
                "ai",
                "artificial intelligence",
                "ml engineer",
                "research",
                "pytorch",
                "tensorflow",
                "nlp",
                "llm",
            ]),
            target_location: "Mountain View".to_string(),
            nearby_locations: strings(&[
                "San Francisco",
                "Palo Alto",
                "Menlo Park",
                "Sunnyvale",
                "Santa Clara",
                "San Jose",
                "Redwood City",
                "Cupertino",
            ]),
            target_regions: strings(&["california", ", ca", "bay area"]),
            weights: CategoryWeights::default(),
        }
    }
}

impl ReferenceTables {
    /// Loads tables from a JSON file, falling back to defaults for omitted fields.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tables: Self = serde_json::from_str(&raw)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Defaults, or the given override file when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => {
                let tables = Self::default();
                tables.validate()?;
                Ok(tables)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;

        let required: [(&'static str, &[String]); 5] = [
            ("elite_universities", &self.elite_universities),
            ("top_companies", &self.top_companies),
            ("industry_keywords", &self.industry_keywords),
            ("skill_vocabulary", &self.skill_vocabulary),
            ("domain_keywords", &self.domain_keywords),
        ];
        for (name, table) in required {
            if table.iter().all(|entry| entry.trim().is_empty()) {
                return Err(ConfigError::EmptyTable(name));
            }
        }
        if self.target_location.trim().is_empty() {
            return Err(ConfigError::EmptyTable("target_location"));
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
