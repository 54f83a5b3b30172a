// Requirement Extractor: free-text job description → RequirementRecord.

pub mod extractor;
pub mod handlers;
pub mod keywords;

pub use extractor::{extract_requirements, RequirementRecord};
