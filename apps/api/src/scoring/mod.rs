// Category Scorers and the Weighted Aggregator.
// Each category lives in its own module behind the `CategoryScorer` trait;
// `ScoringEngine` runs them all and `ranking` sorts batches.

pub mod aggregate;
pub mod category;
pub mod company;
pub mod education;
pub mod engine;
pub mod handlers;
pub mod location;
pub mod ranking;
pub mod reference;
pub mod skills;
pub mod tenure;
pub mod trajectory;

#[cfg(test)]
mod test_support;

pub use engine::{ScoreResult, ScoringEngine};
pub use reference::ReferenceTables;
