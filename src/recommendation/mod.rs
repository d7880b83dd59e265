//! Recommendation and recovery suggestion generation

pub mod generator;
pub mod templates;

pub use generator::{RecommendationGenerator, RecommendationSet};
pub use templates::{recovery_template, GENERIC_CHECKLIST};
