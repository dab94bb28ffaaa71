//! Acceptance decision for corrected candidates.

use std::sync::Arc;

use super::catalog::PatternCatalog;
use crate::models::ValidationOutcome;

/// Wraps a catalog hit or miss as a [`ValidationOutcome`]. Pure; no side
/// effects.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    catalog: Arc<PatternCatalog>,
}

impl PatternValidator {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog }
    }

    pub fn validate(&self, text: &str) -> ValidationOutcome {
        match self.catalog.matches(text) {
            Some(pattern) => ValidationOutcome::Accepted {
                text: text.to_string(),
                country: pattern.country.to_string(),
            },
            None => ValidationOutcome::Rejected {
                text: text.to_string(),
            },
        }
    }
}
