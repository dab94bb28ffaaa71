//! Cheap plausibility pre-filter, run before correction and validation.

/// Registration-like strings are short and mixed alphanumeric; anything
/// else is skipped before the heavier correction/validation steps run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateFilter;

impl CandidateFilter {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when `text` is plausibly a registration.
    ///
    /// Rules, in order: length must be within 4..=7 characters; no
    /// whitespace anywhere; not composed entirely of alphabetic characters
    /// (pure words like signage text are assumed not to be registrations).
    pub fn is_potential_candidate(&self, text: &str) -> bool {
        let len = text.chars().count();
        if !(4..=7).contains(&len) {
            return false;
        }

        if text.chars().any(char::is_whitespace) {
            return false;
        }

        if text.chars().all(char::is_alphabetic) {
            return false;
        }

        true
    }
}
