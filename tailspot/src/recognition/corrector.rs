//! OCR confusion correction for candidate registrations.

use std::sync::Arc;

use super::catalog::PatternCatalog;

/// Rewrites a candidate to fix the OCR confusions most likely to break
/// validation. Corrections are applied only when the raw (uppercased)
/// string fails the catalog; a string the OCR already got right is
/// trusted and returned unchanged.
#[derive(Debug, Clone)]
pub struct RegistrationCorrector {
    catalog: Arc<PatternCatalog>,
}

impl RegistrationCorrector {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns the corrected, always-uppercase form of `text`.
    ///
    /// `confidence` is accepted for forward compatibility with
    /// confidence-gated correction but does not influence the current
    /// behavior.
    ///
    /// Idempotent on valid output: re-running on a string that already
    /// matches the catalog takes the trust-the-OCR branch and is a no-op.
    pub fn correct(&self, text: &str, _confidence: f32) -> String {
        let upper = text.to_uppercase();

        if self.catalog.matches(&upper).is_some() {
            return upper;
        }

        let mut corrected = upper.replace('I', "1").replace('O', "0");

        // Confusions specific to alphanumeric suffixes on US registrations.
        if corrected.starts_with('N') {
            corrected = corrected.replace('S', "5").replace('Z', "2");
        }

        corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn corrector() -> RegistrationCorrector {
        RegistrationCorrector::new(Arc::new(PatternCatalog::new().unwrap()))
    }

    #[test]
    fn test_valid_input_returned_unchanged() {
        let corrector = corrector();
        // "N768SZ" already matches the US grammar: S and Z must survive.
        assert_eq!(corrector.correct("N768SZ", 0.95), "N768SZ");
        assert_eq!(corrector.correct("EI-ABC", 0.5), "EI-ABC");
    }

    #[test]
    fn test_lowercase_valid_input_uppercased_only() {
        assert_eq!(corrector().correct("n768sz", 0.95), "N768SZ");
    }

    #[test]
    fn test_i_o_substitution_then_us_suffix_rules() {
        // I→1, O→0 gives "N102S"; the N prefix then applies S→5.
        assert_eq!(corrector().correct("NIO2S", 0.8), "N1025");
    }

    #[test]
    fn test_non_us_prefix_skips_s_z_substitution() {
        // No I/O to fix and no N prefix: S and Z stay letters.
        assert_eq!(corrector().correct("XYZ1S3", 0.8), "XYZ1S3");
    }

    #[test]
    fn test_output_always_uppercase() {
        let corrector = corrector();
        for input in ["n768sz", "ei-abc", "xyz123", "nio2s"] {
            let out = corrector.correct(input, 0.5);
            assert_eq!(out, out.to_uppercase());
        }
    }

    #[test]
    fn test_idempotent_when_output_valid() {
        let corrector = corrector();
        let once = corrector.correct("NIO2S", 0.8);
        assert_eq!(corrector.correct(&once, 0.8), once);
    }

    #[test]
    fn test_confidence_does_not_alter_behavior() {
        let corrector = corrector();
        assert_eq!(
            corrector.correct("NIO2S", 0.01),
            corrector.correct("NIO2S", 0.99)
        );
    }
}
