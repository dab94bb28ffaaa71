//! The closed set of country registration grammars and the combined matcher.
//!
//! All 32 grammars are compiled once at startup into a single anchored
//! [`regex::RegexSet`] and shared read-only for the life of the process.
//! The catalog is never mutated after construction.

use regex::RegexSet;

use crate::error::{Result, TailspotError};

/// One country's registration grammar: a literal prefix/suffix structure
/// plus digit/letter-count constraints, matched against the whole string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPattern {
    pub country: &'static str,
    pub grammar: &'static str,
}

/// Grammar table, in declaration order. Order matters: when two grammars
/// structurally overlap for the same literal string, the first-declared
/// entry wins.
///
/// The US grammar encodes "no I or O anywhere" structurally: digits carry
/// no letters, and the suffix class `[A-HJ-NP-Z]` excludes I and O.
const COUNTRY_PATTERNS: &[CountryPattern] = &[
    CountryPattern {
        country: "United States",
        grammar: r"N[1-9][0-9]{0,4}[A-HJ-NP-Z]{0,2}",
    },
    CountryPattern {
        country: "Ireland",
        grammar: r"EI-[A-Z]{3}",
    },
    CountryPattern {
        country: "Ireland (corporate)",
        grammar: r"EJ-[A-Z]{4}",
    },
    CountryPattern {
        country: "United Arab Emirates",
        grammar: r"A6-[A-Z]{3}",
    },
    CountryPattern {
        country: "Egypt",
        grammar: r"SU-[A-Z]{3}",
    },
    CountryPattern {
        country: "Egypt (extended)",
        grammar: r"SU-[A-Z]{3}[A-Z0-9]{0,3}",
    },
    CountryPattern {
        country: "Panama",
        grammar: r"HP-[0-9]{4}[A-Z]{3}",
    },
    CountryPattern {
        country: "Belgium",
        grammar: r"OO-[A-Z]{3}",
    },
    CountryPattern {
        country: "United Kingdom",
        grammar: r"G-[A-Z]{4}",
    },
    CountryPattern {
        country: "El Salvador",
        grammar: r"YS-[A-Z]{3}",
    },
    CountryPattern {
        country: "Costa Rica",
        grammar: r"TI-[A-Z]{3}",
    },
    CountryPattern {
        country: "Austria",
        grammar: r"OE-[A-Z]{3}",
    },
    CountryPattern {
        country: "Japan",
        grammar: r"JA[0-9]{4}",
    },
    CountryPattern {
        country: "Japan",
        grammar: r"JA[0-9]{3}[A-Z]",
    },
    CountryPattern {
        country: "Japan",
        grammar: r"JA[0-9]{2}[A-Z]{2}",
    },
    CountryPattern {
        country: "India",
        grammar: r"VT-[A-Z]{3}",
    },
    CountryPattern {
        country: "France",
        grammar: r"F-[A-Z]{4}",
    },
    CountryPattern {
        country: "China",
        grammar: r"B-[0-9]{4}",
    },
    CountryPattern {
        country: "Canada",
        grammar: r"C-F[A-Z]{3}",
    },
    CountryPattern {
        country: "Mexico",
        grammar: r"XA-[A-Z]{3}",
    },
    CountryPattern {
        country: "Ethiopia",
        grammar: r"ET-[A-Z]{3}",
    },
    CountryPattern {
        country: "Iceland",
        grammar: r"TF-[A-Z]{3}",
    },
    CountryPattern {
        country: "Italy",
        grammar: r"I-[A-Z]{4}",
    },
    CountryPattern {
        country: "Turkey",
        grammar: r"TC-[A-Z]{3}",
    },
    CountryPattern {
        country: "Portugal",
        grammar: r"CS-[A-Z0-9]{3}",
    },
    CountryPattern {
        country: "Switzerland",
        grammar: r"HB-[A-Z]{3}",
    },
    CountryPattern {
        country: "Sweden",
        grammar: r"SE-[A-Z]{3}",
    },
    CountryPattern {
        country: "Saudi Arabia",
        grammar: r"HZ-[A-Z]{3}",
    },
    CountryPattern {
        country: "Morocco",
        grammar: r"CN-[A-Z]{3}",
    },
    CountryPattern {
        country: "Germany",
        grammar: r"D-[A-Z]{4}",
    },
    CountryPattern {
        country: "South Korea",
        grammar: r"HL[0-9]{4}",
    },
    CountryPattern {
        country: "Netherlands",
        grammar: r"PH-[A-Z]{3}",
    },
];

/// Combined whole-string matcher over the fixed grammar table.
#[derive(Debug)]
pub struct PatternCatalog {
    set: RegexSet,
}

impl PatternCatalog {
    pub fn new() -> Result<Self> {
        let anchored = COUNTRY_PATTERNS
            .iter()
            .map(|p| format!("^(?:{})$", p.grammar));
        let set = RegexSet::new(anchored)
            .map_err(|e| TailspotError::Catalog(format!("Failed to compile grammars: {e}")))?;
        Ok(Self { set })
    }

    /// Matches `text` in full against the combined grammar set.
    ///
    /// When more than one grammar matches the same literal string, the
    /// lowest catalog index wins (declaration order is the tie-break).
    pub fn matches(&self, text: &str) -> Option<&'static CountryPattern> {
        self.set
            .matches(text)
            .iter()
            .next()
            .map(|idx| &COUNTRY_PATTERNS[idx])
    }

    pub fn len(&self) -> usize {
        COUNTRY_PATTERNS.len()
    }

    pub fn is_empty(&self) -> bool {
        COUNTRY_PATTERNS.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PatternCatalog {
        PatternCatalog::new().unwrap()
    }

    #[test]
    fn test_catalog_holds_exactly_32_grammars() {
        assert_eq!(catalog().len(), 32);
    }

    #[test]
    fn test_no_duplicate_grammars() {
        let mut grammars: Vec<&str> = COUNTRY_PATTERNS.iter().map(|p| p.grammar).collect();
        grammars.sort_unstable();
        grammars.dedup();
        assert_eq!(grammars.len(), COUNTRY_PATTERNS.len());
    }

    #[test]
    fn test_us_registration_matches() {
        let catalog = catalog();
        assert_eq!(catalog.matches("N768SZ").unwrap().country, "United States");
        assert_eq!(catalog.matches("N1025").unwrap().country, "United States");
        assert_eq!(catalog.matches("N1").unwrap().country, "United States");
    }

    #[test]
    fn test_us_registration_excludes_i_and_o() {
        let catalog = catalog();
        assert!(catalog.matches("N1O25").is_none());
        assert!(catalog.matches("N12I").is_none());
    }

    #[test]
    fn test_us_registration_rejects_leading_zero() {
        assert!(catalog().matches("N0123").is_none());
    }

    #[test]
    fn test_common_country_grammars() {
        let catalog = catalog();
        assert_eq!(catalog.matches("EI-ABC").unwrap().country, "Ireland");
        assert_eq!(
            catalog.matches("G-ABCD").unwrap().country,
            "United Kingdom"
        );
        assert_eq!(catalog.matches("JA8089").unwrap().country, "Japan");
        assert_eq!(catalog.matches("JA12AB").unwrap().country, "Japan");
        assert_eq!(catalog.matches("D-ABCD").unwrap().country, "Germany");
        assert_eq!(catalog.matches("HL7201").unwrap().country, "South Korea");
        assert_eq!(catalog.matches("C-FABC").unwrap().country, "Canada");
        assert_eq!(catalog.matches("CS-1A2").unwrap().country, "Portugal");
    }

    #[test]
    fn test_whole_string_match_only() {
        let catalog = catalog();
        // Substring hits must not count: the matcher is fully anchored.
        assert!(catalog.matches("XEI-ABC").is_none());
        assert!(catalog.matches("EI-ABCX").is_none());
    }

    #[test]
    fn test_overlapping_grammars_first_declared_wins() {
        // "SU-ABC" satisfies both Egypt ranges; the base range is declared
        // first and takes the tie-break.
        assert_eq!(catalog().matches("SU-ABC").unwrap().country, "Egypt");
        // The extended range still catches what the base range cannot.
        assert_eq!(
            catalog().matches("SU-ABC12").unwrap().country,
            "Egypt (extended)"
        );
    }

    #[test]
    fn test_non_registrations_rejected() {
        let catalog = catalog();
        assert!(catalog.matches("XYZ123").is_none());
        assert!(catalog.matches("").is_none());
        assert!(catalog.matches("AMERICAN").is_none());
    }
}
