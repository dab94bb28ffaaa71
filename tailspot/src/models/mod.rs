//! Core data types flowing through the recognition pipeline.

use serde::{Deserialize, Serialize};

/// Sentinel standing in for metadata the lookup service could not resolve.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Four corners of a detected text region, in the order the OCR engine
/// emits them: top-left, top-right, bottom-right, bottom-left.
pub type BoundingQuad = [Point; 4];

/// One raw OCR detection. Produced by the OCR collaborator and read-only
/// to the recognition core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub quad: BoundingQuad,
    pub text: String,
    /// OCR confidence in `0.0..=1.0`.
    pub confidence: f32,
}

impl Detection {
    pub fn new(quad: BoundingQuad, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            quad,
            text: text.into(),
            confidence,
        }
    }

    /// Builds an axis-aligned quad from a left/top/width/height box.
    pub fn quad_from_rect(left: i32, top: i32, width: i32, height: i32) -> BoundingQuad {
        [
            Point::new(left, top),
            Point::new(left + width, top),
            Point::new(left + width, top + height),
            Point::new(left, top + height),
        ]
    }
}

/// Outcome of validating a (possibly corrected) candidate string against
/// the pattern catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted { text: String, country: String },
    Rejected { text: String },
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted { .. })
    }
}

/// Aircraft metadata resolved for an accepted registration.
///
/// Field names serialize as camelCase on the wire (`typeName`,
/// `airlineName`), matching the lookup service contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentInfo {
    pub type_name: String,
    pub airline_name: String,
}

impl EnrichmentInfo {
    /// Both fields set to the `"Unknown"` sentinel.
    pub fn unknown() -> Self {
        Self {
            type_name: UNKNOWN.to_string(),
            airline_name: UNKNOWN.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.type_name == UNKNOWN && self.airline_name == UNKNOWN
    }
}

impl Default for EnrichmentInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Final per-detection result emitted by the pipeline. One record per
/// successfully validated detection; repeated registrations in one image
/// yield one record each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub quad: BoundingQuad,
    pub registration: String,
    pub confidence: f32,
    pub info: EnrichmentInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quad_from_rect_corner_order() {
        let quad = Detection::quad_from_rect(10, 20, 100, 40);
        assert_eq!(quad[0], Point::new(10, 20));
        assert_eq!(quad[1], Point::new(110, 20));
        assert_eq!(quad[2], Point::new(110, 60));
        assert_eq!(quad[3], Point::new(10, 60));
    }

    #[test]
    fn test_enrichment_info_unknown_sentinel() {
        let info = EnrichmentInfo::unknown();
        assert_eq!(info.type_name, "Unknown");
        assert_eq!(info.airline_name, "Unknown");
        assert!(info.is_unknown());
        assert_eq!(info, EnrichmentInfo::default());
    }

    #[test]
    fn test_match_record_serializes_camel_case() {
        let record = MatchRecord {
            quad: Detection::quad_from_rect(0, 0, 10, 10),
            registration: "N768SZ".to_string(),
            confidence: 0.95,
            info: EnrichmentInfo {
                type_name: "Boeing 737-800".to_string(),
                airline_name: "Example Air".to_string(),
            },
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["registration"], "N768SZ");
        assert_eq!(json["info"]["typeName"], "Boeing 737-800");
        assert_eq!(json["info"]["airlineName"], "Example Air");
    }

    #[test]
    fn test_validation_outcome_accepted() {
        let outcome = ValidationOutcome::Accepted {
            text: "EI-ABC".to_string(),
            country: "Ireland".to_string(),
        };
        assert!(outcome.is_accepted());
        assert!(!ValidationOutcome::Rejected {
            text: "XYZ123".to_string()
        }
        .is_accepted());
    }
}
