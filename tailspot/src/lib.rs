//! Tailspot: aircraft tail registration recognition service.
//!
//! Extracts registrations from OCR text detections, corrects common OCR
//! confusions, validates against 32 country registration grammars, and
//! enriches accepted matches with aircraft metadata from a remote lookup
//! service.

pub mod api;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod models;
pub mod ocr;
pub mod recognition;
pub mod render;
