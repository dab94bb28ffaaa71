//! The registration recognition core: candidate filtering, OCR-error
//! correction, multi-country pattern validation, and per-detection
//! orchestration.

pub mod catalog;
pub mod corrector;
pub mod filter;
pub mod pipeline;
pub mod validator;

pub use catalog::{CountryPattern, PatternCatalog};
pub use corrector::RegistrationCorrector;
pub use filter::CandidateFilter;
pub use pipeline::RecognitionPipeline;
pub use validator::PatternValidator;
