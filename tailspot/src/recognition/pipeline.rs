//! Per-detection orchestration: filter, correct, validate, enrich.

use std::sync::Arc;

use tracing::{debug, info};

use super::catalog::PatternCatalog;
use super::corrector::RegistrationCorrector;
use super::filter::CandidateFilter;
use super::validator::PatternValidator;
use crate::enrichment::EnrichmentClient;
use crate::models::{Detection, MatchRecord, ValidationOutcome};

/// Sequences the recognition stages for one image's worth of detections.
///
/// Detections are processed strictly in input order, one at a time. Each
/// detection terminates as skipped (failed the pre-filter), rejected
/// (matched no grammar after correction), or enriched (one [`MatchRecord`]
/// emitted). Exactly one enrichment call is made per accepted detection
/// and none for the others. Processing never fails: an empty input yields
/// an empty result, and enrichment failures degrade to sentinel metadata
/// inside the client.
#[derive(Clone)]
pub struct RecognitionPipeline {
    filter: CandidateFilter,
    corrector: RegistrationCorrector,
    validator: PatternValidator,
    enrichment: EnrichmentClient,
}

impl RecognitionPipeline {
    pub fn new(catalog: Arc<PatternCatalog>, enrichment: EnrichmentClient) -> Self {
        Self {
            filter: CandidateFilter::new(),
            corrector: RegistrationCorrector::new(catalog.clone()),
            validator: PatternValidator::new(catalog),
            enrichment,
        }
    }

    pub async fn process(&self, detections: &[Detection]) -> Vec<MatchRecord> {
        let mut records = Vec::new();

        for detection in detections {
            if !self.filter.is_potential_candidate(&detection.text) {
                debug!(text = %detection.text, "Skipped: not a potential registration");
                continue;
            }

            let corrected = self.corrector.correct(&detection.text, detection.confidence);
            debug!(
                original = %detection.text,
                corrected = %corrected,
                confidence = detection.confidence,
                "Corrected candidate"
            );

            match self.validator.validate(&corrected) {
                ValidationOutcome::Accepted { text, country } => {
                    info!(registration = %text, country = %country, "Valid registration");
                    let info = self.enrichment.lookup(&text).await;
                    records.push(MatchRecord {
                        quad: detection.quad,
                        registration: text,
                        confidence: detection.confidence,
                        info,
                    });
                }
                ValidationOutcome::Rejected { text } => {
                    debug!(text = %text, "Rejected: matches no grammar");
                }
            }
        }

        records
    }
}
