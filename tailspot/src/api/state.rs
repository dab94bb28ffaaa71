use std::sync::Arc;

use crate::config::Config;
use crate::enrichment::EnrichmentClient;
use crate::ocr::OcrProvider;
use crate::recognition::{PatternCatalog, RecognitionPipeline};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ocr: OcrProvider,
    pub pipeline: RecognitionPipeline,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Arc<PatternCatalog>,
        ocr: OcrProvider,
        enrichment: EnrichmentClient,
    ) -> Self {
        let config = Arc::new(config);
        let pipeline = RecognitionPipeline::new(catalog, enrichment);

        Self {
            config,
            ocr,
            pipeline,
        }
    }
}
