use std::sync::Arc;
use std::time::Duration;

use leptess::LepTess;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::error::{Result, TailspotError};
use crate::models::Detection;

enum OcrBackend {
    Local { tesseract: Arc<Mutex<LepTess>> },
    Unavailable { reason: String },
}

/// Word-level text detector backed by Tesseract.
///
/// Produces one [`Detection`] per recognized word, with its bounding quad
/// and a confidence scaled into `0.0..=1.0`. Initialization failures
/// degrade to an unavailable backend instead of aborting startup.
pub struct OcrProvider {
    backend: OcrBackend,
    config: OcrConfig,
}

fn create_tesseract(languages: &str) -> std::result::Result<LepTess, String> {
    LepTess::new(None, languages).map_err(|e| e.to_string())
}

/// Parses Tesseract TSV output into word-level detections.
///
/// Word rows carry level 5 and a confidence in 0..=100; rows below
/// `min_confidence` (already scaled to 0..=1) and structural rows are
/// dropped. Input order is preserved.
fn parse_tsv(tsv: &str, min_confidence: f32) -> Vec<Detection> {
    let mut detections = Vec::new();

    for line in tsv.lines() {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 12 || fields[0] != "5" {
            continue;
        }

        let (Ok(left), Ok(top), Ok(width), Ok(height)) = (
            fields[6].parse::<i32>(),
            fields[7].parse::<i32>(),
            fields[8].parse::<i32>(),
            fields[9].parse::<i32>(),
        ) else {
            continue;
        };

        let Ok(conf) = fields[10].parse::<f32>() else {
            continue;
        };
        if conf < 0.0 {
            continue;
        }

        let text = fields[11].trim();
        if text.is_empty() {
            continue;
        }

        let confidence = (conf / 100.0).clamp(0.0, 1.0);
        if confidence < min_confidence {
            continue;
        }

        detections.push(Detection::new(
            Detection::quad_from_rect(left, top, width, height),
            text,
            confidence,
        ));
    }

    detections
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Self {
        let backend = match create_tesseract(&config.languages) {
            Ok(lt) => {
                info!(languages = %config.languages, "Tesseract OCR initialized");
                OcrBackend::Local {
                    tesseract: Arc::new(Mutex::new(lt)),
                }
            }
            Err(e) => {
                let reason = format!("Tesseract not available: {e}");
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Self {
            backend,
            config: config.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }

    pub async fn detect(&self, image_bytes: &[u8]) -> Result<Vec<Detection>> {
        let timeout_duration = Duration::from_secs(self.config.timeout_secs);

        let result =
            tokio::time::timeout(timeout_duration, self.detect_internal(image_bytes)).await;

        match result {
            Ok(inner_result) => inner_result,
            Err(_) => Err(TailspotError::Ocr(format!(
                "OCR operation timed out after {} seconds",
                self.config.timeout_secs
            ))),
        }
    }

    async fn detect_internal(&self, image_bytes: &[u8]) -> Result<Vec<Detection>> {
        match &self.backend {
            OcrBackend::Local { tesseract } => {
                let bytes = image_bytes.to_vec();
                let tesseract = Arc::clone(tesseract);
                let min_confidence = self.config.min_confidence;

                let detections = tokio::task::spawn_blocking(move || {
                    let mut lt = tesseract.blocking_lock();
                    lt.set_image_from_mem(&bytes)
                        .map_err(|e| TailspotError::Ocr(format!("Failed to set image: {e}")))?;
                    let tsv = lt
                        .get_tsv_text(0)
                        .map_err(|e| TailspotError::Ocr(format!("Failed to read TSV: {e}")))?;
                    Ok::<_, TailspotError>(parse_tsv(&tsv, min_confidence))
                })
                .await
                .map_err(|e| TailspotError::Ocr(format!("OCR task panicked: {e}")))??;

                Ok(detections)
            }
            OcrBackend::Unavailable { reason } => {
                Err(TailspotError::OcrUnavailable(reason.clone()))
            }
        }
    }
}

impl Clone for OcrProvider {
    fn clone(&self) -> Self {
        match &self.backend {
            OcrBackend::Local { tesseract } => Self {
                backend: OcrBackend::Local {
                    tesseract: Arc::clone(tesseract),
                },
                config: self.config.clone(),
            },
            OcrBackend::Unavailable { reason } => Self {
                backend: OcrBackend::Unavailable {
                    reason: reason.clone(),
                },
                config: self.config.clone(),
            },
        }
    }
}
