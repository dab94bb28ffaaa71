//! Scan handlers.
//!
//! `POST /api/v1/scans` accepts a multipart image upload, runs OCR, feeds
//! the detections through the recognition pipeline, writes an annotated
//! copy of the image under a fresh UUID, and returns the match records.

use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, TailspotError};
use crate::models::MatchRecord;
use crate::render;

use super::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub matches: Vec<MatchRecord>,
    pub detection_count: usize,
    /// Path of the annotated image, unique per scan.
    pub annotated_image: String,
    pub elapsed_ms: u64,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn create_scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanResponse>> {
    let started = Instant::now();

    let mut image_bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| TailspotError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| TailspotError::Validation(format!("Failed to read upload: {e}")))?;
            image_bytes = Some(bytes.to_vec());
            break;
        }
    }

    let image_bytes = image_bytes
        .filter(|b| !b.is_empty())
        .ok_or_else(|| TailspotError::Validation("Missing 'file' field".to_string()))?;

    let detections = state.ocr.detect(&image_bytes).await?;
    tracing::debug!(count = detections.len(), "OCR produced detections");

    let matches = state.pipeline.process(&detections).await;

    let annotated = render::annotate(&image_bytes, &matches)?;
    let output_path = write_annotated(&state, &annotated).await?;

    tracing::info!(
        matches = matches.len(),
        detections = detections.len(),
        output = %output_path,
        "Scan complete"
    );

    Ok(Json(ScanResponse {
        matches,
        detection_count: detections.len(),
        annotated_image: output_path,
        elapsed_ms: started.elapsed().as_millis() as u64,
    }))
}

async fn write_annotated(state: &AppState, annotated: &[u8]) -> Result<String> {
    let dir = &state.config.output.dir;
    tokio::fs::create_dir_all(dir).await?;

    let path = format!("{}/{}.png", dir.trim_end_matches('/'), Uuid::new_v4());
    tokio::fs::write(&path, annotated).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::{Config, EnrichmentConfig, OcrConfig, OutputConfig, ServerConfig};
    use crate::enrichment::EnrichmentClient;
    use crate::ocr::OcrProvider;
    use crate::recognition::PatternCatalog;

    // Built literally rather than from the environment so env-mutating
    // tests elsewhere in this binary cannot race with it.
    fn state_with_output_dir(dir: &str) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                max_upload_bytes: 1024 * 1024,
            },
            ocr: OcrConfig {
                languages: "eng".to_string(),
                timeout_secs: 5,
                min_confidence: 0.0,
            },
            enrichment: EnrichmentConfig {
                api_token: None,
                base_url: None,
                timeout_secs: 5,
            },
            output: OutputConfig {
                dir: dir.to_string(),
            },
        };
        let catalog = Arc::new(PatternCatalog::new().unwrap());
        let ocr = OcrProvider::new(&config.ocr);
        let enrichment = EnrichmentClient::new(&config.enrichment);
        AppState::new(config, catalog, ocr, enrichment)
    }

    #[tokio::test]
    async fn test_write_annotated_uses_per_invocation_names() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with_output_dir(dir.path().to_str().unwrap());

        let first = write_annotated(&state, b"one").await.unwrap();
        let second = write_annotated(&state, b"two").await.unwrap();

        // Concurrent scans must never race on a shared artifact.
        assert_ne!(first, second);
        assert!(std::path::Path::new(&first).exists());
        assert!(std::path::Path::new(&second).exists());
    }
}
