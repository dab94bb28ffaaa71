use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TailspotError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("Enrichment error: {0}")]
    Enrichment(String),

    #[error("Pattern catalog error: {0}")]
    Catalog(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for TailspotError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TailspotError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            TailspotError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            TailspotError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            TailspotError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            TailspotError::Image(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            TailspotError::Ocr(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            TailspotError::OcrUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            TailspotError::Enrichment(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            TailspotError::Catalog(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            TailspotError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, TailspotError>;
