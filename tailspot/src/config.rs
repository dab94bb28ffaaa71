use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub enrichment: EnrichmentConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub languages: String,
    pub timeout_secs: u64,
    /// Word detections below this confidence (0.0..=1.0) are dropped at the
    /// OCR boundary before they ever reach the pipeline.
    pub min_confidence: f32,
}

/// Configuration for the aircraft metadata lookup service.
///
/// The bearer token is read once at startup and injected into the client at
/// construction; a missing token disables enrichment rather than failing.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentConfig {
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory annotated scan images are written into.
    pub dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("TAILSPOT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("TAILSPOT_PORT", 5000),
                max_upload_bytes: parse_env_or("TAILSPOT_MAX_UPLOAD_BYTES", 20 * 1024 * 1024),
            },
            ocr: OcrConfig {
                languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "eng".to_string()),
                timeout_secs: parse_env_or("OCR_TIMEOUT", 60),
                min_confidence: parse_env_or("OCR_MIN_CONFIDENCE", 0.0),
            },
            enrichment: EnrichmentConfig {
                api_token: env::var("AERODATABOX_API_TOKEN").ok(),
                base_url: env::var("AERODATABOX_BASE_URL").ok(),
                timeout_secs: parse_env_or("ENRICHMENT_TIMEOUT", 30),
            },
            output: OutputConfig {
                dir: env::var("TAILSPOT_OUTPUT_DIR").unwrap_or_else(|_| "static".to_string()),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
