use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::EnrichmentConfig;
use crate::models::EnrichmentInfo;

const DEFAULT_BASE_URL: &str = "https://api.magicapi.dev/api/v1/aedbx/aerodatabox";

#[derive(Clone, Debug)]
enum EnrichmentBackend {
    Api {
        client: Client,
        api_token: String,
        base_url: String,
    },
    Disabled {
        reason: String,
    },
}

/// Resolves an accepted registration to aircraft metadata over the lookup
/// service.
///
/// Every failure mode is soft: transport errors, non-success statuses, and
/// unparseable bodies are logged and replaced with sentinel
/// [`EnrichmentInfo`] values. A missing bearer token at construction
/// disables the backend instead of erroring, so the pipeline keeps working
/// without metadata. Lookups are single-shot; there is no retry.
#[derive(Clone, Debug)]
pub struct EnrichmentClient {
    backend: EnrichmentBackend,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AircraftResponse {
    type_name: Option<String>,
    airline_name: Option<String>,
}

impl EnrichmentClient {
    pub fn new(config: &EnrichmentConfig) -> Self {
        let backend = match &config.api_token {
            Some(token) => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

                match Client::builder()
                    .timeout(Duration::from_secs(config.timeout_secs))
                    .build()
                {
                    Ok(client) => {
                        info!("Aircraft metadata enrichment initialized");
                        EnrichmentBackend::Api {
                            client,
                            api_token: token.clone(),
                            base_url,
                        }
                    }
                    Err(e) => {
                        let reason = format!("Failed to create HTTP client: {e}");
                        warn!("{}", reason);
                        EnrichmentBackend::Disabled { reason }
                    }
                }
            }
            None => {
                let reason = "AERODATABOX_API_TOKEN not set".to_string();
                warn!("Enrichment disabled: {}", reason);
                EnrichmentBackend::Disabled { reason }
            }
        };

        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.backend, EnrichmentBackend::Api { .. })
    }

    /// Looks up aircraft type and operating airline for `registration`.
    /// Never fails; unresolved fields come back as the `"Unknown"` sentinel.
    pub async fn lookup(&self, registration: &str) -> EnrichmentInfo {
        let (client, api_token, base_url) = match &self.backend {
            EnrichmentBackend::Api {
                client,
                api_token,
                base_url,
            } => (client, api_token, base_url),
            EnrichmentBackend::Disabled { reason } => {
                tracing::debug!(registration = %registration, reason = %reason, "Enrichment disabled");
                return EnrichmentInfo::unknown();
            }
        };

        let url = format!(
            "{base_url}/aircrafts/Reg/{registration}?withImage=false&withRegistrations=false"
        );

        let response = match client
            .get(&url)
            .header("Authorization", format!("Bearer {api_token}"))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(registration = %registration, error = %e, "Enrichment request failed");
                return EnrichmentInfo::unknown();
            }
        };

        if !response.status().is_success() {
            warn!(
                registration = %registration,
                status = %response.status(),
                "Enrichment request returned non-success status"
            );
            return EnrichmentInfo::unknown();
        }

        match response.json::<AircraftResponse>().await {
            Ok(data) => EnrichmentInfo {
                type_name: data.type_name.unwrap_or_else(|| crate::models::UNKNOWN.to_string()),
                airline_name: data
                    .airline_name
                    .unwrap_or_else(|| crate::models::UNKNOWN.to_string()),
            },
            Err(e) => {
                warn!(registration = %registration, error = %e, "Failed to parse enrichment response");
                EnrichmentInfo::unknown()
            }
        }
    }
}
