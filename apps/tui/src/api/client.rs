//! HTTP client for the wells API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::api::models::{Company, PozoDetail, ProductionAggregates, ProductionMonthly};
use crate::api::params::ProductionFilters;
use crate::api::response::{error_detail, Envelope};
use crate::config::ApiConfig;

const API_KEY_HEADER: &str = "X-API-Key";

/// Read-only access to well records and production data.
#[async_trait]
pub trait WellsApi: Send + Sync {
    /// All wells, up to `limit` records.
    async fn wells(&self, limit: usize) -> Result<Vec<PozoDetail>, ApiError>;

    /// Detail of a single well; `None` when the backend has no record.
    async fn well(&self, well_id: &str) -> Result<Option<PozoDetail>, ApiError>;

    /// Monthly production history of a well.
    async fn monthly_production(&self, well_id: &str)
        -> Result<Vec<ProductionMonthly>, ApiError>;

    /// Companies with their well counts, optionally narrowed by a search term.
    async fn companies(&self, query: Option<&str>) -> Result<Vec<Company>, ApiError>;

    /// Aggregated production for the given filters.
    async fn production_aggregates(
        &self,
        filters: &ProductionFilters,
    ) -> Result<Option<ProductionAggregates>, ApiError>;
}

/// reqwest-backed [`WellsApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::Config(format!("invalid API_URL {:?}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "API_URL {:?} cannot be used as a base URL",
                config.base_url
            )));
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Config("API_URL cannot be used as a base URL".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<(StatusCode, String), ApiError> {
        let url = self.endpoint(segments)?;
        debug!(%url, ?query, "GET");

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn get_envelope(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Envelope, ApiError> {
        let (status, body) = self.get(segments, query).await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), path = ?segments, "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: format!("Request failed with status {}", status.as_u16()),
            });
        }
        Ok(Envelope::parse(&body)?)
    }
}

#[async_trait]
impl WellsApi for ApiClient {
    async fn wells(&self, limit: usize) -> Result<Vec<PozoDetail>, ApiError> {
        let wells: Vec<PozoDetail> = self
            .get_envelope(&["pozos"], &[("limit", limit.to_string())])
            .await?
            .into_list()?;
        debug!(count = wells.len(), "wells loaded");
        Ok(wells)
    }

    async fn well(&self, well_id: &str) -> Result<Option<PozoDetail>, ApiError> {
        Ok(self
            .get_envelope(&["pozos", well_id], &[])
            .await?
            .into_first()?)
    }

    async fn monthly_production(
        &self,
        well_id: &str,
    ) -> Result<Vec<ProductionMonthly>, ApiError> {
        let (status, body) = self
            .get(&["pozos", well_id, "produccion-mensual"], &[])
            .await?;

        if !status.is_success() {
            let message = monthly_error_message(status.as_u16(), &body);
            warn!(status = status.as_u16(), well_id, %message, "monthly production failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Envelope::parse(&body)?.into_rows()?)
    }

    async fn companies(&self, query: Option<&str>) -> Result<Vec<Company>, ApiError> {
        let params: Vec<(&str, String)> = query
            .filter(|q| !q.is_empty())
            .map(|q| vec![("q", q.to_string())])
            .unwrap_or_default();

        Ok(self
            .get_envelope(&["pozos", "empresas"], &params)
            .await?
            .into_list()?)
    }

    async fn production_aggregates(
        &self,
        filters: &ProductionFilters,
    ) -> Result<Option<ProductionAggregates>, ApiError> {
        if !filters.has_selection() {
            return Ok(None);
        }

        Ok(self
            .get_envelope(&["pozos", "produccion"], &filters.query_pairs())
            .await?
            .into_object()?)
    }
}

/// Prefers the backend's `detail` over a generic message.
pub fn monthly_error_message(status: u16, body: &str) -> String {
    error_detail(body).unwrap_or_else(|| {
        format!("Error al cargar producción mensual (status {status})")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            api_key: Some("secret".to_string()),
            timeout: Duration::from_secs(5),
            max_wells: 10,
        }
    }

    #[test]
    fn endpoint_appends_encoded_segments() -> Result<(), ApiError> {
        let client = ApiClient::new(&config("https://api.example.com/v1/"))?;
        let url = client.endpoint(&["pozos", "AR 12/3", "produccion-mensual"])?;
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/pozos/AR%2012%2F3/produccion-mensual"
        );

        let client = ApiClient::new(&config("https://api.example.com"))?;
        assert_eq!(
            client.endpoint(&["pozos", "empresas"])?.as_str(),
            "https://api.example.com/pozos/empresas"
        );
        Ok(())
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        assert!(matches!(
            ApiClient::new(&config("not a url")),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            ApiClient::new(&config("mailto:ops@example.com")),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn monthly_error_uses_detail_when_present() {
        assert_eq!(
            monthly_error_message(404, r#"{"detail":"Sin datos para el pozo"}"#),
            "Sin datos para el pozo"
        );
        assert_eq!(
            monthly_error_message(500, "Internal Server Error"),
            "Error al cargar producción mensual (status 500)"
        );
    }

    #[tokio::test]
    async fn aggregates_without_selection_skip_the_request() -> Result<(), ApiError> {
        // Unroutable base URL: any request would fail.
        let client = ApiClient::new(&config("http://127.0.0.1:9"))?;
        let result = client
            .production_aggregates(&ProductionFilters::default())
            .await?;
        assert!(result.is_none());
        Ok(())
    }
}
