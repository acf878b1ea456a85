use crate::api::error::ApiError;
use crate::api::filters::PropertyFilters;
use crate::api::traits::PropertyApi;
use crate::config::Config;
use crate::models::{Health, Property, PropertyPage, Statistics};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::error;

/// HTTP client for the property API backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration. The base URL's trailing slash is
    /// trimmed so endpoint paths can be appended uniformly.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a GET against `endpoint` and decode the JSON body.
    ///
    /// Every failure is logged with the endpoint before propagating, then
    /// returned to the caller unchanged. Nothing is retried here.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let result = self.fetch(&url, query).await;
        if let Err(err) = &result {
            error!(endpoint, %err, "API request failed");
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), reason, &body));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PropertyApi for ApiClient {
    async fn get_properties(&self, filters: &PropertyFilters) -> Result<PropertyPage, ApiError> {
        self.get_json("/properties", &filters.to_query()).await
    }

    async fn get_property(&self, id: i64) -> Result<Property, ApiError> {
        self.get_json(&format!("/properties/{id}"), &[]).await
    }

    async fn get_statistics(&self) -> Result<Statistics, ApiError> {
        self.get_json("/statistics", &[]).await
    }

    async fn get_health(&self) -> Result<Health, ApiError> {
        self.get_json("/health", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let config = Config {
            api_base_url: "http://localhost:8000/".to_string(),
            request_timeout_secs: 10,
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
