use crate::classifiers::uv_risk;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Coordinates, UvInfo};
use crate::upstream::{endpoint, fetch_json, Upstream};
use reqwest::Client;
use serde::Deserialize;

/// Client for the OpenUV real-time index.
///
/// OpenUV is queried by coordinates, so callers resolve the city first.
#[derive(Clone)]
pub struct UvClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct OpenUvResponse {
    result: OpenUvResult,
}

#[derive(Debug, Deserialize)]
struct OpenUvResult {
    uv: f64,
}

impl UvClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(client: &Client, config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(
            client.clone(),
            config.openuv_base_url.clone(),
            config.openuv_key()?,
        ))
    }

    pub async fn current(&self, coordinates: Coordinates) -> Result<UvInfo, AppError> {
        let url = endpoint(Upstream::Uv, &self.base_url, &["api", "v1", "uv"])?;
        tracing::info!(
            "Fetching UV index at lat={}, lng={}",
            coordinates.lat,
            coordinates.lon
        );

        let raw: OpenUvResponse = fetch_json(
            Upstream::Uv,
            self.client
                .get(url)
                .header("x-access-token", &self.api_key)
                .query(&[("lat", coordinates.lat), ("lng", coordinates.lon)]),
        )
        .await?;

        Ok(UvInfo {
            index: raw.result.uv,
            risk: uv_risk(raw.result.uv),
        })
    }
}
