use crate::config::Config;
use crate::errors::AppError;
use crate::models::CitySuggestion;
use crate::upstream::{endpoint, fetch_json, Upstream};
use reqwest::Client;
use serde::Deserialize;

const MAX_SUGGESTIONS: &str = "5";

/// Client for OpenWeather direct geocoding (city search).
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingMatch {
    name: String,
    #[serde(default)]
    country: String,
}

impl GeocodingClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Uses the same key as the weather client.
    pub fn from_config(client: &Client, config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(
            client.clone(),
            config.openweather_base_url.clone(),
            config.openweather_key()?,
        ))
    }

    /// Returns up to five matches for `query`. No matches is an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<CitySuggestion>, AppError> {
        let url = endpoint(Upstream::Geocoding, &self.base_url, &["geo", "1.0", "direct"])?;
        tracing::info!("Searching cities for: {}", query);

        let matches: Vec<GeocodingMatch> = fetch_json(
            Upstream::Geocoding,
            self.client.get(url).query(&[
                ("q", query),
                ("limit", MAX_SUGGESTIONS),
                ("appid", self.api_key.as_str()),
            ]),
        )
        .await?;

        tracing::debug!("City search returned {} matches", matches.len());
        Ok(matches
            .into_iter()
            .map(|m| CitySuggestion {
                name: m.name,
                country: m.country,
            })
            .collect())
    }
}
