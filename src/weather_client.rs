use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Coordinates, CurrentWeather, WeatherInfo};
use crate::upstream::{endpoint, fetch_json, Upstream};
use reqwest::Client;
use serde::Deserialize;

/// Client for the OpenWeather current-weather endpoint.
///
/// Shared by every route that needs weather, including the composite one.
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    name: String,
    #[serde(default)]
    sys: Sys,
    main: Main,
    // Missing and null both mean no conditions
    #[serde(default)]
    weather: Option<Vec<Condition>>,
    #[serde(default)]
    coord: Option<Coord>,
}

#[derive(Debug, Default, Deserialize)]
struct Sys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct Main {
    temp: f64,
    feels_like: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Coord {
    lat: f64,
    lon: f64,
}

impl WeatherClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fails with `MissingCredential` when `OPENWEATHER_API_KEY` is unset.
    pub fn from_config(client: &Client, config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(
            client.clone(),
            config.openweather_base_url.clone(),
            config.openweather_key()?,
        ))
    }

    /// Fetches current conditions for `city` in metric units.
    pub async fn current(&self, city: &str) -> Result<CurrentWeather, AppError> {
        let url = endpoint(Upstream::Weather, &self.base_url, &["data", "2.5", "weather"])?;
        tracing::info!("Fetching weather for city: {}", city);
        tracing::debug!("OpenWeather URL: {}?q={}&units=metric&appid=[REDACTED]", url, city);

        let raw: OpenWeatherResponse = fetch_json(
            Upstream::Weather,
            self.client.get(url).query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ]),
        )
        .await?;

        let condition = raw
            .weather
            .into_iter()
            .flatten()
            .next()
            .map(|c| c.description)
            .ok_or(AppError::EmptyResult {
                upstream: Upstream::Weather,
            })?;

        Ok(CurrentWeather {
            info: WeatherInfo {
                city: raw.name,
                country: raw.sys.country,
                temp: raw.main.temp,
                feels_like: raw.main.feels_like,
                humidity: raw.main.humidity,
                condition,
            },
            coordinates: raw.coord.map(|c| Coordinates {
                lat: c.lat,
                lon: c.lon,
            }),
        })
    }
}
