//! Composite city lookup.
//!
//! Upstreams are called one after another, in a fixed order:
//!
//! 1. weather (its coordinates feed the UV lookup)
//! 2. air quality, by the raw city query
//! 3. UV, by the weather coordinates (a weather answer without them fails here)
//!
//! The traffic estimate needs no upstream. The first failure aborts the
//! lookup and is returned as-is; no partial result is ever assembled.

use crate::air_quality_client::AirQualityClient;
use crate::errors::AppError;
use crate::models::CompositeCityInfo;
use crate::traffic::{estimate_traffic, Clock};
use crate::upstream::Upstream;
use crate::uv_client::UvClient;
use crate::weather_client::WeatherClient;

pub struct CityInfoService<'a> {
    weather: WeatherClient,
    air_quality: AirQualityClient,
    uv: UvClient,
    clock: &'a dyn Clock,
}

impl<'a> CityInfoService<'a> {
    pub fn new(
        weather: WeatherClient,
        air_quality: AirQualityClient,
        uv: UvClient,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            weather,
            air_quality,
            uv,
            clock,
        }
    }

    pub async fn lookup(&self, city: &str) -> Result<CompositeCityInfo, AppError> {
        let weather = self.weather.current(city).await?;
        let air_quality = self.air_quality.current(city).await?;
        let coordinates = weather.coordinates.ok_or(AppError::EmptyResult {
            upstream: Upstream::Weather,
        })?;
        let uv = self.uv.current(coordinates).await?;
        let traffic = estimate_traffic(&self.clock.now());

        tracing::info!(
            "Composed city info for {} ({}): aqi={}, uv={}, traffic={:?}",
            weather.info.city,
            weather.info.country,
            air_quality.aqi,
            uv.index,
            traffic.level
        );

        Ok(CompositeCityInfo {
            city: weather.info.city.clone(),
            country: weather.info.country.clone(),
            weather: weather.info,
            air_quality,
            uv,
            traffic,
        })
    }
}
