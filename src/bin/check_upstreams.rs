//! Utility to check each configured upstream once for a given city.
//!
//! Usage: `check_upstreams [CITY]` (defaults to London).

use city_info_api::air_quality_client::AirQualityClient;
use city_info_api::config::Config;
use city_info_api::errors::AppError;
use city_info_api::geocoding_client::GeocodingClient;
use city_info_api::upstream::build_http_client;
use city_info_api::uv_client::UvClient;
use city_info_api::weather_client::WeatherClient;

fn report<T>(name: &str, result: Result<T, AppError>, summary: impl FnOnce(T) -> String) {
    match result {
        Ok(value) => println!("{:<12} OK       {}", name, summary(value)),
        Err(AppError::MissingCredential(var)) => println!("{:<12} SKIPPED  {} not set", name, var),
        Err(e) => println!("{:<12} FAILED   {}", name, e),
    }
}

/// Main entry point for the upstream check utility.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let client = build_http_client(config.upstream_timeout)?;
    let city = std::env::args().nth(1).unwrap_or_else(|| "London".to_string());

    println!("Checking upstreams for {}:", city);

    let weather = match WeatherClient::from_config(&client, &config) {
        Ok(weather_client) => weather_client.current(&city).await,
        Err(e) => Err(e),
    };
    let coordinates = weather.as_ref().ok().and_then(|w| w.coordinates);
    report("weather", weather, |w| {
        format!("{}, {}: {}°C, {}", w.info.city, w.info.country, w.info.temp, w.info.condition)
    });

    let search = match GeocodingClient::from_config(&client, &config) {
        Ok(geocoding) => geocoding.search(&city).await,
        Err(e) => Err(e),
    };
    report("geocoding", search, |s| format!("{} matches", s.len()));

    let air_quality = match AirQualityClient::from_config(&client, &config) {
        Ok(air) => air.current(&city).await,
        Err(e) => Err(e),
    };
    report("air quality", air_quality, |a| {
        format!("AQI {} ({})", a.aqi, a.category.as_str())
    });

    match (UvClient::from_config(&client, &config), coordinates) {
        (Ok(uv), Some(coordinates)) => report("uv", uv.current(coordinates).await, |u| {
            format!("index {} ({})", u.index, u.risk.as_str())
        }),
        (Err(e), _) => report::<()>("uv", Err(e), |_| String::new()),
        (Ok(_), None) => println!("{:<12} SKIPPED  needs weather coordinates", "uv"),
    }

    Ok(())
}
