//! City Info API Library
//!
//! An HTTP gateway that aggregates third-party weather, air-quality, UV and
//! city-search data into unified JSON responses, plus a locally computed
//! traffic-level estimate.
//!
//! # Modules
//!
//! - `api`: HTTP-facing components (handlers, router, OpenAPI document).
//! - `core`: Domain logic (classifiers, traffic estimate, aggregation, models, errors).
//! - `integrations`: Upstream provider clients.
//! - `aggregation`: Composite city lookup.
//! - `air_quality_client`: WAQI client.
//! - `classifiers`: AQI and UV risk labels.
//! - `config`: Configuration management.
//! - `docs`: OpenAPI document.
//! - `errors`: Error handling types.
//! - `geocoding_client`: City search client.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request and response DTOs.
//! - `routes`: Router construction.
//! - `traffic`: Time-of-day traffic estimate.
//! - `upstream`: Shared upstream HTTP plumbing.
//! - `uv_client`: OpenUV client.
//! - `weather_client`: OpenWeather client.

pub mod api;
pub mod core;
pub mod integrations;

// Re-export primary modules for shared use in tests and other binaries
pub mod aggregation;
pub mod air_quality_client;
pub mod classifiers;
pub mod config;
pub mod docs;
pub mod errors;
pub mod geocoding_client;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod traffic;
pub mod upstream;
pub mod uv_client;
pub mod weather_client;
