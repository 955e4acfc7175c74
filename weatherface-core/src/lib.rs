//! Core library for the `weatherface` tool.
//!
//! This crate defines:
//! - Configuration read from the process environment
//! - The shared domain model (one current-weather reading)
//! - The OpenWeather provider and the status-line formatting
//!
//! It is used by `weatherface-cli`, but can also be reused by other binaries
//! that want the same one-line summary.

pub mod config;
pub mod model;
pub mod provider;

pub use config::{Config, ConfigError, ENV_API_KEY, ENV_LOCATION};
pub use model::WeatherReading;
pub use provider::{WeatherProvider, provider_from_config};
