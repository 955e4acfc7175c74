use crate::{Config, WeatherReading, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current-weather readings.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> anyhow::Result<WeatherReading>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> OpenWeatherProvider {
    OpenWeatherProvider::new(config.api_key.clone())
}
