use thiserror::Error;

/// Environment variable holding the location query, passed verbatim to the
/// weather API (e.g. "Melbourne,AU").
pub const ENV_LOCATION: &str = "CLOCK_LOCATION";

/// Environment variable holding the OpenWeather API key.
pub const ENV_API_KEY: &str = "CLOCK_OVM_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Runtime configuration. Both values are required; there are no defaults
/// and nothing is read from disk.
#[derive(Debug, Clone)]
pub struct Config {
    pub location: String,
    pub api_key: String,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an injected lookup.
    ///
    /// Tests use this to cover the missing-variable paths without mutating
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let location = lookup(ENV_LOCATION).ok_or(ConfigError::MissingVar(ENV_LOCATION))?;
        let api_key = lookup(ENV_API_KEY).ok_or(ConfigError::MissingVar(ENV_API_KEY))?;

        Ok(Self { location, api_key })
    }
}
