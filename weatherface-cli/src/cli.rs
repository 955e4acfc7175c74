use clap::Parser;
use weatherface_core::{Config, WeatherProvider, provider_from_config};

/// Top-level CLI struct.
///
/// The tool takes no flags of its own: location and API key come from the
/// `CLOCK_LOCATION` and `CLOCK_OVM_KEY` environment variables, and the only
/// output is the status line on stdout.
#[derive(Debug, Parser)]
#[command(name = "weatherface", version, about = "One-line weather summary for a clock face")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let provider = provider_from_config(&config);

        let reading = provider.current(&config.location).await?;

        println!("{}", reading.status_line());

        Ok(())
    }
}
