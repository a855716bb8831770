//! PulseCare control room
//!
//! Main entry point: loads configuration, sets up logging, then writes the
//! dashboard to the selected surface.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pulsecare::config::{self, Config, Surface};
use pulsecare::ui::{self, web::DocumentOptions};
use pulsecare::DashboardError;

#[derive(Parser)]
#[command(name = "pulsecare", about = "PulseCare hospital operations dashboard")]
struct Cli {
    /// Where to render the dashboard (overrides `display.surface`)
    #[arg(long, value_enum)]
    surface: Option<Surface>,
    /// Stylesheet href for the HTML surface (overrides `display.stylesheet`)
    #[arg(long)]
    stylesheet: Option<String>,
    /// Log filter when RUST_LOG is unset (overrides `logging.level`)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(surface) = self.surface {
            config.display.surface = surface;
        }
        if let Some(stylesheet) = self.stylesheet {
            config.display.stylesheet = stylesheet;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        config
    }
}

fn init_logging(config: &config::LoggingConfig) -> pulsecare::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| DashboardError::Logging(e.to_string()))?;

    // stdout carries the rendered surface.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| DashboardError::Logging(e.to_string()))
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config().context("Failed to load configuration")?;
    let config = cli.apply(config);

    init_logging(&config.logging).context("Failed to initialize logging")?;
    info!(
        surface = %config.display.surface,
        stylesheet = %config.display.stylesheet,
        "configuration loaded"
    );

    let options = DocumentOptions {
        stylesheet: config.display.stylesheet.clone(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ui::present(config.display.surface, &options, &mut out)
        .with_context(|| format!("Failed to render {} surface", config.display.surface))?;

    Ok(())
}
