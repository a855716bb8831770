//! Application configuration.
//!
//! Sources are layered, later ones winning: built-in defaults,
//! `config/default.toml`, `config/{PULSECARE_ENV}.toml`, then `PULSECARE_*`
//! environment variables (`PULSECARE_DISPLAY__SURFACE=json`). None of this
//! affects what the dashboard shows, only where and how it is written.

use std::fmt;

use serde::Deserialize;

use crate::error::Result;

pub const ENV_PREFIX: &str = "PULSECARE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    pub surface: Surface,
    /// `href` the HTML surface links for styling.
    pub stylesheet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

/// Where the rendered dashboard goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// HTML document on stdout.
    Html,
    /// JSON snapshot of the dashboard content on stdout.
    Json,
    /// Full-screen terminal view.
    Terminal,
}

impl Surface {
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Html => "html",
            Surface::Json => "json",
            Surface::Terminal => "terminal",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("display.surface", "html")?
        .set_default("display.stylesheet", "App.css")?
        .set_default("logging.level", "info")?
        .set_default("logging.json", false)?)
}

/// Load configuration from files and the environment.
pub fn load_config() -> Result<Config> {
    let env = std::env::var("PULSECARE_ENV").unwrap_or_else(|_| "development".into());

    let settings = builder()?
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Parse configuration from a TOML string on top of the defaults.
pub fn from_toml(source: &str) -> Result<Config> {
    let settings = builder()?
        .add_source(config::File::from_str(source, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_source() {
        let config = from_toml("").unwrap();
        assert_eq!(config.display.surface, Surface::Html);
        assert_eq!(config.display.stylesheet, "App.css");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn file_values_override_defaults() {
        let config = from_toml(
            r#"
            [display]
            surface = "terminal"
            stylesheet = "/assets/pulse.css"

            [logging]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.display.surface, Surface::Terminal);
        assert_eq!(config.display.stylesheet, "/assets/pulse.css");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.json);
    }

    #[test]
    fn unknown_surface_is_rejected() {
        let err = from_toml("[display]\nsurface = \"pdf\"\n").unwrap_err();
        assert!(matches!(err, crate::error::DashboardError::Config(_)));
    }

    #[test]
    fn surface_display_matches_config_spelling() {
        assert_eq!(Surface::Json.to_string(), "json");
    }
}
