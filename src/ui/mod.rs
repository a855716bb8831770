//! Presentation surfaces for the control room.

pub mod snapshot;
pub mod view;
pub mod web;

#[cfg(feature = "terminal")]
pub mod terminal;

use std::io::Write;

use tracing::{debug, info};

use crate::config::Surface;
use crate::error::Result;
use web::DocumentOptions;

/// Renders the dashboard as text for a stream surface.
///
/// Returns `None` for the terminal surface, which draws frames instead.
pub fn render_text(surface: Surface, options: &DocumentOptions) -> Result<Option<String>> {
    let text = match surface {
        Surface::Html => web::render_document(options),
        Surface::Json => {
            let mut json = serde_json::to_string_pretty(&snapshot::snapshot())?;
            json.push('\n');
            json
        }
        Surface::Terminal => return Ok(None),
    };
    debug!(surface = %surface, bytes = text.len(), "rendered dashboard");
    Ok(Some(text))
}

/// Renders the dashboard to `out`, or takes over the terminal.
pub fn present<W: Write>(surface: Surface, options: &DocumentOptions, out: &mut W) -> Result<()> {
    info!(surface = %surface, "presenting dashboard");
    match render_text(surface, options)? {
        Some(text) => {
            out.write_all(text.as_bytes())?;
            out.flush()?;
            Ok(())
        }
        None => run_terminal(),
    }
}

#[cfg(feature = "terminal")]
fn run_terminal() -> Result<()> {
    terminal::run()
}

#[cfg(not(feature = "terminal"))]
fn run_terminal() -> Result<()> {
    Err(crate::error::DashboardError::SurfaceUnavailable(Surface::Terminal.as_str()))
}
