//! PulseCare control room library
//!
//! Renders the hospital operations dashboard from literal data: sidebar
//! navigation, header, summary stat cards, active patients and today's
//! schedule. The view is a pure function of [`crate::core::data`] and can be
//! written out as HTML, as a JSON snapshot, or drawn in a terminal.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod ui;

pub use error::{DashboardError, Result};
pub use ui::view::{render, ControlRoom};
