//! HTML surface.
//!
//! Wraps the server-side rendered control room in a full document. Layout
//! and colour come from the linked stylesheet; nothing here adds behaviour.

use dioxus::prelude::*;

use super::view::ControlRoom;
use crate::core::data::HEADER_TITLE;

/// Document wrapper settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// `href` of the external stylesheet.
    pub stylesheet: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            stylesheet: "App.css".to_string(),
        }
    }
}

/// Full HTML5 document with the control room as the body.
pub fn render_document(options: &DocumentOptions) -> String {
    let stylesheet = options.stylesheet.clone();
    let page = dioxus_ssr::render_element(rsx! { Page { stylesheet } });
    format!("<!DOCTYPE html>\n{page}\n")
}

#[component]
fn Page(stylesheet: String) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{HEADER_TITLE}" }
                link { rel: "stylesheet", href: "{stylesheet}" }
            }
            body {
                ControlRoom {}
            }
        }
    }
}
