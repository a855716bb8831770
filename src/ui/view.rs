//! View renderer.
//!
//! The control room as Dioxus components. Each element carries the class
//! identifiers the external stylesheet keys on; layout is left to the
//! stylesheet. Output depends only on [`crate::core::data`], so every
//! render produces the same markup.
//!
//! Collections are walked once, in declaration order. Nothing is filtered,
//! sorted, counted or otherwise derived.

use dioxus::prelude::*;

use crate::core::data::{
    ADMISSION_ACTION, APPOINTMENTS, BRAND, BRAND_SUBTITLE, CONTACT_DESK, EXPORT_ACTION,
    HEADER_EYEBROW, HEADER_TITLE, ICU_CHIP, NAV_ITEMS, PATIENTS, PATIENT_PANEL_TITLE,
    SCHEDULE_CHIP, SCHEDULE_PANEL_TITLE, SIDEBAR_NOTE, STATS, SUPPORT_PROMPT,
};
use crate::models::NavItem;

/// Server-side renders the whole control room to markup.
pub fn render() -> String {
    dioxus_ssr::render_element(rsx! { ControlRoom {} })
}

/// Sidebar plus main panel.
#[component]
pub fn ControlRoom() -> Element {
    rsx! {
        div { class: "app-shell",
            Sidebar {}
            main { class: "main-panel",
                DashHeader {}
                StatsGrid {}
                section { class: "content-grid",
                    PatientPanel {}
                    AppointmentPanel {}
                }
            }
        }
    }
}

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside { class: "sidebar",
            div {
                div { class: "brand", "{BRAND}" }
                p { class: "brand-subtitle", "{BRAND_SUBTITLE}" }
            }
            div { class: "sidebar-divider" }
            nav { class: "sidebar-nav",
                for item in NAV_ITEMS.iter() {
                    button {
                        key: "{item.label}",
                        r#type: "button",
                        class: nav_class(item),
                        "{item.label}"
                    }
                }
            }
            p { class: "sidebar-note", "{SIDEBAR_NOTE}" }
            div { class: "sidebar-footer",
                span { "{SUPPORT_PROMPT}" }
                button { r#type: "button", class: "ghost", "{CONTACT_DESK}" }
            }
        }
    }
}

fn nav_class(item: &NavItem) -> &'static str {
    if item.active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn DashHeader() -> Element {
    rsx! {
        header { class: "dash-header",
            div {
                p { class: "muted-label", "{HEADER_EYEBROW}" }
                h1 { "{HEADER_TITLE}" }
            }
            div { class: "header-actions",
                button { r#type: "button", class: "ghost", "{EXPORT_ACTION}" }
                button { r#type: "button", class: "primary", "{ADMISSION_ACTION}" }
            }
        }
    }
}

#[component]
pub fn StatsGrid() -> Element {
    rsx! {
        section { class: "stats-grid",
            for stat in STATS.iter() {
                article { key: "{stat.label}", class: "stat-card",
                    p { class: "stat-label", "{stat.label}" }
                    p { class: "stat-value", "{stat.value}" }
                    p { class: "stat-detail", "{stat.detail}" }
                }
            }
        }
    }
}

#[component]
pub fn PatientPanel() -> Element {
    rsx! {
        article { class: "card patient-panel",
            div { class: "card-header",
                h2 { "{PATIENT_PANEL_TITLE}" }
                // Fixed label, not a count of PATIENTS.
                span { class: "chip", "{ICU_CHIP}" }
            }
            div { class: "table",
                for patient in PATIENTS.iter() {
                    div { key: "{patient.name}", class: "table-row",
                        div {
                            p { class: "row-name", "{patient.name}" }
                            p { class: "row-meta", "{patient.condition}" }
                        }
                        div { class: "row-meta",
                            span { "{patient.room}" }
                            span { "{patient.doctor}" }
                            span { class: "status-pill", "{patient.status}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AppointmentPanel() -> Element {
    rsx! {
        article { class: "card appointment-panel",
            div { class: "card-header",
                h2 { "{SCHEDULE_PANEL_TITLE}" }
                span { class: "chip warning", "{SCHEDULE_CHIP}" }
            }
            ul { class: "appointment-list",
                for appointment in APPOINTMENTS.iter() {
                    li { key: "{appointment.time}",
                        div {
                            p { class: "row-name", "{appointment.time}" }
                            p { class: "row-meta", "{appointment.patient}" }
                        }
                        div {
                            p { class: "row-meta", "{appointment.doctor}" }
                            p { class: "row-meta", "{appointment.kind}" }
                        }
                    }
                }
            }
        }
    }
}
