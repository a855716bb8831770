//! JSON snapshot surface: the dashboard content grouped by panel, in
//! display order.

use serde::Serialize;

use crate::core::data::{
    ADMISSION_ACTION, APPOINTMENTS, BRAND, BRAND_SUBTITLE, CONTACT_DESK, EXPORT_ACTION,
    HEADER_EYEBROW, HEADER_TITLE, ICU_CHIP, NAV_ITEMS, PATIENTS, PATIENT_PANEL_TITLE,
    SCHEDULE_CHIP, SCHEDULE_PANEL_TITLE, SIDEBAR_NOTE, STATS, SUPPORT_PROMPT,
};
use crate::models::{Appointment, NavItem, Patient, StatCard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub sidebar: SidebarSnapshot,
    pub header: HeaderSnapshot,
    pub stats: &'static [StatCard],
    pub patients: Panel<Patient>,
    pub appointments: Panel<Appointment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarSnapshot {
    pub brand: &'static str,
    pub subtitle: &'static str,
    pub nav: &'static [NavItem],
    pub note: &'static str,
    pub support: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSnapshot {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub actions: [&'static str; 2],
}

/// A card with a title, a chip and its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel<T: 'static> {
    pub title: &'static str,
    pub chip: &'static str,
    pub rows: &'static [T],
}

static NAV: [NavItem; 5] = NAV_ITEMS;
static STAT_ROWS: [StatCard; 4] = STATS;
static PATIENT_ROWS: [Patient; 4] = PATIENTS;
static APPOINTMENT_ROWS: [Appointment; 4] = APPOINTMENTS;

pub fn snapshot() -> Snapshot {
    Snapshot {
        sidebar: SidebarSnapshot {
            brand: BRAND,
            subtitle: BRAND_SUBTITLE,
            nav: &NAV,
            note: SIDEBAR_NOTE,
            support: SUPPORT_PROMPT,
            contact: CONTACT_DESK,
        },
        header: HeaderSnapshot {
            eyebrow: HEADER_EYEBROW,
            title: HEADER_TITLE,
            actions: [EXPORT_ACTION, ADMISSION_ACTION],
        },
        stats: &STAT_ROWS,
        patients: Panel {
            title: PATIENT_PANEL_TITLE,
            chip: ICU_CHIP,
            rows: &PATIENT_ROWS,
        },
        appointments: Panel {
            title: SCHEDULE_PANEL_TITLE,
            chip: SCHEDULE_CHIP,
            rows: &APPOINTMENT_ROWS,
        },
    }
}
