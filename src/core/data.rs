//! Literal dashboard content.
//!
//! Everything the control room displays lives here as `const` items. The
//! renderers only read from these; nothing in the crate can change them.

use crate::models::{Appointment, NavItem, Patient, StatCard};

pub const BRAND: &str = "PulseCare";
pub const BRAND_SUBTITLE: &str = "Hospital Management";
pub const SIDEBAR_NOTE: &str = "Monitoring ICU, ER, and telehealth channels in real time.";
pub const SUPPORT_PROMPT: &str = "Need support?";
pub const CONTACT_DESK: &str = "Contact Desk";

pub const HEADER_EYEBROW: &str = "Hospital Operations";
pub const HEADER_TITLE: &str = "PulseCare Control Room";
pub const EXPORT_ACTION: &str = "Export";
pub const ADMISSION_ACTION: &str = "New Admission";

pub const PATIENT_PANEL_TITLE: &str = "Active Patients";
// Fixed label. Not a count of PATIENTS.
pub const ICU_CHIP: &str = "42 in ICU";
pub const SCHEDULE_PANEL_TITLE: &str = "Today's Schedule";
pub const SCHEDULE_CHIP: &str = "On time";

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem::active("Dashboard"),
    NavItem::new("Patients"),
    NavItem::new("Appointments"),
    NavItem::new("Staff"),
    NavItem::new("Inventory"),
];

pub const STATS: [StatCard; 4] = [
    StatCard {
        label: "Admissions",
        value: "48",
        detail: "+6 today",
    },
    StatCard {
        label: "Available Beds",
        value: "32",
        detail: "Capacity 74%",
    },
    StatCard {
        label: "Critical Alerts",
        value: "4",
        detail: "2 new this hour",
    },
    StatCard {
        label: "Staff On Shift",
        value: "86",
        detail: "Night team online",
    },
];

pub const PATIENTS: [Patient; 4] = [
    Patient {
        name: "Ava Carter",
        condition: "Post-op observation",
        room: "B12",
        doctor: "Dr. Li",
        status: "Stabilizing",
    },
    Patient {
        name: "Miles Green",
        condition: "Cardiac monitoring",
        room: "C01",
        doctor: "Dr. Reyes",
        status: "Under observation",
    },
    Patient {
        name: "Sienna Roy",
        condition: "Neurology consult",
        room: "A23",
        doctor: "Dr. Patel",
        status: "Awaiting scan",
    },
    Patient {
        name: "Leo Park",
        condition: "Trauma recovery",
        room: "D08",
        doctor: "Dr. Singh",
        status: "Rehab session",
    },
];

pub const APPOINTMENTS: [Appointment; 4] = [
    Appointment {
        time: "08:30 AM",
        patient: "Noah Ellis",
        doctor: "Dr. Patel",
        kind: "Cardiology check-in",
    },
    Appointment {
        time: "09:45 AM",
        patient: "Maya Orton",
        doctor: "Dr. Reyes",
        kind: "Orthopedics review",
    },
    Appointment {
        time: "11:00 AM",
        patient: "Liam Brooks",
        doctor: "Dr. Singh",
        kind: "Trauma follow-up",
    },
    Appointment {
        time: "12:30 PM",
        patient: "Zoe Chen",
        doctor: "Dr. Stewart",
        kind: "Telehealth consult",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exactly_one_nav_item_is_active() {
        let active: Vec<_> = NAV_ITEMS.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Dashboard");
    }

    #[test]
    fn all_fields_are_non_empty() {
        for stat in &STATS {
            assert!(!stat.label.is_empty() && !stat.value.is_empty() && !stat.detail.is_empty());
        }
        for p in &PATIENTS {
            for field in [p.name, p.condition, p.room, p.doctor, p.status] {
                assert!(!field.is_empty(), "empty field on {}", p.name);
            }
        }
        for a in &APPOINTMENTS {
            for field in [a.time, a.patient, a.doctor, a.kind] {
                assert!(!field.is_empty(), "empty field on {}", a.time);
            }
        }
    }

    #[test]
    fn iteration_keys_are_unique() {
        let stats: HashSet<_> = STATS.iter().map(StatCard::key).collect();
        let patients: HashSet<_> = PATIENTS.iter().map(Patient::key).collect();
        let appointments: HashSet<_> = APPOINTMENTS.iter().map(Appointment::key).collect();
        assert_eq!(stats.len(), STATS.len());
        assert_eq!(patients.len(), PATIENTS.len());
        assert_eq!(appointments.len(), APPOINTMENTS.len());
    }

    #[test]
    fn icu_chip_is_not_derived_from_patient_list() {
        assert_eq!(ICU_CHIP, "42 in ICU");
        assert_eq!(PATIENTS.len(), 4);
    }
}
