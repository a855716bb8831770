//! Display records for the control room.

pub mod dashboard;

pub use dashboard::{Appointment, NavItem, Patient, StatCard};
