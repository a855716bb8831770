use serde::Serialize;

/// A single summary metric tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

/// A patient shown in the monitoring panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Patient {
    pub name: &'static str,
    pub condition: &'static str,
    pub room: &'static str,
    pub doctor: &'static str,
    pub status: &'static str,
}

/// A slot in today's schedule.
///
/// `patient` and `doctor` are display text only. They are not linked to
/// [`Patient`] entries even where the names coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub time: &'static str,
    pub patient: &'static str,
    pub doctor: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// A sidebar navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub active: bool,
}

impl StatCard {
    /// Iteration key.
    pub fn key(&self) -> &'static str {
        self.label
    }
}

impl Patient {
    /// Iteration key.
    pub fn key(&self) -> &'static str {
        self.name
    }
}

impl Appointment {
    /// Iteration key.
    pub fn key(&self) -> &'static str {
        self.time
    }
}

impl NavItem {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            active: false,
        }
    }

    pub const fn active(label: &'static str) -> Self {
        Self {
            label,
            active: true,
        }
    }
}
