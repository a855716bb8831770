//! Terminal surface rendered against an in-memory backend.

#![cfg(feature = "terminal")]

use pulsecare::core::data::{APPOINTMENTS, NAV_ITEMS, PATIENTS, STATS};
use pulsecare::ui::terminal::{draw, MIN_COLS, MIN_ROWS};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn render_to_buffer(width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_every_record_visible(screen: &str) {
    for stat in &STATS {
        for text in [stat.label, stat.value, stat.detail] {
            assert!(screen.contains(text), "missing stat text {text:?}\n{screen}");
        }
    }
    for patient in &PATIENTS {
        for text in [patient.name, patient.condition, patient.room, patient.doctor, patient.status] {
            assert!(screen.contains(text), "missing patient text {text:?}\n{screen}");
        }
    }
    for appointment in &APPOINTMENTS {
        for text in [appointment.time, appointment.patient, appointment.doctor, appointment.kind] {
            assert!(screen.contains(text), "missing appointment text {text:?}\n{screen}");
        }
    }
    for item in &NAV_ITEMS {
        assert!(screen.contains(item.label), "missing nav label {:?}", item.label);
    }
}

#[test]
fn full_dashboard_shows_every_record() {
    assert_every_record_visible(&screen_text(&render_to_buffer(120, 40)));
}

#[test]
fn chips_and_buttons_are_drawn() {
    let screen = screen_text(&render_to_buffer(120, 40));
    assert!(screen.contains("42 in ICU"));
    assert!(screen.contains("On time"));
    assert!(screen.contains("Active Patients"));
    assert!(screen.contains("Today's Schedule"));
    assert!(screen.contains("[ Export ]"));
    assert!(screen.contains("[ New Admission ]"));
    assert!(screen.contains("[ Contact Desk ]"));
    assert!(screen.contains("PulseCare Control Room"));
}

#[test]
fn only_dashboard_is_marked_active() {
    let screen = screen_text(&render_to_buffer(120, 40));
    assert_eq!(screen.matches('\u{25b8}').count(), 1);
    assert!(screen.contains("\u{25b8} Dashboard"));
}

#[test]
fn redraw_produces_identical_buffer() {
    assert_eq!(render_to_buffer(120, 40), render_to_buffer(120, 40));
}

#[test]
fn minimum_size_shows_every_record_unclipped() {
    let screen = screen_text(&render_to_buffer(MIN_COLS, MIN_ROWS));
    assert!(!screen.contains("Terminal too small"));
    assert_every_record_visible(&screen);
    assert!(screen.contains("42 in ICU"));
    assert!(screen.contains("[ Contact Desk ]"));
}

#[test]
fn undersized_terminal_shows_guard() {
    let screen = screen_text(&render_to_buffer(60, 20));
    assert!(screen.contains("Terminal too small"));
    assert!(screen.contains("Current size: 60x20"));
    assert!(!screen.contains("Available Beds"));
}
