//! # Surface: Terminal
//!
//! ## Responsibility
//! Draws the control room into a terminal with Ratatui: sidebar on the left,
//! header, stat cards, and the patient and schedule panels on the right.
//!
//! ## Guarantees
//! - Every frame is identical; resizing only redraws the same content
//! - Minimum size guard instead of a clipped dashboard
//! - Buttons are drawn as bracketed labels and never react to input
//! - Terminal restored on every exit path out of [`run`]

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::core::data::{
    ADMISSION_ACTION, APPOINTMENTS, BRAND, BRAND_SUBTITLE, CONTACT_DESK, EXPORT_ACTION,
    HEADER_EYEBROW, HEADER_TITLE, ICU_CHIP, NAV_ITEMS, PATIENTS, PATIENT_PANEL_TITLE,
    SCHEDULE_CHIP, SCHEDULE_PANEL_TITLE, SIDEBAR_NOTE, STATS, SUPPORT_PROMPT,
};
use crate::error::Result;
use crate::models::{Appointment, Patient, StatCard};

/// Minimum terminal width for the full dashboard.
pub const MIN_COLS: u16 = 100;
/// Minimum terminal height for the full dashboard.
pub const MIN_ROWS: u16 = 28;

const SIDEBAR_WIDTH: u16 = 24;

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;

/// Takes over the terminal until the viewer leaves with `q`, `Esc` or `Ctrl+C`.
pub fn run() -> Result<()> {
    let mut terminal = ratatui::try_init()?;
    info!("entered terminal surface");
    let result = event_loop(&mut terminal);
    ratatui::restore();
    info!("left terminal surface");
    result
}

fn event_loop(terminal: &mut DefaultTerminal) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f))?;
        match event::read()? {
            Event::Key(key) if is_quit(&key) => return Ok(()),
            Event::Resize(cols, rows) => debug!(cols, rows, "terminal resized"),
            _ => {}
        }
    }
}

/// Whether a key press leaves the surface. Every other key is ignored.
pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Renders the complete dashboard into the given frame.
pub fn draw(f: &mut Frame) {
    let size = f.area();

    if size.width < MIN_COLS || size.height < MIN_ROWS {
        draw_too_small(f, size);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(size);

    draw_sidebar(f, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(5), // Stat cards
            Constraint::Min(10),   // Patients + schedule
        ])
        .split(columns[1]);

    draw_header(f, rows[0]);
    draw_stats(f, rows[1]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);

    draw_patients(f, panels[0]);
    draw_schedule(f, panels[1]);
}

fn draw_too_small(f: &mut Frame, area: Rect) {
    let msg = format!("Terminal too small, resize to at least {MIN_COLS}x{MIN_ROWS}");
    let current = format!("Current size: {}x{}", area.width, area.height);

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(current, Style::default().fg(MUTED))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

fn draw_sidebar(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let divider = "\u{2500}".repeat(inner.width.saturating_sub(2) as usize);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {BRAND}"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {BRAND_SUBTITLE}"),
            Style::default().fg(MUTED),
        )),
        Line::from(Span::styled(format!(" {divider}"), Style::default().fg(MUTED))),
    ];
    lines.extend(NAV_ITEMS.iter().map(|item| {
        if item.active {
            Line::from(Span::styled(
                format!(" \u{25b8} {}", item.label),
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("   {}", item.label),
                Style::default().fg(Color::White),
            ))
        }
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {SIDEBAR_NOTE}"),
        Style::default().fg(MUTED),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

    let footer = vec![
        Line::from(Span::styled(
            format!(" {SUPPORT_PROMPT}"),
            Style::default().fg(MUTED),
        )),
        Line::from(button(CONTACT_DESK, false)),
    ];
    f.render_widget(Paragraph::new(footer), parts[1]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let left = vec![
        Line::from(Span::styled(
            format!(" {HEADER_EYEBROW}"),
            Style::default().fg(MUTED),
        )),
        Line::from(Span::styled(
            format!(" {HEADER_TITLE}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(inner);
    f.render_widget(Paragraph::new(left), halves[0]);

    let actions = Line::from(vec![
        button(EXPORT_ACTION, false),
        Span::raw("  "),
        button(ADMISSION_ACTION, true),
        Span::raw(" "),
    ]);
    f.render_widget(
        Paragraph::new(vec![Line::from(""), actions]).alignment(Alignment::Right),
        halves[1],
    );
}

fn draw_stats(f: &mut Frame, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, STATS.len() as u32); STATS.len()])
        .split(area);

    for (stat, cell) in STATS.iter().zip(cells.iter()) {
        draw_stat_card(f, *cell, stat);
    }
}

fn draw_stat_card(f: &mut Frame, area: Rect, stat: &StatCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED));
    let lines = vec![
        Line::from(Span::styled(stat.label, Style::default().fg(MUTED))),
        Line::from(Span::styled(
            stat.value,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(stat.detail, Style::default().fg(ACCENT))),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_patients(f: &mut Frame, area: Rect) {
    let block = panel_block(PATIENT_PANEL_TITLE, ICU_CHIP, ACCENT);
    let width = block.inner(area).width;
    let mut lines = Vec::with_capacity(PATIENTS.len() * 3);
    for patient in &PATIENTS {
        lines.extend(patient_row(patient, width));
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn patient_row(patient: &Patient, width: u16) -> [Line<'static>; 3] {
    [
        spread(
            Span::styled(
                patient.name,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{}]", patient.status), Style::default().fg(ACCENT)),
            width,
        ),
        spread(
            Span::styled(patient.condition, Style::default().fg(MUTED)),
            Span::styled(
                format!("{}  {}", patient.room, patient.doctor),
                Style::default().fg(MUTED),
            ),
            width,
        ),
        Line::from(""),
    ]
}

fn draw_schedule(f: &mut Frame, area: Rect) {
    let block = panel_block(SCHEDULE_PANEL_TITLE, SCHEDULE_CHIP, Color::Yellow);
    let width = block.inner(area).width;
    let mut lines = Vec::with_capacity(APPOINTMENTS.len() * 3);
    for appointment in &APPOINTMENTS {
        lines.extend(appointment_item(appointment, width));
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn appointment_item(appointment: &Appointment, width: u16) -> [Line<'static>; 3] {
    [
        spread(
            Span::styled(
                appointment.time,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(appointment.doctor, Style::default().fg(MUTED)),
            width,
        ),
        spread(
            Span::styled(appointment.patient, Style::default().fg(MUTED)),
            Span::styled(appointment.kind, Style::default().fg(MUTED)),
            width,
        ),
        Line::from(""),
    ]
}

fn panel_block(title: &'static str, chip: &'static str, chip_color: Color) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .title(
            Line::from(Span::styled(
                format!(" {chip} "),
                Style::default().fg(Color::Black).bg(chip_color),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
}

fn button(label: &'static str, primary: bool) -> Span<'static> {
    let style = if primary {
        Style::default().fg(Color::Black).bg(ACCENT)
    } else {
        Style::default().fg(ACCENT)
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// Puts `left` at the start and `right` at the end of a `width`-wide line.
fn spread(left: Span<'static>, right: Span<'static>, width: u16) -> Line<'static> {
    let used = left.width() + right.width();
    let gap = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_fills_width() {
        let line = spread(Span::raw("09:45 AM"), Span::raw("Dr. Reyes"), 30);
        assert_eq!(line.width(), 30);
    }

    #[test]
    fn spread_keeps_one_space_when_too_narrow() {
        let line = spread(Span::raw("Miles Green"), Span::raw("Under observation"), 10);
        assert_eq!(line.width(), "Miles Green".len() + 1 + "Under observation".len());
    }

    #[test]
    fn spread_measures_display_width() {
        let line = spread(Span::raw("\u{75c5}"), Span::raw("x"), 6);
        assert_eq!(line.width(), 6);
    }

    #[test]
    fn patient_row_fits_narrowest_panel() {
        // patient panel inner width at MIN_COLS
        let inner = (MIN_COLS - SIDEBAR_WIDTH) * 55 / 100 - 2;
        for patient in &PATIENTS {
            for line in patient_row(patient, inner) {
                assert!(line.width() <= inner as usize, "{} overflows", patient.name);
            }
        }
    }

    #[test]
    fn button_is_bracketed_label() {
        assert_eq!(button("Export", false).content, "[ Export ]");
    }

    #[test]
    fn quit_keys() {
        let press = |code, modifiers| KeyEvent::new(code, modifiers);
        assert!(is_quit(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&press(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn key_release_does_not_quit() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!is_quit(&key));
    }
}
