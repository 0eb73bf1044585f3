//! Layout components (header, panels, status bar)

use super::actions::ACTIONS_HEIGHT;
use crate::app::App;
use crate::platform::{ADD_ROW_SHORTCUT, COPY_SHORTCUT, REMOVE_ROW_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, RowControl};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions
pub struct FormLayout {
    pub header: Rect,
    pub rows: Rect,
    pub actions: Rect,
    pub result: Rect,
}

/// Split the screen: header on top, rows on the left, actions and the result
/// panel on the right, and the bottom line reserved for the status bar
pub fn create_layout(area: Rect) -> FormLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(vertical[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ACTIONS_HEIGHT), Constraint::Min(0)])
        .split(columns[1]);

    FormLayout {
        header: vertical[0],
        rows: columns[0],
        actions: right[0],
        result: right[1],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.state.session.rows().len();
    let title = Line::from(vec![
        Span::styled(
            "Professional Form",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({count} row{})", if count == 1 { "" } else { "s" }),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {}", focus_hints(&app.state.cursor.focus)),
        Style::default().fg(Color::Gray),
    )];
    spans.push(Span::styled(
        format!(
            "  {ADD_ROW_SHORTCUT}:add  {SUBMIT_SHORTCUT}:submit  {REMOVE_ROW_SHORTCUT}:remove  {COPY_SHORTCUT}:copy"
        ),
        Style::default().fg(Color::Black),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused control
fn focus_hints(focus: &Focus) -> &'static str {
    match focus {
        Focus::Row { control, .. } => match control {
            RowControl::Name | RowControl::Email => "Tab:next  type to edit  ^U:clear",
            RowControl::Gender => "Tab:next  ←/→:choose",
            RowControl::Qualification => "Tab:next  ←/→:cycle",
            RowControl::GovernmentId => "Tab:next  Space:toggle",
            RowControl::Proof => "Tab:next  Enter:choose file  Bksp:clear",
            RowControl::Remove => "Tab:next  Enter:remove row",
        },
        Focus::Action(_) => "Tab:next  Enter:press  PgUp/PgDn:scroll JSON",
    }
}
