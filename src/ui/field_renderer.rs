//! Line builders for the controls inside a row block

use crate::form::{FileRef, Gender};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width reserved for the label column
const LABEL_WIDTH: usize = 16;

fn active_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn label_span(label: &str, is_active: bool) -> Span<'static> {
    let marker = if is_active { "▸ " } else { "  " };
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("{marker}{label:<LABEL_WIDTH$}"), style)
}

/// Single-line text input with a block cursor while focused
pub fn text_line(label: &str, value: &str, is_active: bool) -> Line<'static> {
    let mut spans = vec![label_span(label, is_active)];
    if value.is_empty() && !is_active {
        spans.push(Span::styled("(empty)", Style::default().fg(Color::DarkGray)));
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default()
        };
        spans.push(Span::styled(value.to_string(), style));
    }
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// Radio group over the gender options
pub fn gender_line(selected: Gender, is_active: bool) -> Line<'static> {
    let mut spans = vec![label_span("Gender", is_active)];
    for option in Gender::OPTIONS {
        let (mark, style) = if option == selected {
            ("(•) ", Style::default().fg(Color::Green))
        } else {
            ("( ) ", active_style(is_active))
        };
        spans.push(Span::styled(format!("{mark}{}  ", option.label()), style));
    }
    Line::from(spans)
}

/// Select box showing the current value, or the placeholder when unset
pub fn select_line(label: &str, value: &str, is_placeholder: bool, is_active: bool) -> Line<'static> {
    let value_style = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let arrows = active_style(is_active);
    Line::from(vec![
        label_span(label, is_active),
        Span::styled("◂ ", arrows),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▸", arrows),
    ])
}

pub fn checkbox_line(label: &str, checked: bool, is_active: bool) -> Line<'static> {
    let (mark, style) = if checked {
        ("[x] ", Style::default().fg(Color::Green))
    } else {
        ("[ ] ", active_style(is_active))
    };
    Line::from(vec![
        label_span("", is_active),
        Span::styled(mark, style),
        Span::raw(label.to_string()),
    ])
}

/// File picker showing the attached file name
pub fn proof_line(file: Option<&FileRef>, is_active: bool) -> Line<'static> {
    let mut spans = vec![label_span("ID Proof", is_active)];
    match file {
        Some(file) => spans.push(Span::styled(
            format!("📎 {}", file.name),
            Style::default().fg(Color::Green),
        )),
        None => spans.push(Span::styled(
            "No file chosen",
            Style::default().fg(Color::DarkGray),
        )),
    }
    if is_active {
        spans.push(Span::styled(
            "  (Enter: choose file)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Inline button, e.g. the row's Remove control
pub fn button_line(label: &str, color: Color, is_active: bool) -> Line<'static> {
    let style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Line::from(vec![
        label_span("", is_active),
        Span::styled(format!("[ {label} ]"), style),
    ])
}

/// Validation message shown under the field it belongs to
pub fn error_line(message: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
        Span::styled(format!("↳ {message}"), Style::default().fg(Color::Red)),
    ])
}
