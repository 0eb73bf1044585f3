//! Row blocks of the form

use super::field_renderer::{
    button_line, checkbox_line, error_line, gender_line, proof_line, select_line, text_line,
};
use crate::app::App;
use crate::form::RowRecord;
use crate::state::{FormCursor, RowControl};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the content lines for one row, inline errors included
fn row_lines(index: usize, record: &RowRecord, cursor: &FormCursor) -> Vec<Line<'static>> {
    let active = |control| cursor.is_focused(index, control);
    let errors = &record.errors;
    let mut lines = Vec::new();

    lines.push(text_line("Name", &record.name, active(RowControl::Name)));
    if let Some(e) = errors.name {
        lines.push(error_line(&e.to_string()));
    }
    lines.push(text_line("Email", &record.email, active(RowControl::Email)));
    if let Some(e) = errors.email {
        lines.push(error_line(&e.to_string()));
    }
    lines.push(gender_line(record.gender, active(RowControl::Gender)));
    if let Some(e) = errors.gender {
        lines.push(error_line(&e.to_string()));
    }
    lines.push(select_line(
        "Qualification",
        record.qualification.label(),
        !record.qualification.is_set(),
        active(RowControl::Qualification),
    ));
    if let Some(e) = errors.qualification {
        lines.push(error_line(&e.to_string()));
    }
    lines.push(checkbox_line(
        "Government ID",
        record.government_id,
        active(RowControl::GovernmentId),
    ));
    if record.government_id {
        lines.push(proof_line(
            record.government_id_proof.as_ref(),
            active(RowControl::Proof),
        ));
    }
    if index > 0 {
        lines.push(button_line("Remove", Color::Red, active(RowControl::Remove)));
    }
    lines
}

/// First row to draw so the focused row fits in `available` lines
fn first_visible_row(heights: &[u16], focused: Option<usize>, available: u16) -> usize {
    let Some(focused) = focused.filter(|f| *f < heights.len()) else {
        return 0;
    };
    // Walk back from the focused row while the blocks still fit
    let mut first = focused;
    let mut used = u32::from(heights[focused]);
    while first > 0 {
        used += u32::from(heights[first - 1]);
        if used > u32::from(available) {
            break;
        }
        first -= 1;
    }
    first
}

/// Draw every row block that fits, scrolled to the focused row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.state.session.rows();
    let cursor = &app.state.cursor;

    let blocks: Vec<Vec<Line>> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| row_lines(i, r, cursor))
        .collect();
    let heights: Vec<u16> = blocks.iter().map(|l| l.len() as u16 + 2).collect();
    let first = first_visible_row(&heights, cursor.focused_row(), area.height);

    let mut y = area.y;
    for (index, lines) in blocks.into_iter().enumerate().skip(first) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }
        let height = heights[index].min(remaining);
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };

        let has_focus = cursor.focused_row() == Some(index);
        let border_style = if has_focus {
            Style::default().fg(Color::Cyan)
        } else if !rows[index].errors.is_empty() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title_style = if has_focus {
            border_style.add_modifier(Modifier::BOLD)
        } else {
            border_style
        };
        let issues = rows[index].errors.iter().count();
        let title = match issues {
            0 => format!(" Row {} ", index + 1),
            1 => format!(" Row {} · 1 issue ", index + 1),
            n => format!(" Row {} · {n} issues ", index + 1),
        };
        let block = Block::default()
            .title(Line::styled(title, title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), row_area);
        y += height;
    }

    if first > 0 {
        let hint = format!(" ↑ {first} more ");
        let hint_area = Rect {
            x: area.right().saturating_sub(hint.chars().count() as u16 + 1),
            y: area.y,
            width: (hint.chars().count() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::Yellow)),
            hint_area,
        );
    }
}
