//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool, accent: Color) {
    let border_style = if is_selected {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render an action panel button, optionally with an accent color for the
/// primary action
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    accent: Option<Color>,
) {
    let content = if is_selected {
        format!("▸ {label}")
    } else {
        format!("  {label}")
    };
    render_button(
        frame,
        area,
        &content,
        is_selected,
        accent.unwrap_or(Color::Cyan),
    );
}
