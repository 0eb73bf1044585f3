//! Actions panel (Add Row, Submit, Copy JSON)

use super::components::{render_action_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::ActionButton;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Panel height: buttons plus the surrounding border
pub const ACTIONS_HEIGHT: u16 = BUTTON_HEIGHT + 2;

fn accent(button: ActionButton) -> Option<Color> {
    match button {
        ActionButton::Submit => Some(Color::Green),
        ActionButton::AddRow | ActionButton::CopyJson => None,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let cursor = &app.state.cursor;
    let border_style = if cursor.on_actions() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            ActionButton::ALL
                .iter()
                .map(|_| Constraint::Ratio(1, ActionButton::ALL.len() as u32)),
        )
        .split(inner);

    for (button, chunk) in ActionButton::ALL.into_iter().zip(chunks.iter()) {
        render_action_button(
            frame,
            *chunk,
            button.label(),
            cursor.is_action_focused(button),
            accent(button),
        );
    }
}
