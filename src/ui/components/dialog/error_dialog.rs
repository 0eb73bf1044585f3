//! Error dialog component

use super::base::{key_hints, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the front of the error queue as a red modal
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(key_hints(&[("Enter/Esc", "dismiss")])),
            max_width: 60,
        },
    );
}
