//! Government ID proof file dialog

use super::base::{key_hints, render_dialog, DialogConfig};
use crate::state::FilePrompt;
use ratatui::{style::Color, Frame};

/// Render the path entry dialog for a row's ID proof
pub fn render_file_dialog(frame: &mut Frame, prompt: &FilePrompt) {
    let title = format!("Upload Government ID Proof (row {})", prompt.row + 1);
    let message = format!("{}▌", prompt.input);

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: &message,
            hint: Some(key_hints(&[
                ("Enter", "attach"),
                ("^U", "clear"),
                ("Esc", "cancel"),
            ])),
            max_width: 70,
        },
    );
}
