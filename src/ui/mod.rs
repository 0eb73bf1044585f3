//! UI module for rendering the TUI

mod actions;
mod components;
mod field_renderer;
mod layout;
mod result_panel;
mod rows;
mod toasts;

use crate::app::App;
use components::{render_error_dialog, render_file_dialog};
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, app);
    rows::draw(frame, areas.rows, app);
    actions::draw(frame, areas.actions, app);
    result_panel::draw(frame, areas.result, app);
    layout::draw_status_bar(frame, app);

    toasts::draw(frame, app.state.toasts().toasts(), Instant::now());

    // Modals last so they sit above everything else
    if let Some(prompt) = &app.state.file_prompt {
        render_file_dialog(frame, prompt);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
