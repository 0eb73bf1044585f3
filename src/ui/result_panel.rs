//! Submitted data panel

use crate::app::App;
use crate::form::Submission;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Summary shown in the panel's bottom border
fn summary(submission: &Submission) -> String {
    format!(
        " {} · {} accepted, {} with errors ",
        submission.submitted_at.format("%H:%M:%S"),
        submission.accepted_count(),
        submission.rejected_count()
    )
}

fn json_lines(json: &str) -> Vec<Line<'_>> {
    json.lines()
        .map(|line| {
            if line.trim_start().starts_with("\"error\"") {
                Line::styled(line, Style::default().fg(Color::Red))
            } else {
                Line::raw(line)
            }
        })
        .collect()
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submitted Data (JSON) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(submission) = app.state.session.last_submission() else {
        let hint = Paragraph::new("Submit the form to see the payload here.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let block = block.title_bottom(Line::styled(
        summary(submission),
        Style::default().fg(Color::Gray),
    ));
    let content = Paragraph::new(json_lines(&submission.json))
        .block(block)
        .scroll((app.state.result_scroll, 0));
    frame.render_widget(content, area);
}
