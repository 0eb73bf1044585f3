//! Toast overlay, stacked in the top-right corner

use crate::form::NotificationKind;
use crate::state::Toast;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const TOAST_HEIGHT: u16 = 3;
const MAX_TOAST_WIDTH: u16 = 50;

fn color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    }
}

/// Where a toast sits on screen; while sliding in it starts past the right
/// edge and eases into place
fn toast_area(area: Rect, slot: u16, width: u16, progress: f32) -> Option<Rect> {
    let y = area.y + 1 + slot * TOAST_HEIGHT;
    if y + TOAST_HEIGHT > area.bottom() {
        return None;
    }
    let width = width.min(area.width.saturating_sub(2));
    let resting_x = area.right().saturating_sub(width + 1);
    let offset = ((1.0 - progress.clamp(0.0, 1.0)) * f32::from(width + 1)).round() as u16;
    let x = resting_x.saturating_add(offset);
    let visible = area.right().saturating_sub(x).min(width);
    (visible > 0).then_some(Rect {
        x,
        y,
        width: visible,
        height: TOAST_HEIGHT,
    })
}

fn countdown(width: u16, fraction: f32) -> String {
    let filled = (f32::from(width) * fraction).round() as usize;
    "━".repeat(filled)
}

pub fn draw(frame: &mut Frame, toasts: &[Toast], now: Instant) {
    let area = frame.area();
    // Newest on top
    for (slot, toast) in toasts.iter().rev().enumerate() {
        let width = (toast.message().chars().count() as u16 + 4).min(MAX_TOAST_WIDTH);
        let Some(rect) = toast_area(area, slot as u16, width, toast.slide_progress_at(now)) else {
            continue;
        };

        let accent = color(toast.kind());
        let bar = countdown(rect.width.saturating_sub(2), toast.remaining_fraction_at(now));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title_bottom(Line::styled(bar, Style::default().fg(accent)));
        let message = Paragraph::new(format!(" {}", toast.message()))
            .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .block(block);

        frame.render_widget(Clear, rect);
        frame.render_widget(message, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    #[test]
    fn test_resting_position_is_top_right() {
        let rect = toast_area(screen(), 0, 30, 1.0).unwrap();
        assert_eq!(rect, Rect::new(69, 1, 30, 3));
    }

    #[test]
    fn test_slots_stack_downward() {
        let rect = toast_area(screen(), 2, 30, 1.0).unwrap();
        assert_eq!(rect.y, 7);
    }

    #[test]
    fn test_slide_starts_off_screen() {
        assert!(toast_area(screen(), 0, 30, 0.0).is_none());
        let half = toast_area(screen(), 0, 30, 0.5).unwrap();
        assert!(half.x > 69);
        assert!(half.width < 30);
    }

    #[test]
    fn test_no_room_below() {
        assert!(toast_area(Rect::new(0, 0, 100, 5), 1, 30, 1.0).is_none());
    }

    #[test]
    fn test_countdown_width() {
        assert_eq!(countdown(10, 1.0).chars().count(), 10);
        assert_eq!(countdown(10, 0.5).chars().count(), 5);
        assert_eq!(countdown(10, 0.0), "");
    }
}
