//! Application state definitions

use super::cursor::FormCursor;
use super::toast::ToastQueue;
use crate::form::FormSession;
use std::collections::VecDeque;

/// Pending government ID proof selection (modal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePrompt {
    /// Row the file will be attached to
    pub row: usize,
    /// Path typed so far
    pub input: String,
}

impl FilePrompt {
    pub fn new(row: usize, initial: impl Into<String>) -> Self {
        Self {
            row,
            input: initial.into(),
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Rows and submission result, plus the toast queue as notifier
    pub session: FormSession<ToastQueue>,
    pub cursor: FormCursor,
    pub file_prompt: Option<FilePrompt>,
    /// Vertical scroll of the JSON result panel
    pub result_scroll: u16,
    /// Queue of error messages shown one at a time in a modal dialog
    pub error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ToastQueue::default())
    }
}

impl AppState {
    pub fn new(toasts: ToastQueue) -> Self {
        Self {
            session: FormSession::new(toasts),
            cursor: FormCursor::default(),
            file_prompt: None,
            result_scroll: 0,
            error_queue: VecDeque::new(),
        }
    }

    pub fn toasts(&self) -> &ToastQueue {
        self.session.notifier()
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        self.session.notifier_mut()
    }

    /// Re-anchor the cursor after the row set changed shape
    pub fn clamp_cursor(&mut self) {
        self.cursor.clamp(self.session.rows());
    }

    pub fn next_control(&mut self) {
        self.cursor.next(self.session.rows());
    }

    pub fn prev_control(&mut self) {
        self.cursor.prev(self.session.rows());
    }

    /// Push an error message onto the dialog queue
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    /// Dismiss the current error (shows the next one, if any)
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn current_error(&self) -> Option<&String> {
        self.error_queue.front()
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn scroll_result_down(&mut self, lines: u16) {
        let max = self
            .session
            .last_submission()
            .map(|s| max_result_scroll(&s.json))
            .unwrap_or(0);
        self.result_scroll = self.result_scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_result_up(&mut self, lines: u16) {
        self.result_scroll = self.result_scroll.saturating_sub(lines);
    }
}

/// Furthest scroll offset that still shows the last JSON line
fn max_result_scroll(json: &str) -> u16 {
    u16::try_from(json.lines().count().saturating_sub(1)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Gender, Qualification, TextField};

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error().map(String::as_str), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error().map(String::as_str), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_session_notifications_land_in_toasts() {
        let mut state = AppState::default();
        state.session.add_row();
        assert_eq!(state.toasts().toasts().len(), 1);
    }

    #[test]
    fn test_result_scroll_is_bounded() {
        let mut state = AppState::default();
        state.scroll_result_down(10);
        assert_eq!(state.result_scroll, 0);

        let session = &mut state.session;
        session
            .set_text(0, TextField::Name, "Alexandria".to_string())
            .unwrap();
        session
            .set_text(0, TextField::Email, "a@b.com".to_string())
            .unwrap();
        session.set_gender(0, Gender::Male).unwrap();
        session.set_qualification(0, Qualification::Graduate).unwrap();
        session.submit().unwrap();

        // "[", "{", six fields, "}", "]"
        state.scroll_result_down(100);
        assert_eq!(state.result_scroll, 9);
        state.scroll_result_up(4);
        assert_eq!(state.result_scroll, 5);
        state.scroll_result_up(40);
        assert_eq!(state.result_scroll, 0);
    }

    #[test]
    fn test_max_result_scroll_saturates() {
        assert_eq!(max_result_scroll(""), 0);
        assert_eq!(max_result_scroll("[\n]"), 1);
        let huge = "{}\n".repeat(70_000);
        assert_eq!(max_result_scroll(&huge), u16::MAX);
    }
}
