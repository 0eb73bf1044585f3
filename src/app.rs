//! Application state and core logic

use crate::config::TuiConfig;
use crate::form::{FileRef, FormError, Gender, Qualification, TextField};
use crate::state::{ActionButton, AppState, FilePrompt, Focus, RowControl, ToastQueue};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Lines scrolled per PageUp/PageDown in the result panel
const RESULT_PAGE: u16 = 5;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Where config changes are written back; `None` keeps them in memory
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
    /// Short feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance that saves config changes to `config_path`
    pub fn new(config: TuiConfig, config_path: Option<PathBuf>) -> Self {
        let toasts = ToastQueue::new(config.toast_duration());
        Self {
            state: AppState::new(toasts),
            config,
            config_path,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping: drop expired toasts
    pub fn tick(&mut self) {
        if !self.state.toasts().is_empty() {
            self.state.toasts_mut().prune();
        }
    }

    /// How long to wait for input before redrawing: fast while a toast slides
    /// in (~60fps), slower otherwise so countdown bars still move
    pub fn poll_interval(&self) -> Duration {
        if self.state.toasts().is_animating_at(Instant::now()) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle file dialog (modal)
        if self.state.file_prompt.is_some() {
            self.handle_file_prompt_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if self.handle_shortcut(key)? {
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.state.next_control(),
            KeyCode::BackTab => self.state.prev_control(),
            KeyCode::PageDown => self.state.scroll_result_down(RESULT_PAGE),
            KeyCode::PageUp => self.state.scroll_result_up(RESULT_PAGE),
            KeyCode::Esc => self.state.toasts_mut().clear(),
            _ => match self.state.cursor.focus {
                Focus::Row { row, control } => self.handle_row_key(row, control, key),
                Focus::Action(button) => self.handle_action_key(button, key)?,
            },
        }
        Ok(())
    }

    /// Global shortcuts. Returns true if the key was consumed.
    fn handle_shortcut(&mut self, key: KeyEvent) -> Result<bool> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n') if ctrl => self.add_row(),
            KeyCode::Char('s') if ctrl => self.submit()?,
            KeyCode::Char('d') if ctrl => match self.state.cursor.focused_row() {
                Some(row) => self.remove_row(row),
                None => self.status_message = Some("Focus a row to remove it".to_string()),
            },
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_result()?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Handle keys while a row control has focus
    fn handle_row_key(&mut self, row: usize, control: RowControl, key: KeyEvent) {
        let result = match (control, key.code) {
            (_, KeyCode::Down) => {
                self.state.next_control();
                Ok(())
            }
            (_, KeyCode::Up) => {
                self.state.prev_control();
                Ok(())
            }
            (RowControl::Name | RowControl::Email, code) => {
                let Some(field) = control.text_field() else {
                    return;
                };
                self.edit_text(row, field, code, key.modifiers)
            }
            (RowControl::Gender, KeyCode::Left) => {
                let prev = self.current_gender(row).prev();
                self.state.session.set_gender(row, prev)
            }
            (RowControl::Gender, KeyCode::Right) => {
                let next = self.current_gender(row).next();
                self.state.session.set_gender(row, next)
            }
            (RowControl::Gender, KeyCode::Char(' ')) => {
                let next = match self.current_gender(row) {
                    Gender::Male => Gender::Female,
                    Gender::Unset | Gender::Female => Gender::Male,
                };
                self.state.session.set_gender(row, next)
            }
            (RowControl::Qualification, KeyCode::Left) => {
                let prev = self.current_qualification(row).prev();
                self.state.session.set_qualification(row, prev)
            }
            (RowControl::Qualification, KeyCode::Right | KeyCode::Char(' ')) => {
                let next = self.current_qualification(row).next();
                self.state.session.set_qualification(row, next)
            }
            (RowControl::GovernmentId, KeyCode::Char(' ') | KeyCode::Enter) => {
                let checked = self
                    .state
                    .session
                    .store()
                    .get(row)
                    .is_some_and(|r| r.government_id);
                let result = self.state.session.set_government_id(row, !checked);
                self.state.clamp_cursor();
                result
            }
            (RowControl::Proof, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.open_file_prompt(row);
                Ok(())
            }
            (RowControl::Proof, KeyCode::Backspace | KeyCode::Delete) => {
                self.state.session.clear_proof(row)
            }
            (RowControl::Remove, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.remove_row(row);
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.status_message = Some(e.to_string());
        }
    }

    fn edit_text(
        &mut self,
        row: usize,
        field: TextField,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<(), FormError> {
        match code {
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.session.set_text(row, field, String::new())
            }
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.session.push_char(row, field, c)
            }
            KeyCode::Backspace => self.state.session.pop_char(row, field),
            KeyCode::Enter => {
                self.state.next_control();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Handle keys while an action button has focus
    fn handle_action_key(&mut self, button: ActionButton, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => match button {
                ActionButton::AddRow => self.add_row(),
                ActionButton::Submit => self.submit()?,
                ActionButton::CopyJson => self.copy_result()?,
            },
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => self.state.next_control(),
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.state.prev_control(),
            _ => {}
        }
        Ok(())
    }

    fn current_gender(&self, row: usize) -> Gender {
        self.state
            .session
            .store()
            .get(row)
            .map(|r| r.gender)
            .unwrap_or_default()
    }

    fn current_qualification(&self, row: usize) -> Qualification {
        self.state
            .session
            .store()
            .get(row)
            .map(|r| r.qualification)
            .unwrap_or_default()
    }

    /// Append a row and move focus to it
    fn add_row(&mut self) {
        let index = self.state.session.add_row();
        self.state.cursor.focus_row(index);
    }

    fn remove_row(&mut self, row: usize) {
        match self.state.session.remove_row(row) {
            Ok(()) => self.state.clamp_cursor(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Run the submit pipeline; an empty form is reported through its toast
    fn submit(&mut self) -> Result<()> {
        let json = match self.state.session.submit() {
            Ok(submission) => submission.json.clone(),
            Err(FormError::EmptyForm) => return Ok(()),
            Err(e) => {
                self.push_error(e.to_string());
                return Ok(());
            }
        };
        self.state.result_scroll = 0;
        if self.config.copy_on_submit() {
            if let Err(e) = self.copy_to_clipboard(&json) {
                self.push_error(format!("Failed to copy result: {e}"));
            }
        }
        Ok(())
    }

    /// Copy the last submission's JSON to the clipboard
    fn copy_result(&mut self) -> Result<()> {
        let Some(json) = self
            .state
            .session
            .last_submission()
            .map(|s| s.json.clone())
        else {
            self.status_message = Some("Nothing submitted yet".to_string());
            return Ok(());
        };
        match self.copy_to_clipboard(&json) {
            Ok(()) => self.status_message = Some(format!("Copied {} chars", json.len())),
            Err(e) => self.push_error(format!("Failed to copy result: {e}")),
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    fn save_config(&self) {
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::warn!("Failed to save config: {e}");
        }
    }

    fn open_file_prompt(&mut self, row: usize) {
        self.state.file_prompt = Some(FilePrompt::new(row, self.config.initial_proof_input()));
    }

    /// Handle keys in the proof file dialog
    fn handle_file_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.state.file_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.state.file_prompt = None,
            KeyCode::Enter => self.confirm_file_prompt(),
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.input.clear();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                prompt.input.push(c);
            }
            _ => {}
        }
    }

    /// Attach the typed path as the row's proof. Only checks that the path
    /// names a regular file; the contents are never read.
    fn confirm_file_prompt(&mut self) {
        let Some(prompt) = self.state.file_prompt.clone() else {
            return;
        };
        let path = PathBuf::from(prompt.input.trim());
        if path.as_os_str().is_empty() {
            self.push_error("Enter the path of the ID proof file");
            return;
        }
        if !std::fs::metadata(&path).is_ok_and(|m| m.is_file()) {
            self.push_error(format!("File not found: {}", path.display()));
            return;
        }

        let file = FileRef::new(&path);
        let name = file.name.clone();
        match self.state.session.attach_proof(prompt.row, file) {
            Ok(()) => {
                tracing::info!(row = prompt.row, file = %path.display(), "proof attached");
                self.state.file_prompt = None;
                self.status_message = Some(format!("Attached {name}"));
                if self.config.remember_proof_dir(&path) {
                    self.save_config();
                }
            }
            Err(e) => {
                self.state.file_prompt = None;
                self.push_error(e.to_string());
            }
        }
    }
}
