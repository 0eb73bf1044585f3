//! Keyboard focus across row controls and action buttons

use crate::form::{RowRecord, TextField};

/// A focusable control inside one row block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    Name,
    Email,
    Gender,
    Qualification,
    GovernmentId,
    Proof,
    Remove,
}

impl RowControl {
    /// Controls offered for a row, in tab order.
    /// The proof picker only exists while Government ID is checked and the
    /// first row has no remove button.
    pub fn controls_for(index: usize, record: &RowRecord) -> Vec<RowControl> {
        let mut controls = vec![
            Self::Name,
            Self::Email,
            Self::Gender,
            Self::Qualification,
            Self::GovernmentId,
        ];
        if record.government_id {
            controls.push(Self::Proof);
        }
        if index > 0 {
            controls.push(Self::Remove);
        }
        controls
    }

    pub fn text_field(&self) -> Option<TextField> {
        match self {
            Self::Name => Some(TextField::Name),
            Self::Email => Some(TextField::Email),
            _ => None,
        }
    }
}

/// Buttons in the actions panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    AddRow,
    Submit,
    CopyJson,
}

impl ActionButton {
    pub const ALL: [ActionButton; 3] = [Self::AddRow, Self::Submit, Self::CopyJson];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddRow => "Add Row",
            Self::Submit => "Submit",
            Self::CopyJson => "Copy JSON",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Row { row: usize, control: RowControl },
    Action(ActionButton),
}

impl Default for Focus {
    fn default() -> Self {
        Self::Row {
            row: 0,
            control: RowControl::Name,
        }
    }
}

/// Tab-order cursor over the whole form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormCursor {
    pub focus: Focus,
}

impl FormCursor {
    fn stops(rows: &[RowRecord]) -> Vec<Focus> {
        let mut stops: Vec<Focus> = rows
            .iter()
            .enumerate()
            .flat_map(|(row, record)| {
                RowControl::controls_for(row, record)
                    .into_iter()
                    .map(move |control| Focus::Row { row, control })
            })
            .collect();
        stops.extend(ActionButton::ALL.into_iter().map(Focus::Action));
        stops
    }

    fn position(&self, stops: &[Focus]) -> usize {
        stops.iter().position(|f| *f == self.focus).unwrap_or(0)
    }

    pub fn next(&mut self, rows: &[RowRecord]) {
        let stops = Self::stops(rows);
        let current = self.position(&stops);
        self.focus = stops[(current + 1) % stops.len()];
    }

    pub fn prev(&mut self, rows: &[RowRecord]) {
        let stops = Self::stops(rows);
        let current = self.position(&stops);
        self.focus = if current == 0 {
            stops[stops.len() - 1]
        } else {
            stops[current - 1]
        };
    }

    /// Pull focus back onto an existing control after rows or controls vanish
    pub fn clamp(&mut self, rows: &[RowRecord]) {
        let Focus::Row { row, control } = self.focus else {
            return;
        };
        let Some(last) = rows.len().checked_sub(1) else {
            self.focus_action(ActionButton::AddRow);
            return;
        };
        let row = row.min(last);
        let controls = RowControl::controls_for(row, &rows[row]);
        let control = if controls.contains(&control) {
            control
        } else if control == RowControl::Proof {
            RowControl::GovernmentId
        } else {
            RowControl::Name
        };
        self.focus = Focus::Row { row, control };
    }

    pub fn focus_row(&mut self, row: usize) {
        self.focus = Focus::Row {
            row,
            control: RowControl::Name,
        };
    }

    pub fn focus_action(&mut self, button: ActionButton) {
        self.focus = Focus::Action(button);
    }

    pub fn focused_row(&self) -> Option<usize> {
        match self.focus {
            Focus::Row { row, .. } => Some(row),
            Focus::Action(_) => None,
        }
    }

    pub fn is_focused(&self, row: usize, control: RowControl) -> bool {
        self.focus == Focus::Row { row, control }
    }

    pub fn is_action_focused(&self, button: ActionButton) -> bool {
        self.focus == Focus::Action(button)
    }

    /// True if focus is on any action button
    pub fn on_actions(&self) -> bool {
        matches!(self.focus, Focus::Action(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<RowRecord> {
        vec![RowRecord::new(); n]
    }

    #[test]
    fn test_first_row_has_no_remove() {
        let record = RowRecord::new();
        assert!(!RowControl::controls_for(0, &record).contains(&RowControl::Remove));
        assert!(RowControl::controls_for(1, &record).contains(&RowControl::Remove));
    }

    #[test]
    fn test_proof_only_when_government_id_checked() {
        let mut record = RowRecord::new();
        assert!(!RowControl::controls_for(0, &record).contains(&RowControl::Proof));
        record.government_id = true;
        assert!(RowControl::controls_for(0, &record).contains(&RowControl::Proof));
    }

    #[test]
    fn test_next_walks_row_then_actions() {
        let rows = rows(1);
        let mut cursor = FormCursor::default();
        for _ in 0..5 {
            cursor.next(&rows);
        }
        assert_eq!(cursor.focus, Focus::Action(ActionButton::AddRow));
        cursor.next(&rows);
        cursor.next(&rows);
        assert!(cursor.is_action_focused(ActionButton::CopyJson));
        cursor.next(&rows);
        assert_eq!(cursor.focus, Focus::default());
    }

    #[test]
    fn test_next_crosses_into_second_row() {
        let rows = rows(2);
        let mut cursor = FormCursor {
            focus: Focus::Row {
                row: 0,
                control: RowControl::GovernmentId,
            },
        };
        cursor.next(&rows);
        assert!(cursor.is_focused(1, RowControl::Name));
    }

    #[test]
    fn test_prev_wraps_to_last_action() {
        let rows = rows(1);
        let mut cursor = FormCursor::default();
        cursor.prev(&rows);
        assert!(cursor.is_action_focused(ActionButton::CopyJson));
    }

    #[test]
    fn test_clamp_after_last_row_removed() {
        let mut cursor = FormCursor {
            focus: Focus::Row {
                row: 2,
                control: RowControl::Remove,
            },
        };
        cursor.clamp(&rows(2));
        assert!(cursor.is_focused(1, RowControl::Remove));
        cursor.clamp(&rows(1));
        assert!(cursor.is_focused(0, RowControl::Name));
    }

    #[test]
    fn test_clamp_after_proof_hidden() {
        let mut cursor = FormCursor {
            focus: Focus::Row {
                row: 0,
                control: RowControl::Proof,
            },
        };
        cursor.clamp(&rows(1));
        assert!(cursor.is_focused(0, RowControl::GovernmentId));
    }

    #[test]
    fn test_clamp_leaves_actions_alone() {
        let mut cursor = FormCursor::default();
        cursor.focus_action(ActionButton::Submit);
        cursor.clamp(&rows(1));
        assert!(cursor.is_action_focused(ActionButton::Submit));
        assert!(cursor.on_actions());
        assert_eq!(cursor.focused_row(), None);
    }

    #[test]
    fn test_text_field_mapping() {
        assert_eq!(RowControl::Name.text_field(), Some(TextField::Name));
        assert_eq!(RowControl::Email.text_field(), Some(TextField::Email));
        assert_eq!(RowControl::Gender.text_field(), None);
    }
}
