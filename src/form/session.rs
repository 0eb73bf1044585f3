//! Form session: the row store plus its notification side effects

use super::error::{FormError, FormResult};
use super::notify::{Notification, NotificationEvent, Notifier};
use super::record::{FileRef, Gender, Qualification, RowRecord, TextField};
use super::store::RowStore;
use super::submission::{self, Submission};

/// State container owned by the UI session.
///
/// Wraps a [`RowStore`] and raises the user-visible notifications that go with
/// adding rows, removing rows, and submitting.
#[derive(Debug)]
pub struct FormSession<N: Notifier> {
    store: RowStore,
    notifier: N,
    last_submission: Option<Submission>,
}

impl<N: Notifier> FormSession<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            store: RowStore::initialize(),
            notifier,
            last_submission: None,
        }
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn rows(&self) -> &[RowRecord] {
        self.store.rows()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// The most recent successful submission, if any
    pub fn last_submission(&self) -> Option<&Submission> {
        self.last_submission.as_ref()
    }

    pub fn add_row(&mut self) -> usize {
        let index = self.store.append();
        tracing::debug!(index, rows = self.store.row_count(), "row added");
        self.notify(NotificationEvent::RowAdded);
        index
    }

    pub fn remove_row(&mut self, index: usize) -> FormResult<()> {
        self.store.remove_at(index)?;
        tracing::debug!(index, rows = self.store.row_count(), "row removed");
        self.notify(NotificationEvent::RowRemoved);
        Ok(())
    }

    pub fn set_text(&mut self, index: usize, field: TextField, value: String) -> FormResult<()> {
        self.store.set_text(index, field, value)
    }

    /// Append one character to a text field
    pub fn push_char(&mut self, index: usize, field: TextField, c: char) -> FormResult<()> {
        let mut value = self.text_of(index, field)?;
        value.push(c);
        self.store.set_text(index, field, value)
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, index: usize, field: TextField) -> FormResult<()> {
        let mut value = self.text_of(index, field)?;
        value.pop();
        self.store.set_text(index, field, value)
    }

    pub fn set_gender(&mut self, index: usize, gender: Gender) -> FormResult<()> {
        self.store.set_gender(index, gender)
    }

    pub fn set_qualification(
        &mut self,
        index: usize,
        qualification: Qualification,
    ) -> FormResult<()> {
        self.store.set_qualification(index, qualification)
    }

    pub fn set_government_id(&mut self, index: usize, checked: bool) -> FormResult<()> {
        self.store.set_government_id(index, checked)
    }

    pub fn attach_proof(&mut self, index: usize, file: FileRef) -> FormResult<()> {
        self.store.attach_proof(index, file)
    }

    pub fn clear_proof(&mut self, index: usize) -> FormResult<()> {
        self.store.clear_proof(index)
    }

    /// Run the submission pipeline.
    ///
    /// An empty form raises the blocking notification and leaves the previous
    /// submission in place.
    pub fn submit(&mut self) -> FormResult<&Submission> {
        match submission::submit(&mut self.store) {
            Ok(result) => {
                tracing::info!(
                    accepted = result.accepted_count(),
                    rejected = result.rejected_count(),
                    "form submitted"
                );
                self.notify(NotificationEvent::SubmitSucceeded);
                Ok(&*self.last_submission.insert(result))
            }
            Err(FormError::EmptyForm) => {
                tracing::info!("submit blocked: no row has content");
                self.notify(NotificationEvent::SubmitBlocked);
                Err(FormError::EmptyForm)
            }
            Err(e) => {
                tracing::error!("submit failed: {e}");
                Err(e)
            }
        }
    }

    fn text_of(&self, index: usize, field: TextField) -> FormResult<String> {
        self.store
            .get(index)
            .map(|row| row.text(field).to_string())
            .ok_or(FormError::RowOutOfRange {
                index,
                len: self.store.row_count(),
            })
    }

    fn notify(&mut self, event: NotificationEvent) {
        self.notifier.notify(Notification::from(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::notify::{MockNotifier, NotificationKind};
    use mockall::predicate::function;

    fn expect_event(mock: &mut MockNotifier, event: NotificationEvent, times: usize) {
        mock.expect_notify()
            .with(function(move |n: &Notification| n.event == event))
            .times(times)
            .return_const(());
    }

    fn fill_valid(session: &mut FormSession<MockNotifier>, index: usize) {
        session
            .set_text(index, TextField::Name, "Alexandria".to_string())
            .unwrap();
        session
            .set_text(index, TextField::Email, "a@b.com".to_string())
            .unwrap();
        session.set_gender(index, Gender::Female).unwrap();
        session
            .set_qualification(index, Qualification::HighSchool)
            .unwrap();
    }

    #[test]
    fn test_new_session_has_one_row() {
        let session = FormSession::new(MockNotifier::new());
        assert_eq!(session.rows().len(), 1);
        assert!(session.last_submission().is_none());
    }

    #[test]
    fn test_add_row_notifies() {
        let mut mock = MockNotifier::new();
        mock.expect_notify()
            .withf(|n| {
                n.message == "New row added successfully!" && n.kind == NotificationKind::Success
            })
            .times(1)
            .return_const(());
        let mut session = FormSession::new(mock);
        assert_eq!(session.add_row(), 1);
        assert_eq!(session.rows().len(), 2);
    }

    #[test]
    fn test_remove_row_notifies() {
        let mut mock = MockNotifier::new();
        expect_event(&mut mock, NotificationEvent::RowAdded, 1);
        expect_event(&mut mock, NotificationEvent::RowRemoved, 1);
        let mut session = FormSession::new(mock);
        session.add_row();
        session.remove_row(1).unwrap();
        assert_eq!(session.rows().len(), 1);
    }

    #[test]
    fn test_rejected_remove_is_silent() {
        let mut mock = MockNotifier::new();
        mock.expect_notify().never();
        let mut session = FormSession::new(mock);
        assert_eq!(session.remove_row(0), Err(FormError::FirstRowLocked));
        assert!(matches!(
            session.remove_row(4),
            Err(FormError::RowOutOfRange { index: 4, len: 1 })
        ));
    }

    #[test]
    fn test_empty_submit_blocks() {
        let mut mock = MockNotifier::new();
        mock.expect_notify()
            .withf(|n| {
                n.message == "Please fill at least one row before submitting!"
                    && n.kind == NotificationKind::Error
            })
            .times(1)
            .return_const(());
        let mut session = FormSession::new(mock);
        assert!(matches!(session.submit(), Err(FormError::EmptyForm)));
        assert!(session.last_submission().is_none());
    }

    #[test]
    fn test_successful_submit_notifies_and_stores_result() {
        let mut mock = MockNotifier::new();
        expect_event(&mut mock, NotificationEvent::SubmitSucceeded, 1);
        let mut session = FormSession::new(mock);
        fill_valid(&mut session, 0);

        let submission = session.submit().unwrap();
        assert_eq!(submission.accepted_count(), 1);
        assert!(session.last_submission().is_some());
    }

    #[test]
    fn test_blocked_submit_keeps_previous_result() {
        let mut mock = MockNotifier::new();
        expect_event(&mut mock, NotificationEvent::SubmitSucceeded, 1);
        expect_event(&mut mock, NotificationEvent::SubmitBlocked, 1);
        let mut session = FormSession::new(mock);
        fill_valid(&mut session, 0);
        session.submit().unwrap();

        session
            .set_text(0, TextField::Name, String::new())
            .unwrap();
        session
            .set_text(0, TextField::Email, String::new())
            .unwrap();
        session.set_gender(0, Gender::Unset).unwrap();
        session.set_qualification(0, Qualification::Unset).unwrap();
        assert!(session.submit().is_err());
        assert_eq!(
            session.last_submission().map(|s| s.accepted_count()),
            Some(1)
        );
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut session = FormSession::new(MockNotifier::new());
        for c in "Ann".chars() {
            session.push_char(0, TextField::Name, c).unwrap();
        }
        session.pop_char(0, TextField::Name).unwrap();
        assert_eq!(session.rows()[0].name, "An");
        session.pop_char(0, TextField::Email).unwrap();
        assert_eq!(session.rows()[0].email, "");
        assert!(session.push_char(3, TextField::Name, 'x').is_err());
    }

    #[test]
    fn test_government_id_toggle_through_session() {
        let mut session = FormSession::new(MockNotifier::new());
        session.set_government_id(0, true).unwrap();
        session
            .attach_proof(0, FileRef::new("/tmp/licence.pdf"))
            .unwrap();
        session.set_government_id(0, false).unwrap();
        assert!(session.rows()[0].government_id_proof.is_none());
    }
}
