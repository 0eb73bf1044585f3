//! Ordered row collection

use super::error::{FormError, FormResult};
use super::record::{FileRef, Gender, Qualification, RowRecord, TextField};

/// Ordered collection of rows. Never holds fewer than one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStore {
    rows: Vec<RowRecord>,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::initialize()
    }
}

impl RowStore {
    /// A store holding a single empty row
    pub fn initialize() -> Self {
        Self {
            rows: vec![RowRecord::new()],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [RowRecord] {
        &mut self.rows
    }

    pub fn get(&self, index: usize) -> Option<&RowRecord> {
        self.rows.get(index)
    }

    /// Append an empty row and return its index
    pub fn append(&mut self) -> usize {
        self.rows.push(RowRecord::new());
        self.rows.len() - 1
    }

    /// Remove the row at `index`. Row 0 is permanent.
    pub fn remove_at(&mut self, index: usize) -> FormResult<RowRecord> {
        self.check_index(index)?;
        if index == 0 {
            return Err(FormError::FirstRowLocked);
        }
        Ok(self.rows.remove(index))
    }

    pub fn set_text(&mut self, index: usize, field: TextField, value: String) -> FormResult<()> {
        *self.row_mut(index)?.text_mut(field) = value;
        Ok(())
    }

    pub fn set_gender(&mut self, index: usize, gender: Gender) -> FormResult<()> {
        self.row_mut(index)?.gender = gender;
        Ok(())
    }

    pub fn set_qualification(
        &mut self,
        index: usize,
        qualification: Qualification,
    ) -> FormResult<()> {
        self.row_mut(index)?.qualification = qualification;
        Ok(())
    }

    /// Toggle the Government ID box. Unchecking drops any attached proof.
    pub fn set_government_id(&mut self, index: usize, checked: bool) -> FormResult<()> {
        let row = self.row_mut(index)?;
        row.government_id = checked;
        if !checked {
            row.government_id_proof = None;
        }
        Ok(())
    }

    pub fn attach_proof(&mut self, index: usize, file: FileRef) -> FormResult<()> {
        let row = self.row_mut(index)?;
        if !row.government_id {
            return Err(FormError::ProofWithoutGovernmentId { index });
        }
        row.government_id_proof = Some(file);
        Ok(())
    }

    pub fn clear_proof(&mut self, index: usize) -> FormResult<()> {
        self.row_mut(index)?.government_id_proof = None;
        Ok(())
    }

    fn check_index(&self, index: usize) -> FormResult<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(FormError::RowOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }

    fn row_mut(&mut self, index: usize) -> FormResult<&mut RowRecord> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(FormError::RowOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> RowStore {
        let mut store = RowStore::initialize();
        store
            .set_text(0, TextField::Name, name.to_string())
            .unwrap();
        store
    }

    #[test]
    fn test_initialize_has_one_empty_row() {
        let store = RowStore::initialize();
        assert_eq!(store.row_count(), 1);
        assert_eq!(store.rows()[0], RowRecord::new());
    }

    #[test]
    fn test_append_keeps_existing_rows() {
        let mut store = named("first");
        let before = store.rows()[0].clone();
        let index = store.append();
        assert_eq!(index, 1);
        assert_eq!(store.row_count(), 2);
        assert_eq!(store.rows()[0], before);
        assert_eq!(store.rows()[1], RowRecord::new());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = named("r0");
        for name in ["r1", "r2", "r3"] {
            let i = store.append();
            store.set_text(i, TextField::Name, name.to_string()).unwrap();
        }
        let removed = store.remove_at(2).unwrap();
        assert_eq!(removed.name, "r2");
        let names: Vec<&str> = store.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["r0", "r1", "r3"]);
    }

    #[test]
    fn test_first_row_is_locked() {
        let mut store = named("keep me");
        store.append();
        assert_eq!(store.remove_at(0), Err(FormError::FirstRowLocked));
        assert_eq!(store.row_count(), 2);
        assert_eq!(store.rows()[0].name, "keep me");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = RowStore::initialize();
        assert_eq!(
            store.remove_at(3),
            Err(FormError::RowOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(store.row_count(), 1);
    }

    #[test]
    fn test_update_out_of_range() {
        let mut store = RowStore::initialize();
        assert!(store.set_gender(1, Gender::Male).is_err());
        assert!(store
            .set_qualification(5, Qualification::Graduate)
            .is_err());
        assert!(store.set_government_id(1, true).is_err());
    }

    #[test]
    fn test_choice_updates() {
        let mut store = RowStore::initialize();
        store.set_gender(0, Gender::Female).unwrap();
        store
            .set_qualification(0, Qualification::Postgraduate)
            .unwrap();
        assert_eq!(store.rows()[0].gender, Gender::Female);
        assert_eq!(store.rows()[0].qualification, Qualification::Postgraduate);
    }

    #[test]
    fn test_unchecking_government_id_clears_proof() {
        let mut store = RowStore::initialize();
        store.set_government_id(0, true).unwrap();
        store.attach_proof(0, FileRef::new("/tmp/id.png")).unwrap();
        assert!(store.rows()[0].government_id_proof.is_some());

        store.set_government_id(0, false).unwrap();
        assert!(!store.rows()[0].government_id);
        assert!(store.rows()[0].government_id_proof.is_none());
    }

    #[test]
    fn test_unchecking_without_proof_is_fine() {
        let mut store = RowStore::initialize();
        store.set_government_id(0, false).unwrap();
        assert!(store.rows()[0].government_id_proof.is_none());
    }

    #[test]
    fn test_rechecking_keeps_proof() {
        let mut store = RowStore::initialize();
        store.set_government_id(0, true).unwrap();
        store.attach_proof(0, FileRef::new("/tmp/id.png")).unwrap();
        store.set_government_id(0, true).unwrap();
        assert!(store.rows()[0].government_id_proof.is_some());
    }

    #[test]
    fn test_proof_requires_government_id() {
        let mut store = RowStore::initialize();
        assert_eq!(
            store.attach_proof(0, FileRef::new("/tmp/id.png")),
            Err(FormError::ProofWithoutGovernmentId { index: 0 })
        );
        assert!(store.rows()[0].government_id_proof.is_none());
    }

    #[test]
    fn test_clear_proof() {
        let mut store = RowStore::initialize();
        store.set_government_id(0, true).unwrap();
        store.attach_proof(0, FileRef::new("/tmp/id.png")).unwrap();
        store.clear_proof(0).unwrap();
        assert!(store.rows()[0].government_id);
        assert!(store.rows()[0].government_id_proof.is_none());
    }
}
