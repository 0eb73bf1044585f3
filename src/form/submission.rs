//! Submit-time filtering, validation, and result shaping

use super::error::{FormError, FormResult};
use super::record::{FileRef, Gender, Qualification, RowRecord};
use super::store::RowStore;
use super::validator::validate;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Error text attached to rows that fail validation after filtering
pub const INCOMPLETE_ROW_MESSAGE: &str = "Incomplete data. Please fill in all fields.";

/// A row that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedRow {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub qualification: Qualification,
    pub government_id: bool,
    pub government_id_proof: Option<FileRef>,
}

/// A row that had every core field filled but still failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub name: String,
    pub email: String,
    pub error: String,
}

/// One entry of the submission payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedRow {
    Accepted(AcceptedRow),
    Rejected(RejectedRow),
}

impl SubmittedRow {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

impl From<&RowRecord> for AcceptedRow {
    fn from(row: &RowRecord) -> Self {
        Self {
            name: row.name.clone(),
            email: row.email.clone(),
            gender: row.gender,
            qualification: row.qualification,
            government_id: row.government_id,
            government_id_proof: row.government_id_proof.clone(),
        }
    }
}

impl From<&RowRecord> for RejectedRow {
    fn from(row: &RowRecord) -> Self {
        Self {
            name: row.name.clone(),
            email: row.email.clone(),
            error: INCOMPLETE_ROW_MESSAGE.to_string(),
        }
    }
}

/// Result of a successful submit
#[derive(Debug, Clone)]
pub struct Submission {
    pub rows: Vec<SubmittedRow>,
    /// Two-space indented JSON of `rows`
    pub json: String,
    pub submitted_at: DateTime<Local>,
}

impl Submission {
    pub fn accepted_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_accepted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.rows.len() - self.accepted_count()
    }
}

/// Build the submission payload from the current rows.
///
/// Rows missing any core field are skipped. The remaining rows are validated
/// and annotated in place, so the form can show inline messages for rows that
/// ended up as error entries (e.g. a name shorter than the minimum).
pub fn submit(store: &mut RowStore) -> FormResult<Submission> {
    if !store.rows().iter().any(RowRecord::has_any_content) {
        return Err(FormError::EmptyForm);
    }

    let mut rows = Vec::new();
    for record in store.rows_mut() {
        if !record.is_complete() {
            record.clear_annotations();
            continue;
        }
        let verdict = validate(record);
        record.annotate(&verdict);
        rows.push(if verdict.is_valid() {
            SubmittedRow::Accepted(AcceptedRow::from(&*record))
        } else {
            SubmittedRow::Rejected(RejectedRow::from(&*record))
        });
    }

    let json = serde_json::to_string_pretty(&rows)
        .map_err(|e| FormError::Serialization(e.to_string()))?;

    Ok(Submission {
        rows,
        json,
        submitted_at: Local::now(),
    })
}
