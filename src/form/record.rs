//! Row record value objects

use super::validator::{FieldErrors, Verdict};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Gender choice for a row (radio group)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(rename = "")]
    Unset,
    Male,
    Female,
}

impl Gender {
    /// Selectable options in display order
    pub const OPTIONS: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Radio-style navigation: Left picks Male, Right picks Female
    pub fn prev(&self) -> Self {
        Self::Male
    }

    pub fn next(&self) -> Self {
        Self::Female
    }
}

/// Highest qualification for a row (select box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualification {
    #[default]
    #[serde(rename = "")]
    Unset,
    HighSchool,
    Undergraduate,
    Graduate,
    Postgraduate,
}

impl Qualification {
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Select Qualification",
            Self::HighSchool => "High School",
            Self::Undergraduate => "Undergraduate",
            Self::Graduate => "Graduate",
            Self::Postgraduate => "Postgraduate",
        }
    }

    /// Cycle forward through the options, including the placeholder
    pub fn next(&self) -> Self {
        match self {
            Self::Unset => Self::HighSchool,
            Self::HighSchool => Self::Undergraduate,
            Self::Undergraduate => Self::Graduate,
            Self::Graduate => Self::Postgraduate,
            Self::Postgraduate => Self::Unset,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unset => Self::Postgraduate,
            Self::HighSchool => Self::Unset,
            Self::Undergraduate => Self::HighSchool,
            Self::Graduate => Self::Undergraduate,
            Self::Postgraduate => Self::Graduate,
        }
    }
}

/// Opaque reference to a user-selected file. The bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub path: PathBuf,
}

impl FileRef {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

/// Free-text fields of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
}

/// One registrant's form entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub qualification: Qualification,
    pub government_id: bool,
    pub government_id_proof: Option<FileRef>,
    /// Inline annotations from the last validation pass
    pub errors: FieldErrors,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
        }
    }

    /// True if at least one core field has content after trimming
    pub fn has_any_content(&self) -> bool {
        !self.name.trim().is_empty()
            || !self.email.trim().is_empty()
            || self.gender.is_set()
            || self.qualification.is_set()
    }

    /// True if every core field has content after trimming
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.gender.is_set()
            && self.qualification.is_set()
    }

    /// Store a verdict's messages on the row, replacing earlier ones
    pub fn annotate(&mut self, verdict: &Verdict) {
        self.errors = verdict.errors.clone();
    }

    pub fn clear_annotations(&mut self) {
        self.errors = FieldErrors::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_row() -> RowRecord {
        RowRecord {
            name: "Alexandria".to_string(),
            email: "a@b.com".to_string(),
            gender: Gender::Male,
            qualification: Qualification::Graduate,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_row_is_empty() {
        let row = RowRecord::new();
        assert!(row.name.is_empty());
        assert!(row.email.is_empty());
        assert_eq!(row.gender, Gender::Unset);
        assert_eq!(row.qualification, Qualification::Unset);
        assert!(!row.government_id);
        assert!(row.government_id_proof.is_none());
        assert!(row.errors.is_empty());
    }

    #[test]
    fn test_whitespace_is_not_content() {
        let row = RowRecord {
            name: "   ".to_string(),
            email: "\t".to_string(),
            ..Default::default()
        };
        assert!(!row.has_any_content());
        assert!(!row.is_complete());
    }

    #[test]
    fn test_single_choice_counts_as_content() {
        let row = RowRecord {
            qualification: Qualification::HighSchool,
            ..Default::default()
        };
        assert!(row.has_any_content());
        assert!(!row.is_complete());
    }

    #[test]
    fn test_complete_row() {
        assert!(complete_row().is_complete());
    }

    #[test]
    fn test_qualification_cycle_visits_every_option() {
        let mut q = Qualification::Unset;
        let mut seen = Vec::new();
        for _ in 0..5 {
            q = q.next();
            seen.push(q);
        }
        assert_eq!(q, Qualification::Unset);
        assert!(seen.contains(&Qualification::Postgraduate));
        assert_eq!(Qualification::Unset.prev(), Qualification::Postgraduate);
        assert_eq!(Qualification::Graduate.prev().next(), Qualification::Graduate);
    }

    #[test]
    fn test_gender_radio_navigation() {
        assert_eq!(Gender::Unset.prev(), Gender::Male);
        assert_eq!(Gender::Unset.next(), Gender::Female);
        assert_eq!(Gender::Female.prev(), Gender::Male);
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(serde_json::to_string(&Gender::Unset).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(
            serde_json::to_string(&Qualification::HighSchool).unwrap(),
            "\"highschool\""
        );
        let parsed: Qualification = serde_json::from_str("\"postgraduate\"").unwrap();
        assert_eq!(parsed, Qualification::Postgraduate);
    }

    #[test]
    fn test_file_ref_uses_file_name() {
        let file = FileRef::new("/tmp/scans/passport.pdf");
        assert_eq!(file.name, "passport.pdf");
        assert_eq!(file.path, PathBuf::from("/tmp/scans/passport.pdf"));
    }

    #[test]
    fn test_text_accessors() {
        let mut row = complete_row();
        row.text_mut(TextField::Email).push('x');
        assert_eq!(row.text(TextField::Email), "a@b.comx");
        assert_eq!(row.text(TextField::Name), "Alexandria");
    }
}
