//! Roster records and the table's column set

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The editable categorical field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn all() -> [Gender; 2] {
        [Gender::Male, Gender::Female]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// A targeted replacement of a record's mutable field
///
/// Carries both the field and its new value, so an update can never put a
/// value of the wrong kind into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Gender(Gender),
}

/// One row of the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub mobile: String,
    pub gender: Gender,
    #[serde(default)]
    pub details: String,
}

impl Record {
    /// Text shown in a display column, `None` for columns without cell text
    pub fn display_value(&self, column: ColumnId) -> Option<String> {
        match column {
            ColumnId::Name => Some(self.name.clone()),
            ColumnId::Age => Some(self.age.to_string()),
            ColumnId::Mobile => Some(self.mobile.clone()),
            ColumnId::Drag | ColumnId::Gender | ColumnId::Expand => None,
        }
    }

    pub(crate) fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Gender(gender) => self.gender = gender,
        }
    }
}

/// Columns of the roster table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Drag,
    Name,
    Age,
    Mobile,
    Gender,
    Expand,
}

impl ColumnId {
    pub fn all() -> [ColumnId; 6] {
        [
            ColumnId::Drag,
            ColumnId::Name,
            ColumnId::Age,
            ColumnId::Mobile,
            ColumnId::Gender,
            ColumnId::Expand,
        ]
    }

    pub fn header(&self) -> &'static str {
        match self {
            ColumnId::Drag | ColumnId::Expand => "",
            ColumnId::Name => "Name",
            ColumnId::Age => "Age",
            ColumnId::Mobile => "Mobile No",
            ColumnId::Gender => "Gender",
        }
    }

    /// Width in px used until the column is resized
    pub fn default_width(&self) -> u32 {
        match self {
            ColumnId::Drag => 40,
            ColumnId::Name => 200,
            ColumnId::Age => 100,
            ColumnId::Mobile => 150,
            ColumnId::Gender => 200,
            ColumnId::Expand => 50,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnId::Drag => "drag",
            ColumnId::Name => "name",
            ColumnId::Age => "age",
            ColumnId::Mobile => "mobile",
            ColumnId::Gender => "gender",
            ColumnId::Expand => "expand",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            id: RecordId::new("rec-1"),
            name: "John Doe".to_string(),
            age: 20,
            mobile: "123-456-7890".to_string(),
            gender: Gender::Male,
            details: "Computer Science".to_string(),
        }
    }

    #[test]
    fn test_display_value() {
        let record = record();
        assert_eq!(record.display_value(ColumnId::Name), Some("John Doe".to_string()));
        assert_eq!(record.display_value(ColumnId::Age), Some("20".to_string()));
        assert_eq!(record.display_value(ColumnId::Drag), None);
        assert_eq!(record.display_value(ColumnId::Gender), None);
    }

    #[test]
    fn test_apply_gender_update() {
        let mut record = record();
        record.apply(FieldUpdate::Gender(Gender::Female));
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.name, "John Doe");
    }

    #[test]
    fn test_record_deserializes_lowercase_gender() {
        let json = r#"{"id":"rec-9","name":"Ann","age":23,"mobile":"555","gender":"female"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::new("rec-9"));
        assert_eq!(record.gender, Gender::Female);
        assert!(record.details.is_empty());
    }
}
