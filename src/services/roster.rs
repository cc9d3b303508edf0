//! Roster loading from JSON/CSV files or the built-in sample

use crate::model::{Gender, Record, RecordId, RecordStore};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Load a roster file, picking the parser from the file extension
pub fn load_roster(path: &Path) -> Result<RecordStore> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open roster file {}", path.display()))?;

    let records = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => parse_csv(file),
        _ => parse_json(file),
    }
    .with_context(|| format!("Failed to parse roster file {}", path.display()))?;

    info!("Loaded {} records from {}", records.len(), path.display());
    RecordStore::new(records)
}

/// Parse a JSON array of records
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Parse CSV with header `id,name,age,mobile,gender,details`
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for (line, row) in csv_reader.deserialize::<Record>().enumerate() {
        // Header is line 1
        let record = row.with_context(|| format!("Invalid record on line {}", line + 2))?;
        records.push(record);
    }
    Ok(records)
}

/// The roster shown when no file is given
pub fn sample_roster() -> Vec<Record> {
    let student = |id: &str, name: &str, age: u32, mobile: &str, gender: Gender, details: &str| {
        Record {
            id: RecordId::new(id),
            name: name.to_string(),
            age,
            mobile: mobile.to_string(),
            gender,
            details: details.to_string(),
        }
    };

    vec![
        student(
            "rec-1",
            "John Doe",
            20,
            "123-456-7890",
            Gender::Male,
            "Majoring in Computer Science. Active member of coding club.",
        ),
        student(
            "rec-2",
            "Jane Smith",
            19,
            "234-567-8901",
            Gender::Female,
            "Biology major. Part of student council.",
        ),
        student(
            "rec-3",
            "Mike Johnson",
            21,
            "345-678-9012",
            Gender::Male,
            "Engineering student. Captain of debate team.",
        ),
        student(
            "rec-4",
            "Sarah Williams",
            20,
            "456-789-0123",
            Gender::Female,
            "Psychology major. Volunteers at local shelter.",
        ),
        student(
            "rec-5",
            "Tom Brown",
            22,
            "567-890-1234",
            Gender::Male,
            "Mathematics student. Research assistant.",
        ),
    ]
}
