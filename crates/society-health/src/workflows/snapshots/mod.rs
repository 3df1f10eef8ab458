//! CSV import of society metric snapshots.

mod parser;

use crate::workflows::health::SocietySnapshot;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotImportError {
    #[error("failed to read snapshot export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid snapshot CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} is missing a society_id")]
    MissingSocietyId { row: usize },
    #[error("society `{0}` appears more than once in the export")]
    DuplicateSociety(String),
}

pub struct SnapshotImporter;

impl SnapshotImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SocietySnapshot>, SnapshotImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read one snapshot per row. Blank cells are treated as absent metrics and
    /// left for the scoring engine to accept or reject.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<SocietySnapshot>, SnapshotImportError> {
        let snapshots = parser::parse_snapshots(reader)?;
        let mut seen: HashSet<&str> = HashSet::new();

        for (index, snapshot) in snapshots.iter().enumerate() {
            if snapshot.society_id.is_empty() {
                return Err(SnapshotImportError::MissingSocietyId { row: index + 1 });
            }
            if !seen.insert(snapshot.society_id.as_str()) {
                return Err(SnapshotImportError::DuplicateSociety(
                    snapshot.society_id.clone(),
                ));
            }
        }

        Ok(snapshots)
    }
}
