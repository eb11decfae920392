use serde::{Deserialize, Serialize};

/// One immutable reading of backup progress at a point in time. A fresh
/// snapshot replaces the previous one wholesale on every poll tick; the old
/// one is kept only long enough to compute the files-copied delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub is_running: bool,
    /// Fraction in [0, 1], or -1.0 when the field failed to parse.
    pub percentage: f64,
    pub time_remaining_secs: i64,
    pub destination_id: String,
    pub files_copied: i64,
    pub total_files: i64,
    /// `files_copied` minus the previous running snapshot's `files_copied`,
    /// or the full count when there was no running predecessor.
    pub files_copied_delta: i64,
    pub bytes_copied: i64,
    pub total_bytes: i64,
}

impl Default for BackupSnapshot {
    fn default() -> Self {
        Self {
            is_running: false,
            percentage: 0.0,
            time_remaining_secs: 0,
            destination_id: "None".to_string(),
            files_copied: 0,
            total_files: 0,
            files_copied_delta: 0,
            bytes_copied: 0,
            total_bytes: 0,
        }
    }
}
