use serde::{Deserialize, Serialize};

/// Statistics about a load run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Number of record files decoded
    pub files: usize,

    /// Single-carrier settings records
    pub single_records: usize,

    /// Settings blocks taken from the combined record
    pub combined_blocks: usize,

    /// Entries in the index record
    pub entries: usize,

    /// APNs across all loaded settings
    pub apns: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_single(&mut self, apns: usize) {
        self.single_records += 1;
        self.apns += apns;
    }

    pub fn add_combined_block(&mut self, apns: usize) {
        self.combined_blocks += 1;
        self.apns += apns;
    }
}
