use serde::{Deserialize, Serialize};

/// File naming convention of a carrier settings dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// File holding the index record
    pub index_file_name: String,

    /// File holding the combined multi-carrier record
    pub combined_file_name: String,

    /// Extension of record files; anything else in the directory is ignored
    pub record_extension: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            index_file_name: "carrier_list.pb".to_string(),
            combined_file_name: "others.pb".to_string(),
            record_extension: "pb".to_string(),
        }
    }
}
