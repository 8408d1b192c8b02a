use serde::{Deserialize, Serialize};

/// Configuration for document rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Value of the `version` attribute on the `<apns>` root
    pub root_version: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            root_version: "8".to_string(),
        }
    }
}

impl WriterConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.root_version.is_empty() {
            return Err("root_version must not be empty".to_string());
        }

        if let Some(bad) = self
            .root_version
            .chars()
            .find(|c| matches!(c, '"' | '\'' | '<' | '>' | '&'))
        {
            return Err(format!(
                "root_version ({:?}) cannot contain {bad:?}",
                self.root_version
            ));
        }

        Ok(())
    }
}
