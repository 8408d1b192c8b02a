use std::collections::HashMap;
use std::path::{Path, PathBuf};

use apns_protocol::CarrierSettings;

use crate::{LoaderError, Result};

struct IndexedSettings {
    settings: CarrierSettings,
    origin: PathBuf,
}

/// Carrier settings keyed by canonical name.
///
/// Every name is defined exactly once; a second definition is rejected
/// instead of replacing the first.
#[derive(Default)]
pub struct SettingsIndex {
    by_name: HashMap<String, IndexedSettings>,
}

impl SettingsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `settings` read from `origin`, failing on a duplicate name.
    pub fn insert(&mut self, settings: CarrierSettings, origin: &Path) -> Result<()> {
        let name = settings.canonical_name().to_string();
        if let Some(existing) = self.by_name.get(&name) {
            return Err(LoaderError::DuplicateDefinition {
                canonical_name: name,
                path: origin.to_path_buf(),
                first: existing.origin.clone(),
            });
        }

        self.by_name.insert(
            name,
            IndexedSettings {
                settings,
                origin: origin.to_path_buf(),
            },
        );
        Ok(())
    }

    pub fn get(&self, canonical_name: &str) -> Option<&CarrierSettings> {
        self.by_name.get(canonical_name).map(|entry| &entry.settings)
    }

    /// File the named settings were read from.
    pub fn origin(&self, canonical_name: &str) -> Option<&Path> {
        self.by_name
            .get(canonical_name)
            .map(|entry| entry.origin.as_path())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl std::fmt::Debug for SettingsIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SettingsIndex").field("names", &names).finish()
    }
}
