use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use apns_protocol::{CarrierEntry, CarrierList, CarrierSettings, Message, MultiCarrierSettings};

use crate::scanner::{RecordFile, RecordKind, RecordScanner};
use crate::{LoadStats, LoaderConfig, LoaderError, Result, SettingsIndex};

/// Everything a run needs, read-only from here on
#[derive(Debug)]
pub struct LoadedRecords {
    /// Index entries in output order
    pub entries: Vec<CarrierEntry>,
    pub settings: SettingsIndex,
    pub stats: LoadStats,
}

/// Loads a carrier settings dump from a directory
pub struct RecordLoader {
    root: PathBuf,
    config: LoaderConfig,
}

impl RecordLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_config(root, LoaderConfig::default())
    }

    pub fn with_config(root: impl AsRef<Path>, config: LoaderConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Decode every record file and merge the settings by canonical name
    pub fn load(&self) -> Result<LoadedRecords> {
        let start = Instant::now();
        let files = RecordScanner::new(&self.root, &self.config).scan()?;

        let mut stats = LoadStats::new();
        let mut entries = None;
        let mut settings = SettingsIndex::new();

        for file in &files {
            let bytes = fs::read(&file.path).map_err(|source| LoaderError::ReadError {
                path: file.path.clone(),
                source,
            })?;
            stats.files += 1;

            match file.kind {
                RecordKind::Index => {
                    let list: CarrierList = decode(file, &bytes)?;
                    log::debug!(
                        "{}: index with {} entries",
                        file.path.display(),
                        list.entry.len()
                    );
                    entries = Some(list.entry);
                }
                RecordKind::Combined => {
                    let combined: MultiCarrierSettings = decode(file, &bytes)?;
                    log::debug!(
                        "{}: combined record with {} settings",
                        file.path.display(),
                        combined.setting.len()
                    );
                    for block in combined.setting {
                        stats.add_combined_block(block.apn_items().len());
                        settings.insert(block, &file.path)?;
                    }
                }
                RecordKind::Single => {
                    let single: CarrierSettings = decode(file, &bytes)?;
                    log::debug!(
                        "{}: settings for '{}'",
                        file.path.display(),
                        single.canonical_name()
                    );
                    stats.add_single(single.apn_items().len());
                    settings.insert(single, &file.path)?;
                }
            }
        }

        let entries = entries.unwrap_or_else(|| {
            log::warn!(
                "No {} in {}; the document will contain no APNs",
                self.config.index_file_name,
                self.root.display()
            );
            Vec::new()
        });

        if log::log_enabled!(log::Level::Debug) {
            for entry in &entries {
                let name = entry.canonical_name();
                match settings.origin(name) {
                    Some(origin) => log::debug!("'{name}' resolves to {}", origin.display()),
                    None => log::debug!("'{name}' has no settings record"),
                }
            }
        }

        stats.entries = entries.len();
        stats.time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Loaded {} entries and {} carrier settings ({} APNs) from {} files",
            stats.entries,
            settings.len(),
            stats.apns,
            stats.files
        );

        Ok(LoadedRecords {
            entries,
            settings,
            stats,
        })
    }
}

/// Load with the default file naming convention
pub fn load_records(root: impl AsRef<Path>) -> Result<LoadedRecords> {
    RecordLoader::new(root).load()
}

fn decode<M: Message + Default>(file: &RecordFile, bytes: &[u8]) -> Result<M> {
    M::decode(bytes).map_err(|source| LoaderError::DecodeError {
        path: file.path.clone(),
        kind: file.kind,
        source,
    })
}
