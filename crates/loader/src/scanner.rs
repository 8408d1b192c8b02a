use std::fmt;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::{LoaderConfig, LoaderError, Result};

/// Role of a record file, decided by its file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Ordered carrier list
    Index,
    /// Many named settings blocks in one file
    Combined,
    /// Settings for exactly one carrier
    Single,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Index => "index",
            RecordKind::Combined => "combined settings",
            RecordKind::Single => "settings",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    pub path: PathBuf,
    pub kind: RecordKind,
}

/// Scanner for record files directly inside the input directory
pub struct RecordScanner<'a> {
    root: PathBuf,
    config: &'a LoaderConfig,
}

impl<'a> RecordScanner<'a> {
    pub fn new(root: impl AsRef<Path>, config: &'a LoaderConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// List record files in path order (non-recursive, hidden files skipped)
    pub fn scan(&self) -> Result<Vec<RecordFile>> {
        if !self.root.is_dir() {
            return Err(LoaderError::InvalidPath(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .hidden(true)
            .max_depth(Some(1));

        let mut files = Vec::new();
        for result in builder.build() {
            let entry = result?;
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }

            let path = entry.path();
            if !self.is_record_file(path) {
                log::debug!("Skipping non-record file {}", path.display());
                continue;
            }

            files.push(RecordFile {
                path: path.to_path_buf(),
                kind: self.classify(path),
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!("Found {} record files in {}", files.len(), self.root.display());
        Ok(files)
    }

    fn is_record_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.config.record_extension)
    }

    fn classify(&self, path: &Path) -> RecordKind {
        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) if name == self.config.index_file_name => RecordKind::Index,
            Some(name) if name == self.config.combined_file_name => RecordKind::Combined,
            _ => RecordKind::Single,
        }
    }
}
