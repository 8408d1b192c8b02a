use anyhow::{bail, Context, Result};
use apns_loader::load_records;
use apns_writer::{render_document, validate_document};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::report::RunSummary;

/// Inputs of one extraction run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
}

/// Load, render, validate, then write the document.
///
/// The output file is replaced only once every step has succeeded.
pub fn run_extract(config: &ExtractConfig) -> Result<RunSummary> {
    let loaded = load_records(&config.input_dir).with_context(|| {
        format!(
            "Failed to load carrier settings from {}",
            config.input_dir.display()
        )
    })?;

    let document = render_document(&loaded.entries, &loaded.settings)
        .context("Failed to render APN document")?;

    let report = validate_document(&document.text)
        .context("Rendered document is not well-formed XML")?;
    if report.apn_elements != document.apn_blocks {
        bail!(
            "Rendered {} APN blocks but the document parses to {} <apn> elements",
            document.apn_blocks,
            report.apn_elements
        );
    }

    write_atomically(&config.output_path, document.text.as_bytes())
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    log::info!(
        "Wrote {} APNs to {}",
        document.apn_blocks,
        config.output_path.display()
    );

    Ok(RunSummary {
        input: config.input_dir.clone(),
        output: config.output_path.clone(),
        apn_blocks: document.apn_blocks,
        stats: loaded.stats,
    })
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let written = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if let Err(err) = written {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            if cleanup.kind() != io::ErrorKind::NotFound {
                log::warn!("Failed to remove {}: {cleanup}", tmp.display());
            }
        }
        return Err(err.into());
    }
    Ok(())
}
