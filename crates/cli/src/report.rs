use apns_loader::LoadStats;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a successful run, printed as JSON with `--json`
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub apn_blocks: usize,
    pub stats: LoadStats,
}

impl RunSummary {
    pub fn one_line(&self) -> String {
        format!(
            "Wrote {} APNs for {} carriers to {} in {}ms",
            self.apn_blocks,
            self.stats.entries,
            self.output.display(),
            self.stats.time_ms
        )
    }
}
