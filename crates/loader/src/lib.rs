//! # APN Loader
//!
//! Reads a carrier settings dump into memory.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> Record Scanner (*.pb, non-recursive)
//!     │      └─> index / combined / single record files
//!     │
//!     ├──> Decoder (prost)
//!     │      └─> CarrierList, MultiCarrierSettings, CarrierSettings
//!     │
//!     └──> Settings Index (one definition per canonical name)
//!            └─> LoadedRecords { entries, settings, stats }
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use apns_loader::load_records;
//!
//! fn main() -> apns_loader::Result<()> {
//!     let loaded = load_records("/path/to/carrier_settings")?;
//!     println!(
//!         "{} entries, {} carrier settings",
//!         loaded.entries.len(),
//!         loaded.settings.len()
//!     );
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod loader;
mod scanner;
mod settings;
mod stats;

pub use config::LoaderConfig;
pub use error::{LoaderError, Result};
pub use loader::{load_records, LoadedRecords, RecordLoader};
pub use scanner::{RecordFile, RecordKind, RecordScanner};
pub use settings::SettingsIndex;
pub use stats::LoadStats;
