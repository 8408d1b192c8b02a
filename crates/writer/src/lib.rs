//! # APN Writer
//!
//! Maps carrier APN records to attributes and renders `apns-full-conf.xml`.
//!
//! ## Output layout
//!
//! The document reproduces the hand-maintained AOSP style byte for byte:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
//!
//! <apns version="8">
//!
//!   <apn carrier="T-Mobile US"
//!       mcc="310"
//!       mnc="260"
//!       apn="fast.t-mobile.com"
//!       type="default,supl"
//!   />
//!
//! </apns>
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use apns_writer::{render_document, validate_document};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loaded = apns_loader::load_records("/path/to/carrier_settings")?;
//!     let document = render_document(&loaded.entries, &loaded.settings)?;
//!     validate_document(&document.text)?;
//!     std::fs::write("apns-full-conf.xml", document.text)?;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod escape;
mod mapper;
mod types;
mod validate;
mod writer;

pub use config::WriterConfig;
pub use error::{Result, WriterError};
pub use escape::{escape_text, quote_attr};
pub use mapper::{render_types, split_mcc_mnc, ApnAttributeMapper, AttributeMapper};
pub use types::{ApnAttribute, RenderedDocument};
pub use validate::{validate_document, ValidationReport};
pub use writer::{
    render_document, DocumentWriter, SettingsSource, OUTPUT_FILE_NAME, XML_DECLARATION,
};
