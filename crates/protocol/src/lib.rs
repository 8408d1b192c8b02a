//! # APN Protocol
//!
//! Record shapes shared by the loader and the writer.
//!
//! The carrier settings dump ships three kinds of protobuf records:
//!
//! ```text
//! carrier_list.pb ──> CarrierList          (index: canonical name + carrier id)
//! others.pb       ──> MultiCarrierSettings (many named settings blocks)
//! <name>.pb       ──> CarrierSettings      (one named settings block)
//! ```
//!
//! Every scalar field is proto2 `optional`, so presence survives decoding as
//! `Option<T>`. Enum fields stay raw `i32` codes on the wire types; the
//! symbolic names live in [`ApnType`], [`Protocol`] and [`Xlat`].

mod carrier;
mod enums;
mod settings;

pub use carrier::{CarrierEntry, CarrierId, CarrierList, Mvno};
pub use enums::{ApnType, Protocol, Xlat};
pub use settings::{ApnItem, ApnList, CarrierSettings, MultiCarrierSettings};

pub use prost::{DecodeError, Message};
