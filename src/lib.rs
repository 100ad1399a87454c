//! ChemSpider structure identifier conversion
//!
//! Thin async client for the ChemSpider `InChI.asmx` web service. Each
//! conversion between SMILES, InChI and InChIKey is one live form-encoded
//! POST; identifiers are forwarded as opaque text and never validated
//! locally.

pub mod conversion;
pub mod core;
pub mod models;

pub use crate::conversion::envelope::{EnvelopeError, unwrap_string_envelope};
pub use crate::core::client::{ConversionError, StructureConverter};
pub use crate::core::config::Config;
pub use crate::models::conversion::{Conversion, Notation};
