//! Data models
//!
//! This module contains the identifier notations and conversion directions.

pub mod conversion;

pub use conversion::{Conversion, Notation, UnknownConversion};
