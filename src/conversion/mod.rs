//! Response format conversion
//!
//! Turns raw service response bodies into plain identifier strings.

pub mod envelope;

pub use envelope::{EnvelopeError, unwrap_string_envelope};
