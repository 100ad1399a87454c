//! ChemSpider structure conversion client
//!
//! This module provides an async HTTP client for the ChemSpider `InChI.asmx`
//! service. Each conversion is a single form-encoded POST whose response is
//! unwrapped from the service's XML string envelope.

use crate::conversion::envelope::{EnvelopeError, unwrap_string_envelope};
use crate::core::config::Config;
use crate::models::conversion::Conversion;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Error types that can occur during a conversion call
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Remote call failed (status {status}): {reason}")]
    RemoteCallFailed { status: u16, reason: String },

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

impl ConversionError {
    /// HTTP status reported by the service, if the call got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ConversionError::RemoteCallFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for one-shot identifier conversions
///
/// Holds a reusable connection pool; cloning is cheap and clones share it.
/// Requests go to each endpoint's published URL unless a base URL override
/// is set.
#[derive(Debug, Clone)]
pub struct StructureConverter {
    client: Client,
    base_url: Option<String>,
}

impl StructureConverter {
    /// Create a new converter using the published endpoint URLs
    ///
    /// # Arguments
    ///
    /// * `timeout` - Request timeout in seconds, must be non-zero
    pub fn new(timeout: u64) -> Result<Self, ConversionError> {
        if timeout == 0 {
            return Err(ConversionError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .map_err(|e| ConversionError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client))
    }

    /// Create a converter around an existing HTTP client
    ///
    /// Useful when the caller needs its own proxy, TLS or header settings.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Send every conversion to `base_url` plus the endpoint path instead of
    /// the published URLs
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Create a converter from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ConversionError> {
        let converter = Self::new(config.request_timeout)?;
        Ok(match &config.base_url {
            Some(base_url) => converter.with_base_url(base_url.clone()),
            None => converter,
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Full URL of the endpoint serving `conversion`
    pub fn endpoint_url(&self, conversion: Conversion) -> String {
        match &self.base_url {
            Some(base_url) => format!("{}{}", base_url, conversion.endpoint_path()),
            None => conversion.default_url().to_string(),
        }
    }

    /// Convert a SMILES string to InChI
    pub async fn smiles_to_inchi(&self, smiles: &str) -> Result<String, ConversionError> {
        self.convert(Conversion::SmilesToInchi, smiles).await
    }

    /// Convert an InChI string to its InChIKey
    pub async fn inchi_to_inchikey(&self, inchi: &str) -> Result<String, ConversionError> {
        self.convert(Conversion::InchiToInchiKey, inchi).await
    }

    /// Convert an InChI string to SMILES
    pub async fn inchi_to_smiles(&self, inchi: &str) -> Result<String, ConversionError> {
        self.convert(Conversion::InchiToSmiles, inchi).await
    }

    /// Resolve an InChIKey to its InChI
    pub async fn inchikey_to_inchi(&self, inchi_key: &str) -> Result<String, ConversionError> {
        self.convert(Conversion::InchiKeyToInchi, inchi_key).await
    }

    /// Run one conversion against the service
    ///
    /// The identifier is sent unmodified as the only form field. The value
    /// may be empty when the service found no match.
    ///
    /// # Errors
    ///
    /// Returns `RemoteCallFailed` for any status other than 200, including
    /// other 2xx codes. Nothing is retried.
    pub async fn convert(
        &self,
        conversion: Conversion,
        identifier: &str,
    ) -> Result<String, ConversionError> {
        let url = self.endpoint_url(conversion);
        debug!(%conversion, %url, "Sending conversion request");

        // The identifier is the only form field
        let response = self
            .client
            .post(&url)
            .form(&[(conversion.field_name(), identifier)])
            .send()
            .await
            .map_err(|e| ConversionError::Transport(e.to_string()))?;

        let status = response.status();

        // Only a plain 200 carries a converted value
        if status != StatusCode::OK {
            warn!(%conversion, status = status.as_u16(), "Conversion request failed");
            return Err(ConversionError::RemoteCallFailed {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ConversionError::Body(e.to_string()))?;

        // Strip the XML declaration and <string> wrapper
        Ok(unwrap_string_envelope(&body)?)
    }
}
