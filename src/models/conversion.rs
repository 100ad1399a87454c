//! Identifier notations and conversion directions
//!
//! A [`Conversion`] ties a source and target [`Notation`] to the service
//! endpoint and form field used to request it.

use crate::core::constants::{default_url, endpoint, field};
use std::fmt;
use std::str::FromStr;

/// Textual chemical identifier notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    Smiles,
    Inchi,
    InchiKey,
}

impl Notation {
    /// Form field name the service expects for identifiers in this notation
    pub fn field_name(self) -> &'static str {
        match self {
            Notation::Smiles => field::SMILES,
            Notation::Inchi => field::INCHI,
            Notation::InchiKey => field::INCHI_KEY,
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Notation::Smiles => "SMILES",
            Notation::Inchi => "InChI",
            Notation::InchiKey => "InChIKey",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A conversion direction supported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    SmilesToInchi,
    InchiToInchiKey,
    InchiToSmiles,
    InchiKeyToInchi,
}

impl Conversion {
    /// Every supported direction
    pub const ALL: [Conversion; 4] = [
        Conversion::SmilesToInchi,
        Conversion::InchiToInchiKey,
        Conversion::InchiToSmiles,
        Conversion::InchiKeyToInchi,
    ];

    pub fn source(self) -> Notation {
        match self {
            Conversion::SmilesToInchi => Notation::Smiles,
            Conversion::InchiToInchiKey | Conversion::InchiToSmiles => Notation::Inchi,
            Conversion::InchiKeyToInchi => Notation::InchiKey,
        }
    }

    pub fn target(self) -> Notation {
        match self {
            Conversion::SmilesToInchi | Conversion::InchiKeyToInchi => Notation::Inchi,
            Conversion::InchiToInchiKey => Notation::InchiKey,
            Conversion::InchiToSmiles => Notation::Smiles,
        }
    }

    /// Endpoint path relative to the service base URL
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Conversion::SmilesToInchi => endpoint::SMILES_TO_INCHI,
            Conversion::InchiToInchiKey => endpoint::INCHI_TO_INCHIKEY,
            Conversion::InchiToSmiles => endpoint::INCHI_TO_SMILES,
            Conversion::InchiKeyToInchi => endpoint::INCHIKEY_TO_INCHI,
        }
    }

    /// Full URL the service publishes for this direction
    pub fn default_url(self) -> &'static str {
        match self {
            Conversion::SmilesToInchi => default_url::SMILES_TO_INCHI,
            Conversion::InchiToInchiKey => default_url::INCHI_TO_INCHIKEY,
            Conversion::InchiToSmiles => default_url::INCHI_TO_SMILES,
            Conversion::InchiKeyToInchi => default_url::INCHIKEY_TO_INCHI,
        }
    }

    /// The single form field carrying the input identifier
    pub fn field_name(self) -> &'static str {
        self.source().field_name()
    }

    pub fn name(self) -> &'static str {
        match self {
            Conversion::SmilesToInchi => "smiles-to-inchi",
            Conversion::InchiToInchiKey => "inchi-to-inchikey",
            Conversion::InchiToSmiles => "inchi-to-smiles",
            Conversion::InchiKeyToInchi => "inchikey-to-inchi",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown conversion name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown conversion {0:?}")]
pub struct UnknownConversion(pub String);

impl FromStr for Conversion {
    type Err = UnknownConversion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Conversion::ALL
            .into_iter()
            .find(|conversion| conversion.name() == normalized)
            .ok_or_else(|| UnknownConversion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_follow_source_notation() {
        assert_eq!(Conversion::SmilesToInchi.field_name(), "smiles");
        assert_eq!(Conversion::InchiToInchiKey.field_name(), "inchi");
        assert_eq!(Conversion::InchiToSmiles.field_name(), "inchi");
        assert_eq!(Conversion::InchiKeyToInchi.field_name(), "inchi_key");
    }

    #[test]
    fn test_endpoints_are_distinct() {
        let mut paths: Vec<_> = Conversion::ALL.iter().map(|c| c.endpoint_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
        assert!(paths.iter().all(|p| p.starts_with("/InChI.asmx/")));
    }

    #[test]
    fn test_default_urls_end_with_endpoint_path() {
        for conversion in Conversion::ALL {
            assert!(conversion.default_url().ends_with(conversion.endpoint_path()));
        }
        assert!(Conversion::InchiToSmiles.default_url().starts_with("https://"));
        assert!(Conversion::SmilesToInchi.default_url().starts_with("http://"));
    }

    #[test]
    fn test_source_and_target() {
        assert_eq!(Conversion::InchiToSmiles.source(), Notation::Inchi);
        assert_eq!(Conversion::InchiToSmiles.target(), Notation::Smiles);
        assert_eq!(Conversion::InchiKeyToInchi.target().to_string(), "InChI");
    }

    #[test]
    fn test_parse_conversion_name() {
        assert_eq!(
            "inchi_to_inchikey".parse::<Conversion>().unwrap(),
            Conversion::InchiToInchiKey
        );
        for conversion in Conversion::ALL {
            assert_eq!(conversion.to_string().parse::<Conversion>().unwrap(), conversion);
        }
        assert!("smiles-to-mol".parse::<Conversion>().is_err());
    }
}
