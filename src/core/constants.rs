//! Constants for the ChemSpider InChI web service
//!
//! This module defines the endpoint paths, form field names and XML markup
//! names used when talking to the `InChI.asmx` service.

/// Endpoint path constants, appended to a configured base URL
pub mod endpoint {
    /// SMILES to InChI conversion
    pub const SMILES_TO_INCHI: &str = "/InChI.asmx/SMILESToInChI";

    /// InChI to InChIKey conversion
    pub const INCHI_TO_INCHIKEY: &str = "/InChI.asmx/InChIToInChIKey";

    /// InChI to SMILES conversion
    pub const INCHI_TO_SMILES: &str = "/InChI.asmx/InChIToSMILES";

    /// InChIKey to InChI conversion
    pub const INCHIKEY_TO_INCHI: &str = "/InChI.asmx/InChIKeyToInChI";
}

/// Full endpoint URLs used when no base URL override is configured
///
/// InChIToSMILES is served over https while the others use plain http.
pub mod default_url {
    /// SMILES to InChI conversion
    pub const SMILES_TO_INCHI: &str = "http://www.chemspider.com/InChI.asmx/SMILESToInChI";

    /// InChI to InChIKey conversion
    pub const INCHI_TO_INCHIKEY: &str = "http://www.chemspider.com/InChI.asmx/InChIToInChIKey";

    /// InChI to SMILES conversion
    pub const INCHI_TO_SMILES: &str = "https://www.chemspider.com/InChI.asmx/InChIToSMILES";

    /// InChIKey to InChI conversion
    pub const INCHIKEY_TO_INCHI: &str = "http://www.chemspider.com/InChI.asmx/InChIKeyToInChI";
}

/// Form field name constants
pub mod field {
    /// Field carrying a SMILES string
    pub const SMILES: &str = "smiles";

    /// Field carrying an InChI string
    pub const INCHI: &str = "inchi";

    /// Field carrying an InChIKey
    pub const INCHI_KEY: &str = "inchi_key";
}

/// Response envelope constants
pub mod envelope {
    /// Local name of the element wrapping every response value
    pub const STRING_ELEMENT: &[u8] = b"string";

    /// Namespace declared on the wrapping element
    pub const NAMESPACE: &str = "http://www.chemspider.com/";
}
