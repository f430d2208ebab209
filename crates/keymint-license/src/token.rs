//! Token encoding and the issuance pipeline.
//!
//! A signed token is four segments joined by `-`:
//!
//! ```text
//! {licenseId}-{base64(payload)}-{base64(signature)}-{base64(certificateDER)}
//! ```
//!
//! Standard base64 (with padding) never emits `-` and the id alphabet is
//! `A-Z0-9`, so the delimiter needs no escaping. Segment order is a wire
//! contract consumers split on.

use crate::error::{LicenseError, LicenseResult};
use crate::id::LicenseId;
use crate::keys::KeyStore;
use crate::record::{LicenseRecord, LicenseRequest};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt;
use std::sync::Arc;

/// Token segment delimiter. Not part of the standard base64 alphabet.
pub const TOKEN_DELIMITER: char = '-';

/// An assembled license token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    /// The plain license id (first segment).
    pub license_id: String,
    /// Canonical record bytes the signature covers.
    pub payload: Vec<u8>,
    /// SHA1-with-RSA signature over the payload.
    pub signature: Vec<u8>,
    /// DER encoding of the issuer certificate.
    pub certificate: Vec<u8>,
}

impl SignedToken {
    /// Encode the token into its delimited base64 string form.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{id}{d}{payload}{d}{signature}{d}{certificate}",
            id = self.license_id,
            d = TOKEN_DELIMITER,
            payload = BASE64.encode(&self.payload),
            signature = BASE64.encode(&self.signature),
            certificate = BASE64.encode(&self.certificate),
        )
    }

    /// Split an encoded token back into its four components.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Token`] if the string does not have exactly
    /// four segments or a base64 segment fails to decode.
    pub fn parse(token: &str) -> LicenseResult<Self> {
        let segments: Vec<&str> = token.split(TOKEN_DELIMITER).collect();
        let [id, payload, signature, certificate] = segments.as_slice() else {
            return Err(LicenseError::Token(format!(
                "expected 4 segments, found {}",
                segments.len()
            )));
        };
        if id.is_empty() {
            return Err(LicenseError::Token("empty license id segment".into()));
        }

        let decode = |segment: &str, name: &str| {
            BASE64
                .decode(segment)
                .map_err(|e| LicenseError::Token(format!("invalid {name} base64: {e}")))
        };

        Ok(Self {
            license_id: (*id).to_string(),
            payload: decode(payload, "payload")?,
            signature: decode(signature, "signature")?,
            certificate: decode(certificate, "certificate")?,
        })
    }
}

impl fmt::Display for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// A freshly issued license: the signed record plus its encoded token.
#[derive(Debug, Clone)]
pub struct IssuedLicense {
    /// The record the token's signature covers.
    pub record: LicenseRecord,
    /// The assembled token.
    pub token: SignedToken,
}

/// Runs the issuance pipeline: id assignment, canonical serialization,
/// signing, token assembly.
///
/// Stateless apart from the shared immutable [`KeyStore`]; safe to call
/// concurrently.
#[derive(Clone)]
pub struct LicenseIssuer {
    keys: Arc<KeyStore>,
}

impl LicenseIssuer {
    /// Create an issuer backed by the given key store.
    pub fn new(keys: Arc<KeyStore>) -> Self {
        Self { keys }
    }

    /// Issue a signed token for `request`.
    ///
    /// The pipeline is a single linear pass; a failure at any stage discards
    /// all intermediate state and no partial token is ever produced.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Serialization`] or [`LicenseError::Signing`];
    /// both are per-request failures, never process-fatal.
    pub fn issue(&self, request: LicenseRequest) -> LicenseResult<IssuedLicense> {
        let record = request.into_record(LicenseId::generate());
        let payload = record.canonical_bytes()?;
        let signature = self.keys.sign(&payload)?;

        let token = SignedToken {
            license_id: record.license_id().to_string(),
            payload,
            signature,
            certificate: self.keys.certificate_der().to_vec(),
        };

        tracing::info!(
            license_id = %record.license_id(),
            licensee = %record.licensee_name,
            products = record.products.len(),
            "license issued"
        );

        Ok(IssuedLicense { record, token })
    }
}
