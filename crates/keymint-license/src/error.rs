//! Error types for the license crate.

use thiserror::Error;

/// Errors that can occur during license issuance.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Failed to read key material from disk.
    #[error("failed to read {path}: {source}")]
    KeyRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the private key.
    #[error("failed to parse private key: {0}")]
    InvalidPrivateKey(String),

    /// Failed to parse the issuer certificate.
    #[error("failed to parse certificate: {0}")]
    InvalidCertificate(String),

    /// Failed to serialize a license record.
    #[error("failed to serialize license record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The signing operation failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A token string could not be decoded.
    #[error("malformed token: {0}")]
    Token(String),
}

/// Result alias for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
