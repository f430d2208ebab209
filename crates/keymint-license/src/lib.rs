//! # keymint-license
//!
//! License signing and token encoding for Keymint.
//!
//! This crate provides functionality for:
//! - Loading the issuer's RSA private key and X.509 certificate
//! - Generating 10-character license ids from `A-Z0-9`
//! - Canonically serializing license records for signing
//! - Signing records with SHA1-with-RSA (PKCS#1 v1.5)
//! - Assembling the delimited base64 token returned to callers
//!
//! ## Token Format
//!
//! `{licenseId}-{base64(payload)}-{base64(signature)}-{base64(certDER)}`
//!
//! The payload is the compact-JSON license record in a fixed field order; the
//! signature covers exactly those bytes. Both the SHA-1/RSA pairing and the
//! segment layout are frozen compatibility contracts with deployed verifiers.

pub mod error;
pub mod id;
pub mod keys;
pub mod record;
pub mod token;

pub use error::{LicenseError, LicenseResult};
pub use id::LicenseId;
pub use keys::KeyStore;
pub use record::{LicenseRecord, LicenseRequest, Product};
pub use token::{IssuedLicense, LicenseIssuer, SignedToken, TOKEN_DELIMITER};
