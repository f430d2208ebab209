//! Issuer key material: RSA private key and X.509 certificate.
//!
//! The store is loaded once at startup and never mutated afterward, so it can
//! be shared across request handlers behind an `Arc` without locking. The
//! private key never leaves the store; callers only get `sign` and the
//! certificate DER bytes that ride along in every token.

use crate::error::{LicenseError, LicenseResult};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::{Digest, Sha1};
use std::path::Path;
use x509_cert::der::{DecodePem, Encode};
use x509_cert::Certificate;

/// Holds the issuer's RSA private key and certificate for the process lifetime.
#[derive(Debug)]
pub struct KeyStore {
    private_key: RsaPrivateKey,
    certificate_der: Vec<u8>,
}

impl KeyStore {
    /// Load the key store from a private key PEM and a certificate PEM.
    ///
    /// The private key must be RSA, either PKCS#1 (`BEGIN RSA PRIVATE KEY`) or
    /// PKCS#8 (`BEGIN PRIVATE KEY`). The certificate is parsed to validate it
    /// and its DER encoding is retained for token assembly.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is unreadable or fails to parse. The
    /// server treats this as a startup abort; signing is impossible without
    /// valid key material.
    pub fn load(key_path: &Path, cert_path: &Path) -> LicenseResult<Self> {
        let key_pem = std::fs::read_to_string(key_path).map_err(|source| {
            LicenseError::KeyRead {
                path: key_path.display().to_string(),
                source,
            }
        })?;
        let private_key = parse_private_key_pem(&key_pem)?;

        let cert_pem = std::fs::read(cert_path).map_err(|source| LicenseError::KeyRead {
            path: cert_path.display().to_string(),
            source,
        })?;
        let certificate = Certificate::from_pem(&cert_pem)
            .map_err(|e| LicenseError::InvalidCertificate(e.to_string()))?;
        let certificate_der = certificate
            .to_der()
            .map_err(|e| LicenseError::InvalidCertificate(e.to_string()))?;

        tracing::info!(
            key = %key_path.display(),
            cert = %cert_path.display(),
            key_bits = private_key.size() * 8,
            "issuer key material loaded"
        );

        Ok(Self {
            private_key,
            certificate_der,
        })
    }

    /// Build a store from already-parsed material.
    pub fn from_parts(private_key: RsaPrivateKey, certificate_der: Vec<u8>) -> Self {
        Self {
            private_key,
            certificate_der,
        }
    }

    /// Sign `bytes` with SHA1-with-RSA (PKCS#1 v1.5).
    ///
    /// The hash/signature pairing is a compatibility contract with deployed
    /// verifiers; see DESIGN.md before touching it.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Signing`] if the RSA operation fails. This is
    /// recoverable per request and must not abort the process.
    pub fn sign(&self, bytes: &[u8]) -> LicenseResult<Vec<u8>> {
        let digest = Sha1::digest(bytes);
        self.private_key
            .sign(Pkcs1v15Sign::new::<Sha1>(), &digest)
            .map_err(|e| LicenseError::Signing(e.to_string()))
    }

    /// DER encoding of the issuer certificate, embedded in every token.
    #[must_use]
    pub fn certificate_der(&self) -> &[u8] {
        &self.certificate_der
    }

    /// Public counterpart of the signing key (verification by consumers).
    #[must_use]
    pub fn public_key(&self) -> RsaPublicKey {
        self.private_key.to_public_key()
    }
}

fn parse_private_key_pem(pem: &str) -> LicenseResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|e| LicenseError::InvalidPrivateKey(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs1::EncodeRsaPrivateKey;
    use rsa::pkcs8::LineEnding;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // 1024-bit keys keep test key generation fast; production keys are larger.
    fn test_key() -> RsaPrivateKey {
        RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap()
    }

    fn test_cert_pem() -> String {
        let params = rcgen::CertificateParams::default();
        let cert = rcgen::Certificate::from_params(params).unwrap();
        cert.serialize_pem().unwrap()
    }

    #[test]
    fn test_load_from_pem_files() {
        let key = test_key();
        let mut key_file = NamedTempFile::new().unwrap();
        key_file
            .write_all(key.to_pkcs1_pem(LineEnding::LF).unwrap().as_bytes())
            .unwrap();

        let mut cert_file = NamedTempFile::new().unwrap();
        cert_file.write_all(test_cert_pem().as_bytes()).unwrap();

        let store = KeyStore::load(key_file.path(), cert_file.path()).unwrap();
        assert!(!store.certificate_der().is_empty());
        assert_eq!(store.public_key(), key.to_public_key());
    }

    #[test]
    fn test_load_missing_key_file() {
        let mut cert_file = NamedTempFile::new().unwrap();
        cert_file.write_all(test_cert_pem().as_bytes()).unwrap();

        let err = KeyStore::load(Path::new("/nonexistent/license.key"), cert_file.path())
            .unwrap_err();
        assert!(matches!(err, LicenseError::KeyRead { .. }));
    }

    #[test]
    fn test_load_garbage_key_pem() {
        let mut key_file = NamedTempFile::new().unwrap();
        key_file.write_all(b"not a pem at all").unwrap();
        let mut cert_file = NamedTempFile::new().unwrap();
        cert_file.write_all(test_cert_pem().as_bytes()).unwrap();

        let err = KeyStore::load(key_file.path(), cert_file.path()).unwrap_err();
        assert!(matches!(err, LicenseError::InvalidPrivateKey(_)));
    }

    #[test]
    fn test_load_garbage_cert_pem() {
        let key = test_key();
        let mut key_file = NamedTempFile::new().unwrap();
        key_file
            .write_all(key.to_pkcs1_pem(LineEnding::LF).unwrap().as_bytes())
            .unwrap();
        let mut cert_file = NamedTempFile::new().unwrap();
        cert_file
            .write_all(b"-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n")
            .unwrap();

        let err = KeyStore::load(key_file.path(), cert_file.path()).unwrap_err();
        assert!(matches!(err, LicenseError::InvalidCertificate(_)));
    }

    #[test]
    fn test_sign_verifies_against_public_key() {
        let key = test_key();
        let store = KeyStore::from_parts(key, vec![1, 2, 3]);

        let message = b"license bytes";
        let signature = store.sign(message).unwrap();

        let digest = Sha1::digest(message);
        store
            .public_key()
            .verify(Pkcs1v15Sign::new::<Sha1>(), &digest, &signature)
            .unwrap();
    }

    #[test]
    fn test_sign_rejects_tampered_message() {
        let store = KeyStore::from_parts(test_key(), vec![]);
        let signature = store.sign(b"original").unwrap();

        let digest = Sha1::digest(b"tampered");
        assert!(store
            .public_key()
            .verify(Pkcs1v15Sign::new::<Sha1>(), &digest, &signature)
            .is_err());
    }
}
