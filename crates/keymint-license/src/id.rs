//! License identifier generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters a license id may contain.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated license id.
const ID_LENGTH: usize = 10;

/// A 10-character license identifier drawn from `A-Z0-9`.
///
/// Generation uses a CSPRNG with one independent draw per character. No
/// uniqueness check is performed against previously issued ids; at 36^10
/// possible values collisions are negligible for this service's volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseId(String);

impl LicenseId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..ID_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
