use std::fmt;

use crate::hash::siphash::{KEY_SIZE, SipHashError};

/// A 128-bit SipHash key.
///
/// The key is stored as the two little-endian words `k0` (bytes `0..8`)
/// and `k1` (bytes `8..16`) consumed by the key schedule.
///
/// A `SipKey` can only be built from exactly 16 bytes. Shorter or longer
/// input is rejected; no padding or derivation is ever applied.
///
/// `Debug` output never includes key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SipKey {
    k0: u64,
    k1: u64,
}

impl SipKey {
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        let mut k0 = [0u8; 8];
        let mut k1 = [0u8; 8];
        k0.copy_from_slice(&bytes[..8]);
        k1.copy_from_slice(&bytes[8..]);

        SipKey {
            k0: u64::from_le_bytes(k0),
            k1: u64::from_le_bytes(k1),
        }
    }

    pub const fn from_words(k0: u64, k1: u64) -> Self {
        SipKey { k0, k1 }
    }

    /// Validates and loads a key from an arbitrary byte slice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyLength` unless `bytes` is exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SipHashError> {
        let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| {
            log::debug!("rejecting SipHash key of {} bytes", bytes.len());
            SipHashError::InvalidKeyLength { len: bytes.len() }
        })?;

        Ok(SipKey::new(bytes))
    }

    /// Decodes a key from 32 hex characters.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyEncoding` if `text` is not valid hex
    /// - `InvalidKeyLength` if it decodes to anything but 16 bytes
    pub fn from_hex(text: &str) -> Result<Self, SipHashError> {
        let bytes = hex::decode(text).map_err(|e| {
            log::debug!("unable to decode hex SipHash key: {}", e);
            SipHashError::InvalidKeyEncoding
        })?;

        SipKey::from_slice(&bytes)
    }

    /// Returns `(k0, k1)`.
    pub const fn words(&self) -> (u64, u64) {
        (self.k0, self.k1)
    }

    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        let mut out = [0u8; KEY_SIZE];
        out[..8].copy_from_slice(&self.k0.to_le_bytes());
        out[8..].copy_from_slice(&self.k1.to_le_bytes());
        out
    }
}

impl From<[u8; KEY_SIZE]> for SipKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        SipKey::new(bytes)
    }
}

impl TryFrom<&[u8]> for SipKey {
    type Error = SipHashError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        SipKey::from_slice(bytes)
    }
}

impl fmt::Debug for SipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SipKey(..)")
    }
}
