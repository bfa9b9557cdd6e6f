//! Byte-oriented SipHash-2-4 API.
//!
//! These functions accept the key as a raw byte slice, validate it, and
//! then run the core algorithm. They are stateless: the same `(key,
//! message)` pair always produces the same output.
//!
//! Keys must be exactly 16 bytes. Text must be converted to bytes by the
//! caller; nothing here interprets a message as anything but bytes.

use super::TAG_SIZE;
use super::core::{SipHashError, siphash24};
use super::tag::Tag;
use crate::keys::siphash::SipKey;

/// Computes the SipHash-2-4 tag of `message`.
///
/// # Errors
///
/// Returns `InvalidKeyLength` if `key` is not 16 bytes. No state is
/// initialized in that case.
pub fn tag(key: &[u8], message: &[u8]) -> Result<Tag, SipHashError> {
    let key = SipKey::from_slice(key)?;
    Ok(Tag::new(siphash24(&key, message)))
}

/// Computes the 8-byte little-endian SipHash-2-4 digest of `message`.
///
/// # Errors
///
/// Returns `InvalidKeyLength` if `key` is not 16 bytes.
pub fn digest(key: &[u8], message: &[u8]) -> Result<[u8; TAG_SIZE], SipHashError> {
    tag(key, message).map(|t| t.to_bytes())
}

/// Computes the lowercase hex rendering of [`digest`] (16 characters).
///
/// # Errors
///
/// Returns `InvalidKeyLength` if `key` is not 16 bytes.
pub fn hexdigest(key: &[u8], message: &[u8]) -> Result<String, SipHashError> {
    tag(key, message).map(|t| t.to_hex())
}

/// Recomputes the tag of `message` and compares it with `expected`.
///
/// # Returns
///
/// - `Ok(())` if the tags match
/// - `Err(InvalidKeyLength)` if `key` is not 16 bytes
/// - `Err(AuthenticationFailed)` if the tags differ
///
/// # Security Notes
///
/// - Tag comparison is constant-time.
pub fn verify(key: &[u8], message: &[u8], expected: &[u8; TAG_SIZE]) -> Result<(), SipHashError> {
    let key = SipKey::from_slice(key)?;
    SipHash::with_key(key, message).verify(expected)
}

/// A validated key bound to one message.
///
/// This is the object form of the API:
///
/// ```
/// use siptag::hash::siphash::SipHash;
///
/// let hex = SipHash::new(b"0123456789ABCDEF", b"a")?.hexdigest();
/// assert_eq!(hex, "864c339cb0dc0fac");
/// # Ok::<(), siptag::SipHashError>(())
/// ```
///
/// It only borrows the message and keeps no intermediate hashing state,
/// so every accessor recomputes from scratch.
#[derive(Clone, Debug)]
pub struct SipHash<'a> {
    key: SipKey,
    message: &'a [u8],
}

impl<'a> SipHash<'a> {
    /// # Errors
    ///
    /// Returns `InvalidKeyLength` if `key` is not 16 bytes.
    pub fn new(key: &[u8], message: &'a [u8]) -> Result<Self, SipHashError> {
        Ok(SipHash::with_key(SipKey::from_slice(key)?, message))
    }

    pub fn with_key(key: SipKey, message: &'a [u8]) -> Self {
        SipHash { key, message }
    }

    pub fn tag(&self) -> Tag {
        Tag::new(siphash24(&self.key, self.message))
    }

    pub fn digest(&self) -> [u8; TAG_SIZE] {
        self.tag().to_bytes()
    }

    pub fn hexdigest(&self) -> String {
        self.tag().to_hex()
    }

    /// Constant-time check of `expected` against this message's tag.
    pub fn verify(&self, expected: &[u8; TAG_SIZE]) -> Result<(), SipHashError> {
        if self.tag().ct_eq(expected) {
            Ok(())
        } else {
            log::debug!(
                "SipHash tag mismatch over a message of {} bytes",
                self.message.len()
            );
            Err(SipHashError::AuthenticationFailed)
        }
    }
}
