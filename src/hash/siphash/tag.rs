use std::fmt::{Display, Formatter, LowerHex, Result};

use super::TAG_SIZE;

/// A 64-bit SipHash tag.
///
/// The tag has no structure beyond its value. Its canonical byte form is
/// the 8-byte little-endian encoding, and its canonical text form is the
/// lowercase hex rendering of those bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag(u64);

impl Tag {
    pub const fn new(value: u64) -> Self {
        Tag(value)
    }

    /// Returns the raw 64-bit value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Little-endian byte encoding of the tag.
    pub const fn to_bytes(&self) -> [u8; TAG_SIZE] {
        self.0.to_le_bytes()
    }

    pub const fn from_bytes(bytes: [u8; TAG_SIZE]) -> Self {
        Tag(u64::from_le_bytes(bytes))
    }

    /// Lowercase hex of the little-endian bytes (16 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Compares against an encoded tag without branching on the bytes.
    pub fn ct_eq(&self, other: &[u8; TAG_SIZE]) -> bool {
        let ours = self.to_bytes();

        let mut diff = 0u8;
        for i in 0..TAG_SIZE {
            diff |= ours[i] ^ other[i];
        }

        diff == 0
    }
}

impl From<u64> for Tag {
    fn from(value: u64) -> Self {
        Tag(value)
    }
}

impl From<Tag> for u64 {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl From<Tag> for [u8; TAG_SIZE] {
    fn from(tag: Tag) -> Self {
        tag.to_bytes()
    }
}

impl Display for Tag {
    /// Formats the tag as its hex digest, e.g. `310e0edd47db6f72`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.to_bytes() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl LowerHex for Tag {
    /// Formats the numeric value, most significant nibble first.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(&self.0, f)
    }
}
