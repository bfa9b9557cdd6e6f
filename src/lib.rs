//! SipHash-2-4 keyed tags
//!
//! This crate computes SipHash-2-4, a keyed pseudorandom function that
//! maps a secret 128-bit key and an arbitrary-length message to a 64-bit
//! tag. It is intended for hash-flood resistance: without the key, an
//! attacker cannot predict which inputs collide in a hash table.
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! algorithm is exactly the published 2-compression / 4-finalization
//! variant, checked against the reference test vectors.
//!
//! # Module overview
//!
//! - `hash`
//!   The SipHash-2-4 algorithm: message decomposition, the SipRound
//!   primitive, compression, finalization, and the byte-oriented
//!   `digest` / `hexdigest` API.
//!
//! - `keys`
//!   The validated 128-bit key type. Keys that are not exactly 16 bytes
//!   are rejected rather than padded or derived.
//!
//! # Example
//!
//! ```
//! let hex = siptag::hexdigest(b"0123456789ABCDEF", b"a")?;
//! assert_eq!(hex.len(), 16);
//!
//! assert!(siptag::digest(b"too short", b"a").is_err());
//! # Ok::<(), siptag::SipHashError>(())
//! ```
//!
//! # Design goals
//!
//! - No heap allocations in the core algorithm
//! - No streaming state: one call, one message, one tag
//! - Raw bytes in, raw bytes out

pub mod hash;
pub mod keys;

pub use hash::siphash::{SipHash, SipHashError, Tag, digest, hexdigest, verify};
pub use keys::siphash::SipKey;
