//! Key material.
//!
//! Key types live apart from the algorithms that consume them, so that
//! validation happens once, at construction, and the algorithms can take
//! a key that is already known to be well formed.
//!
//! ## SipHash
//!
//! The `siphash` module defines the 128-bit SipHash key. Only exactly
//! 16 bytes are accepted; short keys are an error rather than something
//! to pad or derive from.
pub mod siphash;
