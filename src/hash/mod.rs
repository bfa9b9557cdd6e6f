//! Hash algorithms exposed by the crate.
//!
//! Currently includes SipHash-2-4 with a pure-Rust implementation.

pub mod siphash;

/// Re-export of the SipHash-2-4 convenience functions.
pub use siphash::{digest, hexdigest};
