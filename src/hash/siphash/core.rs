//! SipHash-2-4 compression and finalization.
//!
//! This module drives the state through the two stages of the algorithm:
//!
//! 1. every message word is absorbed with `C_ROUNDS` SipRounds
//!    (`compress`)
//! 2. the state is mixed with `D_ROUNDS` further SipRounds and folded into
//!    the 64-bit tag (`finalize`)
//!
//! The stages are strictly sequential. Independent messages can be hashed
//! in parallel, but a single message cannot.

use std::fmt;

use super::FINALIZATION_CONSTANT;
use super::blocks::blocks;
use super::computations::State;
use crate::keys::siphash::SipKey;

/// Errors reported by the SipHash API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SipHashError {
    /// The key is not exactly 16 bytes long.
    InvalidKeyLength {
        /// Length of the rejected key, in bytes.
        len: usize,
    },
    /// A textual key could not be decoded to bytes.
    InvalidKeyEncoding,
    /// The recomputed tag does not match the expected one.
    AuthenticationFailed,
}

impl fmt::Display for SipHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SipHashError::InvalidKeyLength { len } => {
                write!(f, "invalid SipHash key length: expected 16 bytes, got {len}")
            }
            SipHashError::InvalidKeyEncoding => f.write_str("invalid SipHash key encoding"),
            SipHashError::AuthenticationFailed => f.write_str("SipHash tag mismatch"),
        }
    }
}

impl std::error::Error for SipHashError {}

/// Absorbs one message word into the state.
///
/// # Algorithm
///
/// ```text
/// v3 ^= m
/// SipRound x C_ROUNDS
/// v0 ^= m
/// ```
#[inline(always)]
pub fn compress(state: &mut State, m: u64) {
    state.v3 ^= m;
    state.c_rounds();
    state.v0 ^= m;
}

/// Finalizes the state and returns the tag value.
///
/// # Algorithm
///
/// ```text
/// v2 ^= 0xff
/// SipRound x D_ROUNDS
/// tag = v0 ^ v1 ^ v2 ^ v3
/// ```
#[inline(always)]
pub fn finalize(mut state: State) -> u64 {
    state.v2 ^= FINALIZATION_CONSTANT;
    state.d_rounds();
    state.fold()
}

/// Computes SipHash-2-4 of `message` under `key`.
///
/// This is the unchecked core: the key has already been validated by
/// construction, so the computation cannot fail.
///
/// # Notes
///
/// - Runs in O(L) time with O(1) extra memory.
/// - The message is read once, front to back.
/// - No heap allocations are performed.
pub fn siphash24(key: &SipKey, message: &[u8]) -> u64 {
    let (k0, k1) = key.words();
    let mut state = State::new(k0, k1);

    for m in blocks(message) {
        compress(&mut state, m);
    }

    finalize(state)
}
