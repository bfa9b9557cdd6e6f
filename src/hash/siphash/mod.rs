//! SipHash-2-4 keyed pseudorandom function.
//!
//! This module implements SipHash-2-4 as described by Aumasson and
//! Bernstein: a 128-bit key and an arbitrary-length message produce a
//! 64-bit tag. It is meant for hash-flood resistance, where an attacker
//! must not be able to predict collisions without knowing the key.
//!
//! The pipeline is split the same way the algorithm is usually described:
//!
//! - `blocks`: message decomposition into little-endian words, including
//!   the trailing length-encoded word
//! - `computations`: the four-word state and the SipRound primitive
//! - `core`: compression and finalization, plus the infallible
//!   `siphash24` entry point over a validated key
//! - `tag`: the 64-bit output value
//! - `mac`: validated, byte-oriented public API (`digest`, `hexdigest`,
//!   `verify`)
//!
//! There is no streaming interface. Every call computes one tag from one
//! complete message, and all state lives on the stack for that call.

pub mod blocks;
pub mod computations;
pub mod core;
pub mod mac;
pub mod tag;

pub use self::core::{SipHashError, siphash24};
pub use mac::{SipHash, digest, hexdigest, verify};
pub use tag::Tag;

/// Initialization constants, XORed with the key words.
///
/// These are the ASCII strings `"somepseu"`, `"dorandom"`, `"lygenera"`
/// and `"tedbytes"`, read as big-endian 64-bit words.
pub const SIP_INIT: [u64; 4] = [
    0x736f6d6570736575,
    0x646f72616e646f6d,
    0x6c7967656e657261,
    0x7465646279746573,
];

/// SipRounds applied per message word.
pub const C_ROUNDS: usize = 2;

/// SipRounds applied during finalization.
pub const D_ROUNDS: usize = 4;

/// Constant XORed into `v2` before finalization.
pub const FINALIZATION_CONSTANT: u64 = 0xff;

/// Message word size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Tag size in bytes.
pub const TAG_SIZE: usize = 8;
