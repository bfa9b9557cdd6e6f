//! Message decomposition into 64-bit words.
//!
//! A message of length `L` becomes `⌊L/8⌋` full little-endian words
//! followed by exactly one final word. The final word packs the
//! `L mod 8` trailing bytes into its low-order bytes and stores
//! `L mod 256` in its most significant byte.
//!
//! The final word is emitted even when `L` is a multiple of 8; in that
//! case it only carries the length byte.

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use super::BLOCK_SIZE;

/// Reads a full 8-byte chunk as a little-endian word.
#[inline(always)]
pub fn load_le(chunk: &[u8; BLOCK_SIZE]) -> u64 {
    u64::from_le_bytes(*chunk)
}

/// Builds the final, length-encoded word.
///
/// # Parameters
///
/// - `tail`: the trailing `len mod 8` bytes of the message (at most 7)
/// - `len`: total message length in bytes
///
/// Only the low 8 bits of `len` are kept, so a 256-byte message encodes
/// the same length byte as an empty one.
#[inline(always)]
pub fn length_block(tail: &[u8], len: usize) -> u64 {
    debug_assert!(tail.len() < BLOCK_SIZE);

    let mut word = [0u8; BLOCK_SIZE];
    word[..tail.len()].copy_from_slice(tail);
    word[BLOCK_SIZE - 1] = len as u8;

    u64::from_le_bytes(word)
}

/// Iterator over the words of a message.
///
/// Created by [`blocks`]. Yields every full word in message order, then
/// the length-encoded word, then stops. Borrows the message and never
/// allocates.
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
    len: usize,
    done: bool,
}

/// Decomposes `message` into SipHash words.
///
/// The returned iterator yields exactly `message.len() / 8 + 1` words.
pub fn blocks(message: &[u8]) -> Blocks<'_> {
    Blocks {
        chunks: message.chunks_exact(BLOCK_SIZE),
        len: message.len(),
        done: false,
    }
}

impl Iterator for Blocks<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if let Some(chunk) = self.chunks.next() {
            // chunks_exact only hands out BLOCK_SIZE slices
            let chunk: &[u8; BLOCK_SIZE] = chunk.try_into().ok()?;
            return Some(load_le(chunk));
        }

        if self.done {
            return None;
        }

        self.done = true;
        Some(length_block(self.chunks.remainder(), self.len))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.chunks.len() + usize::from(!self.done);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}
