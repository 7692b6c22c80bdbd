//! Message schedule expansion (FIPS 180-4 §6.2.2 step 1).

#![allow(clippy::indexing_slicing)] // Fixed-size schedule indexing, bounds are compile-time constants

use super::constants::BLOCK_LEN;
use crate::util::rotr32;

/// Number of schedule words, one per round.
pub const SCHEDULE_LEN: usize = 64;

#[inline(always)]
pub(crate) fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
pub(crate) fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Load the 16 big-endian message words of `block`.
#[inline(always)]
pub(crate) fn load_words(block: &[u8; BLOCK_LEN]) -> [u32; 16] {
  let mut w = [0u32; 16];
  for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
    *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
  }
  w
}

/// Expand one block into the full 64-word message schedule.
///
/// Words `0..16` are the block read as big-endian `u32`s; every later word is
/// `w[i-16] + σ0(w[i-15]) + w[i-7] + σ1(w[i-2])` modulo 2^32.
#[must_use]
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
  let mut w = [0u32; SCHEDULE_LEN];
  w[..16].copy_from_slice(&load_words(block));
  for i in 16..SCHEDULE_LEN {
    w[i] = w[i - 16]
      .wrapping_add(small_sigma0(w[i - 15]))
      .wrapping_add(w[i - 7])
      .wrapping_add(small_sigma1(w[i - 2]));
  }
  w
}
