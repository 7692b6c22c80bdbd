//! The SHA-256 compression function (FIPS 180-4 §6.2.2 steps 2-4).
//!
//! Two interchangeable forms live here:
//!
//! - [`compress`] consumes a fully expanded 64-word schedule and is the
//!   textbook shape of the algorithm.
//! - [`compress_block_rolling`] keeps only a 16-word ring of schedule words and
//!   derives each later word inside its round.
//!
//! Both are pure functions of `(state, block)` and must agree bit-for-bit.

#![allow(clippy::indexing_slicing)] // Ring indices are masked with `& 15`

use super::{
  constants::{BLOCK_LEN, K},
  schedule::{SCHEDULE_LEN, expand, load_words, small_sigma0, small_sigma1},
};
use crate::util::rotr32;

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

/// One round over the working variables `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
fn round(v: &mut [u32; 8], k: u32, wi: u32) {
  let [a, b, c, d, e, f, g, h] = *v;
  let t1 = h
    .wrapping_add(big_sigma1(e))
    .wrapping_add(ch(e, f, g))
    .wrapping_add(k)
    .wrapping_add(wi);
  let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
  *v = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
}

/// Davies-Meyer feed-forward: add the working variables back into the chaining value.
#[inline(always)]
fn feed_forward(state: &mut [u32; 8], v: [u32; 8]) {
  for (s, x) in state.iter_mut().zip(v) {
    *s = s.wrapping_add(x);
  }
}

/// Run 64 rounds over an expanded schedule and fold the result into `state`.
pub fn compress(state: &mut [u32; 8], w: &[u32; SCHEDULE_LEN]) {
  let mut v = *state;
  for (&k, &wi) in K.iter().zip(w) {
    round(&mut v, k, wi);
  }
  feed_forward(state, v);
}

/// Expand `block` and compress it.
#[inline]
pub fn compress_block_reference(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  compress(state, &expand(block));
}

/// Compress `block` with an in-place 16-word schedule ring.
///
/// For `i >= 16`, slot `i & 15` still holds `w[i-16]`, and `w[i-15]`, `w[i-7]`,
/// `w[i-2]` sit at offsets 1, 9 and 14 from it.
pub fn compress_block_rolling(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = load_words(block);
  let mut v = *state;

  for (i, &k) in K.iter().enumerate() {
    let slot = i & 15;
    if i >= 16 {
      w[slot] = w[slot]
        .wrapping_add(small_sigma0(w[(i + 1) & 15]))
        .wrapping_add(w[(i + 9) & 15])
        .wrapping_add(small_sigma1(w[(i + 14) & 15]));
    }
    round(&mut v, k, w[slot]);
  }

  feed_forward(state, v);
}
