//! SHA-256 (FIPS 180-4).
//!
//! [`Sha256`] buffers input into 64-byte blocks, compresses each full block as
//! soon as it is available, and applies the standard padding when finalized.
//! Finalization consumes the hasher; clone it first to take an intermediate
//! digest.

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + padding offsets bounded by BLOCK_LEN

use core::fmt;

use traits::{Digest, VerificationError};

pub mod compress;
pub mod constants;
pub mod kernels;
pub mod schedule;


use self::{
  constants::{BLOCK_LEN, H0, LENGTH_OFFSET, OUTPUT_LEN},
  kernels::{CompressBlockFn, compress_block_fn},
};
pub use self::kernels::Sha256KernelId;

/// Streaming SHA-256 state.
#[derive(Clone)]
pub struct Sha256 {
  state: [u32; 8],
  block: [u8; BLOCK_LEN],
  /// Buffered bytes in `block`; always `< BLOCK_LEN` between calls.
  block_len: usize,
  /// Bytes consumed by completed compressions.
  bytes_hashed: u64,
  kernel: Sha256KernelId,
  compress: CompressBlockFn,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self::with_kernel(Sha256KernelId::default())
  }
}

impl fmt::Debug for Sha256 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Sha256")
      .field("kernel", &self.kernel)
      .field("bytes_absorbed", &self.bytes_absorbed())
      .finish_non_exhaustive()
  }
}

impl Sha256 {
  /// Create a hasher that compresses with a specific kernel.
  ///
  /// Every kernel produces identical digests; this exists for testing and
  /// benchmarking.
  #[inline]
  #[must_use]
  pub fn with_kernel(kernel: Sha256KernelId) -> Self {
    Self {
      state: H0,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
      kernel,
      compress: compress_block_fn(kernel),
    }
  }

  /// The compression kernel this hasher uses.
  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> Sha256KernelId {
    self.kernel
  }

  /// Total number of bytes passed to `update` so far.
  #[inline]
  #[must_use]
  pub const fn bytes_absorbed(&self) -> u64 {
    self.bytes_hashed.wrapping_add(self.block_len as u64)
  }

  #[inline]
  fn compress_counted(&mut self, block: &[u8; BLOCK_LEN]) {
    (self.compress)(&mut self.state, block);
    self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
  }

  /// Pad, run the last one or two compressions, and return the chaining value.
  ///
  /// The `0x80` marker always fits because `block_len < 64`. If the marker
  /// leaves fewer than 8 bytes for the length field, the current block is
  /// zero-filled and compressed, and the length goes into a fresh block.
  #[must_use]
  pub fn finalize_words(self) -> [u32; 8] {
    let Self {
      mut state,
      mut block,
      block_len,
      bytes_hashed,
      compress,
      ..
    } = self;
    let bit_len = bytes_hashed.wrapping_add(block_len as u64).wrapping_mul(8);

    block[block_len] = 0x80;
    let mut pos = block_len + 1;

    if pos > LENGTH_OFFSET {
      block[pos..].fill(0);
      compress(&mut state, &block);
      block = [0u8; BLOCK_LEN];
      pos = 0;
    }

    block[pos..LENGTH_OFFSET].fill(0);
    block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
    compress(&mut state, &block);

    state
  }

  /// Finalize and compare against `expected`.
  ///
  /// Every byte is examined regardless of where the first difference is.
  pub fn verify(self, expected: &[u8; OUTPUT_LEN]) -> Result<(), VerificationError> {
    let actual = self.finalize();
    let diff = actual.iter().zip(expected).fold(0u8, |acc, (a, b)| acc | (a ^ b));
    if diff == 0 {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}

/// Serialize the chaining value big-endian, word by word.
#[inline]
#[must_use]
pub fn words_to_bytes(words: &[u32; 8]) -> [u8; OUTPUT_LEN] {
  let mut out = [0u8; OUTPUT_LEN];
  for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
    chunk.copy_from_slice(&word.to_be_bytes());
  }
  out
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = OUTPUT_LEN;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; OUTPUT_LEN];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      let (head, rest) = data.split_at(take);
      self.block[self.block_len..self.block_len + take].copy_from_slice(head);
      self.block_len += take;
      data = rest;

      if self.block_len < BLOCK_LEN {
        return;
      }
      let block = self.block;
      self.compress_counted(&block);
      self.block_len = 0;
    }

    while let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() {
      self.compress_counted(block);
      data = rest;
    }

    if !data.is_empty() {
      self.block[..data.len()].copy_from_slice(data);
      self.block_len = data.len();
    }
  }

  #[inline]
  fn finalize(self) -> Self::Output {
    words_to_bytes(&self.finalize_words())
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::with_kernel(self.kernel);
  }
}
