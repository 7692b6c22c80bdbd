//! Hex rendering and parsing of SHA-256 digests.
//!
//! The canonical text form of a digest is 64 lowercase hex characters: each of
//! the eight state words printed as `%08x`, in order. Since the byte output is
//! the big-endian serialization of those words, that is the same as printing
//! every byte as `%02x`.

#![allow(clippy::indexing_slicing)] // Output offsets are `2 * i` for `i < 32`

use core::fmt;

use traits::ParseHexError;

use crate::crypto::sha256::constants::OUTPUT_LEN;

const HEX_LEN: usize = OUTPUT_LEN * 2;
const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A digest rendered as lowercase hex, stored inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexDigest([u8; HEX_LEN]);

impl HexDigest {
  /// The hex text.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    debug_assert!(self.0.iter().all(|b| DIGITS.contains(b)));
    // SAFETY: `HexDigest` is only built by `encode_lower`, which writes bytes
    // from `DIGITS` into every slot. ASCII is valid UTF-8.
    unsafe { core::str::from_utf8_unchecked(&self.0) }
  }

  /// The hex text as ASCII bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; HEX_LEN] {
    &self.0
  }
}

impl fmt::Display for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("HexDigest").field(&self.as_str()).finish()
  }
}

/// Render a digest as 64 lowercase hex characters.
#[must_use]
pub fn encode_lower(digest: &[u8; OUTPUT_LEN]) -> HexDigest {
  let mut out = [0u8; HEX_LEN];
  for (i, &b) in digest.iter().enumerate() {
    out[2 * i] = DIGITS[usize::from(b >> 4)];
    out[2 * i + 1] = DIGITS[usize::from(b & 0x0f)];
  }
  HexDigest(out)
}

#[inline]
const fn nibble(c: u8) -> Option<u8> {
  match c {
    b'0'..=b'9' => Some(c - b'0'),
    b'a'..=b'f' => Some(c - b'a' + 10),
    b'A'..=b'F' => Some(c - b'A' + 10),
    _ => None,
  }
}

/// Parse a 64-character hex digest. Upper and lower case are both accepted.
pub fn decode(s: &str) -> Result<[u8; OUTPUT_LEN], ParseHexError> {
  let bytes = s.as_bytes();
  if bytes.len() != HEX_LEN {
    return Err(ParseHexError::InvalidLength { len: bytes.len() });
  }

  let mut out = [0u8; OUTPUT_LEN];
  for (i, pair) in bytes.chunks_exact(2).enumerate() {
    let hi = nibble(pair[0]).ok_or(ParseHexError::InvalidDigit { index: 2 * i })?;
    let lo = nibble(pair[1]).ok_or(ParseHexError::InvalidDigit { index: 2 * i + 1 })?;
    out[i] = (hi << 4) | lo;
  }
  Ok(out)
}
