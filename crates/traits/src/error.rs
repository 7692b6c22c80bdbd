//! Error types for digest operations.
//!
//! Hashing itself cannot fail. These types cover the edges around it:
//! comparing a computed digest against an expected one, and reading an
//! expected digest from its hex form.

use core::fmt;

/// Digest verification failed.
///
/// Returned when a computed digest does not match the expected value.
/// Intentionally opaque: it does not say which byte differed.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: &[u8; 32], expected: &[u8; 32]) -> Result<(), VerificationError> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// let a = [0u8; 32];
/// let b = [1u8; 32];
/// assert!(verify(&a, &b).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("digest mismatch")
  }
}

impl core::error::Error for VerificationError {}

/// A hex-encoded digest could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseHexError {
  /// The input does not have exactly two hex characters per output byte.
  InvalidLength {
    /// Length of the rejected input, in bytes.
    len: usize,
  },
  /// A character outside `[0-9a-fA-F]` was found.
  InvalidDigit {
    /// Byte offset of the offending character.
    index: usize,
  },
}

impl fmt::Display for ParseHexError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidLength { len } => write!(f, "invalid hex digest length {len}"),
      Self::InvalidDigit { index } => write!(f, "invalid hex digit at offset {index}"),
    }
  }
}

impl core::error::Error for ParseHexError {}
