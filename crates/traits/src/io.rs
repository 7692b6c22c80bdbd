//! I/O adapters that hash data in transit.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap a [`std::io::Read`] or
//! [`std::io::Write`] and feed exactly the bytes that were transferred to a
//! [`Digest`](crate::Digest). Short reads and short writes are accounted for:
//! a byte is hashed only once the inner reader produced it or the inner writer
//! accepted it.

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::Digest;

/// Feed the first `n` bytes spread over `bufs` to `on_data`.
#[inline]
fn for_each_prefix<'a>(bufs: impl IntoIterator<Item = &'a [u8]>, n: usize, mut on_data: impl FnMut(&[u8])) {
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let take = remaining.min(buf.len());
    if let Some(data) = buf.get(..take) {
      on_data(data);
    }
    remaining -= take;
  }
}

/// Wraps a [`Read`] and computes a digest of everything read through it.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `D`: The digest algorithm type (e.g., `Sha256`)
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Digest of the bytes read so far.
  ///
  /// Finalizes a copy of the hasher; further reads keep extending the
  /// original stream.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.clone().finalize()
  }

  /// Unwrap this `DigestReader`, returning the inner reader and the final digest.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `DigestReader`, returning the hasher without finalizing it.
  #[inline]
  pub fn into_hasher(self) -> D {
    self.hasher
  }

  /// Unwrap this `DigestReader`, returning the inner reader and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  ///
  /// Bytes read directly from the inner reader bypass the hasher.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, D: Digest> Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let hasher = &mut self.hasher;
    for_each_prefix(bufs.iter().map(|b| &**b), n, |data| hasher.update(data));
    Ok(n)
  }
}

/// Wraps a [`Write`] and computes a digest of everything written through it.
///
/// Only the bytes the inner writer reports as written are hashed, so a short
/// write followed by a retry of the remainder hashes each byte exactly once.
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Digest of the bytes written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.clone().finalize()
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and the final digest.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `DigestWriter`, returning the hasher without finalizing it.
  #[inline]
  pub fn into_hasher(self) -> D {
    self.hasher
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, D: Digest> Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let hasher = &mut self.hasher;
    for_each_prefix(bufs.iter().map(|b| &**b), n, |data| hasher.update(data));
    Ok(n)
  }
}

#[cfg(test)]
mod tests {
  use std::{io::Cursor, vec::Vec};

  use super::*;

  /// Order-sensitive toy digest: enough to detect dropped, duplicated or reordered bytes.
  #[derive(Clone)]
  struct Fnv(u64);

  impl Default for Fnv {
    fn default() -> Self {
      Self::new()
    }
  }

  impl Digest for Fnv {
    const OUTPUT_SIZE: usize = 8;
    const BLOCK_SIZE: usize = 1;
    type Output = u64;

    fn new() -> Self {
      Self(0xcbf2_9ce4_8422_2325)
    }

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.0 = (self.0 ^ u64::from(b)).wrapping_mul(0x100_0000_01b3);
      }
    }

    fn finalize(self) -> u64 {
      self.0
    }

    fn reset(&mut self) {
      *self = Self::new();
    }
  }

  /// Reader that hands out at most `step` bytes per call.
  struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
  }

  impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      let n = self.step.min(buf.len()).min(self.data.len());
      buf[..n].copy_from_slice(&self.data[..n]);
      self.data = &self.data[n..];
      Ok(n)
    }
  }

  /// Writer that accepts at most `step` bytes per call.
  struct Stingy {
    out: Vec<u8>,
    step: usize,
  }

  impl Write for Stingy {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = self.step.min(buf.len());
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  const DATA: &[u8] = b"the quick brown fox jumps over the lazy dog";

  #[test]
  fn reader_hashes_exactly_what_was_read() {
    let mut reader = Fnv::reader(Trickle { data: DATA, step: 3 });
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, DATA);
    assert_eq!(reader.digest(), Fnv::digest(DATA));
  }

  #[test]
  fn reader_digest_is_a_snapshot() {
    let mut reader = Fnv::reader(Cursor::new(DATA.to_vec()));
    let mut first = [0u8; 10];
    reader.read_exact(&mut first).unwrap();
    assert_eq!(reader.digest(), Fnv::digest(&DATA[..10]));

    io::copy(&mut reader, &mut io::sink()).unwrap();
    let (_, digest) = reader.into_parts();
    assert_eq!(digest, Fnv::digest(DATA));
  }

  #[test]
  fn reader_vectored_hashes_prefix_only() {
    let mut reader = Fnv::reader(Cursor::new(DATA[..5].to_vec()));
    let mut a = [0u8; 3];
    let mut b = [0u8; 8];
    let n = reader
      .read_vectored(&mut [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)])
      .unwrap();
    assert!(n <= 5);
    assert_eq!(reader.digest(), Fnv::digest(&DATA[..n]));
  }

  #[test]
  fn short_writes_hash_each_byte_once() {
    let mut writer = Fnv::writer(Stingy { out: Vec::new(), step: 4 });
    writer.write_all(DATA).unwrap();
    let (inner, digest) = writer.into_parts();
    assert_eq!(inner.out, DATA);
    assert_eq!(digest, Fnv::digest(DATA));
  }

  #[test]
  fn vectored_write_hashes_accepted_prefix() {
    let mut writer = Fnv::writer(Stingy { out: Vec::new(), step: 64 });
    let n = writer
      .write_vectored(&[IoSlice::new(&DATA[..7]), IoSlice::new(&DATA[7..])])
      .unwrap();
    // The default `write_vectored` forwards only the first non-empty slice.
    assert_eq!(n, 7);
    assert_eq!(writer.digest(), Fnv::digest(&DATA[..7]));
  }
}
