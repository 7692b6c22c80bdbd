use hashes::{Digest as _, crypto::Sha256, hex};

/// FIPS 180-4 / NIST CAVP short and long message vectors.
const VECTORS: &[(&[u8], &str)] = &[
  (b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
  (b"abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
  (
    b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
    "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
  ),
  (
    b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
    "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
  ),
  (
    b"The quick brown fox jumps over the lazy dog",
    "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
  ),
];

#[test]
fn sha256_official_vectors() {
  for (i, &(input, expected)) in VECTORS.iter().enumerate() {
    let actual = Sha256::digest(input);
    assert_eq!(
      hex::encode_lower(&actual).as_str(),
      expected,
      "sha256 vector mismatch at case {i} (len={})",
      input.len()
    );
  }
}

#[test]
fn sha256_official_vectors_streamed_bytewise() {
  for (i, &(input, expected)) in VECTORS.iter().enumerate() {
    let mut h = Sha256::new();
    for b in input {
      h.update(core::slice::from_ref(b));
    }
    assert_eq!(hex::encode_lower(&h.finalize()).as_str(), expected, "case {i}");
  }
}

#[test]
fn sha256_million_a_in_1024_byte_reads() {
  let chunk = [b'a'; 1024];
  let mut h = Sha256::new();
  let mut remaining = 1_000_000usize;
  while remaining > 0 {
    let n = remaining.min(chunk.len());
    h.update(&chunk[..n]);
    remaining -= n;
  }
  assert_eq!(h.bytes_absorbed(), 1_000_000);
  assert_eq!(
    hex::encode_lower(&h.finalize()).as_str(),
    "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
  );
}
