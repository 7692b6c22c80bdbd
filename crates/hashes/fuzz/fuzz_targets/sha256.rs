#![no_main]

use hashes::{
  crypto::{Sha256, sha256::words_to_bytes},
  hex,
};
use libfuzzer_sys::fuzz_target;
use traits::Digest as _;

// Every view of a finished stream must describe the same digest.
fuzz_target!(|data: &[u8]| {
  let mut h = Sha256::new();
  h.update(data);
  assert_eq!(h.bytes_absorbed(), data.len() as u64);

  let words = h.clone().finalize_words();
  let bytes = h.clone().finalize();
  assert_eq!(words_to_bytes(&words), bytes);

  let rendered = hex::encode_lower(&bytes);
  let by_words: String = words.iter().map(|w| format!("{w:08x}")).collect();
  assert_eq!(rendered.as_str(), by_words);
  assert_eq!(hex::decode(rendered.as_str()), Ok(bytes));

  assert!(h.clone().verify(&bytes).is_ok());
  let mut wrong = bytes;
  wrong[usize::from(data.first().copied().unwrap_or(0)) % 32] ^= 1;
  assert!(h.verify(&wrong).is_err());
});
