#![no_main]

use hashes::crypto::{Sha256, sha256::kernels::ALL};
use libfuzzer_sys::fuzz_target;
use traits::Digest as _;

/// Cut points taken from the input itself, so the fuzzer steers chunk sizes.
fn cuts(input: &[u8]) -> Vec<usize> {
  let mut points: Vec<usize> = input
    .iter()
    .take(8)
    .map(|&b| usize::from(b) % (input.len() + 1))
    .collect();
  points.sort_unstable();
  points
}

fn sha2_digest(input: &[u8]) -> [u8; 32] {
  use sha2::Digest as _;
  let mut out = [0u8; 32];
  out.copy_from_slice(&sha2::Sha256::digest(input));
  out
}

fuzz_target!(|input: &[u8]| {
  let expected = sha2_digest(input);
  assert_eq!(Sha256::digest(input), expected);

  for &id in ALL {
    let mut h = Sha256::with_kernel(id);
    let mut start = 0usize;
    for p in cuts(input) {
      h.update(&input[start..p]);
      start = p;
    }
    h.update(&input[start..]);
    assert_eq!(h.finalize(), expected, "kernel={}", id.as_str());
  }
});
