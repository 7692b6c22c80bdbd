//! SHA-256 as specified by FIPS 180-4.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The streaming SHA-256 engine.
//! - [`hex`] - Lowercase hex rendering and parsing of digests.
//! - `io` - Reader/writer adapters (`std` feature).
//!
//! # Example
//!
//! ```
//! use hashes::{Digest, crypto::Sha256, hex};
//!
//! let mut h = Sha256::new();
//! h.update(b"a");
//! h.update(b"bc");
//! assert_eq!(
//!   hex::encode_lower(&h.finalize()).as_str(),
//!   "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;
pub mod hex;
#[cfg(feature = "std")]
pub mod io;

mod util;

pub use traits::{Digest, ParseHexError, VerificationError};
