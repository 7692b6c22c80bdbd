//! Core traits for the SHA-256 workspace.
//!
//! This crate defines the streaming [`Digest`] interface the hash engine
//! implements, the small error types shared by the engine and its callers, and
//! (with the `std` feature) I/O adapters that hash data as it moves through a
//! reader or writer. It is `no_std` compatible and has zero dependencies.
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for digest comparison
//! - [`ParseHexError`] - Malformed hex-encoded digest
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
pub use error::{ParseHexError, VerificationError};
