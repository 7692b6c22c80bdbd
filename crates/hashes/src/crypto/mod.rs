//! Cryptographic hash functions.

pub mod sha256;

pub use sha256::{Sha256, Sha256KernelId};
