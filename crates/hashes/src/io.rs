//! I/O adapters for hashing data in transit.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and hash exactly the bytes transferred
//! (short reads and short writes included).
//!
//! # Example
//!
//! ```rust
//! use hashes::{Digest, crypto::Sha256};
//! use std::io::{Cursor, Read};
//!
//! let mut reader = Sha256::reader(Cursor::new(b"abc".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.digest(), Sha256::digest(b"abc"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{DigestReader, DigestWriter};
