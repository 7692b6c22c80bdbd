//! # hash-cli
//!
//! Command-line front end for the SHA-256 engine in `hashes`. Reads a file (or
//! standard input) in fixed-size chunks, streams every chunk into a
//! [`Sha256`] and prints the digest as 64 lowercase hex characters.
//!
//! Argument parsing and I/O live here; all hashing is delegated to `hashes`.

use std::{
  fs::File,
  io::{self, Read, Write},
  path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use hashes::{Digest, crypto::Sha256, hex};

/// Read size used when `--chunk-size` is not given.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Exit status for a `--check` mismatch.
pub const EXIT_MISMATCH: u8 = 1;

/// Print the SHA-256 digest of a file or standard input.
#[derive(Parser, Debug)]
#[command(name = "hash", version, about, long_about = None)]
pub struct HashArgs {
  /// File to hash. Reads standard input when omitted.
  #[arg(value_name = "INPUT_FILE")]
  pub input: Option<PathBuf>,

  /// Compare the digest against this hex value and report OK or FAILED.
  #[arg(long, value_name = "HEX", value_parser = parse_expected)]
  pub check: Option<[u8; 32]>,

  /// Number of bytes read per call.
  #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
  pub chunk_size: usize,

  /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

fn parse_expected(s: &str) -> Result<[u8; 32], String> {
  hex::decode(s.trim()).map_err(|e| e.to_string())
}

fn parse_chunk_size(s: &str) -> Result<usize, String> {
  match s.parse::<usize>() {
    Ok(0) => Err("chunk size must be at least 1".to_string()),
    Ok(n) => Ok(n),
    Err(e) => Err(e.to_string()),
  }
}

/// Stream `input` through a SHA-256 hasher, `chunk_size` bytes per read.
///
/// Returns the (unfinalized) hasher so the caller can finalize or verify it.
pub fn hash_reader<R: Read>(input: R, chunk_size: usize) -> io::Result<Sha256> {
  let mut reader = Sha256::reader(input);
  let mut buf = vec![0u8; chunk_size.max(1)];
  let mut reads = 0u64;

  loop {
    match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(_) => reads += 1,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Err(e),
    }
  }

  let hasher = reader.into_hasher();
  tracing::info!(bytes = hasher.bytes_absorbed(), reads, "input exhausted");
  Ok(hasher)
}

/// Run the command against `stdin`/`out`. Returns the process exit status.
pub fn run<R: Read, W: Write>(args: &HashArgs, stdin: R, out: &mut W) -> Result<u8> {
  let hasher = match &args.input {
    Some(path) => {
      tracing::debug!(path = %path.display(), chunk_size = args.chunk_size, "hashing file");
      let file = File::open(path).with_context(|| path.display().to_string())?;
      hash_reader(file, args.chunk_size).with_context(|| format!("failed to read {}", path.display()))?
    }
    None => {
      tracing::debug!(chunk_size = args.chunk_size, "hashing standard input");
      hash_reader(stdin, args.chunk_size).context("failed to read standard input")?
    }
  };

  let Some(expected) = args.check else {
    writeln!(out, "{}", hex::encode_lower(&hasher.finalize()))?;
    return Ok(0);
  };

  let actual = hex::encode_lower(&hasher.clone().finalize());
  match hasher.verify(&expected) {
    Ok(()) => {
      writeln!(out, "{actual}: OK")?;
      Ok(0)
    }
    Err(e) => {
      tracing::warn!(expected = %hex::encode_lower(&expected), %actual, "{e}");
      writeln!(out, "{actual}: FAILED")?;
      Ok(EXIT_MISMATCH)
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

  fn args(extra: &[&str]) -> HashArgs {
    HashArgs::parse_from(std::iter::once("hash").chain(extra.iter().copied()))
  }

  fn run_on(args: &HashArgs, input: &[u8]) -> (u8, String) {
    let mut out = Vec::new();
    let code = run(args, Cursor::new(input.to_vec()), &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
  }

  #[test]
  fn defaults() {
    let a = args(&[]);
    assert_eq!(a.input, None);
    assert_eq!(a.check, None);
    assert_eq!(a.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(a.verbose, 0);
  }

  #[test]
  fn prints_digest_of_stdin() {
    assert_eq!(run_on(&args(&[]), b"abc"), (0, format!("{ABC}\n")));
  }

  #[test]
  fn chunk_size_does_not_change_digest() {
    let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
    let (_, reference) = run_on(&args(&[]), &data);
    for size in ["1", "55", "64", "65", "4096"] {
      assert_eq!(run_on(&args(&["--chunk-size", size]), &data).1, reference, "chunk={size}");
    }
  }

  #[test]
  fn check_reports_ok_and_failed() {
    assert_eq!(run_on(&args(&["--check", ABC]), b"abc"), (0, format!("{ABC}: OK\n")));
    let upper = ABC.to_ascii_uppercase();
    assert_eq!(
      run_on(&args(&["--check", upper.as_str()]), b"abc"),
      (0, format!("{ABC}: OK\n"))
    );

    let (code, out) = run_on(&args(&["--check", ABC]), b"abd");
    assert_eq!(code, EXIT_MISMATCH);
    assert!(out.ends_with(": FAILED\n"), "{out}");
  }

  #[test]
  fn rejects_bad_arguments() {
    let parse = |extra: &[&str]| HashArgs::try_parse_from(std::iter::once("hash").chain(extra.iter().copied()));
    assert!(parse(&["--chunk-size", "0"]).is_err());
    assert!(parse(&["--chunk-size", "-4"]).is_err());
    assert!(parse(&["--check", "abc"]).is_err());
    assert!(parse(&["a", "b"]).is_err());
  }

  #[test]
  fn missing_file_names_the_path() {
    let a = args(&["/definitely/not/here.bin"]);
    let err = run(&a, io::empty(), &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").starts_with("/definitely/not/here.bin: "), "{err:#}");
  }

  #[test]
  fn interrupted_reads_are_retried() {
    struct Flaky {
      data: Cursor<Vec<u8>>,
      interrupted: bool,
    }

    impl Read for Flaky {
      fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupted = !self.interrupted;
        if self.interrupted {
          return Err(io::ErrorKind::Interrupted.into());
        }
        self.data.read(buf)
      }
    }

    let input = Flaky {
      data: Cursor::new(b"abc".to_vec()),
      interrupted: false,
    };
    let h = hash_reader(input, 2).unwrap();
    assert_eq!(hex::encode_lower(&h.finalize()).as_str(), ABC);
  }
}
