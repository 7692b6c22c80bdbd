//! # hash entry point
//!
//! `hash [INPUT_FILE]` prints the SHA-256 digest of the file, or of standard
//! input when no file is given, as lowercase hex.

use std::{
  io::{self, IsTerminal},
  process::ExitCode,
};

use clap::Parser;
use hash_cli::{HashArgs, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
  let args = HashArgs::parse();

  // Logs go to stderr so stdout carries only the digest.
  let filter = match args.verbose {
    0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    1 => EnvFilter::new("info"),
    2 => EnvFilter::new("debug"),
    _ => EnvFilter::new("trace"),
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_ansi(io::stderr().is_terminal())
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin().lock();
  let mut stdout = io::stdout().lock();

  match run(&args, stdin, &mut stdout) {
    Ok(code) => ExitCode::from(code),
    Err(e) => {
      // Printed regardless of the log filter; `RUST_LOG=off` must not hide a failure.
      tracing::debug!(error = ?e, "run failed");
      eprintln!("{e:#}");
      ExitCode::FAILURE
    }
  }
}
