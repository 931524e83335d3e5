//! The `hash` command: print the SHA-256 digest of a file or standard input.
//!
//! ```text
//! usage: hash [input_file]
//! ```
//!
//! Input is read in block-sized chunks and streamed through
//! [`hashes::crypto::Sha256`]; on end of input the digest is printed as 64
//! lowercase hex digits followed by a newline. Any failure prints one
//! diagnostic line to stderr and exits with status 1 without printing a
//! digest.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod config;
pub mod error;
pub mod logger;

use std::{
  fs::File,
  io::{self, ErrorKind, Read, Write},
};

pub use config::{Config, Input};
pub use error::CliError;
use hashes::{Digest as _, crypto::Sha256, crypto::Sha256Digest};

/// Hash everything `input` yields, reading `chunk_size` bytes at a time.
///
/// A `chunk_size` of zero is read as one byte, so an empty buffer is never
/// mistaken for end of input.
///
/// # Errors
///
/// [`CliError::Read`] on any read failure other than `Interrupted`.
pub fn hash_reader<R: Read>(input: R, chunk_size: usize, name: &str) -> Result<Sha256Digest, CliError> {
  let mut reader = Sha256::reader(input);
  let mut buf = vec![0u8; chunk_size.max(1)];
  let mut total = 0u64;

  loop {
    match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => total += n as u64,
      Err(err) if err.kind() == ErrorKind::Interrupted => continue,
      Err(source) => {
        return Err(CliError::Read {
          input: name.to_owned(),
          source,
        });
      }
    }
  }

  log::trace!("{name}: {total} bytes hashed");
  Ok(reader.finalize())
}

/// Run the command described by `config`, writing the digest line to `stdout`.
///
/// `stdin` is only read when `config` names no input file.
///
/// # Errors
///
/// Any [`CliError`] other than [`CliError::Usage`], which argument parsing
/// reports before this point.
pub fn run<I: Read, O: Write>(config: &Config, stdin: I, mut stdout: O) -> Result<Sha256Digest, CliError> {
  log::debug!("hashing {} in {}-byte chunks", config.input, config.chunk_size());

  let digest = match &config.input {
    Input::Stdin => hash_reader(stdin, config.chunk_size(), "<stdin>")?,
    Input::File(path) => {
      let file = File::open(path).map_err(|source| CliError::Open {
        path: path.clone(),
        source,
      })?;
      hash_reader(file, config.chunk_size(), &path.display().to_string())?
    }
  };

  writeln!(stdout, "{digest}")
    .and_then(|()| stdout.flush())
    .map_err(CliError::Write)?;
  Ok(digest)
}

/// Write the one-line diagnostic for `err`.
pub fn report<E: Write>(err: &CliError, mut stderr: E) -> io::Result<()> {
  writeln!(stderr, "{err}")
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  /// Fails with `Interrupted` once, then with a hard error after `ok_reads`.
  struct Flaky {
    data: Cursor<Vec<u8>>,
    interrupted: bool,
    ok_reads: usize,
  }

  impl Read for Flaky {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      if !self.interrupted {
        self.interrupted = true;
        return Err(io::Error::from(ErrorKind::Interrupted));
      }
      if self.ok_reads == 0 {
        return Err(io::Error::other("device unplugged"));
      }
      self.ok_reads -= 1;
      self.data.read(buf)
    }
  }

  #[test]
  fn stdin_digest_line() {
    let config = Config::default();
    let mut out = Vec::new();
    let digest = run(&config, Cursor::new(b"abc".to_vec()), &mut out).unwrap();
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
    );
    assert_eq!(digest, Sha256::digest(b"abc"));
  }

  #[test]
  fn chunk_size_does_not_change_digest() {
    let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
    let expected = Sha256::digest(&data);
    for chunk in [1, 63, 64, 65, 4096] {
      let got = hash_reader(Cursor::new(data.clone()), chunk, "test").unwrap();
      assert_eq!(got, expected, "chunk={chunk}");
    }
  }

  #[test]
  fn zero_chunk_size_still_reads_everything() {
    assert_eq!(hash_reader(Cursor::new(b"abc".to_vec()), 0, "test").unwrap(), Sha256::digest(b"abc"));

    let config = Config::default().with_chunk_size(0);
    let mut out = Vec::new();
    let digest = run(&config, Cursor::new(b"abc".to_vec()), &mut out).unwrap();
    assert_eq!(digest, Sha256::digest(b"abc"));
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
    );
  }

  #[test]
  fn interrupted_reads_are_retried() {
    let reader = Flaky {
      data: Cursor::new(b"abc".to_vec()),
      interrupted: false,
      ok_reads: usize::MAX,
    };
    assert_eq!(hash_reader(reader, 64, "flaky").unwrap(), Sha256::digest(b"abc"));
  }

  #[test]
  fn read_error_yields_no_digest() {
    let config = Config::default();
    let reader = Flaky {
      data: Cursor::new(vec![0u8; 1000]),
      interrupted: true,
      ok_reads: 2,
    };
    let mut out = Vec::new();
    let err = run(&config, reader, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }), "{err:?}");
    assert!(out.is_empty());
    assert_eq!(err.to_string(), "<stdin>: read error: device unplugged");
  }

  #[test]
  fn report_writes_one_line() {
    let mut err_out = Vec::new();
    report(&CliError::Usage, &mut err_out).unwrap();
    assert_eq!(String::from_utf8(err_out).unwrap(), "usage: hash [input_file]\n");
  }
}
