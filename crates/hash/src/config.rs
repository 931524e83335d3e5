//! Run-time configuration: arguments plus the `HASH_LOG` environment variable.

use std::{
  ffi::{OsStr, OsString},
  fmt,
  path::PathBuf,
};

use hashes::crypto::sha256::constants::BLOCK_LEN;
use log::LevelFilter;

use crate::CliError;

/// Environment variable selecting the log level (`off`, `error`, `warn`,
/// `info`, `debug`, `trace`).
pub const LOG_ENV: &str = "HASH_LOG";

/// Where the bytes to hash come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Input {
  #[default]
  Stdin,
  File(PathBuf),
}

impl fmt::Display for Input {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Stdin => f.write_str("<stdin>"),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub input: Input,
  /// Read buffer size; a non-zero multiple of the block size, set only
  /// through [`Config::with_chunk_size`].
  chunk_size: usize,
  pub log_level: LevelFilter,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input: Input::Stdin,
      chunk_size: BLOCK_LEN,
      log_level: LevelFilter::Warn,
    }
  }
}

impl Config {
  /// Build a config from the arguments after the program name.
  ///
  /// # Errors
  ///
  /// [`CliError::Usage`] when more than one input file is given.
  pub fn from_args<I>(args: I) -> Result<Self, CliError>
  where
    I: IntoIterator<Item = OsString>,
  {
    let mut args = args.into_iter();
    let input = match (args.next(), args.next()) {
      (None, _) => Input::Stdin,
      (Some(path), None) => Input::File(PathBuf::from(path)),
      (Some(_), Some(_)) => return Err(CliError::Usage),
    };
    Ok(Self { input, ..Self::default() })
  }

  /// Apply the value of [`LOG_ENV`], if set.
  ///
  /// An unrecognised value keeps the current level and is returned so the
  /// caller can warn about it once logging is up.
  #[must_use]
  pub fn with_log_env(mut self, value: Option<&OsStr>) -> (Self, Option<OsString>) {
    let Some(value) = value else {
      return (self, None);
    };
    match value.to_str().and_then(|s| s.trim().parse::<LevelFilter>().ok()) {
      Some(level) => {
        self.log_level = level;
        (self, None)
      }
      None => (self, Some(value.to_owned())),
    }
  }

  #[must_use]
  pub fn with_input(mut self, input: Input) -> Self {
    self.input = input;
    self
  }

  #[inline]
  #[must_use]
  pub const fn chunk_size(&self) -> usize {
    self.chunk_size
  }

  /// Round `chunk_size` up to a whole number of blocks.
  #[must_use]
  pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
    self.chunk_size = chunk_size.max(1).next_multiple_of(BLOCK_LEN);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(list: &[&str]) -> Vec<OsString> {
    list.iter().map(OsString::from).collect()
  }

  #[test]
  fn no_arguments_reads_stdin() {
    let config = Config::from_args(args(&[])).unwrap();
    assert_eq!(config.input, Input::Stdin);
    assert_eq!(config.chunk_size(), 64);
    assert_eq!(config.log_level, LevelFilter::Warn);
  }

  #[test]
  fn one_argument_is_the_input_file() {
    let config = Config::from_args(args(&["data.bin"])).unwrap();
    assert_eq!(config.input, Input::File(PathBuf::from("data.bin")));
    assert_eq!(config.input.to_string(), "data.bin");
  }

  #[test]
  fn two_arguments_is_a_usage_error() {
    let err = Config::from_args(args(&["a", "b"])).unwrap_err();
    assert!(matches!(err, CliError::Usage));
  }

  #[test]
  fn log_env_sets_level() {
    let (config, bad) = Config::default().with_log_env(Some(OsStr::new("Debug")));
    assert_eq!(config.log_level, LevelFilter::Debug);
    assert!(bad.is_none());

    let (config, bad) = Config::default().with_log_env(Some(OsStr::new("off")));
    assert_eq!(config.log_level, LevelFilter::Off);
    assert!(bad.is_none());
  }

  #[test]
  fn bad_log_env_keeps_level_and_is_returned() {
    let (config, bad) = Config::default().with_log_env(Some(OsStr::new("loud")));
    assert_eq!(config.log_level, LevelFilter::Warn);
    assert_eq!(bad, Some(OsString::from("loud")));

    let (config, bad) = Config::default().with_log_env(None);
    assert_eq!(config, Config::default());
    assert!(bad.is_none());
  }

  #[test]
  fn chunk_size_rounds_to_blocks() {
    assert_eq!(Config::default().with_chunk_size(0).chunk_size(), 64);
    assert_eq!(Config::default().with_chunk_size(64).chunk_size(), 64);
    assert_eq!(Config::default().with_chunk_size(65).chunk_size(), 128);
    assert_eq!(Config::default().with_chunk_size(8000).chunk_size(), 8000usize.next_multiple_of(64));
  }
}
