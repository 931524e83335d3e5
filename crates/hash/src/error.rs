//! Command failures and their diagnostics.

use std::{fmt, io, path::PathBuf};

/// Everything that stops `hash` from printing a digest.
#[derive(Debug)]
pub enum CliError {
  /// More than one input file was named.
  Usage,
  /// The input file could not be opened.
  Open { path: PathBuf, source: io::Error },
  /// Reading the input failed part way through.
  Read { input: String, source: io::Error },
  /// The digest line could not be written.
  Write(io::Error),
}

/// The OS description of `err` without the trailing ` (os error N)`.
fn describe(err: &io::Error) -> String {
  let text = err.to_string();
  match err.raw_os_error() {
    Some(code) => text
      .strip_suffix(&format!(" (os error {code})"))
      .map_or_else(|| text.clone(), str::to_owned),
    None => text,
  }
}

impl fmt::Display for CliError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CliError::Usage => f.write_str("usage: hash [input_file]"),
      CliError::Open { path, source } => write!(f, "{}: {}", path.display(), describe(source)),
      CliError::Read { input, source } => write!(f, "{input}: read error: {}", describe(source)),
      CliError::Write(source) => write!(f, "write error: {}", describe(source)),
    }
  }
}

impl std::error::Error for CliError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      CliError::Usage => None,
      CliError::Open { source, .. } | CliError::Read { source, .. } | CliError::Write(source) => Some(source),
    }
  }
}
