//! Minimal `log` backend writing to stderr.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

impl Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata<'_>) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record<'_>) {
    if self.enabled(record.metadata()) {
      eprintln!("hash [{}] {}", record.level(), record.args());
    }
  }

  fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger at `level`.
///
/// Only the first call installs the logger; later calls just adjust the level.
pub fn init(level: LevelFilter) {
  let _ = log::set_logger(&LOGGER);
  log::set_max_level(level);
}
