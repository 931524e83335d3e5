use std::{
  env,
  io::{self, Write},
  process::ExitCode,
};

use hash::{Config, config::LOG_ENV, logger};

fn main() -> ExitCode {
  let config = match Config::from_args(env::args_os().skip(1)) {
    Ok(config) => config,
    Err(err) => {
      let _ = hash::report(&err, io::stderr().lock());
      return ExitCode::FAILURE;
    }
  };

  let log_value = env::var_os(LOG_ENV);
  let (config, bad_level) = config.with_log_env(log_value.as_deref());
  logger::init(config.log_level);
  if let Some(value) = bad_level {
    log::warn!("ignoring unrecognised {LOG_ENV}={}", value.to_string_lossy());
  }

  match hash::run(&config, io::stdin().lock(), io::stdout().lock()) {
    Ok(_) => ExitCode::SUCCESS,
    Err(err) => {
      let _ = hash::report(&err, io::stderr().lock());
      let _ = io::stderr().flush();
      ExitCode::FAILURE
    }
  }
}
