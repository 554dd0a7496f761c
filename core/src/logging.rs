use crate::state::GeneratorState;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Each level includes the ones before it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum LogLevel {
  Quiet = 0,
  Verbose = 1,
  Debug = 2,
}

static LOG_LEVEL: AtomicUsize = AtomicUsize::new(LogLevel::Quiet as usize);

pub fn set_log_level(level: LogLevel) {
  LOG_LEVEL.store(level as usize, Ordering::Relaxed);
}

pub fn log_level() -> LogLevel {
  match LOG_LEVEL.load(Ordering::Relaxed) {
    0 => LogLevel::Quiet,
    1 => LogLevel::Verbose,
    _ => LogLevel::Debug,
  }
}

fn wants(current: LogLevel, level: LogLevel) -> bool {
  current != LogLevel::Quiet && level <= current
}

pub fn _log<F>(level: LogLevel, get_s: F)
where
  F: FnOnce() -> String,
{
  if wants(log_level(), level) {
    eprintln!("{}", get_s());
  }
}

/// Writes the registers to stderr at debug level, one line per register.
pub fn log_state(title: &str, state: &GeneratorState) {
  if !wants(log_level(), LogLevel::Debug) {
    return;
  }
  eprintln!("{}:", title);
  for (slot, line) in state.dump().iter().enumerate() {
    eprintln!("  r[{}] {}", slot, line);
  }
}

#[macro_export]
macro_rules! verbose_log {
  ($($arg:tt)*) => ({
    $crate::logging::_log($crate::logging::LogLevel::Verbose, || format!($($arg)*));
  })
}

#[macro_export]
macro_rules! debug_log {
  ($($arg:tt)*) => ({
    $crate::logging::_log($crate::logging::LogLevel::Debug, || format!($($arg)*));
  })
}

#[cfg(test)]
mod tests {
  use crate::logging::*;

  #[test]
  fn levels_include_lower_ones() {
    assert!(wants(LogLevel::Debug, LogLevel::Verbose));
    assert!(wants(LogLevel::Debug, LogLevel::Debug));
    assert!(wants(LogLevel::Verbose, LogLevel::Verbose));
    assert!(!wants(LogLevel::Verbose, LogLevel::Debug));
    assert!(!wants(LogLevel::Quiet, LogLevel::Verbose));
  }

  #[test]
  fn quiet_by_default_and_lazy() {
    assert_eq!(log_level(), LogLevel::Quiet);
    let mut called = false;
    _log(LogLevel::Verbose, || {
      called = true;
      String::new()
    });
    assert!(!called);
  }
}
