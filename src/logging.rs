#![cfg(feature = "std")]

//! Minimal `log` backend for the binaries.
//!
//! The interactive front end owns stdout for the board, so records go to
//! stderr and can be redirected separately (`2>game.log`).

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the level name (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "TWENTY48_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw setting; unset or unparsable values fall back to `info`.
fn level_from(setting: Option<&str>) -> LevelFilter {
    setting
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by [`LOG_ENV`]. Calling it
/// again is harmless: the first logger stays installed.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
