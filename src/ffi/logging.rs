//! Boundary-controlled logging.
//!
//! The caller picks one ordered severity with `SetLogLevel`; it gates
//! both the `log` facade and the allocation ledger. The logger itself
//! is a minimal stderr writer installed on first use — boundary
//! callers have no Rust-side init hook to configure anything fancier.

use std::ffi::c_int;
use std::sync::Once;

use log::{Level, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[glaze] {} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;
static INIT: Once = Once::new();

/// Install the stderr logger once. The default maximum is Error,
/// matching the boundary default before any `SetLogLevel` call.
pub(crate) fn ensure_logger() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Error);
        }
    });
}

fn level_filter(level: c_int) -> LevelFilter {
    match level {
        i32::MIN..=-1 => LevelFilter::Off,
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        // Anything above the known range saturates at Debug.
        _ => LevelFilter::Debug,
    }
}

/// Set the boundary log level: error(0) < warn(1) < info(2) < debug(3).
///
/// Negative values silence logging entirely; values above 3 saturate
/// at debug. Debug also enables allocation-ledger tracking.
#[unsafe(no_mangle)]
pub extern "C" fn SetLogLevel(level: c_int) {
    ensure_logger();
    log::set_max_level(level_filter(level));
    log::debug!("log level set to {}", log::max_level());
}

/// True when the ledger should record allocations.
pub(crate) fn ledger_active() -> bool {
    log::max_level() >= Level::Debug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mapping() {
        assert_eq!(level_filter(-5), LevelFilter::Off);
        assert_eq!(level_filter(0), LevelFilter::Error);
        assert_eq!(level_filter(1), LevelFilter::Warn);
        assert_eq!(level_filter(2), LevelFilter::Info);
        assert_eq!(level_filter(3), LevelFilter::Debug);
        assert_eq!(level_filter(99), LevelFilter::Debug);
    }
}
