//! The allocation ledger: debug-gated leak bookkeeping for strings
//! that cross the boundary.
//!
//! Tracking only records at debug verbosity so normal operation does
//! not grow an unbounded map, but the map itself is always behind its
//! own lock — the verbosity gate is about volume, not thread safety.
//! The report is a diagnostic snapshot, not a correctness guarantee:
//! an allocation handed out while tracking was off never appears.

use std::collections::HashMap;
use std::ffi::{c_char, CString};
use std::sync::{LazyLock, Mutex};

use super::logging::{ensure_logger, ledger_active};
use super::strings;

static LEDGER: LazyLock<Mutex<HashMap<usize, String>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Record a boundary allocation, if tracking is active.
pub fn track(ptr: *const c_char, description: &str) {
    if ptr.is_null() || !ledger_active() {
        return;
    }
    let mut ledger = LEDGER.lock().unwrap_or_else(|e| e.into_inner());
    ledger.insert(ptr as usize, description.to_string());
    log::debug!("allocated: {:p} ({description})", ptr);
}

/// Drop the record for a freed allocation.
///
/// A missing address at debug verbosity is logged as a warning — it
/// signals a double free, or a free of a pointer this system never
/// handed out. At lower verbosity it is expected (tracking was off
/// when the string was allocated) and stays silent.
pub fn untrack(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    let mut ledger = LEDGER.lock().unwrap_or_else(|e| e.into_inner());
    match ledger.remove(&(ptr as usize)) {
        Some(description) => log::debug!("freed: {:p} ({description})", ptr),
        None if ledger_active() => {
            log::warn!("attempting to free untracked pointer: {:p}", ptr)
        }
        None => {}
    }
}

/// Human-readable snapshot of every still-tracked allocation.
pub fn report() -> String {
    let ledger = LEDGER.lock().unwrap_or_else(|e| e.into_inner());
    if ledger.is_empty() {
        return "No memory leaks detected".to_string();
    }
    let mut entries: Vec<(usize, &String)> = ledger.iter().map(|(a, d)| (*a, d)).collect();
    entries.sort_unstable_by_key(|(addr, _)| *addr);
    entries
        .iter()
        .map(|(addr, description)| format!("Leak: 0x{addr:x} ({description})"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Allocate a boundary string and track it under `description`.
///
/// The result is always a valid, freeable pointer; an unconvertible
/// value degrades to the empty string.
pub fn tracked_cstring(value: String, description: &str) -> *mut c_char {
    ensure_logger();
    let ptr = strings::to_foreign(value);
    track(ptr, description);
    ptr
}

/// Report outstanding boundary allocations.
///
/// Empty ledger reads "No memory leaks detected". The returned string
/// is itself a tracked allocation freed by `FreeString`.
#[unsafe(no_mangle)]
pub extern "C" fn GetMemoryLeaks() -> *mut c_char {
    tracked_cstring(report(), "memory leak report")
}

/// Free a string previously returned across the boundary.
#[unsafe(no_mangle)]
pub extern "C" fn FreeString(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    untrack(ptr);
    drop(unsafe { CString::from_raw(ptr) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    // Ledger tests flip the global verbosity; keep them serialized.
    static GATE: Mutex<()> = Mutex::new(());

    #[test]
    fn track_untrack_round_trip() {
        let _g = GATE.lock().unwrap_or_else(|e| e.into_inner());
        super::super::logging::ensure_logger();
        log::set_max_level(LevelFilter::Debug);

        let s = CString::new("leak me").unwrap();
        let ptr = s.as_ptr();
        track(ptr, "round trip test");
        assert!(report().contains("round trip test"));

        untrack(ptr);
        assert_eq!(report(), "No memory leaks detected");

        // Second untrack warns but must not corrupt anything
        untrack(ptr);
        assert_eq!(report(), "No memory leaks detected");

        log::set_max_level(LevelFilter::Error);
    }

    #[test]
    fn tracking_is_gated_by_verbosity() {
        let _g = GATE.lock().unwrap_or_else(|e| e.into_inner());
        super::super::logging::ensure_logger();
        log::set_max_level(LevelFilter::Error);

        let s = CString::new("quiet").unwrap();
        track(s.as_ptr(), "should not record");
        assert_eq!(report(), "No memory leaks detected");
    }

    #[test]
    fn null_pointers_are_ignored() {
        let _g = GATE.lock().unwrap_or_else(|e| e.into_inner());
        track(std::ptr::null(), "null");
        untrack(std::ptr::null());
        assert_eq!(report(), "No memory leaks detected");
    }
}
