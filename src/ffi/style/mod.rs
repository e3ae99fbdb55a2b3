//! Style lifecycle and the copy-on-write mutation discipline.
//!
//! Every mutator in this family takes a source handle and returns a
//! NEW handle: the source instance is never modified, so a caller can
//! fan a base style out into variants without defensive copying. A
//! missing source handle returns the 0 sentinel.

use std::ffi::c_char;

use crate::style::Style;

use super::handle::STYLES;
use super::memory::{report, tracked_cstring};

pub mod border;
pub mod color;
pub mod layout;
pub mod render;
pub mod text;

/// Copy-on-write core: fetch, transform, register under a fresh
/// handle. The registry logs the miss; the 0 sentinel carries it out.
pub(crate) fn mutate(handle: u64, f: impl FnOnce(Style) -> Style) -> u64 {
    match STYLES.get(handle) {
        Some(style) => STYLES.register(f(style)),
        None => 0,
    }
}

/// Register a fresh default style.
#[unsafe(no_mangle)]
pub extern "C" fn NewStyle() -> u64 {
    STYLES.register(Style::new())
}

/// Duplicate a style under a new handle.
#[unsafe(no_mangle)]
pub extern "C" fn CopyStyle(handle: u64) -> u64 {
    mutate(handle, |style| style)
}

/// Release a style handle. Unknown handles log a warning.
#[unsafe(no_mangle)]
pub extern "C" fn FreeStyle(handle: u64) {
    STYLES.remove(handle);
}

/// Registry diagnostics: live count and the id the next registration
/// will receive.
#[unsafe(no_mangle)]
pub extern "C" fn GetStyleStats() -> *mut c_char {
    let (live, last) = STYLES.stats();
    let stats = format!("Total styles: {live}, Next ID: {}", last + 1);
    tracked_cstring(stats, "style stats string")
}

/// End-of-run diagnostic sweep; same report as `GetMemoryLeaks`.
#[unsafe(no_mangle)]
pub extern "C" fn StyleCleanup() -> *mut c_char {
    tracked_cstring(report(), "cleanup report")
}
