//! Handle lifecycle, diagnostics, and ledger behavior across the
//! exported surface.
//!
//! The registries and the ledger are process globals, so every test
//! here takes the gate and asserts deltas rather than absolute counts.

use std::ffi::{c_char, CStr, CString};
use std::sync::Mutex;

use glaze::ffi::list::RenderList;
use glaze::ffi::logging::SetLogLevel;
use glaze::ffi::memory::{FreeString, GetMemoryLeaks};
use glaze::ffi::style::render::StyleRender;
use glaze::ffi::table::RenderTable;
use glaze::ffi::tree::RenderTree;
use glaze::ffi::style::text::{GetTextStyleInfo, StyleBold, StyleGetValue, StyleSetString};
use glaze::ffi::style::{CopyStyle, FreeStyle, GetStyleStats, NewStyle, StyleCleanup};

static GATE: Mutex<()> = Mutex::new(());

fn cstr(s: &str) -> CString {
    CString::new(s).unwrap()
}

/// Read a boundary string and free it.
fn take(ptr: *mut c_char) -> String {
    assert!(!ptr.is_null(), "boundary strings are never null");
    let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    FreeString(ptr);
    s
}

#[test]
fn handles_are_monotonic_and_never_reused() {
    let _gate = GATE.lock().unwrap();

    let a = NewStyle();
    let b = NewStyle();
    let c = NewStyle();
    assert!(a < b && b < c);

    FreeStyle(b);
    let d = NewStyle();
    assert!(d > c, "freed ids must not be reissued");

    FreeStyle(a);
    FreeStyle(c);
    FreeStyle(d);
}

#[test]
fn zero_is_never_a_valid_handle() {
    let _gate = GATE.lock().unwrap();

    assert_eq!(StyleBold(0, 1), 0);
    assert_eq!(CopyStyle(0), 0);
    assert_eq!(take(StyleRender(0, cstr("x").as_ptr())), "");
    assert_eq!(take(GetTextStyleInfo(0)), "Error: Style not found");
}

#[test]
fn mutation_is_copy_on_write() {
    let _gate = GATE.lock().unwrap();

    let base = NewStyle();
    let bold = StyleBold(base, 1);
    assert_ne!(bold, base);

    let base_info = take(GetTextStyleInfo(base));
    let bold_info = take(GetTextStyleInfo(bold));
    assert!(base_info.contains("Bold: false"));
    assert!(bold_info.contains("Bold: true"));

    FreeStyle(base);
    FreeStyle(bold);
}

#[test]
fn freed_styles_stop_resolving() {
    let _gate = GATE.lock().unwrap();

    let s = StyleSetString(NewStyle(), cstr("hello").as_ptr());
    assert_eq!(take(StyleGetValue(s)), "hello");

    FreeStyle(s);
    assert_eq!(take(StyleGetValue(s)), "");
    assert_eq!(StyleBold(s, 1), 0);
}

#[test]
fn double_free_leaves_other_handles_intact() {
    let _gate = GATE.lock().unwrap();

    let keep = StyleSetString(NewStyle(), cstr("kept").as_ptr());
    let gone = NewStyle();

    FreeStyle(gone);
    FreeStyle(gone);

    assert_eq!(take(StyleGetValue(keep)), "kept");
    FreeStyle(keep);
}

#[test]
fn style_stats_report_live_count_and_next_id() {
    let _gate = GATE.lock().unwrap();

    let before = parse_stats(&take(GetStyleStats()));
    let s = NewStyle();
    let after = parse_stats(&take(GetStyleStats()));

    assert_eq!(after.0, before.0 + 1);
    assert_eq!(after.1, s + 1);

    FreeStyle(s);
    let freed = parse_stats(&take(GetStyleStats()));
    assert_eq!(freed.0, before.0);
    assert_eq!(freed.1, after.1, "removal must not rewind the counter");
}

fn parse_stats(stats: &str) -> (u64, u64) {
    let rest = stats.strip_prefix("Total styles: ").unwrap();
    let (live, next) = rest.split_once(", Next ID: ").unwrap();
    (live.parse().unwrap(), next.parse().unwrap())
}

#[test]
fn ledger_round_trip() {
    let _gate = GATE.lock().unwrap();
    SetLogLevel(3);

    let s = StyleSetString(NewStyle(), cstr("tracked").as_ptr());
    let value = StyleGetValue(s);

    let report = take(GetMemoryLeaks());
    assert!(report.contains("Leak:"));
    assert!(report.contains("style value string"));

    FreeString(value);
    let report = take(GetMemoryLeaks());
    assert_eq!(report, "No memory leaks detected");

    let cleanup = take(StyleCleanup());
    assert_eq!(cleanup, "No memory leaks detected");

    FreeStyle(s);
    SetLogLevel(0);
}

#[test]
fn missing_handle_fallbacks_stay_out_of_ledger() {
    let _gate = GATE.lock().unwrap();
    SetLogLevel(3);
    assert_eq!(take(GetMemoryLeaks()), "No memory leaks detected");

    // Hold the fallbacks across the leak check before releasing them.
    let fallbacks = [
        StyleRender(0, cstr("x").as_ptr()),
        StyleGetValue(0),
        GetTextStyleInfo(0),
        RenderList(0),
        RenderTable(0),
        RenderTree(0),
    ];
    assert_eq!(take(GetMemoryLeaks()), "No memory leaks detected");

    for ptr in fallbacks {
        FreeString(ptr);
    }
    SetLogLevel(0);
}

#[test]
fn free_string_tolerates_null() {
    let _gate = GATE.lock().unwrap();
    FreeString(std::ptr::null_mut());
}
