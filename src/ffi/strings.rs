//! String conversion across the boundary.
//!
//! Ownership convention: every string returned to the caller is a
//! fresh allocation the caller frees with `FreeString`; every string
//! the caller passes in stays caller-owned and is only read here.

use std::ffi::{c_char, CStr, CString};

/// Convert a native string to a caller-owned C string.
///
/// The contract "always returns a valid, freeable pointer" is total:
/// a value that cannot become a C string (interior NUL) degrades to
/// the empty string instead of a null pointer.
pub fn to_foreign(value: String) -> *mut c_char {
    match CString::new(value) {
        Ok(cs) => cs.into_raw(),
        Err(e) => {
            log::error!("string with interior NUL crossing boundary: {e}");
            CString::default().into_raw()
        }
    }
}

/// Read a caller-owned C string. A null pointer reads as the empty
/// string.
pub fn from_foreign(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(s: &str) -> String {
        let ptr = to_foreign(s.to_string());
        let back = from_foreign(ptr);
        drop(unsafe { CString::from_raw(ptr) });
        back
    }

    #[test]
    fn round_trips_text() {
        assert_eq!(round_trip("hello"), "hello");
        assert_eq!(round_trip(""), "");
        assert_eq!(round_trip("你好 \x1b[31mred\x1b[0m"), "你好 \x1b[31mred\x1b[0m");
    }

    #[test]
    fn null_input_is_empty() {
        assert_eq!(from_foreign(std::ptr::null()), "");
    }

    #[test]
    fn interior_nul_degrades_to_empty() {
        let ptr = to_foreign("a\0b".to_string());
        assert!(!ptr.is_null());
        assert_eq!(from_foreign(ptr), "");
        drop(unsafe { CString::from_raw(ptr) });
    }
}
