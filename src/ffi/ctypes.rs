//! `#[repr(C)]` structs shared with the caller's header.

use std::ffi::{c_char, c_int, CString};

use crate::border::Border;

use super::strings;

/// Resolved color channels, each scaled to the 16-bit range.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CRgba {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl From<(u32, u32, u32, u32)> for CRgba {
    fn from((r, g, b, a): (u32, u32, u32, u32)) -> Self {
        Self { r, g, b, a }
    }
}

/// Block measurement result.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CSize {
    pub width: c_int,
    pub height: c_int,
}

/// Border glyph set by value.
///
/// All thirteen glyph fields are caller-owned allocations released
/// together through `FreeBorder` — they are struct fields, not
/// individually tracked strings, so they bypass the ledger.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CBorder {
    pub top: *mut c_char,
    pub bottom: *mut c_char,
    pub left: *mut c_char,
    pub right: *mut c_char,
    pub top_left: *mut c_char,
    pub top_right: *mut c_char,
    pub bottom_left: *mut c_char,
    pub bottom_right: *mut c_char,
    pub middle_left: *mut c_char,
    pub middle_right: *mut c_char,
    pub middle: *mut c_char,
    pub middle_top: *mut c_char,
    pub middle_bottom: *mut c_char,
}

impl CBorder {
    /// Allocate a caller-owned copy of a glyph set.
    pub fn from_border(border: &Border) -> Self {
        Self {
            top: strings::to_foreign(border.top.clone()),
            bottom: strings::to_foreign(border.bottom.clone()),
            left: strings::to_foreign(border.left.clone()),
            right: strings::to_foreign(border.right.clone()),
            top_left: strings::to_foreign(border.top_left.clone()),
            top_right: strings::to_foreign(border.top_right.clone()),
            bottom_left: strings::to_foreign(border.bottom_left.clone()),
            bottom_right: strings::to_foreign(border.bottom_right.clone()),
            middle_left: strings::to_foreign(border.middle_left.clone()),
            middle_right: strings::to_foreign(border.middle_right.clone()),
            middle: strings::to_foreign(border.middle.clone()),
            middle_top: strings::to_foreign(border.middle_top.clone()),
            middle_bottom: strings::to_foreign(border.middle_bottom.clone()),
        }
    }

    /// Read a caller-provided glyph set. Null fields become empty
    /// glyphs (disabled edges); caller memory is never touched.
    pub fn to_border(&self) -> Border {
        Border {
            top: strings::from_foreign(self.top),
            bottom: strings::from_foreign(self.bottom),
            left: strings::from_foreign(self.left),
            right: strings::from_foreign(self.right),
            top_left: strings::from_foreign(self.top_left),
            top_right: strings::from_foreign(self.top_right),
            bottom_left: strings::from_foreign(self.bottom_left),
            bottom_right: strings::from_foreign(self.bottom_right),
            middle_left: strings::from_foreign(self.middle_left),
            middle_right: strings::from_foreign(self.middle_right),
            middle: strings::from_foreign(self.middle),
            middle_top: strings::from_foreign(self.middle_top),
            middle_bottom: strings::from_foreign(self.middle_bottom),
        }
    }

    fn fields(&self) -> [*mut c_char; 13] {
        [
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.middle_left,
            self.middle_right,
            self.middle,
            self.middle_top,
            self.middle_bottom,
        ]
    }
}

/// Release a border previously returned across the boundary.
#[unsafe(no_mangle)]
pub extern "C" fn FreeBorder(border: CBorder) {
    for ptr in border.fields() {
        if !ptr.is_null() {
            drop(unsafe { CString::from_raw(ptr) });
        }
    }
}
