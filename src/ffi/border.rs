//! Border catalog and measurement entry points.
//!
//! Borders cross the boundary by value as [`CBorder`] structs; the 13
//! glyph strings inside are caller-owned and released with
//! `FreeBorder`, not the ledgered `FreeString` path.

use std::ffi::{c_char, c_int};

use crate::border::Border;

use super::ctypes::CBorder;
use super::strings;

macro_rules! border_entry {
    ($entry:ident, $ctor:ident) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn $entry() -> CBorder {
            CBorder::from_border(&Border::$ctor())
        }
    };
}

border_entry!(NormalBorder, normal);
border_entry!(RoundedBorder, rounded);
border_entry!(ThickBorder, thick);
border_entry!(DoubleBorder, double);
border_entry!(BlockBorder, block);
border_entry!(InnerHalfBlockBorder, inner_half_block);
border_entry!(OuterHalfBlockBorder, outer_half_block);
border_entry!(HiddenBorder, hidden);

/// Assemble a border from caller-supplied glyphs. Null pointers read
/// as empty glyphs, which sizing treats as absent edges.
#[unsafe(no_mangle)]
pub extern "C" fn CreateCustomBorder(
    top: *const c_char,
    bottom: *const c_char,
    left: *const c_char,
    right: *const c_char,
    top_left: *const c_char,
    top_right: *const c_char,
    bottom_left: *const c_char,
    bottom_right: *const c_char,
    middle_left: *const c_char,
    middle_right: *const c_char,
    middle: *const c_char,
    middle_top: *const c_char,
    middle_bottom: *const c_char,
) -> CBorder {
    let border = Border {
        top: strings::from_foreign(top),
        bottom: strings::from_foreign(bottom),
        left: strings::from_foreign(left),
        right: strings::from_foreign(right),
        top_left: strings::from_foreign(top_left),
        top_right: strings::from_foreign(top_right),
        bottom_left: strings::from_foreign(bottom_left),
        bottom_right: strings::from_foreign(bottom_right),
        middle_left: strings::from_foreign(middle_left),
        middle_right: strings::from_foreign(middle_right),
        middle: strings::from_foreign(middle),
        middle_top: strings::from_foreign(middle_top),
        middle_bottom: strings::from_foreign(middle_bottom),
    };
    CBorder::from_border(&border)
}

/// Cell height of the top edge (0 when the edge is empty).
#[unsafe(no_mangle)]
pub extern "C" fn GetTopSize(border: CBorder) -> c_int {
    border.to_border().top_size() as c_int
}

/// Cell height of the bottom edge.
#[unsafe(no_mangle)]
pub extern "C" fn GetBottomSize(border: CBorder) -> c_int {
    border.to_border().bottom_size() as c_int
}

/// Cell width of the left edge.
#[unsafe(no_mangle)]
pub extern "C" fn GetLeftSize(border: CBorder) -> c_int {
    border.to_border().left_size() as c_int
}

/// Cell width of the right edge.
#[unsafe(no_mangle)]
pub extern "C" fn GetRightSize(border: CBorder) -> c_int {
    border.to_border().right_size() as c_int
}
