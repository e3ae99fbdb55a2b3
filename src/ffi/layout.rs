//! Measurement, joining, placement, and rune styling across the
//! boundary. These operate on caller strings directly; no handles are
//! involved except for `StyleRunes`, which takes two style handles.

use std::ffi::{c_char, c_double, c_float, c_int};

use crate::layout::{
    join_horizontal, join_vertical, place, place_horizontal, place_vertical, Position,
};
use crate::style::style_runes;
use crate::text::{string_height, string_size, string_width};

use super::handle::STYLES;
use super::memory::tracked_cstring;
use super::renderer::render_context;
use super::{strings, validate};

/// Widest display row of a possibly multi-line string, in cells.
/// Escape sequences are excluded from the measurement.
#[unsafe(no_mangle)]
pub extern "C" fn Width(text: *const c_char) -> c_int {
    string_width(&strings::from_foreign(text)) as c_int
}

/// Number of display rows.
#[unsafe(no_mangle)]
pub extern "C" fn Height(text: *const c_char) -> c_int {
    string_height(&strings::from_foreign(text)) as c_int
}

/// Width and height in one call.
#[unsafe(no_mangle)]
pub extern "C" fn Size(text: *const c_char) -> super::ctypes::CSize {
    let (width, height) = string_size(&strings::from_foreign(text));
    super::ctypes::CSize {
        width: width as c_int,
        height: height as c_int,
    }
}

/// Join two blocks side by side, aligning the shorter one at `pos`.
/// An out-of-range position yields the empty string.
#[unsafe(no_mangle)]
pub extern "C" fn JoinHorizontal(
    pos: c_double,
    left: *const c_char,
    right: *const c_char,
) -> *mut c_char {
    if let Err(e) = validate::position(pos, "join-horizontal", "position") {
        log::error!("{e}");
        return tracked_cstring(String::new(), "joined string fallback");
    }
    let joined = join_horizontal(
        Position(pos),
        &strings::from_foreign(left),
        &strings::from_foreign(right),
    );
    tracked_cstring(joined, "joined string")
}

/// Stack two blocks, aligning the narrower one at `pos`.
#[unsafe(no_mangle)]
pub extern "C" fn JoinVertical(
    pos: c_double,
    top: *const c_char,
    bottom: *const c_char,
) -> *mut c_char {
    if let Err(e) = validate::position(pos, "join-vertical", "position") {
        log::error!("{e}");
        return tracked_cstring(String::new(), "joined string fallback");
    }
    let joined = join_vertical(
        Position(pos),
        &strings::from_foreign(top),
        &strings::from_foreign(bottom),
    );
    tracked_cstring(joined, "joined string")
}

/// Place `text` in a whitespace box of `width` x `height`. A bad
/// dimension yields the empty string; a bad position echoes the
/// input.
#[unsafe(no_mangle)]
pub extern "C" fn Place(
    width: c_int,
    height: c_int,
    h_pos: c_double,
    v_pos: c_double,
    text: *const c_char,
) -> *mut c_char {
    let dims = validate::dimension(width, "place", "width")
        .and_then(|_| validate::dimension(height, "place", "height"));
    if let Err(e) = dims {
        log::error!("{e}");
        return tracked_cstring(String::new(), "placed string fallback");
    }
    let input = strings::from_foreign(text);
    let positions = validate::position(h_pos, "place", "horizontal")
        .and_then(|_| validate::position(v_pos, "place", "vertical"));
    if let Err(e) = positions {
        log::error!("{e}");
        return tracked_cstring(input, "placed string fallback");
    }
    let placed = place(
        width as usize,
        height as usize,
        Position(h_pos),
        Position(v_pos),
        &input,
    );
    tracked_cstring(placed, "placed string")
}

#[unsafe(no_mangle)]
pub extern "C" fn PlaceHorizontal(width: c_int, pos: c_double, text: *const c_char) -> *mut c_char {
    if let Err(e) = validate::dimension(width, "place-horizontal", "width") {
        log::error!("{e}");
        return tracked_cstring(String::new(), "placed string fallback");
    }
    let input = strings::from_foreign(text);
    if let Err(e) = validate::position(pos, "place-horizontal", "position") {
        log::error!("{e}");
        return tracked_cstring(input, "placed string fallback");
    }
    let placed = place_horizontal(width as usize, Position(pos), &input);
    tracked_cstring(placed, "placed string")
}

#[unsafe(no_mangle)]
pub extern "C" fn PlaceVertical(height: c_int, pos: c_double, text: *const c_char) -> *mut c_char {
    if let Err(e) = validate::dimension(height, "place-vertical", "height") {
        log::error!("{e}");
        return tracked_cstring(String::new(), "placed string fallback");
    }
    let input = strings::from_foreign(text);
    if let Err(e) = validate::position(pos, "place-vertical", "position") {
        log::error!("{e}");
        return tracked_cstring(input, "placed string fallback");
    }
    let placed = place_vertical(height as usize, Position(pos), &input);
    tracked_cstring(placed, "placed string")
}

/// Style the runes at `indices` with `matched`, the rest with
/// `unmatched`. Indices are rune offsets, not byte offsets. A null
/// index array or non-positive count yields the empty string.
#[unsafe(no_mangle)]
pub extern "C" fn StyleRunes(
    text: *const c_char,
    indices: *const c_int,
    count: c_int,
    matched: u64,
    unmatched: u64,
) -> *mut c_char {
    if indices.is_null() || count <= 0 {
        log::error!("StyleRunes received invalid index array (count {count})");
        return tracked_cstring(String::new(), "styled runes fallback");
    }
    let (Some(matched_style), Some(unmatched_style)) =
        (STYLES.get(matched), STYLES.get(unmatched))
    else {
        return strings::to_foreign(String::new());
    };

    let text = strings::from_foreign(text);
    let raw = unsafe { std::slice::from_raw_parts(indices, count as usize) };
    let indices: Vec<usize> = raw.iter().filter(|&&i| i >= 0).map(|&i| i as usize).collect();

    let styled = style_runes(
        render_context(),
        &text,
        &indices,
        &matched_style,
        &unmatched_style,
    );
    tracked_cstring(styled, "styled runes string")
}

// Position constants cross the boundary as f32 to match the foreign
// declaration. They pass the same validation as caller positions;
// the nominal value is the fallback, making failure unobservable by
// construction.
macro_rules! position_entry {
    ($entry:ident, $konst:ident, $nominal:literal) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn $entry() -> c_float {
            let pos = Position::$konst;
            if pos.is_valid() {
                pos.0 as c_float
            } else {
                log::error!(concat!(stringify!($entry), ": constant out of range"));
                $nominal
            }
        }
    };
}

position_entry!(PositionTop, TOP, 0.0);
position_entry!(PositionBottom, BOTTOM, 1.0);
position_entry!(PositionCenter, CENTER, 0.5);
position_entry!(PositionLeft, LEFT, 0.0);
position_entry!(PositionRight, RIGHT, 1.0);
