//! Rendering and inheritance entry points.
//!
//! Rendering snapshots the ambient renderer (installed, or the
//! process default when none is installed) and runs the pure pipeline
//! against it. A missing handle renders to the empty string.

use std::ffi::{c_char, c_int};

use crate::ffi::handle::STYLES;
use crate::ffi::memory::tracked_cstring;
use crate::ffi::renderer::render_context;
use crate::ffi::strings;

/// Apply a style to caller text. The missing-handle fallback stays
/// out of the ledger: a lookup that found nothing allocated nothing
/// worth reporting.
#[unsafe(no_mangle)]
pub extern "C" fn StyleRender(handle: u64, text: *const c_char) -> *mut c_char {
    let Some(style) = STYLES.get(handle) else {
        return strings::to_foreign(String::new());
    };
    let rendered = style.render(render_context(), &strings::from_foreign(text));
    tracked_cstring(rendered, "rendered string")
}

/// Render the style's intrinsic content set via `StyleSetString`.
#[unsafe(no_mangle)]
pub extern "C" fn StyleString(handle: u64) -> *mut c_char {
    let Some(style) = STYLES.get(handle) else {
        return strings::to_foreign(String::new());
    };
    tracked_cstring(style.render(render_context(), ""), "styled string")
}

/// New style combining `base` with the inheritable properties of
/// `from` that `base` has not explicitly set. Padding and margin
/// never transfer.
#[unsafe(no_mangle)]
pub extern "C" fn StyleInherit(base: u64, from: u64) -> u64 {
    let Some(base_style) = STYLES.get(base) else {
        return 0;
    };
    let Some(from_style) = STYLES.get(from) else {
        return 0;
    };
    STYLES.register(base_style.inherit(&from_style))
}

/// 1 when the style carries any border, color, margin, or padding.
#[unsafe(no_mangle)]
pub extern "C" fn StyleInherited(handle: u64) -> c_int {
    match STYLES.get(handle) {
        Some(style) => {
            (style.has_border() || style.has_color() || style.has_margin() || style.has_padding())
                as c_int
        }
        None => 0,
    }
}
