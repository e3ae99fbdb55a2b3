//! Border attachment and retrieval for styles.

use crate::ffi::ctypes::CBorder;
use crate::ffi::handle::STYLES;

use super::mutate;

/// Attach a border glyph set.
#[unsafe(no_mangle)]
pub extern "C" fn StyleBorder(handle: u64, border: CBorder) -> u64 {
    let border = border.to_border();
    mutate(handle, |style| style.border(border))
}

/// Same glyph-set attachment; retained for callers that distinguish
/// style from sides.
#[unsafe(no_mangle)]
pub extern "C" fn StyleBorderStyle(handle: u64, border: CBorder) -> u64 {
    let border = border.to_border();
    mutate(handle, |style| style.border(border))
}

/// The style's border glyphs as a caller-freed struct. A missing
/// handle yields a border of empty glyphs.
#[unsafe(no_mangle)]
pub extern "C" fn StyleGetBorderStyle(handle: u64) -> CBorder {
    match STYLES.get(handle) {
        Some(style) => CBorder::from_border(style.get_border()),
        None => CBorder::from_border(&crate::border::Border::default()),
    }
}
