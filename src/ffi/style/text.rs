//! Text attribute mutators and the attribute introspection report.

use std::ffi::{c_char, c_int};

use crate::ffi::handle::STYLES;
use crate::ffi::memory::tracked_cstring;
use crate::ffi::strings;

use super::mutate;

macro_rules! attr_entry {
    ($entry:ident, $builder:ident) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn $entry(handle: u64, enable: c_int) -> u64 {
            mutate(handle, |style| style.$builder(enable != 0))
        }
    };
}

attr_entry!(StyleBold, bold);
attr_entry!(StyleItalic, italic);
attr_entry!(StyleUnderline, underline);
attr_entry!(StyleStrikethrough, strikethrough);
attr_entry!(StyleReverse, reverse);
attr_entry!(StyleBlink, blink);
attr_entry!(StyleFaint, faint);

/// Attach intrinsic content rendered when `StyleString` is called.
#[unsafe(no_mangle)]
pub extern "C" fn StyleSetString(handle: u64, value: *const c_char) -> u64 {
    let value = strings::from_foreign(value);
    mutate(handle, |style| style.set_string(value))
}

/// The style's intrinsic content, unstyled. Empty string for a
/// missing handle (untracked, like every missing-handle fallback) or
/// a style with no content.
#[unsafe(no_mangle)]
pub extern "C" fn StyleGetValue(handle: u64) -> *mut c_char {
    let Some(style) = STYLES.get(handle) else {
        return strings::to_foreign(String::new());
    };
    tracked_cstring(style.value().to_string(), "style value string")
}

/// Multi-line attribute report for debugging bindings.
#[unsafe(no_mangle)]
pub extern "C" fn GetTextStyleInfo(handle: u64) -> *mut c_char {
    let Some(style) = STYLES.get(handle) else {
        return strings::to_foreign("Error: Style not found".to_string());
    };
    let info = format!(
        "Style ID: {handle}\nBold: {}\nItalic: {}\nUnderline: {}\nStrikethrough: {}\n",
        style.get_bold(),
        style.get_italic(),
        style.get_underline(),
        style.get_strikethrough(),
    );
    tracked_cstring(info, "style info string")
}
