//! Color-bearing style mutators.
//!
//! Literals are validated at the boundary before a descriptor is
//! built; a rejected literal returns the 0 sentinel without touching
//! the registry.

use std::ffi::{c_char, c_int};

use crate::color::Color;
use crate::ffi::{strings, validate};

use super::mutate;

fn color_mutate(
    op: &'static str,
    handle: u64,
    literal: *const c_char,
    apply: impl FnOnce(crate::style::Style, Color) -> crate::style::Style,
) -> u64 {
    let literal = strings::from_foreign(literal);
    if let Err(e) = validate::color(&literal, op) {
        log::error!("{e}");
        return 0;
    }
    mutate(handle, |style| apply(style, Color::Plain(literal)))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleForeground(handle: u64, color: *const c_char) -> u64 {
    color_mutate("foreground", handle, color, |s, c| s.foreground(c))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleBackground(handle: u64, color: *const c_char) -> u64 {
    color_mutate("background", handle, color, |s, c| s.background(c))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleMarginBackground(handle: u64, color: *const c_char) -> u64 {
    color_mutate("margin-background", handle, color, |s, c| s.margin_background(c))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleBorderForeground(handle: u64, color: *const c_char) -> u64 {
    color_mutate("border-foreground", handle, color, |s, c| s.border_foreground(c))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleBorderBackground(handle: u64, color: *const c_char) -> u64 {
    color_mutate("border-background", handle, color, |s, c| s.border_background(c))
}

/// Whether background color extends across padding whitespace.
#[unsafe(no_mangle)]
pub extern "C" fn StyleColorWhitespace(handle: u64, enable: c_int) -> u64 {
    mutate(handle, |style| style.color_whitespace(enable != 0))
}
