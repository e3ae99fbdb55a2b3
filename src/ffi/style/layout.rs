//! Dimension, alignment, padding, and margin mutators.

use std::ffi::{c_double, c_int};

use crate::ffi::validate;

use super::mutate;

fn dimension_mutate(
    op: &'static str,
    handle: u64,
    value: c_int,
    apply: impl FnOnce(crate::style::Style, i32) -> crate::style::Style,
) -> u64 {
    if let Err(e) = validate::dimension(value, op, "value") {
        log::error!("{e}");
        return 0;
    }
    mutate(handle, |style| apply(style, value))
}

fn position_mutate(
    op: &'static str,
    handle: u64,
    pos: c_double,
    apply: impl FnOnce(crate::style::Style, f64) -> crate::style::Style,
) -> u64 {
    if let Err(e) = validate::position(pos, op, "position") {
        log::error!("{e}");
        return 0;
    }
    mutate(handle, |style| apply(style, pos))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleWidth(handle: u64, width: c_int) -> u64 {
    dimension_mutate("width", handle, width, |s, v| s.width(v))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleHeight(handle: u64, height: c_int) -> u64 {
    dimension_mutate("height", handle, height, |s, v| s.height(v))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleMaxWidth(handle: u64, width: c_int) -> u64 {
    dimension_mutate("max-width", handle, width, |s, v| s.max_width(v))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleMaxHeight(handle: u64, height: c_int) -> u64 {
    dimension_mutate("max-height", handle, height, |s, v| s.max_height(v))
}

/// Single-line mode: newlines stripped, no wrapping or boxing.
#[unsafe(no_mangle)]
pub extern "C" fn StyleInline(handle: u64, enable: c_int) -> u64 {
    mutate(handle, |style| style.inline(enable != 0))
}

/// Tab expansion width. -1 keeps tabs as-is, 0 strips them, n
/// replaces each with n spaces.
#[unsafe(no_mangle)]
pub extern "C" fn StyleTabWidth(handle: u64, width: c_int) -> u64 {
    if width < -1 {
        log::error!("tab-width: value must be >= -1, got {width}");
        return 0;
    }
    mutate(handle, |style| style.tab_width(width))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleAlignHorizontal(handle: u64, pos: c_double) -> u64 {
    position_mutate("align-horizontal", handle, pos, |s, p| s.align_horizontal(p))
}

#[unsafe(no_mangle)]
pub extern "C" fn StyleAlignVertical(handle: u64, pos: c_double) -> u64 {
    position_mutate("align-vertical", handle, pos, |s, p| s.align_vertical(p))
}

fn box_values_valid(op: &'static str, values: [c_int; 4]) -> bool {
    for (value, name) in values.iter().zip(["top", "right", "bottom", "left"]) {
        if let Err(e) = validate::dimension(*value, op, name) {
            log::error!("{e}");
            return false;
        }
    }
    true
}

/// Padding on all four sides, CSS clockwise order.
#[unsafe(no_mangle)]
pub extern "C" fn StylePadding(handle: u64, top: c_int, right: c_int, bottom: c_int, left: c_int) -> u64 {
    if !box_values_valid("padding", [top, right, bottom, left]) {
        return 0;
    }
    mutate(handle, |style| style.padding(top, right, bottom, left))
}

/// Margin on all four sides, CSS clockwise order.
#[unsafe(no_mangle)]
pub extern "C" fn StyleMargin(handle: u64, top: c_int, right: c_int, bottom: c_int, left: c_int) -> u64 {
    if !box_values_valid("margin", [top, right, bottom, left]) {
        return 0;
    }
    mutate(handle, |style| style.margin(top, right, bottom, left))
}

macro_rules! side_entry {
    ($entry:ident, $op:literal, $builder:ident) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn $entry(handle: u64, value: c_int) -> u64 {
            dimension_mutate($op, handle, value, |s, v| s.$builder(v))
        }
    };
}

side_entry!(StylePaddingTop, "padding-top", padding_top);
side_entry!(StylePaddingRight, "padding-right", padding_right);
side_entry!(StylePaddingBottom, "padding-bottom", padding_bottom);
side_entry!(StylePaddingLeft, "padding-left", padding_left);
side_entry!(StyleMarginTop, "margin-top", margin_top);
side_entry!(StyleMarginRight, "margin-right", margin_right);
side_entry!(StyleMarginBottom, "margin-bottom", margin_bottom);
side_entry!(StyleMarginLeft, "margin-left", margin_left);
