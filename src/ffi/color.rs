//! Color resolution across the boundary.
//!
//! Each entry point builds a descriptor from its raw arguments,
//! snapshots the installed renderer, and resolves through
//! [`crate::color::resolve_rgba`]. Every failure path — null argument,
//! missing renderer, unparseable literal, ascii quantization — funnels
//! into the single sentinel tuple `(0, 0, 0, 0xFFFF)` so callers have
//! exactly one miss case to test.

use std::ffi::{c_char, c_uint};

use crate::color::{resolve_rgba, Color, CompleteSpec, RGBA_FAILURE};

use super::ctypes::CRgba;
use super::renderer::resolve_context;
use super::strings;

fn resolve(op: &'static str, color: Color) -> CRgba {
    match resolve_context() {
        Some(ctx) => CRgba::from(resolve_rgba(ctx, &color)),
        None => {
            log::error!("{op}: no renderer installed");
            CRgba::from(RGBA_FAILURE)
        }
    }
}

/// Null pointers are a caller bug, not a parse failure; they short to
/// the sentinel before any descriptor is built.
fn require(op: &'static str, ptrs: &[*const c_char]) -> bool {
    if ptrs.iter().any(|p| p.is_null()) {
        log::error!("{op} received null color string");
        return false;
    }
    true
}

/// Resolve a single literal (hex or palette index) against the
/// installed renderer.
#[unsafe(no_mangle)]
pub extern "C" fn ColorRGBA(color: *const c_char) -> CRgba {
    if !require("ColorRGBA", &[color]) {
        return CRgba::from(RGBA_FAILURE);
    }
    resolve("ColorRGBA", Color::Plain(strings::from_foreign(color)))
}

/// Resolve an extended-palette index.
#[unsafe(no_mangle)]
pub extern "C" fn ANSIColorRGBA(index: c_uint) -> CRgba {
    resolve("ANSIColorRGBA", Color::AnsiIndex(index))
}

/// Resolve a light/dark literal pair by the renderer's background.
#[unsafe(no_mangle)]
pub extern "C" fn AdaptiveColorRGBA(light: *const c_char, dark: *const c_char) -> CRgba {
    if !require("AdaptiveColorRGBA", &[light, dark]) {
        return CRgba::from(RGBA_FAILURE);
    }
    resolve(
        "AdaptiveColorRGBA",
        Color::Adaptive {
            light: strings::from_foreign(light),
            dark: strings::from_foreign(dark),
        },
    )
}

/// Resolve a per-profile literal triple by the renderer's profile.
#[unsafe(no_mangle)]
pub extern "C" fn CompleteColorRGBA(
    true_color: *const c_char,
    ansi256: *const c_char,
    ansi: *const c_char,
) -> CRgba {
    if !require("CompleteColorRGBA", &[true_color, ansi256, ansi]) {
        return CRgba::from(RGBA_FAILURE);
    }
    resolve(
        "CompleteColorRGBA",
        Color::Complete(complete_spec(true_color, ansi256, ansi)),
    )
}

/// Resolve two per-profile triples, selected first by background and
/// then by profile.
#[unsafe(no_mangle)]
pub extern "C" fn CompleteAdaptiveColorRGBA(
    light_true_color: *const c_char,
    light_ansi256: *const c_char,
    light_ansi: *const c_char,
    dark_true_color: *const c_char,
    dark_ansi256: *const c_char,
    dark_ansi: *const c_char,
) -> CRgba {
    let all = [
        light_true_color,
        light_ansi256,
        light_ansi,
        dark_true_color,
        dark_ansi256,
        dark_ansi,
    ];
    if !require("CompleteAdaptiveColorRGBA", &all) {
        return CRgba::from(RGBA_FAILURE);
    }
    resolve(
        "CompleteAdaptiveColorRGBA",
        Color::CompleteAdaptive {
            light: complete_spec(light_true_color, light_ansi256, light_ansi),
            dark: complete_spec(dark_true_color, dark_ansi256, dark_ansi),
        },
    )
}

fn complete_spec(true_color: *const c_char, ansi256: *const c_char, ansi: *const c_char) -> CompleteSpec {
    CompleteSpec {
        true_color: strings::from_foreign(true_color),
        ansi256: strings::from_foreign(ansi256),
        ansi: strings::from_foreign(ansi),
    }
}
