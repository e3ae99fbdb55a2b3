//! Renderer capabilities: color profile and background mode.
//!
//! A [`Renderer`] is a plain value; the process-wide singleton and its
//! lock live in the boundary layer. Detection reads the conventional
//! environment variables once and is only consulted when the caller
//! never installed an explicit renderer.

use std::env;

use crate::color::{Profile, RenderContext};

/// Color capabilities of an output target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub profile: Profile,
    pub dark_background: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            profile: Profile::Ascii,
            dark_background: false,
        }
    }
}

impl Renderer {
    pub fn new(profile: Profile, dark_background: bool) -> Self {
        Self { profile, dark_background }
    }

    /// Detect capabilities from the environment, assuming the output
    /// is a terminal. The caller decides tty-ness; a non-tty output
    /// should use [`Renderer::default`] (ascii) instead.
    pub fn detect() -> Self {
        Self {
            profile: detect_profile(),
            dark_background: false,
        }
    }

    /// Snapshot for color resolution and style rendering.
    pub fn context(&self) -> RenderContext {
        RenderContext {
            profile: self.profile,
            dark_background: self.dark_background,
        }
    }
}

/// Profile detection: `NO_COLOR` wins, then `COLORTERM`, then `TERM`.
fn detect_profile() -> Profile {
    if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return Profile::Ascii;
    }

    if let Ok(colorterm) = env::var("COLORTERM") {
        let ct = colorterm.to_ascii_lowercase();
        if ct == "truecolor" || ct == "24bit" {
            return Profile::TrueColor;
        }
    }

    match env::var("TERM") {
        Ok(term) if term == "dumb" => Profile::Ascii,
        Ok(term) if term.contains("256color") => Profile::Ansi256,
        Ok(_) => Profile::Ansi,
        Err(_) => Profile::Ascii,
    }
}
