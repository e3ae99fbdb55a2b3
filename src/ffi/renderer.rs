//! The ambient renderer: a process-wide singleton consulted by every
//! color- and placement-dependent operation.
//!
//! Two scopes share this file. The process scope is a lazily-detected
//! default that always exists and backs the plain profile getters and
//! setters. The instance scope is the explicitly installed
//! [`RendererState`]; color resolution requires it, and placement
//! operations validate it before running.

use std::ffi::{c_char, c_double, c_int};
use std::sync::{LazyLock, RwLock};

use crate::color::Profile;
use crate::layout::{place, place_horizontal, place_vertical, Position};
use crate::renderer::Renderer;

use super::error::BoundaryError;
use super::handle::STYLES;
use super::memory::tracked_cstring;
use super::{strings, validate};

/// Where installed renderer output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Stdout,
    #[cfg(unix)]
    Fd(c_int),
}

/// The installed renderer and its output target.
#[derive(Debug, Clone, Copy)]
pub struct RendererState {
    pub renderer: Renderer,
    pub output: Option<Output>,
}

static INSTALLED: RwLock<Option<RendererState>> = RwLock::new(None);

/// Process-scope default, detected once on first use.
static PROCESS: LazyLock<RwLock<Renderer>> = LazyLock::new(|| RwLock::new(detect_stdout()));

fn detect_stdout() -> Renderer {
    if stdout_is_tty() {
        Renderer::detect()
    } else {
        Renderer::default()
    }
}

#[cfg(unix)]
fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

#[cfg(not(unix))]
fn stdout_is_tty() -> bool {
    false
}

/// Replace the installed renderer. Reinstallation is supported (e.g.
/// switching output streams) and logged as informational.
pub(crate) fn install(renderer: Renderer, output: Output) {
    let mut installed = INSTALLED.write().unwrap_or_else(|e| e.into_inner());
    if installed.is_some() {
        log::info!("replacing existing renderer");
    }
    *installed = Some(RendererState {
        renderer,
        output: Some(output),
    });
    log::debug!("installed renderer with output {output:?}");
}

pub(crate) fn snapshot() -> Option<RendererState> {
    *INSTALLED.read().unwrap_or_else(|e| e.into_inner())
}

/// Precondition check for operations that need a working renderer.
///
/// Fails distinctly for "never installed" (a setup-ordering bug on
/// the caller's side) versus "installed but the output target is
/// gone" (torn down out from under the renderer).
pub(crate) fn validate_renderer(op: &'static str) -> Result<RendererState, BoundaryError> {
    let state = snapshot().ok_or(BoundaryError::RendererMissing { op })?;
    if state.output.is_none() {
        return Err(BoundaryError::OutputMissing { op });
    }
    Ok(state)
}

fn update_installed(op: &'static str, f: impl FnOnce(&mut RendererState)) {
    if let Err(e) = validate_renderer(op) {
        log::error!("{e}");
        return;
    }
    let mut installed = INSTALLED.write().unwrap_or_else(|e| e.into_inner());
    if let Some(state) = installed.as_mut() {
        f(state);
    }
}

/// Ambient context for style/list/tree rendering: the installed
/// renderer when present, the process default otherwise.
pub(crate) fn render_context() -> crate::color::RenderContext {
    match snapshot() {
        Some(state) => state.renderer.context(),
        None => PROCESS.read().unwrap_or_else(|e| e.into_inner()).context(),
    }
}

/// Ambient context for color resolution. Requires an installed
/// renderer — absent state is the resolver's hard failure path.
pub(crate) fn resolve_context() -> Option<crate::color::RenderContext> {
    snapshot().map(|state| state.renderer.context())
}

// =============================================================================
// Process scope
// =============================================================================

/// Active process-scope color profile name.
#[unsafe(no_mangle)]
pub extern "C" fn ColorProfile() -> *mut c_char {
    let profile = PROCESS.read().unwrap_or_else(|e| e.into_inner()).profile;
    tracked_cstring(profile.name().to_string(), "color profile string")
}

/// Process-scope dark-background flag as 0/1.
#[unsafe(no_mangle)]
pub extern "C" fn HasDarkBackground() -> c_int {
    let dark = PROCESS.read().unwrap_or_else(|e| e.into_inner()).dark_background;
    dark as c_int
}

/// Set the process-scope color profile. An unrecognized name is
/// logged and ignored.
#[unsafe(no_mangle)]
pub extern "C" fn SetColorProfile(profile: *const c_char) {
    let name = strings::from_foreign(profile);
    match Profile::from_name(&name) {
        Some(p) => {
            PROCESS.write().unwrap_or_else(|e| e.into_inner()).profile = p;
            log::debug!("set color profile to: {name}");
        }
        None => log::error!("SetColorProfile received invalid profile: {name}"),
    }
}

/// Set the process-scope dark-background flag.
#[unsafe(no_mangle)]
pub extern "C" fn SetHasDarkBackground(dark: c_int) {
    PROCESS.write().unwrap_or_else(|e| e.into_inner()).dark_background = dark != 0;
    log::debug!("set dark background to: {}", dark != 0);
}

// =============================================================================
// Instance scope
// =============================================================================

/// Install a renderer targeting stdout with detected capabilities.
#[unsafe(no_mangle)]
pub extern "C" fn DefaultRenderer() {
    install(detect_stdout(), Output::Stdout);
    log::debug!("initialized default renderer with stdout");
}

/// Install a renderer for a caller-supplied `FILE*`. Null is logged
/// and ignored.
#[cfg(unix)]
#[unsafe(no_mangle)]
pub extern "C" fn NewRenderer(file: *mut libc::FILE) {
    let Some(fd) = file_fd(file, "NewRenderer") else {
        return;
    };
    let renderer = if unsafe { libc::isatty(fd) } == 1 {
        Renderer::detect()
    } else {
        Renderer::default()
    };
    install(renderer, Output::Fd(fd));
    log::debug!("created new renderer with custom output");
}

/// Installed renderer's profile name; "ascii" when validation fails.
#[unsafe(no_mangle)]
pub extern "C" fn RendererColorProfile() -> *mut c_char {
    match validate_renderer("color-profile") {
        Ok(state) => {
            tracked_cstring(state.renderer.profile.name().to_string(), "color profile string")
        }
        Err(e) => {
            log::error!("RendererColorProfile error: {e}");
            tracked_cstring("ascii".to_string(), "color profile fallback")
        }
    }
}

/// Installed renderer's dark-background flag; 0 when validation fails.
#[unsafe(no_mangle)]
pub extern "C" fn RendererHasDarkBackground() -> c_int {
    match validate_renderer("dark-background") {
        Ok(state) => state.renderer.dark_background as c_int,
        Err(e) => {
            log::error!("RendererHasDarkBackground error: {e}");
            0
        }
    }
}

/// New style handle bound to the ambient renderer, installing the
/// default renderer first when none exists.
#[unsafe(no_mangle)]
pub extern "C" fn RendererNewStyle() -> u64 {
    if snapshot().is_none() {
        log::warn!("no renderer available, using default");
        install(detect_stdout(), Output::Stdout);
    }
    STYLES.register(crate::style::Style::new())
}

/// Place `text` in a whitespace box, relative to the installed
/// renderer. State failures echo the input; dimension failures return
/// the empty string; position failures echo the input.
#[unsafe(no_mangle)]
pub extern "C" fn RendererPlace(
    width: c_int,
    height: c_int,
    h_pos: c_double,
    v_pos: c_double,
    text: *const c_char,
) -> *mut c_char {
    let input = strings::from_foreign(text);
    if let Err(e) = validate_renderer("place") {
        log::error!("RendererPlace error: {e}");
        return tracked_cstring(input, "placed string fallback");
    }
    for (value, name) in [(width, "place width"), (height, "place height")] {
        if let Err(e) = validate::dimension(value, "place", name) {
            log::error!("RendererPlace validation error: {e}");
            return tracked_cstring(String::new(), "placed string fallback");
        }
    }
    for (value, name) in [(h_pos, "horizontal"), (v_pos, "vertical")] {
        if let Err(e) = validate::position(value, "place", name) {
            log::error!("RendererPlace position error: {e}");
            return tracked_cstring(input, "placed string fallback");
        }
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

/// Horizontal-only placement; same fallback rules as `RendererPlace`.
#[unsafe(no_mangle)]
pub extern "C" fn RendererPlaceHorizontal(
    width: c_int,
    pos: c_double,
    text: *const c_char,
) -> *mut c_char {
    let input = strings::from_foreign(text);
    if let Err(e) = validate_renderer("place-horizontal") {
        log::error!("RendererPlaceHorizontal error: {e}");
        return tracked_cstring(input, "horizontally placed string fallback");
    }
    if let Err(e) = validate::dimension(width, "place-horizontal", "width") {
        log::error!("RendererPlaceHorizontal width error: {e}");
        return tracked_cstring(input, "horizontally placed string fallback");
    }
    if let Err(e) = validate::position(pos, "place-horizontal", "horizontal") {
        log::error!("RendererPlaceHorizontal position error: {e}");
        return tracked_cstring(input, "horizontally placed string fallback");
    }

    let placed = place_horizontal(width as usize, Position(pos), &input);
    tracked_cstring(placed, "horizontally placed string")
}

/// Vertical-only placement; same fallback rules as `RendererPlace`.
#[unsafe(no_mangle)]
pub extern "C" fn RendererPlaceVertical(
    height: c_int,
    pos: c_double,
    text: *const c_char,
) -> *mut c_char {
    let input = strings::from_foreign(text);
    if let Err(e) = validate_renderer("place-vertical") {
        log::error!("RendererPlaceVertical error: {e}");
        return tracked_cstring(input, "vertically placed string fallback");
    }
    if let Err(e) = validate::dimension(height, "place-vertical", "height") {
        log::error!("RendererPlaceVertical height error: {e}");
        return tracked_cstring(input, "vertically placed string fallback");
    }
    if let Err(e) = validate::position(pos, "place-vertical", "vertical") {
        log::error!("RendererPlaceVertical position error: {e}");
        return tracked_cstring(input, "vertically placed string fallback");
    }

    let placed = place_vertical(height as usize, Position(pos), &input);
    tracked_cstring(placed, "vertically placed string")
}

/// Set the installed renderer's color profile. Requires a working
/// renderer; an invalid name is logged and ignored.
#[unsafe(no_mangle)]
pub extern "C" fn RendererSetColorProfile(profile: *const c_char) {
    let name = strings::from_foreign(profile);
    let Some(p) = Profile::from_name(&name) else {
        log::error!("invalid color profile specified: {name}");
        return;
    };
    update_installed("set-color-profile", |state| {
        state.renderer.profile = p;
        log::debug!("set renderer color profile to: {name}");
    });
}

/// Set the installed renderer's dark-background flag.
#[unsafe(no_mangle)]
pub extern "C" fn RendererSetHasDarkBackground(dark: c_int) {
    update_installed("set-dark-background", |state| {
        state.renderer.dark_background = dark != 0;
        log::debug!("set renderer dark background to: {}", dark != 0);
    });
}

/// Redirect the installed renderer to a new `FILE*`.
#[cfg(unix)]
#[unsafe(no_mangle)]
pub extern "C" fn RendererSetOutput(file: *mut libc::FILE) {
    if validate_renderer("set-output").is_err() {
        log::error!("RendererSetOutput: no renderer installed");
        return;
    }
    let Some(fd) = file_fd(file, "RendererSetOutput") else {
        return;
    };
    update_installed("set-output", |state| {
        state.output = Some(Output::Fd(fd));
        log::debug!("set new renderer output");
    });
}

#[cfg(unix)]
fn file_fd(file: *mut libc::FILE, op: &str) -> Option<c_int> {
    if file.is_null() {
        log::error!("{op} received null file pointer");
        return None;
    }
    let fd = unsafe { libc::fileno(file) };
    if fd < 0 {
        log::error!("{op} could not resolve file descriptor");
        return None;
    }
    Some(fd)
}
