//! Color profiles, palettes, and the descriptor resolution algorithm.
//!
//! Everything here is pure: parsing a literal, quantizing it through a
//! profile, and resolving a descriptor against an ambient snapshot never
//! touch process state. The boundary layer owns the state and passes a
//! [`RenderContext`] in.

use std::fmt;

// =============================================================================
// Profile - terminal color capability tier
// =============================================================================

/// Terminal color capability tier.
///
/// Governs how abstract colors are quantized before they reach the
/// terminal: `Ascii` drops color entirely, `Ansi` reduces to the 16-color
/// palette, `Ansi256` to the extended palette, `TrueColor` passes RGB
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Ascii,
    Ansi,
    Ansi256,
    TrueColor,
}

impl Profile {
    /// Parse a profile name. Recognizes exactly the four wire names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ascii" => Some(Self::Ascii),
            "ansi" => Some(Self::Ansi),
            "ansi256" => Some(Self::Ansi256),
            "truecolor" => Some(Self::TrueColor),
            _ => None,
        }
    }

    /// The wire name for this profile.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Ansi => "ansi",
            Self::Ansi256 => "ansi256",
            Self::TrueColor => "truecolor",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// RenderContext - ambient snapshot for resolution
// =============================================================================

/// Snapshot of the ambient renderer state a resolution runs against.
///
/// Color resolution and style rendering are pure functions of
/// `(RenderContext, inputs)`; the boundary layer snapshots its singleton
/// into one of these before calling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub profile: Profile,
    pub dark_background: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            profile: Profile::Ascii,
            dark_background: false,
        }
    }
}

// =============================================================================
// Rgb - 8-bit channel triple
// =============================================================================

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`. Anything else is `None`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        match hex.len() {
            3 => {
                let r = hex_digit(hex.as_bytes()[0])?;
                let g = hex_digit(hex.as_bytes()[1])?;
                let b = hex_digit(hex.as_bytes()[2])?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                // Index bytes, not chars: a multi-byte literal must
                // parse as None, never split a char boundary.
                let d = hex.as_bytes();
                let r = hex_byte(d[0], d[1])?;
                let g = hex_byte(d[2], d[3])?;
                let b = hex_byte(d[4], d[5])?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Squared channel distance to another color.
    #[inline]
    fn distance_sq(self, other: Self) -> i32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        dr * dr + dg * dg + db * db
    }
}

#[inline]
fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_digit(hi)? * 16 + hex_digit(lo)?)
}

// =============================================================================
// Palettes
// =============================================================================

/// The 16 base palette colors, by index.
const ANSI_16: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x80, 0x00, 0x00),
    Rgb::new(0x00, 0x80, 0x00),
    Rgb::new(0x80, 0x80, 0x00),
    Rgb::new(0x00, 0x00, 0x80),
    Rgb::new(0x80, 0x00, 0x80),
    Rgb::new(0x00, 0x80, 0x80),
    Rgb::new(0xc0, 0xc0, 0xc0),
    Rgb::new(0x80, 0x80, 0x80),
    Rgb::new(0xff, 0x00, 0x00),
    Rgb::new(0x00, 0xff, 0x00),
    Rgb::new(0xff, 0xff, 0x00),
    Rgb::new(0x00, 0x00, 0xff),
    Rgb::new(0xff, 0x00, 0xff),
    Rgb::new(0x00, 0xff, 0xff),
    Rgb::new(0xff, 0xff, 0xff),
];

/// RGB value of an extended-palette index.
///
/// 0-15 are the base palette, 16-231 the 6x6x6 color cube, 232-255 the
/// grayscale ramp.
pub fn palette_256(index: u8) -> Rgb {
    match index {
        0..=15 => ANSI_16[index as usize],
        16..=231 => {
            let n = index - 16;
            let r = cube_channel(n / 36);
            let g = cube_channel((n % 36) / 6);
            let b = cube_channel(n % 6);
            Rgb::new(r, g, b)
        }
        232..=255 => {
            let v = 8 + (index - 232) * 10;
            Rgb::new(v, v, v)
        }
    }
}

#[inline]
const fn cube_channel(step: u8) -> u8 {
    if step == 0 { 0 } else { 55 + 40 * step }
}

/// Nearest base-palette index for an RGB color.
fn nearest_ansi16(color: Rgb) -> u8 {
    let mut best = 0u8;
    let mut best_dist = i32::MAX;
    for (i, candidate) in ANSI_16.iter().enumerate() {
        let d = color.distance_sq(*candidate);
        if d < best_dist {
            best_dist = d;
            best = i as u8;
        }
    }
    best
}

/// Nearest extended-palette index for an RGB color.
///
/// Considers the closest 6x6x6 cube entry and the closest grayscale ramp
/// entry and keeps whichever is nearer.
fn nearest_ansi256(color: Rgb) -> u8 {
    let qr = cube_step(color.r);
    let qg = cube_step(color.g);
    let qb = cube_step(color.b);
    let cube_index = 16 + 36 * qr + 6 * qg + qb;
    let cube = palette_256(cube_index);

    let luma = (color.r as u16 + color.g as u16 + color.b as u16) / 3;
    let gray_step = if luma > 238 { 23 } else { (luma.saturating_sub(3) / 10) as u8 };
    let gray_index = 232 + gray_step;
    let gray = palette_256(gray_index);

    if color.distance_sq(gray) < color.distance_sq(cube) {
        gray_index
    } else {
        cube_index
    }
}

#[inline]
fn cube_step(v: u8) -> u8 {
    if v < 48 {
        0
    } else if v < 115 {
        1
    } else {
        (((v as u16) - 35) / 40) as u8
    }
}

// =============================================================================
// TermColor - a parsed, possibly quantized terminal color
// =============================================================================

/// A color as the terminal will see it: a palette index or raw RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermColor {
    Index(u8),
    Rgb(Rgb),
}

impl TermColor {
    /// Parse a color literal: `#`-prefixed hex or a decimal palette index.
    /// Empty or malformed input is `None`.
    pub fn parse(literal: &str) -> Option<Self> {
        let s = literal.trim();
        if s.is_empty() {
            return None;
        }
        if s.starts_with('#') {
            return Rgb::from_hex(s).map(Self::Rgb);
        }
        match s.parse::<u32>() {
            Ok(n) if n <= 255 => Some(Self::Index(n as u8)),
            _ => None,
        }
    }

    /// Concrete RGB value of this color (palette indices are looked up).
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Index(i) => palette_256(i),
            Self::Rgb(rgb) => rgb,
        }
    }
}

/// Reduce a color to what a profile can express.
///
/// `Ascii` expresses nothing. `Ansi` maps everything onto the 16-color
/// palette. `Ansi256` keeps indices and downsamples RGB onto the extended
/// palette. `TrueColor` passes both forms through. Quantization is
/// idempotent: feeding the result back through the same profile returns it
/// unchanged.
pub fn quantize(profile: Profile, color: TermColor) -> Option<TermColor> {
    match profile {
        Profile::Ascii => None,
        Profile::Ansi => Some(match color {
            TermColor::Index(i) if i < 16 => TermColor::Index(i),
            TermColor::Index(i) => TermColor::Index(nearest_ansi16(palette_256(i))),
            TermColor::Rgb(rgb) => TermColor::Index(nearest_ansi16(rgb)),
        }),
        Profile::Ansi256 => Some(match color {
            TermColor::Index(i) => TermColor::Index(i),
            TermColor::Rgb(rgb) => TermColor::Index(nearest_ansi256(rgb)),
        }),
        Profile::TrueColor => Some(color),
    }
}

// =============================================================================
// Color - the abstract descriptor
// =============================================================================

/// Per-profile exact literals for a `Complete` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompleteSpec {
    pub true_color: String,
    pub ansi256: String,
    pub ansi: String,
}

/// An abstract color descriptor.
///
/// Resolution of every variant requires an ambient [`RenderContext`];
/// the variants only differ in how the final literal is selected before
/// quantization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// A single literal, hex or palette index depending on its shape.
    Plain(String),
    /// An extended-palette index.
    AnsiIndex(u32),
    /// Literal chosen by the dark-background flag.
    Adaptive { light: String, dark: String },
    /// Literal chosen by the active profile tier.
    Complete(CompleteSpec),
    /// Complete spec chosen by the dark-background flag.
    CompleteAdaptive { light: CompleteSpec, dark: CompleteSpec },
}

impl Color {
    /// Select the concrete literal this descriptor denotes under `ctx`.
    ///
    /// `AnsiIndex` values above the palette range select nothing, as does
    /// an index that was stored out of range.
    pub fn select_literal(&self, ctx: RenderContext) -> Option<String> {
        match self {
            Self::Plain(s) => Some(s.clone()),
            Self::AnsiIndex(n) => {
                if *n <= 255 {
                    Some(n.to_string())
                } else {
                    None
                }
            }
            Self::Adaptive { light, dark } => {
                Some(if ctx.dark_background { dark.clone() } else { light.clone() })
            }
            Self::Complete(spec) => Some(spec.pick(ctx.profile)),
            Self::CompleteAdaptive { light, dark } => {
                let spec = if ctx.dark_background { dark } else { light };
                Some(spec.pick(ctx.profile))
            }
        }
    }

    /// Parse, then quantize, the selected literal through `ctx.profile`.
    pub fn to_term_color(&self, ctx: RenderContext) -> Option<TermColor> {
        let literal = self.select_literal(ctx)?;
        let parsed = TermColor::parse(&literal)?;
        quantize(ctx.profile, parsed)
    }
}

impl CompleteSpec {
    fn pick(&self, profile: Profile) -> String {
        match profile {
            Profile::TrueColor => self.true_color.clone(),
            Profile::Ansi256 => self.ansi256.clone(),
            Profile::Ansi | Profile::Ascii => self.ansi.clone(),
        }
    }
}

// =============================================================================
// RGBA resolution
// =============================================================================

/// The best-effort failure tuple: opaque black.
///
/// Returned for every failure path (unparseable literal, profile that
/// expresses no color, out-of-range index). Callers that need certainty
/// check preconditions instead of inspecting the tuple.
pub const RGBA_FAILURE: (u32, u32, u32, u32) = (0, 0, 0, 0xFFFF);

/// Resolve a descriptor to 16-bit-range RGBA channels.
///
/// Pure in `(ctx, color)`: two calls with equal inputs return identical
/// tuples. Alpha is always `0xFFFF`.
pub fn resolve_rgba(ctx: RenderContext, color: &Color) -> (u32, u32, u32, u32) {
    match color.to_term_color(ctx) {
        Some(tc) => {
            let rgb = tc.to_rgb();
            (widen(rgb.r), widen(rgb.g), widen(rgb.b), 0xFFFF)
        }
        None => RGBA_FAILURE,
    }
}

/// Scale an 8-bit channel into the 16-bit range.
#[inline]
const fn widen(channel: u8) -> u32 {
    channel as u32 * 0x101
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(profile: Profile, dark: bool) -> RenderContext {
        RenderContext { profile, dark_background: dark }
    }

    #[test]
    fn profile_names_round_trip() {
        for p in [Profile::Ascii, Profile::Ansi, Profile::Ansi256, Profile::TrueColor] {
            assert_eq!(Profile::from_name(p.name()), Some(p));
        }
        assert_eq!(Profile::from_name("vga"), None);
        assert_eq!(Profile::from_name(""), None);
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("#F00"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("ff0000"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        // Multi-byte chars can land a 6-byte literal on a non-char
        // boundary; it must parse as None, not panic.
        assert_eq!(Rgb::from_hex("#aé1é"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn palette_cube_and_gray() {
        assert_eq!(palette_256(0), Rgb::new(0, 0, 0));
        assert_eq!(palette_256(15), Rgb::new(255, 255, 255));
        // 196 = 16 + 36*5 = pure red corner of the cube
        assert_eq!(palette_256(196), Rgb::new(255, 0, 0));
        assert_eq!(palette_256(231), Rgb::new(255, 255, 255));
        assert_eq!(palette_256(232), Rgb::new(8, 8, 8));
        assert_eq!(palette_256(255), Rgb::new(238, 238, 238));
    }

    #[test]
    fn literal_parsing() {
        assert_eq!(TermColor::parse("#ff0000"), Some(TermColor::Rgb(Rgb::new(255, 0, 0))));
        assert_eq!(TermColor::parse("21"), Some(TermColor::Index(21)));
        assert_eq!(TermColor::parse("255"), Some(TermColor::Index(255)));
        assert_eq!(TermColor::parse("256"), None);
        assert_eq!(TermColor::parse(""), None);
        assert_eq!(TermColor::parse("red"), None);
    }

    #[test]
    fn quantize_truecolor_passes_through() {
        let rgb = TermColor::Rgb(Rgb::new(1, 2, 3));
        assert_eq!(quantize(Profile::TrueColor, rgb), Some(rgb));
        let idx = TermColor::Index(196);
        assert_eq!(quantize(Profile::TrueColor, idx), Some(idx));
    }

    #[test]
    fn quantize_ascii_drops_color() {
        assert_eq!(quantize(Profile::Ascii, TermColor::Index(1)), None);
        assert_eq!(quantize(Profile::Ascii, TermColor::Rgb(Rgb::new(255, 0, 0))), None);
    }

    #[test]
    fn quantize_ansi256_downsamples_rgb() {
        let red = quantize(Profile::Ansi256, TermColor::Rgb(Rgb::new(255, 0, 0)));
        assert_eq!(red, Some(TermColor::Index(196)));
        // Grays land on the ramp, not the cube
        let gray = quantize(Profile::Ansi256, TermColor::Rgb(Rgb::new(128, 128, 128)));
        match gray {
            Some(TermColor::Index(i)) => assert!((232..=255).contains(&i), "got {i}"),
            other => panic!("expected gray ramp index, got {other:?}"),
        }
    }

    #[test]
    fn quantize_ansi_reduces_to_base_palette() {
        let red = quantize(Profile::Ansi, TermColor::Rgb(Rgb::new(255, 0, 0)));
        assert_eq!(red, Some(TermColor::Index(9)));
        // Extended index collapses to its nearest base color
        let deep = quantize(Profile::Ansi, TermColor::Index(196));
        assert_eq!(deep, Some(TermColor::Index(9)));
        // Base indices survive unchanged
        assert_eq!(quantize(Profile::Ansi, TermColor::Index(3)), Some(TermColor::Index(3)));
    }

    #[test]
    fn quantize_is_idempotent() {
        for profile in [Profile::Ansi, Profile::Ansi256, Profile::TrueColor] {
            let first = quantize(profile, TermColor::Rgb(Rgb::new(200, 100, 50))).unwrap();
            assert_eq!(quantize(profile, first), Some(first));
        }
    }

    #[test]
    fn resolve_plain_truecolor() {
        let c = Color::Plain("#ff0000".into());
        let rgba = resolve_rgba(ctx(Profile::TrueColor, false), &c);
        assert_eq!(rgba, (0xFFFF, 0, 0, 0xFFFF));
    }

    #[test]
    fn resolve_is_deterministic() {
        let c = Color::Plain("#3366cc".into());
        let snapshot = ctx(Profile::Ansi256, true);
        assert_eq!(resolve_rgba(snapshot, &c), resolve_rgba(snapshot, &c));
    }

    #[test]
    fn resolve_ansi_index() {
        let c = Color::AnsiIndex(9);
        let rgba = resolve_rgba(ctx(Profile::TrueColor, false), &c);
        assert_eq!(rgba, (0xFFFF, 0, 0, 0xFFFF));
        assert_eq!(resolve_rgba(ctx(Profile::TrueColor, false), &Color::AnsiIndex(300)), RGBA_FAILURE);
    }

    #[test]
    fn resolve_adaptive_matches_selected_arm() {
        let adaptive = Color::Adaptive { light: "#000000".into(), dark: "#ffffff".into() };
        let light_ctx = ctx(Profile::TrueColor, false);
        let dark_ctx = ctx(Profile::TrueColor, true);
        assert_eq!(
            resolve_rgba(light_ctx, &adaptive),
            resolve_rgba(light_ctx, &Color::Plain("#000000".into()))
        );
        assert_eq!(
            resolve_rgba(dark_ctx, &adaptive),
            resolve_rgba(dark_ctx, &Color::Plain("#ffffff".into()))
        );
        assert_eq!(resolve_rgba(dark_ctx, &adaptive), (0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF));
    }

    #[test]
    fn resolve_complete_branches_on_profile() {
        let spec = CompleteSpec {
            true_color: "#ff0000".into(),
            ansi256: "196".into(),
            ansi: "9".into(),
        };
        let c = Color::Complete(spec);
        assert_eq!(resolve_rgba(ctx(Profile::TrueColor, false), &c), (0xFFFF, 0, 0, 0xFFFF));
        assert_eq!(resolve_rgba(ctx(Profile::Ansi256, false), &c), (0xFFFF, 0, 0, 0xFFFF));
        assert_eq!(resolve_rgba(ctx(Profile::Ansi, false), &c), (0xFFFF, 0, 0, 0xFFFF));
        assert_eq!(resolve_rgba(ctx(Profile::Ascii, false), &c), RGBA_FAILURE);
    }

    #[test]
    fn resolve_complete_adaptive() {
        let light = CompleteSpec { true_color: "#000000".into(), ansi256: "16".into(), ansi: "0".into() };
        let dark = CompleteSpec { true_color: "#ffffff".into(), ansi256: "231".into(), ansi: "15".into() };
        let c = Color::CompleteAdaptive { light, dark };
        assert_eq!(resolve_rgba(ctx(Profile::TrueColor, true), &c), (0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF));
        assert_eq!(resolve_rgba(ctx(Profile::TrueColor, false), &c), (0, 0, 0, 0xFFFF));
    }

    #[test]
    fn resolve_failure_paths() {
        let snapshot = ctx(Profile::TrueColor, false);
        assert_eq!(resolve_rgba(snapshot, &Color::Plain(String::new())), RGBA_FAILURE);
        assert_eq!(resolve_rgba(snapshot, &Color::Plain("bogus".into())), RGBA_FAILURE);
        assert_eq!(resolve_rgba(ctx(Profile::Ascii, false), &Color::Plain("#ff0000".into())), RGBA_FAILURE);
    }
}
