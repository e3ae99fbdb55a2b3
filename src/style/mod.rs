//! The immutable `Style` value type.
//!
//! A style is a bag of optional properties plus a mask of which ones
//! were explicitly set. Builders consume and return by value; the
//! boundary layer clones the registered instance, applies one builder,
//! and registers the result under a fresh handle. Rendering lives in
//! [`render`]; per-rune styling in [`runes`].

mod render;
mod runes;

pub use runes::style_runes;

use crate::border::Border;
use crate::color::Color;

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const REVERSE = 1 << 4;
        const BLINK = 1 << 5;
        const FAINT = 1 << 6;
    }
}

bitflags::bitflags! {
    /// Which properties have been explicitly set.
    ///
    /// Inheritance and introspection need "set" to be distinct from
    /// "holds the default value".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Props: u32 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const REVERSE = 1 << 4;
        const BLINK = 1 << 5;
        const FAINT = 1 << 6;
        const COLOR_WHITESPACE = 1 << 7;
        const INLINE = 1 << 8;
        const WIDTH = 1 << 9;
        const HEIGHT = 1 << 10;
        const MAX_WIDTH = 1 << 11;
        const MAX_HEIGHT = 1 << 12;
        const TAB_WIDTH = 1 << 13;
        const ALIGN_HORIZONTAL = 1 << 14;
        const ALIGN_VERTICAL = 1 << 15;
        const PADDING = 1 << 16;
        const MARGIN = 1 << 17;
        const FOREGROUND = 1 << 18;
        const BACKGROUND = 1 << 19;
        const MARGIN_BACKGROUND = 1 << 20;
        const BORDER_FOREGROUND = 1 << 21;
        const BORDER_BACKGROUND = 1 << 22;
        const BORDER = 1 << 23;
        const VALUE = 1 << 24;
    }
}

/// Tab width applied when the caller never set one.
pub const DEFAULT_TAB_WIDTH: i32 = 4;

/// An immutable terminal text style.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    props: Props,
    attrs: Attr,

    fg: Option<Color>,
    bg: Option<Color>,
    margin_bg: Option<Color>,
    border_fg: Option<Color>,
    border_bg: Option<Color>,

    width: i32,
    height: i32,
    max_width: i32,
    max_height: i32,
    tab_width: i32,

    align_horizontal: f64,
    align_vertical: f64,

    // top, right, bottom, left
    padding: [i32; 4],
    margin: [i32; 4],

    border: Border,
    color_whitespace: bool,
    inline: bool,
    value: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            props: Props::empty(),
            attrs: Attr::empty(),
            fg: None,
            bg: None,
            margin_bg: None,
            border_fg: None,
            border_bg: None,
            width: 0,
            height: 0,
            max_width: 0,
            max_height: 0,
            tab_width: DEFAULT_TAB_WIDTH,
            align_horizontal: 0.0,
            align_vertical: 0.0,
            padding: [0; 4],
            margin: [0; 4],
            border: Border::default(),
            color_whitespace: true,
            inline: false,
            value: String::new(),
        }
    }
}

macro_rules! attr_builder {
    ($name:ident, $flag:ident) => {
        pub fn $name(mut self, v: bool) -> Self {
            self.props.insert(Props::$flag);
            self.attrs.set(Attr::$flag, v);
            self
        }
    };
}

macro_rules! attr_getter {
    ($name:ident, $flag:ident) => {
        pub fn $name(&self) -> bool {
            self.attrs.contains(Attr::$flag)
        }
    };
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    attr_builder!(bold, BOLD);
    attr_builder!(italic, ITALIC);
    attr_builder!(underline, UNDERLINE);
    attr_builder!(strikethrough, STRIKETHROUGH);
    attr_builder!(reverse, REVERSE);
    attr_builder!(blink, BLINK);
    attr_builder!(faint, FAINT);

    attr_getter!(get_bold, BOLD);
    attr_getter!(get_italic, ITALIC);
    attr_getter!(get_underline, UNDERLINE);
    attr_getter!(get_strikethrough, STRIKETHROUGH);
    attr_getter!(get_reverse, REVERSE);
    attr_getter!(get_blink, BLINK);
    attr_getter!(get_faint, FAINT);

    pub fn color_whitespace(mut self, v: bool) -> Self {
        self.props.insert(Props::COLOR_WHITESPACE);
        self.color_whitespace = v;
        self
    }

    pub fn inline(mut self, v: bool) -> Self {
        self.props.insert(Props::INLINE);
        self.inline = v;
        self
    }

    pub fn width(mut self, w: i32) -> Self {
        self.props.insert(Props::WIDTH);
        self.width = w;
        self
    }

    pub fn height(mut self, h: i32) -> Self {
        self.props.insert(Props::HEIGHT);
        self.height = h;
        self
    }

    pub fn max_width(mut self, w: i32) -> Self {
        self.props.insert(Props::MAX_WIDTH);
        self.max_width = w;
        self
    }

    pub fn max_height(mut self, h: i32) -> Self {
        self.props.insert(Props::MAX_HEIGHT);
        self.max_height = h;
        self
    }

    /// `-1` keeps tabs as-is, `0` strips them, `n` expands to n spaces.
    pub fn tab_width(mut self, w: i32) -> Self {
        self.props.insert(Props::TAB_WIDTH);
        self.tab_width = w;
        self
    }

    pub fn align_horizontal(mut self, pos: f64) -> Self {
        self.props.insert(Props::ALIGN_HORIZONTAL);
        self.align_horizontal = pos;
        self
    }

    pub fn align_vertical(mut self, pos: f64) -> Self {
        self.props.insert(Props::ALIGN_VERTICAL);
        self.align_vertical = pos;
        self
    }

    pub fn padding(mut self, top: i32, right: i32, bottom: i32, left: i32) -> Self {
        self.props.insert(Props::PADDING);
        self.padding = [top, right, bottom, left];
        self
    }

    pub fn padding_top(self, v: i32) -> Self {
        let p = self.padding;
        self.padding(v, p[1], p[2], p[3])
    }

    pub fn padding_right(self, v: i32) -> Self {
        let p = self.padding;
        self.padding(p[0], v, p[2], p[3])
    }

    pub fn padding_bottom(self, v: i32) -> Self {
        let p = self.padding;
        self.padding(p[0], p[1], v, p[3])
    }

    pub fn padding_left(self, v: i32) -> Self {
        let p = self.padding;
        self.padding(p[0], p[1], p[2], v)
    }

    pub fn margin(mut self, top: i32, right: i32, bottom: i32, left: i32) -> Self {
        self.props.insert(Props::MARGIN);
        self.margin = [top, right, bottom, left];
        self
    }

    pub fn margin_top(self, v: i32) -> Self {
        let m = self.margin;
        self.margin(v, m[1], m[2], m[3])
    }

    pub fn margin_right(self, v: i32) -> Self {
        let m = self.margin;
        self.margin(m[0], v, m[2], m[3])
    }

    pub fn margin_bottom(self, v: i32) -> Self {
        let m = self.margin;
        self.margin(m[0], m[1], v, m[3])
    }

    pub fn margin_left(self, v: i32) -> Self {
        let m = self.margin;
        self.margin(m[0], m[1], m[2], v)
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.props.insert(Props::FOREGROUND);
        self.fg = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.props.insert(Props::BACKGROUND);
        self.bg = Some(color);
        self
    }

    pub fn margin_background(mut self, color: Color) -> Self {
        self.props.insert(Props::MARGIN_BACKGROUND);
        self.margin_bg = Some(color);
        self
    }

    pub fn border_foreground(mut self, color: Color) -> Self {
        self.props.insert(Props::BORDER_FOREGROUND);
        self.border_fg = Some(color);
        self
    }

    pub fn border_background(mut self, color: Color) -> Self {
        self.props.insert(Props::BORDER_BACKGROUND);
        self.border_bg = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.props.insert(Props::BORDER);
        self.border = border;
        self
    }

    /// Embed a value string joined in front of render input.
    pub fn set_string(mut self, value: impl Into<String>) -> Self {
        self.props.insert(Props::VALUE);
        self.value = value.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn get_border(&self) -> &Border {
        &self.border
    }

    pub fn get_width(&self) -> i32 {
        self.width
    }

    pub fn get_height(&self) -> i32 {
        self.height
    }

    pub fn has_border(&self) -> bool {
        self.props.contains(Props::BORDER) && !self.border.is_empty()
    }

    pub fn has_color(&self) -> bool {
        self.fg.is_some() || self.bg.is_some()
    }

    pub fn has_padding(&self) -> bool {
        self.padding.iter().any(|&v| v != 0)
    }

    pub fn has_margin(&self) -> bool {
        self.margin.iter().any(|&v| v != 0)
    }

    /// Copy properties set on `other` and unset on `self`.
    ///
    /// Margins and paddings are never inherited; neither are the
    /// layout dimensions or the embedded value, which belong to the
    /// block they were set on.
    pub fn inherit(mut self, other: &Style) -> Self {
        for flag in [
            Props::BOLD,
            Props::ITALIC,
            Props::UNDERLINE,
            Props::STRIKETHROUGH,
            Props::REVERSE,
            Props::BLINK,
            Props::FAINT,
        ] {
            if other.props.contains(flag) && !self.props.contains(flag) {
                self.props.insert(flag);
                // The low Props bits mirror Attr bit positions.
                let attr = Attr::from_bits_truncate(flag.bits() as u8);
                self.attrs.set(attr, other.attrs.contains(attr));
            }
        }

        if other.props.contains(Props::FOREGROUND) && !self.props.contains(Props::FOREGROUND) {
            self = self.foreground(other.fg.clone().unwrap_or(Color::Plain(String::new())));
        }
        if other.props.contains(Props::BACKGROUND) && !self.props.contains(Props::BACKGROUND) {
            self = self.background(other.bg.clone().unwrap_or(Color::Plain(String::new())));
        }
        if other.props.contains(Props::MARGIN_BACKGROUND)
            && !self.props.contains(Props::MARGIN_BACKGROUND)
        {
            self = self.margin_background(other.margin_bg.clone().unwrap_or(Color::Plain(String::new())));
        }
        if other.props.contains(Props::BORDER_FOREGROUND)
            && !self.props.contains(Props::BORDER_FOREGROUND)
        {
            self = self.border_foreground(other.border_fg.clone().unwrap_or(Color::Plain(String::new())));
        }
        if other.props.contains(Props::BORDER_BACKGROUND)
            && !self.props.contains(Props::BORDER_BACKGROUND)
        {
            self = self.border_background(other.border_bg.clone().unwrap_or(Color::Plain(String::new())));
        }
        if other.props.contains(Props::BORDER) && !self.props.contains(Props::BORDER) {
            self = self.border(other.border.clone());
        }
        if other.props.contains(Props::ALIGN_HORIZONTAL)
            && !self.props.contains(Props::ALIGN_HORIZONTAL)
        {
            self = self.align_horizontal(other.align_horizontal);
        }
        if other.props.contains(Props::ALIGN_VERTICAL) && !self.props.contains(Props::ALIGN_VERTICAL) {
            self = self.align_vertical(other.align_vertical);
        }

        self
    }
}
