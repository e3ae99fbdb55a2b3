//! List builder and renderer.

use crate::color::{Color, RenderContext};
use crate::layout::{align_line, Position};
use crate::style::Style;
use crate::text::string_width;

/// How list items are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enumerator {
    #[default]
    Bullet,
    Dash,
    Alphabet,
    Arabic,
    Roman,
}

impl Enumerator {
    /// Wire code used across the boundary.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Bullet),
            1 => Some(Self::Dash),
            2 => Some(Self::Alphabet),
            3 => Some(Self::Arabic),
            4 => Some(Self::Roman),
            _ => None,
        }
    }

    /// Marker for the item at `index` (zero-based).
    fn marker(self, index: usize) -> String {
        match self {
            Self::Bullet => "•".to_string(),
            Self::Dash => "-".to_string(),
            Self::Alphabet => format!("{}.", alphabet(index)),
            Self::Arabic => format!("{}.", index + 1),
            Self::Roman => format!("{}.", roman(index + 1)),
        }
    }
}

/// Excel-style column letters: A..Z, AA..AZ, ...
fn alphabet(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

fn roman(mut n: usize) -> String {
    const TABLE: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (value, glyph) in TABLE {
        while n >= value {
            out.push_str(glyph);
            n -= value;
        }
    }
    out
}

/// An immutable list of items.
///
/// Builders return new values; the boundary registers each result
/// under a fresh handle.
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<String>,
    enumerator: Enumerator,
    item_style: Option<Color>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn enumerator(mut self, e: Enumerator) -> Self {
        self.enumerator = e;
        self
    }

    /// Foreground color applied to every item's text.
    pub fn item_style(mut self, color: Color) -> Self {
        self.item_style = Some(color);
        self
    }

    /// Render the list, one row per item, markers right-aligned.
    pub fn render(&self, ctx: RenderContext) -> String {
        let markers: Vec<String> = (0..self.items.len())
            .map(|i| self.enumerator.marker(i))
            .collect();
        let marker_width = markers.iter().map(|m| string_width(m)).max().unwrap_or(0);

        let style = self
            .item_style
            .clone()
            .map(|c| Style::new().foreground(c));

        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&align_line(&markers[i], marker_width, Position::RIGHT));
            out.push(' ');
            match &style {
                Some(s) => out.push_str(&s.render(ctx, item)),
                None => out.push_str(item),
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Profile;

    fn ascii() -> RenderContext {
        RenderContext::default()
    }

    #[test]
    fn bullet_list() {
        let l = List::new().item("one").item("two");
        assert_eq!(l.render(ascii()), "• one\n• two");
    }

    #[test]
    fn arabic_markers_right_align() {
        let mut l = List::new();
        for i in 0..10 {
            l = l.item(format!("item{i}"));
        }
        let out = l.enumerator(Enumerator::Arabic).render(ascii());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[0], " 1. item0");
        assert_eq!(lines[9], "10. item9");
    }

    #[test]
    fn alphabet_and_roman_sequences() {
        assert_eq!(alphabet(0), "A");
        assert_eq!(alphabet(25), "Z");
        assert_eq!(alphabet(26), "AA");
        assert_eq!(roman(1), "I");
        assert_eq!(roman(4), "IV");
        assert_eq!(roman(9), "IX");
        assert_eq!(roman(14), "XIV");
    }

    #[test]
    fn item_style_colors_text() {
        let ctx = RenderContext {
            profile: Profile::TrueColor,
            dark_background: false,
        };
        let l = List::new()
            .item("x")
            .item_style(Color::Plain("#ff0000".into()));
        assert_eq!(l.render(ctx), "• \x1b[38;2;255;0;0mx\x1b[0m");
    }

    #[test]
    fn empty_list_renders_empty() {
        assert_eq!(List::new().render(ascii()), "");
        assert!(List::new().is_empty());
    }

    #[test]
    fn enumerator_codes() {
        assert_eq!(Enumerator::from_code(0), Some(Enumerator::Bullet));
        assert_eq!(Enumerator::from_code(4), Some(Enumerator::Roman));
        assert_eq!(Enumerator::from_code(5), None);
        assert_eq!(Enumerator::from_code(-1), None);
    }
}
