//! Style application: text shaping, SGR emission, frame drawing.
//!
//! `render` is a pure function of `(style, context, text)`. The escape
//! emission follows the usual tiers: basic palette indices use the
//! 30/40 and 90/100 ranges, extended indices `38;5;n`, RGB `38;2;r;g;b`.
//! An `Ascii` profile emits no escapes at all.

use crate::color::{Color, Profile, RenderContext, TermColor};
use crate::layout::{align_line, Position};
use crate::text::{string_width, truncate_line, wrap_words};

use super::{Attr, Style};

const RESET: &str = "\x1b[0m";

impl Style {
    /// Render `text` with this style under `ctx`.
    ///
    /// Stages, in order: embedded value join, tab handling, inline
    /// newline stripping, word wrap to the content width, per-line
    /// max-width truncation, vertical sizing, horizontal alignment,
    /// SGR styling, padding, border, margin.
    pub fn render(&self, ctx: RenderContext, text: &str) -> String {
        let mut s = if self.value.is_empty() {
            text.to_string()
        } else if text.is_empty() {
            self.value.clone()
        } else {
            format!("{} {}", self.value, text)
        };

        match self.tab_width {
            -1 => {}
            0 => s = s.replace('\t', ""),
            n => s = s.replace('\t', &" ".repeat(n.max(0) as usize)),
        }

        if self.inline {
            // Inline rendering is single-line styling only: no wrap,
            // no padding, no border, no margin.
            s = s.replace('\n', "");
            if self.max_width > 0 {
                s = truncate_line(&s, self.max_width as usize);
            }
            return self.styled(ctx, &s);
        }

        let pad: [usize; 4] = self.padding.map(|v| v.max(0) as usize);
        let content_width = if self.width > 0 {
            (self.width as usize).saturating_sub(pad[1] + pad[3])
        } else {
            0
        };

        if content_width > 0 {
            s = wrap_words(&s, content_width);
        }

        let mut lines: Vec<String> = s.split('\n').map(str::to_string).collect();

        if self.max_width > 0 {
            for line in &mut lines {
                *line = truncate_line(line, self.max_width as usize);
            }
        }

        if self.height > 0 && lines.len() < self.height as usize {
            let gap = self.height as usize - lines.len();
            let above = (gap as f64 * self.align_vertical).round() as usize;
            let above = above.min(gap);
            for _ in 0..above {
                lines.insert(0, String::new());
            }
            for _ in 0..(gap - above) {
                lines.push(String::new());
            }
        }
        if self.max_height > 0 && lines.len() > self.max_height as usize {
            lines.truncate(self.max_height as usize);
        }

        let block_width = lines
            .iter()
            .map(|l| string_width(l))
            .max()
            .unwrap_or(0)
            .max(content_width);
        let h_pos = Position(self.align_horizontal.clamp(0.0, 1.0));
        for line in &mut lines {
            *line = align_line(line, block_width, h_pos);
        }

        // Styling and horizontal padding. With color_whitespace the
        // padding cells carry the style's colors; without it only the
        // aligned content is wrapped in escapes.
        let prefix = self.sgr_prefix(ctx);
        let left_pad = " ".repeat(pad[3]);
        let right_pad = " ".repeat(pad[1]);
        let row_width = block_width + pad[1] + pad[3];
        let blank = " ".repeat(row_width);

        let mut rows: Vec<String> = Vec::with_capacity(lines.len() + pad[0] + pad[2]);
        for _ in 0..pad[0] {
            rows.push(wrap_sgr(&prefix, &blank));
        }
        for line in &lines {
            if self.color_whitespace {
                rows.push(wrap_sgr(&prefix, &format!("{left_pad}{line}{right_pad}")));
            } else {
                rows.push(format!("{left_pad}{}{right_pad}", wrap_sgr(&prefix, line)));
            }
        }
        for _ in 0..pad[2] {
            rows.push(wrap_sgr(&prefix, &blank));
        }

        let mut width = row_width;
        if self.has_border() {
            width = self.draw_border(ctx, &mut rows, width);
        }
        self.draw_margin(ctx, &mut rows, width);

        rows.join("\n")
    }

    /// Wrap `text` in this style's escape prefix with no layout. Used
    /// for per-rune styling and inline rendering.
    pub(crate) fn styled(&self, ctx: RenderContext, text: &str) -> String {
        wrap_sgr(&self.sgr_prefix(ctx), text)
    }

    fn sgr_prefix(&self, ctx: RenderContext) -> String {
        if ctx.profile == Profile::Ascii {
            return String::new();
        }
        let mut out = sgr_attrs(self.attrs);
        push_color(&mut out, ctx, self.fg.as_ref(), false);
        push_color(&mut out, ctx, self.bg.as_ref(), true);
        out
    }

    /// Frame the rows with the border glyphs, returns the new row width.
    fn draw_border(&self, ctx: RenderContext, rows: &mut Vec<String>, width: usize) -> usize {
        let b = &self.border;
        let prefix = if ctx.profile == Profile::Ascii {
            String::new()
        } else {
            let mut p = String::new();
            push_color(&mut p, ctx, self.border_fg.as_ref(), false);
            push_color(&mut p, ctx, self.border_bg.as_ref(), true);
            p
        };

        let left = !b.left.is_empty();
        let right = !b.right.is_empty();

        for row in rows.iter_mut() {
            let mut framed = String::new();
            if left {
                framed.push_str(&wrap_sgr(&prefix, &b.left));
            }
            framed.push_str(row);
            if right {
                framed.push_str(&wrap_sgr(&prefix, &b.right));
            }
            *row = framed;
        }

        if !b.top.is_empty() {
            let tl = if left { b.top_left.as_str() } else { "" };
            let tr = if right { b.top_right.as_str() } else { "" };
            let edge = format!("{tl}{}{tr}", repeat_to_width(&b.top, width));
            rows.insert(0, wrap_sgr(&prefix, &edge));
        }
        if !b.bottom.is_empty() {
            let bl = if left { b.bottom_left.as_str() } else { "" };
            let br = if right { b.bottom_right.as_str() } else { "" };
            let edge = format!("{bl}{}{br}", repeat_to_width(&b.bottom, width));
            rows.push(wrap_sgr(&prefix, &edge));
        }

        width + if left { b.left_size() } else { 0 } + if right { b.right_size() } else { 0 }
    }

    fn draw_margin(&self, ctx: RenderContext, rows: &mut Vec<String>, width: usize) {
        let m: [usize; 4] = self.margin.map(|v| v.max(0) as usize);
        if m.iter().all(|&v| v == 0) {
            return;
        }

        let prefix = if ctx.profile == Profile::Ascii {
            String::new()
        } else {
            let mut p = String::new();
            push_color(&mut p, ctx, self.margin_bg.as_ref(), true);
            p
        };

        let left = wrap_sgr(&prefix, &" ".repeat(m[3]));
        let right = wrap_sgr(&prefix, &" ".repeat(m[1]));
        for row in rows.iter_mut() {
            *row = format!("{left}{row}{right}");
        }

        let total = width + m[1] + m[3];
        let blank = wrap_sgr(&prefix, &" ".repeat(total));
        for _ in 0..m[0] {
            rows.insert(0, blank.clone());
        }
        for _ in 0..m[2] {
            rows.push(blank.clone());
        }
    }
}

fn wrap_sgr(prefix: &str, text: &str) -> String {
    if prefix.is_empty() || text.is_empty() {
        text.to_string()
    } else {
        format!("{prefix}{text}{RESET}")
    }
}

/// One CSI carrying every set attribute, empty when none are.
fn sgr_attrs(attrs: Attr) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let mut codes: Vec<&str> = Vec::new();
    for (flag, code) in [
        (Attr::BOLD, "1"),
        (Attr::FAINT, "2"),
        (Attr::ITALIC, "3"),
        (Attr::UNDERLINE, "4"),
        (Attr::BLINK, "5"),
        (Attr::REVERSE, "7"),
        (Attr::STRIKETHROUGH, "9"),
    ] {
        if attrs.contains(flag) {
            codes.push(code);
        }
    }
    format!("\x1b[{}m", codes.join(";"))
}

fn push_color(out: &mut String, ctx: RenderContext, color: Option<&Color>, background: bool) {
    let Some(color) = color else { return };
    let Some(tc) = color.to_term_color(ctx) else { return };
    out.push_str(&sgr_color(tc, background));
}

fn sgr_color(tc: TermColor, background: bool) -> String {
    match tc {
        TermColor::Index(i) if i < 8 => {
            format!("\x1b[{}m", if background { 40 } else { 30 } + i as u16)
        }
        TermColor::Index(i) if i < 16 => {
            format!("\x1b[{}m", if background { 100 } else { 90 } + (i - 8) as u16)
        }
        TermColor::Index(i) => {
            format!("\x1b[{};5;{}m", if background { 48 } else { 38 }, i)
        }
        TermColor::Rgb(rgb) => {
            format!(
                "\x1b[{};2;{};{};{}m",
                if background { 48 } else { 38 },
                rgb.r,
                rgb.g,
                rgb.b
            )
        }
    }
}

/// Repeat a glyph until it covers `width` cells, truncating overshoot.
fn repeat_to_width(glyph: &str, width: usize) -> String {
    let gw = string_width(glyph);
    if gw == 0 || width == 0 {
        return String::new();
    }
    let reps = width.div_ceil(gw);
    truncate_line(&glyph.repeat(reps), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::Border;

    fn truecolor() -> RenderContext {
        RenderContext {
            profile: Profile::TrueColor,
            dark_background: false,
        }
    }

    fn ascii() -> RenderContext {
        RenderContext::default()
    }

    #[test]
    fn unstyled_render_is_identity() {
        assert_eq!(Style::new().render(truecolor(), "hi"), "hi");
        assert_eq!(Style::new().render(truecolor(), "a\nb"), "a\nb");
    }

    #[test]
    fn truecolor_foreground_escape() {
        let s = Style::new().foreground(Color::Plain("#ff0000".into()));
        assert_eq!(s.render(truecolor(), "hi"), "\x1b[38;2;255;0;0mhi\x1b[0m");
    }

    #[test]
    fn ascii_profile_renders_plain() {
        let s = Style::new()
            .bold(true)
            .foreground(Color::Plain("#ff0000".into()));
        assert_eq!(s.render(ascii(), "hi"), "hi");
    }

    #[test]
    fn basic_palette_uses_short_codes() {
        let ctx = RenderContext {
            profile: Profile::Ansi,
            dark_background: false,
        };
        let s = Style::new().foreground(Color::AnsiIndex(1));
        assert_eq!(s.render(ctx, "x"), "\x1b[31mx\x1b[0m");
        let bright = Style::new().foreground(Color::AnsiIndex(9));
        assert_eq!(bright.render(ctx, "x"), "\x1b[91mx\x1b[0m");
    }

    #[test]
    fn extended_palette_uses_semicolon_form() {
        let ctx = RenderContext {
            profile: Profile::Ansi256,
            dark_background: false,
        };
        let s = Style::new().foreground(Color::AnsiIndex(196));
        assert_eq!(s.render(ctx, "x"), "\x1b[38;5;196mx\x1b[0m");
    }

    #[test]
    fn attrs_share_one_sequence() {
        let s = Style::new().bold(true).underline(true);
        assert_eq!(s.render(truecolor(), "x"), "\x1b[1;4mx\x1b[0m");
    }

    #[test]
    fn width_wraps_and_squares() {
        let s = Style::new().width(5);
        assert_eq!(s.render(ascii(), "aa bb cc"), "aa bb\ncc   ");
    }

    #[test]
    fn align_right_within_width() {
        let s = Style::new().width(4).align_horizontal(1.0);
        assert_eq!(s.render(ascii(), "ab"), "  ab");
    }

    #[test]
    fn padding_adds_styled_whitespace() {
        let s = Style::new().padding(0, 1, 0, 2);
        assert_eq!(s.render(ascii(), "x"), "  x ");

        let colored = Style::new()
            .padding(0, 1, 0, 1)
            .background(Color::Plain("#0000ff".into()));
        assert_eq!(
            colored.render(truecolor(), "x"),
            "\x1b[48;2;0;0;255m x \x1b[0m"
        );
    }

    #[test]
    fn color_whitespace_off_pads_outside_escapes() {
        let s = Style::new()
            .padding(0, 1, 0, 1)
            .color_whitespace(false)
            .background(Color::Plain("#0000ff".into()));
        assert_eq!(
            s.render(truecolor(), "x"),
            " \x1b[48;2;0;0;255mx\x1b[0m "
        );
    }

    #[test]
    fn normal_border_box() {
        let s = Style::new().border(Border::normal());
        assert_eq!(s.render(ascii(), "hi"), "┌──┐\n│hi│\n└──┘");
    }

    #[test]
    fn border_foreground_styles_frame_only() {
        let s = Style::new()
            .border(Border::normal())
            .border_foreground(Color::Plain("#ff0000".into()));
        let out = s.render(truecolor(), "x");
        assert_eq!(
            out,
            "\x1b[38;2;255;0;0m┌─┐\x1b[0m\n\
             \x1b[38;2;255;0;0m│\x1b[0mx\x1b[38;2;255;0;0m│\x1b[0m\n\
             \x1b[38;2;255;0;0m└─┘\x1b[0m"
        );
    }

    #[test]
    fn margin_wraps_block() {
        let s = Style::new().margin(1, 1, 0, 2);
        assert_eq!(s.render(ascii(), "x"), "    \n  x ");
    }

    #[test]
    fn max_width_truncates_each_line() {
        let s = Style::new().max_width(2);
        assert_eq!(s.render(ascii(), "abcd\nef"), "ab\nef");
    }

    #[test]
    fn height_pads_rows() {
        let s = Style::new().height(3);
        assert_eq!(s.render(ascii(), "x"), "x\n \n ");
        let bottom = Style::new().height(3).align_vertical(1.0);
        assert_eq!(bottom.render(ascii(), "x"), " \n \nx");
    }

    #[test]
    fn max_height_truncates_rows() {
        let s = Style::new().max_height(2);
        assert_eq!(s.render(ascii(), "a\nb\nc"), "a\nb");
    }

    #[test]
    fn inline_strips_newlines_and_layout() {
        let s = Style::new().inline(true).padding(1, 1, 1, 1);
        assert_eq!(s.render(ascii(), "a\nb"), "ab");
    }

    #[test]
    fn tab_handling() {
        assert_eq!(Style::new().render(ascii(), "a\tb"), "a    b");
        assert_eq!(Style::new().tab_width(0).render(ascii(), "a\tb"), "ab");
        assert_eq!(Style::new().tab_width(-1).render(ascii(), "a\tb"), "a\tb");
        assert_eq!(Style::new().tab_width(2).render(ascii(), "a\tb"), "a  b");
    }

    #[test]
    fn embedded_value_joins_input() {
        let s = Style::new().set_string("label:");
        assert_eq!(s.render(ascii(), "x"), "label: x");
        assert_eq!(s.render(ascii(), ""), "label:");
    }

    #[test]
    fn adaptive_color_follows_background() {
        let adaptive = Color::Adaptive {
            light: "#000000".into(),
            dark: "#ffffff".into(),
        };
        let s = Style::new().foreground(adaptive);
        let dark = RenderContext {
            profile: Profile::TrueColor,
            dark_background: true,
        };
        assert_eq!(s.render(dark, "x"), "\x1b[38;2;255;255;255mx\x1b[0m");
    }

    #[test]
    fn render_is_deterministic() {
        let s = Style::new()
            .bold(true)
            .width(7)
            .padding(1, 1, 1, 1)
            .border(Border::rounded())
            .foreground(Color::Plain("#3366cc".into()));
        let a = s.render(truecolor(), "hello world");
        let b = s.render(truecolor(), "hello world");
        assert_eq!(a, b);
    }
}
