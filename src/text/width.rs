//! Terminal cell width and block size.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::ansi::strip_ansi;

/// Cell width of a single grapheme cluster.
///
/// Emoji ZWJ sequences and VS16-style presentations render as a single
/// two-cell glyph even when their summed char widths disagree.
pub fn grapheme_width(grapheme: &str) -> usize {
    let has_zwj = grapheme.chars().any(|c| c == '\u{200d}');
    let has_vs16 = grapheme.chars().any(|c| c == '\u{fe0f}');
    if has_zwj || has_vs16 {
        return 2;
    }
    grapheme.width()
}

/// Display width of the widest line, escapes ignored.
pub fn string_width(s: &str) -> usize {
    s.split('\n')
        .map(|line| line_width(line))
        .max()
        .unwrap_or(0)
}

/// Display width of one line, escapes ignored.
pub(crate) fn line_width(line: &str) -> usize {
    let plain = strip_ansi(line);
    plain.graphemes(true).map(grapheme_width).sum()
}

/// Number of terminal rows the string occupies. The empty string is one
/// row, matching how a terminal prints it.
pub fn string_height(s: &str) -> usize {
    s.split('\n').count()
}

/// `(width, height)` of a text block.
pub fn string_size(s: &str) -> (usize, usize) {
    (string_width(s), string_height(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn cjk_is_double_width() {
        assert_eq!(string_width("你好"), 4);
        assert_eq!(string_width("a你b"), 4);
    }

    #[test]
    fn combining_marks_collapse() {
        assert_eq!(string_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn zwj_emoji_is_two_cells() {
        // family: man + ZWJ + woman + ZWJ + girl
        assert_eq!(string_width("\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}"), 2);
    }

    #[test]
    fn escapes_do_not_count() {
        assert_eq!(string_width("\x1b[31mred\x1b[0m"), 3);
    }

    #[test]
    fn width_is_widest_line() {
        assert_eq!(string_width("ab\nabcd\nc"), 4);
    }

    #[test]
    fn height_counts_rows() {
        assert_eq!(string_height(""), 1);
        assert_eq!(string_height("one"), 1);
        assert_eq!(string_height("one\ntwo"), 2);
        assert_eq!(string_height("trailing\n"), 2);
    }

    #[test]
    fn size_pairs_both() {
        assert_eq!(string_size("ab\nabcd"), (4, 2));
    }
}
