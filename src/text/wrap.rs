//! Word wrapping for block rendering.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{grapheme_width, line_width};

/// Wrap text to `max_width` cells at word boundaries.
///
/// Existing newlines are respected as paragraph breaks. A word wider
/// than the limit is broken at grapheme boundaries rather than
/// overflowing. Zero width returns the input unchanged.
pub fn wrap_words(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for (i, paragraph) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        wrap_paragraph(paragraph, max_width, &mut out);
    }
    out
}

fn wrap_paragraph(paragraph: &str, max_width: usize, out: &mut String) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in paragraph.split(' ') {
        let word_width = line_width(word);

        if word_width > max_width {
            // Flush the pending line, then hard-break the oversized word.
            if !current.is_empty() {
                out.push_str(&current);
                out.push('\n');
                current.clear();
                current_width = 0;
            }
            break_word(word, max_width, &mut current, &mut current_width, out);
            continue;
        }

        let sep = if current.is_empty() { 0 } else { 1 };
        if current_width + sep + word_width > max_width {
            out.push_str(&current);
            out.push('\n');
            current.clear();
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    out.push_str(&current);
}

fn break_word(
    word: &str,
    max_width: usize,
    current: &mut String,
    current_width: &mut usize,
    out: &mut String,
) {
    for grapheme in word.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if *current_width + gw > max_width && !current.is_empty() {
            out.push_str(current);
            out.push('\n');
            current.clear();
            *current_width = 0;
        }
        current.push_str(grapheme);
        *current_width += gw;
    }
}
