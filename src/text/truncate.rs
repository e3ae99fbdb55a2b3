//! Grapheme-safe line truncation.

use unicode_segmentation::UnicodeSegmentation;

use super::width::grapheme_width;

const ESC: &str = "\u{1b}";

#[derive(Clone, Copy, PartialEq)]
enum State {
    Text,
    Escape,
    Csi,
}

/// Truncate a single line to at most `max_width` cells.
///
/// Never splits a grapheme cluster: a double-width glyph that would
/// straddle the limit is dropped entirely. ANSI escape sequences pass
/// through uncounted, so a styled line keeps its closing reset even
/// when its visible text is cut.
pub fn truncate_line(line: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut used = 0usize;
    let mut state = State::Text;

    for grapheme in line.graphemes(true) {
        match state {
            State::Escape => {
                // `[` opens a CSI sequence; anything else makes this a
                // two-character escape that ends right here.
                out.push_str(grapheme);
                state = if grapheme == "[" { State::Csi } else { State::Text };
                continue;
            }
            State::Csi => {
                out.push_str(grapheme);
                if csi_final(grapheme) {
                    state = State::Text;
                }
                continue;
            }
            State::Text => {}
        }
        if grapheme == ESC {
            out.push_str(grapheme);
            state = State::Escape;
            continue;
        }

        let gw = grapheme_width(grapheme);
        if used + gw > max_width {
            // Visible budget exhausted; keep scanning so trailing
            // escapes still land in the output.
            continue;
        }
        out.push_str(grapheme);
        used += gw;
    }

    out
}

/// A CSI sequence ends at a final byte in `0x40..=0x7e`.
fn csi_final(grapheme: &str) -> bool {
    matches!(grapheme.chars().next(), Some(c) if ('\u{40}'..='\u{7e}').contains(&c))
}
