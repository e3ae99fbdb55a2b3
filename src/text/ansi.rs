//! ANSI escape sequence stripping.
//!
//! Measurement must ignore escapes: a styled "hi" is still two cells.
//! Handles CSI (`ESC [` through a final byte), string-terminated
//! sequences (OSC / DCS / PM / APC, ended by BEL or ST), and bare
//! two-character escapes.

use std::borrow::Cow;

const ESC: char = '\u{1b}';

#[derive(Clone, Copy, PartialEq)]
enum State {
    Text,
    Escape,
    Csi,
    OscLike,
    OscEsc,
}

/// Remove ANSI escape sequences from a string.
///
/// Borrows when the input contains no ESC byte, allocates otherwise.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains(ESC) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut state = State::Text;

    for ch in s.chars() {
        state = match state {
            State::Text => {
                if ch == ESC {
                    State::Escape
                } else {
                    out.push(ch);
                    State::Text
                }
            }
            State::Escape => match ch {
                '[' => State::Csi,
                ']' | 'P' | '^' | '_' => State::OscLike,
                // Two-character sequence: the char after ESC is consumed.
                _ => State::Text,
            },
            State::Csi => {
                // Parameter and intermediate bytes are 0x20-0x3F; the
                // sequence ends at a final byte in 0x40-0x7E.
                if ('\u{40}'..='\u{7e}').contains(&ch) {
                    State::Text
                } else if ('\u{20}'..'\u{40}').contains(&ch) {
                    State::Csi
                } else {
                    // Malformed: drop the sequence, keep the char.
                    out.push(ch);
                    State::Text
                }
            }
            State::OscLike => match ch {
                '\u{7}' => State::Text,
                ESC => State::OscEsc,
                _ => State::OscLike,
            },
            State::OscEsc => {
                if ch == '\\' {
                    State::Text
                } else {
                    // ESC inside the string body that wasn't ST; stay in
                    // the string until a real terminator.
                    State::OscLike
                }
            }
        };
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_borrows() {
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed(_)));
        assert_eq!(strip_ansi("plain"), "plain");
    }

    #[test]
    fn sgr_sequences() {
        assert_eq!(strip_ansi("\x1b[1m\x1b[31mhi\x1b[0m"), "hi");
        assert_eq!(strip_ansi("\x1b[38;2;255;0;0mred\x1b[0m"), "red");
        assert_eq!(strip_ansi("\x1b[38;5;196mred\x1b[0m"), "red");
    }

    #[test]
    fn cursor_sequences() {
        assert_eq!(strip_ansi("\x1b[2J\x1b[1;1Hhome"), "home");
    }

    #[test]
    fn osc_bel_and_st() {
        assert_eq!(strip_ansi("\x1b]0;title\x07after"), "after");
        assert_eq!(strip_ansi("\x1b]8;;url\x1b\\link"), "link");
        assert_eq!(strip_ansi("\x1bPdcs body\x1b\\tail"), "tail");
    }

    #[test]
    fn two_char_escape() {
        assert_eq!(strip_ansi("\x1b=keypad"), "keypad");
    }

    #[test]
    fn trailing_escape() {
        assert_eq!(strip_ansi("end\x1b"), "end");
        assert_eq!(strip_ansi("\x1b[31"), "");
    }

    #[test]
    fn multibyte_content_survives() {
        assert_eq!(strip_ansi("\x1b[31m你好\x1b[0m"), "你好");
        assert_eq!(strip_ansi("café \x1b[1mbar\x1b[0m"), "café bar");
    }
}
