//! Unicode- and ANSI-aware text measurement.
//!
//! Styled strings travel back across the boundary and come back in as
//! inputs to joins, placement, and measurement, so every width here is
//! computed on escape-stripped text and never splits a grapheme cluster.
//!
//! Built on `unicode-width` (East Asian Width tables) and
//! `unicode-segmentation` (UAX #29 grapheme boundaries).

mod ansi;
mod truncate;
mod width;
mod wrap;

pub use ansi::strip_ansi;
pub use truncate::truncate_line;
pub use width::{grapheme_width, string_height, string_size, string_width};
pub use wrap::wrap_words;
