//! Border glyph sets.
//!
//! A border is thirteen glyphs: the four edges, four corners, and the
//! five junction glyphs used when boxes share edges (table separators).
//! All catalog entries are plain `&str` data; sizing is derived from
//! glyph cell width, so multi-cell or empty edges both work.

use crate::text::string_width;

/// A set of border glyphs.
///
/// Empty strings mean "no glyph on this edge"; the corresponding size
/// helper reports 0 and rendering skips the edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Border {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub middle_left: String,
    pub middle_right: String,
    pub middle: String,
    pub middle_top: String,
    pub middle_bottom: String,
}

macro_rules! border_set {
    ($top:expr, $bottom:expr, $left:expr, $right:expr,
     $tl:expr, $tr:expr, $bl:expr, $br:expr,
     $ml:expr, $mr:expr, $m:expr, $mt:expr, $mb:expr) => {
        Border {
            top: $top.to_string(),
            bottom: $bottom.to_string(),
            left: $left.to_string(),
            right: $right.to_string(),
            top_left: $tl.to_string(),
            top_right: $tr.to_string(),
            bottom_left: $bl.to_string(),
            bottom_right: $br.to_string(),
            middle_left: $ml.to_string(),
            middle_right: $mr.to_string(),
            middle: $m.to_string(),
            middle_top: $mt.to_string(),
            middle_bottom: $mb.to_string(),
        }
    };
}

impl Border {
    /// Standard single-line box drawing.
    pub fn normal() -> Self {
        border_set!("─", "─", "│", "│", "┌", "┐", "└", "┘", "├", "┤", "┼", "┬", "┴")
    }

    /// Single-line with rounded corners.
    pub fn rounded() -> Self {
        border_set!("─", "─", "│", "│", "╭", "╮", "╰", "╯", "├", "┤", "┼", "┬", "┴")
    }

    /// Heavy single-line box drawing.
    pub fn thick() -> Self {
        border_set!("━", "━", "┃", "┃", "┏", "┓", "┗", "┛", "┣", "┫", "╋", "┳", "┻")
    }

    /// Double-line box drawing.
    pub fn double() -> Self {
        border_set!("═", "═", "║", "║", "╔", "╗", "╚", "╝", "╠", "╣", "╬", "╦", "╩")
    }

    /// Full block on every edge.
    pub fn block() -> Self {
        border_set!("█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█")
    }

    /// Half blocks hugging the inside of the frame.
    pub fn inner_half_block() -> Self {
        border_set!("▄", "▀", "▐", "▌", "▗", "▖", "▝", "▘", "", "", "", "", "")
    }

    /// Half blocks hugging the outside of the frame.
    pub fn outer_half_block() -> Self {
        border_set!("▀", "▄", "▌", "▐", "▛", "▜", "▙", "▟", "", "", "", "", "")
    }

    /// Spaces everywhere: reserves the frame cells without drawing.
    pub fn hidden() -> Self {
        border_set!(" ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ")
    }

    /// Cell width of the top edge glyph.
    pub fn top_size(&self) -> usize {
        edge_size(&self.top)
    }

    /// Cell width of the bottom edge glyph.
    pub fn bottom_size(&self) -> usize {
        edge_size(&self.bottom)
    }

    /// Cell width of the left edge glyph.
    pub fn left_size(&self) -> usize {
        edge_size(&self.left)
    }

    /// Cell width of the right edge glyph.
    pub fn right_size(&self) -> usize {
        edge_size(&self.right)
    }

    /// True when no edge carries a glyph.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty() && self.left.is_empty() && self.right.is_empty()
    }
}

/// Widest line of the glyph, 0 for the empty string.
fn edge_size(glyph: &str) -> usize {
    if glyph.is_empty() {
        return 0;
    }
    glyph.split('\n').map(string_width).max().unwrap_or(0)
}
