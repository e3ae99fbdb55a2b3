//! Block joins and whitespace placement.
//!
//! A "block" is a multi-line string measured in terminal cells. Joins
//! glue two blocks together along an axis; placement centers a block
//! inside a larger whitespace box. All of it is line math over
//! [`crate::text`] measurements; nothing here styles anything.

use crate::text::{string_height, string_width};

/// A position along an axis: 0 is the start (left/top), 1 the end
/// (right/bottom), 0.5 the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub f64);

impl Position {
    pub const TOP: Position = Position(0.0);
    pub const BOTTOM: Position = Position(1.0);
    pub const CENTER: Position = Position(0.5);
    pub const LEFT: Position = Position(0.0);
    pub const RIGHT: Position = Position(1.0);

    /// True when the value lies in the valid `[0, 1]` domain.
    pub fn is_valid(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }

    /// Split `gap` cells into (before, after) shares for this position.
    fn split(self, gap: usize) -> (usize, usize) {
        let before = (gap as f64 * self.0).round() as usize;
        (before.min(gap), gap - before.min(gap))
    }
}

/// Pad a line with spaces on the right up to `width` cells.
pub fn pad_line(line: &str, width: usize) -> String {
    let w = string_width(line);
    if w >= width {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + (width - w));
    out.push_str(line);
    out.extend(std::iter::repeat(' ').take(width - w));
    out
}

/// Align a line inside `width` cells per `pos`, padding both sides.
pub fn align_line(line: &str, width: usize, pos: Position) -> String {
    let w = string_width(line);
    if w >= width {
        return line.to_string();
    }
    let (before, after) = pos.split(width - w);
    let mut out = String::with_capacity(line.len() + width - w);
    out.extend(std::iter::repeat(' ').take(before));
    out.push_str(line);
    out.extend(std::iter::repeat(' ').take(after));
    out
}

/// Join two blocks side by side.
///
/// The shorter block is padded with blank lines; `pos` decides where
/// its lines sit vertically against the taller one (0 top, 1 bottom).
pub fn join_horizontal(pos: Position, left: &str, right: &str) -> String {
    let blocks = [left, right];
    let heights: Vec<usize> = blocks.iter().map(|b| string_height(b)).collect();
    let max_height = *heights.iter().max().unwrap_or(&0);
    let widths: Vec<usize> = blocks.iter().map(|b| string_width(b)).collect();

    // Each block becomes a rectangle of max_height lines.
    let mut columns: Vec<Vec<String>> = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        let lines: Vec<&str> = block.split('\n').collect();
        let (above, below) = pos.split(max_height - lines.len());
        let mut col = Vec::with_capacity(max_height);
        for _ in 0..above {
            col.push(" ".repeat(widths[i]));
        }
        for line in &lines {
            col.push(pad_line(line, widths[i]));
        }
        for _ in 0..below {
            col.push(" ".repeat(widths[i]));
        }
        columns.push(col);
    }

    let mut out = String::new();
    for row in 0..max_height {
        if row > 0 {
            out.push('\n');
        }
        for col in &columns {
            out.push_str(&col[row]);
        }
    }
    out
}

/// Join two blocks one above the other.
///
/// Narrower lines are aligned horizontally per `pos` (0 left, 1 right)
/// and padded to the joint width.
pub fn join_vertical(pos: Position, top: &str, bottom: &str) -> String {
    let width = string_width(top).max(string_width(bottom));
    let mut out = String::new();
    for (i, line) in top.split('\n').chain(bottom.split('\n')).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&align_line(line, width, pos));
    }
    out
}

/// Place a block inside a `width` x `height` whitespace box.
pub fn place(width: usize, height: usize, h_pos: Position, v_pos: Position, content: &str) -> String {
    place_vertical(height, v_pos, &place_horizontal(width, h_pos, content))
}

/// Pad every line of a block out to `width` cells per `pos`.
///
/// A block already at or over the width comes back unchanged apart
/// from ragged lines being squared off.
pub fn place_horizontal(width: usize, pos: Position, content: &str) -> String {
    let content_width = string_width(content);
    if content_width >= width {
        // Square off ragged right edges so the block stays rectangular.
        return content
            .split('\n')
            .map(|l| pad_line(l, content_width))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let (left, right) = pos.split(width - content_width);
    let mut out = String::new();
    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(std::iter::repeat(' ').take(left));
        out.push_str(&pad_line(line, content_width));
        out.extend(std::iter::repeat(' ').take(right));
    }
    out
}

/// Pad a block with blank lines out to `height` rows per `pos`.
pub fn place_vertical(height: usize, pos: Position, content: &str) -> String {
    let content_height = string_height(content);
    if content_height >= height {
        return content.to_string();
    }

    let width = string_width(content);
    let blank = " ".repeat(width);
    let (above, below) = pos.split(height - content_height);

    let mut lines = Vec::with_capacity(height);
    for _ in 0..above {
        lines.push(blank.clone());
    }
    for line in content.split('\n') {
        lines.push(pad_line(line, width));
    }
    for _ in 0..below {
        lines.push(blank.clone());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_domain() {
        assert!(Position(0.0).is_valid());
        assert!(Position(1.0).is_valid());
        assert!(!Position(-0.0001).is_valid());
        assert!(!Position(1.0001).is_valid());
    }

    #[test]
    fn join_horizontal_top() {
        let joined = join_horizontal(Position::TOP, "a\nb", "XX");
        assert_eq!(joined, "aXX\nb  ");
    }

    #[test]
    fn join_horizontal_bottom() {
        let joined = join_horizontal(Position::BOTTOM, "a\nb", "XX");
        assert_eq!(joined, "a  \nbXX");
    }

    #[test]
    fn join_vertical_alignment() {
        assert_eq!(join_vertical(Position::LEFT, "ab", "c"), "ab\nc ");
        assert_eq!(join_vertical(Position::RIGHT, "ab", "c"), "ab\n c");
        assert_eq!(join_vertical(Position::CENTER, "abcd", "c"), "abcd\n  c ");
    }

    #[test]
    fn place_horizontal_centers() {
        assert_eq!(place_horizontal(6, Position::CENTER, "ab"), "  ab  ");
        assert_eq!(place_horizontal(5, Position::RIGHT, "ab"), "   ab");
    }

    #[test]
    fn place_vertical_pads_rows() {
        assert_eq!(place_vertical(3, Position::TOP, "ab"), "ab\n  \n  ");
        assert_eq!(place_vertical(3, Position::BOTTOM, "ab"), "  \n  \nab");
    }

    #[test]
    fn place_box() {
        let placed = place(4, 3, Position::CENTER, Position::CENTER, "ab");
        assert_eq!(placed, "    \n ab \n    ");
    }

    #[test]
    fn oversized_content_is_untouched() {
        assert_eq!(place_horizontal(1, Position::CENTER, "abc"), "abc");
        assert_eq!(place_vertical(1, Position::CENTER, "a\nb"), "a\nb");
    }

    #[test]
    fn wide_glyphs_measure_in_cells() {
        // 你 is two cells, so a width-4 box leaves two spaces
        assert_eq!(place_horizontal(4, Position::LEFT, "你"), "你  ");
    }
}
