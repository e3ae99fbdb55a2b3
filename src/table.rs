//! Table builder and renderer.

use crate::border::Border;
use crate::text::{string_width, truncate_line};

/// Border kinds selectable across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableBorder {
    #[default]
    Normal,
    Rounded,
    Thick,
}

impl TableBorder {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Normal),
            1 => Some(Self::Rounded),
            2 => Some(Self::Thick),
            _ => None,
        }
    }

    fn glyphs(self) -> Border {
        match self {
            Self::Normal => Border::normal(),
            Self::Rounded => Border::rounded(),
            Self::Thick => Border::thick(),
        }
    }
}

/// An immutable table: optional header row, data rows, optional fixed
/// outer dimensions, and a border kind.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    width: Option<usize>,
    height: Option<usize>,
    border: TableBorder,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(mut self, headers: Vec<String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn row(mut self, row: Vec<String>) -> Self {
        self.rows.push(row);
        self
    }

    /// Fixed outer width in cells, border included.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Fixed outer height in rows, border included.
    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn border(mut self, border: TableBorder) -> Self {
        self.border = border;
        self
    }

    /// Draw the table with box-drawing borders and a header separator.
    pub fn render(&self) -> String {
        let columns = self.column_count();
        if columns == 0 {
            return String::new();
        }

        let widths = self.column_widths(columns);
        let b = self.border.glyphs();

        let mut lines: Vec<String> = Vec::new();
        lines.push(rule(&b.top_left, &b.top, &b.middle_top, &b.top_right, &widths));

        if let Some(headers) = &self.headers {
            lines.push(data_row(&b.left, &b.right, headers, &widths));
            lines.push(rule(&b.middle_left, &b.top, &b.middle, &b.middle_right, &widths));
        }
        for row in &self.rows {
            lines.push(data_row(&b.left, &b.right, row, &widths));
        }

        // Fixed height pads with blank rows or drops data rows, always
        // keeping the bottom border.
        if let Some(height) = self.height {
            let body = lines.len() + 1;
            if body < height {
                let blank: Vec<String> = vec![String::new(); columns];
                for _ in 0..(height - body) {
                    lines.push(data_row(&b.left, &b.right, &blank, &widths));
                }
            } else if body > height && height >= 2 {
                lines.truncate(height - 1);
            }
        }

        lines.push(rule(&b.bottom_left, &b.bottom, &b.middle_bottom, &b.bottom_right, &widths));
        lines.join("\n")
    }

    fn column_count(&self) -> usize {
        let header_cols = self.headers.as_ref().map_or(0, Vec::len);
        let row_cols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        header_cols.max(row_cols)
    }

    /// Natural widths from content, stretched or shrunk at the last
    /// column when a fixed outer width is set.
    fn column_widths(&self, columns: usize) -> Vec<usize> {
        let mut widths = vec![0usize; columns];
        if let Some(headers) = &self.headers {
            for (i, cell) in headers.iter().enumerate() {
                widths[i] = widths[i].max(string_width(cell));
            }
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(string_width(cell));
            }
        }
        // One cell of inner padding on each side of every cell.
        for w in widths.iter_mut() {
            *w += 2;
        }

        if let Some(fixed) = self.width {
            // Outer width = columns + separators (columns + 1 border glyphs).
            let frame = columns + 1;
            let natural: usize = widths.iter().sum::<usize>() + frame;
            let last = columns - 1;
            if natural < fixed {
                widths[last] += fixed - natural;
            } else if natural > fixed {
                let excess = natural - fixed;
                widths[last] = widths[last].saturating_sub(excess).max(1);
            }
        }

        widths
    }
}

/// A horizontal border line: `left` + fill/junctions + `right`.
fn rule(left: &str, fill: &str, junction: &str, right: &str, widths: &[usize]) -> String {
    let mut out = String::from(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            // Half-block sets have no junction glyph; fall back to fill.
            out.push_str(if junction.is_empty() { fill } else { junction });
        }
        out.push_str(&fill.repeat(*w));
    }
    out.push_str(right);
    out
}

/// One content row, cells padded (and truncated) to their column width.
fn data_row(left: &str, right: &str, cells: &[String], widths: &[usize]) -> String {
    let mut out = String::from(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str(left);
        }
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let inner = w.saturating_sub(2);
        let clipped = if string_width(cell) > inner {
            truncate_line(cell, inner)
        } else {
            cell.to_string()
        };
        let pad = inner.saturating_sub(string_width(&clipped));
        out.push(' ');
        out.push_str(&clipped);
        out.push_str(&" ".repeat(pad + 1));
    }
    out.push_str(right);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_table() {
        let t = Table::new()
            .headers(vec!["A".into(), "B".into()])
            .row(vec!["1".into(), "2".into()]);
        assert_eq!(
            t.render(),
            "┌───┬───┐\n\
             │ A │ B │\n\
             ├───┼───┤\n\
             │ 1 │ 2 │\n\
             └───┴───┘"
        );
    }

    #[test]
    fn columns_size_to_widest_cell() {
        let t = Table::new().row(vec!["long".into(), "x".into()]);
        assert_eq!(t.render(), "┌──────┬───┐\n│ long │ x │\n└──────┴───┘");
    }

    #[test]
    fn rounded_and_thick_borders() {
        let t = Table::new().row(vec!["x".into()]);
        assert_eq!(
            t.clone().border(TableBorder::Rounded).render(),
            "╭───╮\n│ x │\n╰───╯"
        );
        assert_eq!(
            t.border(TableBorder::Thick).render(),
            "┏━━━┓\n┃ x ┃\n┗━━━┛"
        );
    }

    #[test]
    fn fixed_width_stretches_last_column() {
        let t = Table::new().row(vec!["a".into(), "b".into()]).width(12);
        let out = t.render();
        for line in out.split('\n') {
            assert_eq!(string_width(line), 12, "line {line:?}");
        }
    }

    #[test]
    fn fixed_width_shrinks_last_column() {
        let t = Table::new()
            .row(vec!["aaa".into(), "bbbbbb".into()])
            .width(10);
        let out = t.render();
        for line in out.split('\n') {
            assert_eq!(string_width(line), 10, "line {line:?}");
        }
    }

    #[test]
    fn fixed_height_pads_and_truncates() {
        let t = Table::new().row(vec!["x".into()]).height(5);
        assert_eq!(t.render().split('\n').count(), 5);

        let t = Table::new()
            .row(vec!["a".into()])
            .row(vec!["b".into()])
            .row(vec!["c".into()])
            .height(4);
        let out = t.render();
        assert_eq!(out.split('\n').count(), 4);
        assert!(out.ends_with("└───┘"));
    }

    #[test]
    fn short_rows_pad_missing_cells() {
        let t = Table::new()
            .headers(vec!["A".into(), "B".into()])
            .row(vec!["1".into()]);
        let out = t.render();
        assert!(out.contains("│ 1 │   │"));
    }

    #[test]
    fn empty_table_renders_empty() {
        assert_eq!(Table::new().render(), "");
    }
}
