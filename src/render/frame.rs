//! Character grid produced by the renderer.

use std::fmt;

use super::color::{Color, RESET};
use crate::projection::{self, Point};

/// How a cell is colored when printed to a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Vertex(Color),
    Edge(Color),
}

impl Paint {
    fn sgr(self) -> &'static str {
        match self {
            Paint::Vertex(c) => c.vertex_sgr(),
            Paint::Edge(c) => c.edge_sgr(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub paint: Option<Paint>,
}

impl Cell {
    const BLANK: Cell = Cell { glyph: ' ', paint: None };
}

/// A fixed-size grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Frame {
    pub(crate) fn blank(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::BLANK; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row * self.width + col)
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get_mut(row * self.width + col)
    }

    /// Plain text rows, each exactly `width` characters.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect()
    }

    /// Rows with ANSI color sequences around painted cells, trailing blanks
    /// trimmed.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for (r, row) in self.cells.chunks(self.width.max(1)).take(self.height).enumerate() {
            if r > 0 {
                out.push('\n');
            }
            let end = row
                .iter()
                .rposition(|c| c.glyph != ' ' || c.paint.is_some())
                .map_or(0, |i| i + 1);
            let mut current: Option<Paint> = None;
            for cell in &row[..end] {
                if cell.paint != current {
                    if current.is_some() {
                        out.push_str(RESET);
                    }
                    if let Some(paint) = cell.paint {
                        out.push_str(paint.sgr());
                    }
                    current = cell.paint;
                }
                out.push(cell.glyph);
            }
            if current.is_some() {
                out.push_str(RESET);
            }
        }
        out
    }

    /// Draw the cells strictly between `from` and `to`. Where two different
    /// segments cross the cell becomes `+`.
    pub(crate) fn draw_segment(&mut self, from: Point, to: Point, paint: Option<Paint>) {
        let glyph = projection::segment_glyph(from, to);
        for at in projection::segment_cells(from, to) {
            if let Some(cell) = self.cell_mut(at.col, at.row) {
                cell.glyph = if cell.glyph == ' ' || cell.glyph == glyph { glyph } else { '+' };
                if paint.is_some() {
                    cell.paint = paint;
                }
            }
        }
    }

    /// Write `text` starting at `at`, overwriting whatever is there.
    pub(crate) fn put_label(&mut self, at: Point, text: &str, paint: Option<Paint>) {
        for (i, glyph) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(at.col + i, at.row) {
                *cell = Cell { glyph, paint };
            }
        }
    }
}

impl fmt::Display for Frame {
    /// Plain rows with trailing blanks trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(col: usize, row: usize) -> Point {
        Point { col, row }
    }

    #[test]
    fn test_segment_glyphs() {
        let mut frame = Frame::blank(5, 5);
        frame.draw_segment(pt(0, 0), pt(4, 0), None);
        frame.draw_segment(pt(0, 0), pt(0, 4), None);
        frame.draw_segment(pt(0, 4), pt(4, 0), None);
        assert_eq!(frame.rows(), vec![
            " --- ",
            "|  / ",
            "| /  ",
            "|/   ",
            "     ",
        ]);
    }

    #[test]
    fn test_crossing_becomes_plus() {
        let mut frame = Frame::blank(3, 3);
        frame.draw_segment(pt(0, 1), pt(2, 1), None);
        frame.draw_segment(pt(1, 0), pt(1, 2), None);
        assert_eq!(frame.cell(1, 1).unwrap().glyph, '+');
    }

    #[test]
    fn test_backslash_diagonal() {
        let mut frame = Frame::blank(3, 3);
        frame.draw_segment(pt(0, 0), pt(2, 2), None);
        assert_eq!(frame.cell(1, 1).unwrap().glyph, '\\');
    }

    #[test]
    fn test_steep_run_is_dotted() {
        let mut frame = Frame::blank(3, 5);
        frame.draw_segment(pt(0, 0), pt(2, 4), None);
        assert_eq!(frame.rows(), vec!["   ", "   ", " . ", "   ", "   "]);
    }

    #[test]
    fn test_ansi_wraps_painted_runs() {
        let mut frame = Frame::blank(4, 1);
        frame.put_label(pt(0, 0), "01", Some(Paint::Vertex(Color::Red)));
        assert_eq!(frame.to_ansi(), format!("\x1b[41m01{RESET}"));
    }

    #[test]
    fn test_display_trims() {
        let mut frame = Frame::blank(4, 2);
        frame.put_label(pt(0, 0), "1", None);
        assert_eq!(frame.to_string(), "1\n");
    }
}
