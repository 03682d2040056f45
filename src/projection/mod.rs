//! # Projection
//!
//! Fixed screen positions for the vertices of Qn. A position depends only
//! on the dimension and the vertex label, never on the automorphism being
//! shown: symmetries change which label is drawn where, not the layout.
//!
//! Every edge of Qn joins two positions that differ by one axis offset. Most
//! offsets are horizontal, vertical or a 45° diagonal, so edges render as
//! `-`, `|`, `/` or `\` runs; the fifth axis is steep and renders as a dotted
//! run with one `.` every other row.

pub mod layout;

use serde::{Deserialize, Serialize};

use crate::model::{Dimension, VertexId};
use crate::{Error, Result};

/// Screen position of the first character of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub col: usize,
    pub row: usize,
}

/// Position of `label` in the drawing of Qn.
pub fn project(n: usize, label: u32) -> Result<Point> {
    let dim = Dimension::new(n)?;
    let v = VertexId(label);
    if !v.is_in(dim) {
        return Err(Error::VertexOutOfRange { vertex: label, dimension: dim.get() });
    }
    Ok(point_of(dim, v))
}

fn point_of(dim: Dimension, v: VertexId) -> Point {
    let (mut col, mut row) = layout::origin_shift(dim);
    for axis in (0..dim.as_usize()).filter(|&axis| v.bit(axis)) {
        let (dc, dr) = layout::axis_offset(dim, axis);
        col += dc;
        row += dr;
    }
    Point { col: col as usize, row: row as usize }
}

/// Unit step and number of steps of the run from `from` to `to`.
fn run(from: Point, to: Point) -> ((i64, i64), i64) {
    let dc = to.col as i64 - from.col as i64;
    let dr = to.row as i64 - from.row as i64;
    let steep = dr.abs() == 2 * dc.abs() && dc != 0;
    debug_assert!(steep || dc == 0 || dr == 0 || dc.abs() == dr.abs());
    if steep {
        ((dc.signum(), dr.signum() * 2), dc.abs())
    } else {
        ((dc.signum(), dr.signum()), dc.abs().max(dr.abs()))
    }
}

/// Glyph for a run from `from` to `to`: `-`, `|`, `/`, `\` or `.` for a
/// steep run.
pub fn segment_glyph(from: Point, to: Point) -> char {
    match run(from, to).0 {
        (_, 0) => '-',
        (0, _) => '|',
        (sc, sr) if sr.abs() == 2 * sc.abs() => '.',
        (sc, sr) if sc == -sr => '/',
        _ => '\\',
    }
}

/// Cells strictly between `from` and `to` that the run passes through. The
/// run must be horizontal, vertical, a 45° diagonal or steep (two rows per
/// column); a steep run only touches every other row.
pub fn segment_cells(from: Point, to: Point) -> impl Iterator<Item = Point> {
    let ((sc, sr), steps) = run(from, to);
    (1..steps).map(move |s| Point {
        col: (from.col as i64 + s * sc) as usize,
        row: (from.row as i64 + s * sr) as usize,
    })
}

// ============================================================================
// ProjectionTable
// ============================================================================

/// All positions for one dimension, computed once and reused every frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionTable {
    dimension: Dimension,
    points: Vec<Point>,
    width: usize,
    height: usize,
}

impl ProjectionTable {
    pub fn build(dimension: Dimension) -> Self {
        let points = (0..dimension.vertex_count())
            .map(|v| point_of(dimension, VertexId(v)))
            .collect();
        let (cols, rows) = layout::extent(dimension);
        Self {
            dimension,
            points,
            width: cols as usize + dimension.label_width(),
            height: rows as usize + 1,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Frame width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn label_width(&self) -> usize {
        self.dimension.label_width()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, v: VertexId) -> Result<Point> {
        self.points.get(v.0 as usize).copied().ok_or(Error::VertexOutOfRange {
            vertex: v.0,
            dimension: self.dimension.get(),
        })
    }

    /// Where edges attach to a label: its middle character.
    pub fn anchor(&self, v: VertexId) -> Result<Point> {
        let p = self.point(v)?;
        Ok(Point { col: p.col + (self.label_width() - 1) / 2, row: p.row })
    }
}
