//! Per-dimension offset vectors.
//!
//! A label's raw position is the sum of the offsets of its set bits, so the
//! drawing of Q(k+1) is two copies of the drawing of Qk, shifted along the
//! offset of axis k and joined by edges parallel to it.
//!
//! | Axis | Q1..Q3 (cols, rows) | Q4, Q5 (cols, rows) | Drawn as |
//! |------|---------------------|---------------------|----------|
//! | 0 | (label width + 5, 0) | (13, 0) | `-` |
//! | 1 | (0, 6) | (0, 5) | `\|` |
//! | 2 | (3, -3) | (4, -4) | `/` |
//! | 3 | | (6, 6) | `\` |
//! | 4 | | (7, 14) | `.` every other row |
//!
//! With only the four glyph directions two axes of Q5 would be parallel, and
//! parallel axes always run some edge through a third label. Axis 4 therefore
//! takes the steep direction, one column per two rows.

use crate::model::Dimension;

/// Offset `(cols, rows)` contributed by `axis`. Rows grow downwards.
pub fn axis_offset(dim: Dimension, axis: usize) -> (i64, i64) {
    if dim.get() >= 4 {
        return match axis {
            0 => (13, 0),
            1 => (0, 5),
            2 => (4, -4),
            3 => (6, 6),
            4 => (7, 14),
            _ => (0, 0),
        };
    }
    match axis {
        0 => (dim.label_width() as i64 + 5, 0),
        1 => (0, 6),
        2 => (3, -3),
        _ => (0, 0),
    }
}

/// Translation that moves the top-left corner of the drawing to `(0, 0)`:
/// minus the sum of the negative components over all axes.
pub fn origin_shift(dim: Dimension) -> (i64, i64) {
    (0..dim.as_usize()).fold((0, 0), |(cols, rows), axis| {
        let (dc, dr) = axis_offset(dim, axis);
        (cols - dc.min(0), rows - dr.min(0))
    })
}

/// Extent `(cols, rows)` spanned by label origins.
pub fn extent(dim: Dimension) -> (i64, i64) {
    (0..dim.as_usize()).fold((0, 0), |(cols, rows), axis| {
        let (dc, dr) = axis_offset(dim, axis);
        (cols + dc.abs(), rows + dr.abs())
    })
}
