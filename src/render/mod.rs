//! # Renderer
//!
//! Turns a projection table, the current labeling and the edge set into a
//! `Frame`. Pure: no I/O, no state.
//!
//! Edges are drawn first, between label anchors; labels are drawn last so
//! they sit on top of any segment that passes through them.

pub mod color;
pub mod frame;

pub use color::{Color, Coloring};
pub use frame::{Cell, Frame, Paint};

use crate::model::{Edge, VertexId};
use crate::projection::ProjectionTable;
use crate::{Error, Result};

/// Render one frame.
///
/// `labeling[p]` is the label displayed at the position of vertex `p`
/// (the image of `p` under the current automorphism). Edge colors are
/// looked up by the labels at both ends, vertex colors by the displayed
/// label, so colors follow the symmetry.
pub fn render(
    table: &ProjectionTable,
    labeling: &[VertexId],
    edges: &[Edge],
    coloring: Option<&Coloring>,
) -> Result<Frame> {
    let dim = table.dimension();
    if labeling.len() != dim.vertex_count() as usize {
        return Err(Error::DimensionMismatch {
            expected: dim.get(),
            got: smallest_dimension_for(labeling.len()),
        });
    }
    if let Some(bad) = labeling.iter().find(|v| !v.is_in(dim)) {
        return Err(Error::VertexOutOfRange { vertex: bad.0, dimension: dim.get() });
    }

    let mut frame = Frame::blank(table.width(), table.height());

    for edge in edges {
        let from = table.anchor(edge.low)?;
        let to = table.anchor(edge.high)?;
        let paint = coloring
            .and_then(|c| c.edge_color(labeling[edge.low.0 as usize], labeling[edge.high.0 as usize]))
            .map(Paint::Edge);
        frame.draw_segment(from, to, paint);
    }

    for (position, &label) in labeling.iter().enumerate() {
        let at = table.point(VertexId(position as u32))?;
        let paint = coloring.and_then(|c| c.vertex_color(label)).map(Paint::Vertex);
        frame.put_label(at, &label.bit_string(dim), paint);
    }

    Ok(frame)
}

fn smallest_dimension_for(labels: usize) -> u8 {
    (usize::BITS - labels.saturating_sub(1).leading_zeros()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::automorphism::Automorphism;
    use crate::model::{Dimension, Hypercube};

    fn frame_for(n: usize, a: Option<Automorphism>) -> Frame {
        let dim = Dimension::new(n).unwrap();
        let cube = Hypercube::build(dim);
        let table = ProjectionTable::build(dim);
        let a = a.unwrap_or_else(|| Automorphism::identity(dim));
        render(&table, &cube.labeling(&a).unwrap(), cube.edges(), None).unwrap()
    }

    #[test]
    fn test_point() {
        assert_eq!(frame_for(0, None).rows(), vec!["0"]);
    }

    #[test]
    fn test_segment() {
        assert_eq!(frame_for(1, None).rows(), vec!["0-----1"]);
    }

    #[test]
    fn test_square() {
        let expected = [
            "00-----01",
            "|      |",
            "|      |",
            "|      |",
            "|      |",
            "|      |",
            "10-----11",
        ]
        .join("\n");
        assert_eq!(frame_for(2, None).to_string(), expected);
    }

    #[test]
    fn test_cube() {
        let expected = [
            "   100-----101",
            "   /|      /|",
            "  / |     / |",
            "000-+---001 |",
            " |  |    |  |",
            " |  |    |  |",
            " | 110---+-111",
            " | /     | /",
            " |/      |/",
            "010-----011",
        ]
        .join("\n");
        assert_eq!(frame_for(3, None).to_string(), expected);
    }

    #[test]
    fn test_flip_moves_labels_not_edges() {
        let dim = Dimension::new(2).unwrap();
        let flipped = frame_for(2, Some(Automorphism::flip(0, dim).unwrap()));
        let expected = [
            "01-----00",
            "|      |",
            "|      |",
            "|      |",
            "|      |",
            "|      |",
            "11-----10",
        ]
        .join("\n");
        assert_eq!(flipped.to_string(), expected);
    }

    #[test]
    fn test_frame_sizes() {
        let sizes: Vec<(usize, usize)> = (0..=5)
            .map(|n| frame_for(n, None))
            .map(|f| (f.width(), f.height()))
            .collect();
        assert_eq!(sizes, vec![(1, 1), (7, 1), (9, 7), (14, 10), (27, 16), (35, 30)]);
    }

    #[test]
    fn test_every_label_appears_once() {
        for n in 0..=5 {
            let text = frame_for(n, None).to_string();
            let dim = Dimension::new(n).unwrap();
            for v in 0..dim.vertex_count() {
                let label = VertexId(v).bit_string(dim);
                let hits = text
                    .split(|c: char| c != '0' && c != '1')
                    .filter(|word| *word == label)
                    .count();
                assert_eq!(hits, 1, "label {label} in Q{n}");
            }
        }
    }

    #[test]
    fn test_colors_follow_labels() {
        let dim = Dimension::new(2).unwrap();
        let cube = Hypercube::build(dim);
        let table = ProjectionTable::build(dim);
        let mut coloring = Coloring::new();
        coloring.color_vertices(&[VertexId(0)], Color::Red);

        let flip = Automorphism::flip(0, dim).unwrap();
        let frame = render(&table, &cube.labeling(&flip).unwrap(), cube.edges(), Some(&coloring)).unwrap();

        // label 00 is now drawn at the position of vertex 01
        assert_eq!(frame.cell(7, 0).unwrap().paint, Some(Paint::Vertex(Color::Red)));
        assert_eq!(frame.cell(0, 0).unwrap().paint, None);
    }

    #[test]
    fn test_rejects_labeling_of_wrong_size() {
        let table = ProjectionTable::build(Dimension::new(2).unwrap());
        let labeling: Vec<VertexId> = (0..8).map(VertexId).collect();
        let err = render(&table, &labeling, &[], None).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, got: 3 }));
    }
}
