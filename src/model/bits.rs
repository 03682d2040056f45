//! Bit strings of a fixed dimension.
//!
//! Labels are printed most significant coordinate first, so in dimension 3
//! the label `0b110` reads `110` and its coordinate 0 is the last character.

use super::{Dimension, VertexId};
use crate::{Error, Result};

/// Print `label` as `dim` binary digits. Dimension 0 prints `0`.
pub fn to_bit_string(label: u32, dim: Dimension) -> String {
    format!("{:0width$b}", label, width = dim.label_width())
}

/// Read a string of `0` and `1` as an integer.
pub fn parse_bit_string(text: &str) -> Result<u32> {
    if text.is_empty() || text.len() > 32 || !text.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(Error::InvalidBitString(text.to_string()));
    }
    Ok(text.bytes().fold(0u32, |acc, b| (acc << 1) | u32::from(b - b'0')))
}

/// Read a vertex label, requiring exactly `dim` digits (`0` for dimension 0).
pub fn parse_vertex(text: &str, dim: Dimension) -> Result<VertexId> {
    let label = parse_bit_string(text)?;
    if text.len() != dim.label_width() || label >= dim.vertex_count() {
        return Err(Error::InvalidPattern {
            pattern: text.to_string(),
            message: format!("a vertex in dimension {dim} has {} digits", dim.label_width()),
        });
    }
    Ok(VertexId(label))
}

/// Read a reflection mask: exactly `dim` digits, most significant first.
pub fn parse_mask(text: &str, dim: Dimension) -> Result<u32> {
    let mask = parse_bit_string(text)?;
    if text.len() != dim.as_usize() {
        return Err(Error::InvalidMask {
            mask: text.to_string(),
            message: format!("a reflection in dimension {dim} takes {dim} digits, got {}", text.len()),
        });
    }
    Ok(mask)
}

/// Reverse the order of the low `dim` bits.
pub fn reverse(label: u32, dim: Dimension) -> u32 {
    let n = dim.as_usize();
    (0..n).fold(0, |acc, i| acc | (((label >> i) & 1) << (n - 1 - i)))
}

/// All labels matched by a pattern such as `1*0`, where `*` matches either
/// bit. Ascending order.
pub fn pattern_vertices(pattern: &str, dim: Dimension) -> Result<Vec<VertexId>> {
    if !pattern.bytes().all(|b| matches!(b, b'0' | b'1' | b'*')) {
        return Err(Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: "a pattern consists of 0, 1 and *".into(),
        });
    }
    if pattern.len() != dim.as_usize() {
        return Err(Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: format!("a pattern in dimension {dim} has {dim} characters"),
        });
    }

    // `fixed` holds the required bit values, `care` the positions that matter.
    let mut fixed = 0u32;
    let mut care = 0u32;
    for (pos, b) in pattern.bytes().enumerate() {
        let bit = dim.as_usize() - 1 - pos;
        match b {
            b'1' => { fixed |= 1 << bit; care |= 1 << bit; }
            b'0' => { care |= 1 << bit; }
            _ => {}
        }
    }

    Ok((0..dim.vertex_count())
        .filter(|label| label & care == fixed)
        .map(VertexId)
        .collect())
}
