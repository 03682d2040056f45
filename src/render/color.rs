//! Colors attached to vertices and edges.
//!
//! Colors belong to vertex *labels*, not to screen positions, so they travel
//! with the symmetry: after applying `a`, the color given to label `x` shows
//! up wherever `x` is now drawn.

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Edge, VertexId};

/// Terminal colors available to the `color` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Black,
    Magenta,
    Cyan,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red, Color::Blue, Color::Green, Color::Yellow,
        Color::White, Color::Black, Color::Magenta, Color::Cyan,
    ];

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Color> {
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::Black => "black",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
        }
    }

    /// SGR sequence for a vertex: colored background.
    pub fn vertex_sgr(self) -> &'static str {
        match self {
            Color::Red => "\x1b[41m",
            Color::Blue => "\x1b[44m",
            Color::Green => "\x1b[42m",
            Color::Yellow => "\x1b[43m",
            Color::White => "\x1b[47;30m",
            Color::Black => "\x1b[40;37m",
            Color::Magenta => "\x1b[45m",
            Color::Cyan => "\x1b[46m",
        }
    }

    /// SGR sequence for an edge: bold colored foreground.
    pub fn edge_sgr(self) -> &'static str {
        match self {
            Color::Red => "\x1b[1;31m",
            Color::Blue => "\x1b[1;34m",
            Color::Green => "\x1b[1;32m",
            Color::Yellow => "\x1b[1;33m",
            Color::White => "\x1b[1;37;40m",
            Color::Black => "\x1b[1;30;47m",
            Color::Magenta => "\x1b[1;35m",
            Color::Cyan => "\x1b[1;36m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// SGR reset.
pub const RESET: &str = "\x1b[0m";

// ============================================================================
// Coloring
// ============================================================================

/// Vertex and edge colors, keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    vertices: HashMap<VertexId, Color>,
    edges: HashMap<Edge, Color>,
}

impl Coloring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    pub fn color_vertices(&mut self, vertices: &[VertexId], color: Color) {
        self.vertices.extend(vertices.iter().map(|&v| (v, color)));
    }

    pub fn uncolor_vertices(&mut self, vertices: &[VertexId]) {
        for v in vertices {
            self.vertices.remove(v);
        }
    }

    pub fn color_edges(&mut self, edges: &[Edge], color: Color) {
        self.edges.extend(edges.iter().map(|&e| (e, color)));
    }

    pub fn uncolor_edges(&mut self, edges: &[Edge]) {
        for e in edges {
            self.edges.remove(e);
        }
    }

    pub fn vertex_color(&self, v: VertexId) -> Option<Color> {
        self.vertices.get(&v).copied()
    }

    /// Color of the edge between labels `u` and `v`, in either order.
    pub fn edge_color(&self, u: VertexId, v: VertexId) -> Option<Color> {
        Edge::between(u, v).and_then(|e| self.edges.get(&e).copied())
    }
}
