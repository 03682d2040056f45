//! REPL command AST.
//!
//! Numbers and bit strings stay as text until execution, where the current
//! dimension decides whether they are valid.

use crate::render::Color;

/// One REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a dimension (identity transform, colors cleared).
    New(usize),
    Flip(usize),
    Swap(usize, usize),
    /// Reflect by a bit-string mask, most significant coordinate first.
    Reflect(String),
    /// Rearrange coordinates by a bit order.
    Rotate(Vec<usize>),
    Random,
    Invert,
    Reset,
    Show,
    Json,
    Color { target: Target, color: Color },
    Uncolor { target: Target },
    Help,
    Verbose,
    Exit,
}

/// What a `color` or `uncolor` command acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The vertices themselves.
    Vertices(VertexSet),
    /// Edges of the subgraph induced by the vertices.
    Between(VertexSet),
    /// Vertices and edges of the subcube matched by a pattern.
    Subcube(String),
}

/// A set of vertices written either as labels or as one wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexSet {
    Labels(Vec<String>),
    Pattern(String),
}

/// Usage line, description and example for every command, in help order.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("new <n>", "draw the n-dimensional cube (0-5), alias dim", "new 4"),
    ("flip <axis>", "flip one coordinate", "flip 0"),
    ("swap <i> <j>", "exchange two coordinates", "swap 0 2"),
    ("reflect <bits>", "flip every coordinate marked 1", "reflect 101"),
    ("rotate <k...>", "reorder coordinates by a bit order", "rotate 1 2 0"),
    ("random", "apply a uniformly random symmetry", "random"),
    ("invert", "replace the symmetry by its inverse", "invert"),
    ("reset", "return to the identity", "reset"),
    ("show", "print the symmetry, its order and cycles", "show"),
    ("json", "print the symmetry and labeling as JSON", "json"),
    ("color <target> <color>", "color vertices or edges", "color between 1*0 red"),
    ("uncolor <target>", "remove colors", "uncolor subcube 1**"),
    ("help", "print this help", "help"),
    ("verbose", "toggle verbose output", "verbose"),
    ("exit", "leave, alias quit", "exit"),
];
