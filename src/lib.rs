//! # hypercube-rs: Hypercube Automorphism Explorer
//!
//! Interactive exploration of the symmetries of the hypercube graphs
//! Q0..Q5, drawn as ASCII art.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: building a cube, composing symmetries, projecting and
//!    rendering are pure functions of their explicit inputs
//! 2. **Signed permutations**: an automorphism is a (permutation, flip mask)
//!    pair, so composition and inversion are O(n)
//! 3. **Fixed layout**: vertex positions never move; a symmetry only changes
//!    which label is drawn where
//! 4. **Explicit session**: the REPL owns a `Session` value, there is no
//!    global "current transform"
//!
//! ## Quick Start
//!
//! ```rust
//! use hypercube_rs::{Automorphism, Dimension, Hypercube, ProjectionTable, render};
//!
//! # fn example() -> hypercube_rs::Result<()> {
//! let dim = Dimension::new(2)?;
//! let cube = Hypercube::build(dim);
//! let table = ProjectionTable::build(dim);
//!
//! let flip = Automorphism::flip(0, dim)?;
//! let labeling = cube.labeling(&flip)?;
//! let frame = render::render(&table, &labeling, cube.edges(), None)?;
//!
//! println!("{frame}");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod automorphism;
pub mod projection;
pub mod render;
pub mod repl;
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Dimension, Edge, Hypercube, VertexId, MAX_DIMENSION};
pub use automorphism::{Automorphism, Generator};
pub use projection::{Point, ProjectionTable};
pub use render::{Color, Coloring, Frame};
pub use repl::Session;
pub use config::ReplConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported dimension {requested}: dimension must be between 0 and {max}", max = MAX_DIMENSION)]
    UnsupportedDimension { requested: usize },

    #[error("Dimension mismatch: expected dimension {expected}, got {got}")]
    DimensionMismatch { expected: u8, got: u8 },

    #[error("Invalid command at position {position}: {message}")]
    InvalidCommand { position: usize, message: String },

    #[error("Axis {axis} is out of range for dimension {dimension}")]
    AxisOutOfRange { axis: usize, dimension: u8 },

    #[error("Vertex {vertex} is out of range for dimension {dimension}")]
    VertexOutOfRange { vertex: u32, dimension: u8 },

    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("Invalid bit string '{0}': expected only 0 and 1")]
    InvalidBitString(String),

    #[error("Invalid reflection mask '{mask}': {message}")]
    InvalidMask { mask: String, message: String },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
