//! # Hypercube Model
//!
//! Plain data describing the hypercube graph Qn: the dimension, vertex
//! labels, edges and the bit-string helpers used to read and print labels.
//!
//! Design rule: nothing in here knows about automorphisms being "current",
//! screen layout or terminals. This module is pure data with no I/O.

pub mod bits;
pub mod dimension;
pub mod vertex;
pub mod edge;
pub mod hypercube;

pub use dimension::{Dimension, MAX_DIMENSION};
pub use vertex::VertexId;
pub use edge::Edge;
pub use hypercube::Hypercube;
