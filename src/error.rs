use thiserror::Error;

/// Errors reported by the layout engine, the graph model and the importers.
///
/// Numerical degeneracies (coincident vertices, tiny pivots) are never
/// reported here, they are absorbed by the algorithms.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A vertex index outside `0..len` was passed to a per-vertex operation.
    #[error("vertex index {index} out of range for {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    /// An edge references a vertex that does not exist.
    #[error("edge ({}, {}) references a vertex outside 0..{n}", .edge.0, .edge.1)]
    EdgeOutOfRange { edge: (usize, usize), n: usize },

    /// Labels must be either absent or one per vertex.
    #[error("got {labels} labels for {n} vertices")]
    LabelCountMismatch { labels: usize, n: usize },

    /// A textual graph description could not be parsed.
    #[error("import failed: {0}")]
    Import(String),
}

pub type Result<T> = std::result::Result<T, Error>;
