//! The crate-wide error enum and result alias.
//!
//! Every fallible operation in the crate returns [`GeomError`] through the
//! [`Result`] alias; codec errors carry the 1-based source line they came
//! from.

use thiserror::Error;

/// Result type alias using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;

/// Errors that can occur during curve, mesh, or codec operations.
#[derive(Error, Debug)]
pub enum GeomError {
    /// A record carried the wrong number of numeric components.
    #[error("line {line}: expected {expected} components, found {actual}")]
    Dimension {
        /// Number of components the record requires.
        expected: usize,
        /// Number of components found.
        actual: usize,
        /// 1-based source line.
        line: usize,
    },

    /// A numeric token or face record could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based source line.
        line: usize,
        /// Description of the malformed token.
        message: String,
    },

    /// Area or volume was requested on a face that is not a triangle.
    #[error("face {face} has {len} vertices, only triangles are measurable")]
    UnsupportedFaceShape {
        /// The face index.
        face: usize,
        /// Number of vertices in the face.
        len: usize,
    },

    /// A computation hit geometry it is undefined on.
    #[error("degenerate geometry: {details}")]
    DegenerateGeometry {
        /// Description of the degenerate condition.
        details: String,
    },

    /// A face references an index outside its target collection.
    #[error("face {face} references invalid {what} index {index}")]
    InvalidIndex {
        /// The face index.
        face: usize,
        /// The out-of-range index (0-based).
        index: usize,
        /// Which collection the index targets: "vertex", "texcoord", or "normal".
        what: &'static str,
    },

    /// A caller-supplied argument fell outside an operation's accepted range.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value, rendered for the message.
        value: String,
        /// What the operation requires of the value.
        reason: &'static str,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeomError {
    /// Build an [`InvalidParameter`] error, rendering the value for the
    /// message.
    ///
    /// [`InvalidParameter`]: GeomError::InvalidParameter
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        GeomError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Build a [`DegenerateGeometry`] error from its description.
    ///
    /// [`DegenerateGeometry`]: GeomError::DegenerateGeometry
    pub fn degenerate(details: impl Into<String>) -> Self {
        GeomError::DegenerateGeometry {
            details: details.into(),
        }
    }
}
