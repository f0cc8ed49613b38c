//! Error types for mesh construction and generation.

/// Errors raised by mesh constructors and generators.
///
/// All variants are caller contract violations: they are reported before
/// any buffer is derived or any backend resource is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Primitive size must be strictly positive and finite.
    InvalidSize(f32),
    /// A vertex record must hold at least the three position components.
    StrideTooSmall {
        /// Requested components per record.
        stride: usize,
    },
    /// The vertex stream does not divide evenly into records.
    LengthMismatch {
        /// Stream length in floats.
        len: usize,
        /// Requested components per record.
        stride: usize,
    },
    /// The record count does not divide evenly into triangles.
    IncompleteTriangle {
        /// Number of complete records in the stream.
        records: usize,
    },
    /// An explicit triangle count disagrees with the stream length.
    TriangleCountMismatch {
        /// Triangle count declared by the caller.
        expected: usize,
        /// Stream length in floats.
        len: usize,
        /// Requested components per record.
        stride: usize,
    },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize(size) => {
                write!(f, "primitive size must be positive and finite, got {size}")
            }
            Self::StrideTooSmall { stride } => {
                write!(f, "vertex stride {stride} is smaller than a position record")
            }
            Self::LengthMismatch { len, stride } => {
                write!(f, "stream of {len} floats is not a multiple of stride {stride}")
            }
            Self::IncompleteTriangle { records } => {
                write!(f, "{records} vertex records do not form whole triangles")
            }
            Self::TriangleCountMismatch {
                expected,
                len,
                stride,
            } => {
                write!(
                    f,
                    "{expected} triangles require {} floats at stride {stride}, stream has {len}",
                    expected * stride * 3
                )
            }
        }
    }
}

impl std::error::Error for MeshError {}
