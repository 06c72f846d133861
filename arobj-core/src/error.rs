/// Error types for the text-to-mesh pipeline
use thiserror::Error;

/// Errors produced while parsing an object description.
///
/// Line numbers are 1-based and refer to the raw payload, so hosts can point
/// diagnostics at the offending record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A `v` record has fewer than three coordinates or a non-numeric token
    #[error("line {line}: vertex record needs three numeric coordinates")]
    MalformedVertex { line: usize },

    /// A face reference is not an integer
    #[error("line {line}: face reference {token:?} is not an integer")]
    MalformedFace { line: usize, token: String },

    /// A face lists fewer than three vertex references
    #[error("line {line}: face lists {count} vertex references, need at least 3")]
    DegenerateFace { line: usize, count: usize },

    /// A face reference does not resolve to a parsed vertex
    #[error("face reference {reference} is outside the vertex list of length {vertex_count}")]
    IndexOutOfRange { reference: i64, vertex_count: usize },
}

/// Errors produced while deriving the placement scale.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// The bounding box spans zero distance on every axis
    #[error("bounding box has zero extent, cannot derive a scale factor")]
    DegenerateBounds,

    /// The requested normalized size is not a positive finite number
    #[error("target size {0} is not a positive finite number")]
    InvalidTargetSize(f32),
}

/// Any failure of the text-to-mesh pipeline.
///
/// Both sources stay distinguishable through this wrapper so the host can
/// decide between retrying the fetch and showing a fallback indicator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}
