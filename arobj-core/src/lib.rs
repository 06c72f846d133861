/// ARObj Core Library - text-to-mesh pipeline for QR-anchored object viewing
///
/// This library provides the stateless core for turning a fetched
/// Wavefront-style object description into a flat-shaded mesh buffer with
/// placement metadata. Camera frames, barcode decoding, networking, and
/// rendering-resource upload belong to the hosting application.

pub mod error;
pub mod geometry;
pub mod obj;
pub mod pipeline;
pub mod scale;

// Re-export commonly used types
pub use error::{Error, ParseError, ScaleError};
pub use geometry::{flatten, FlatMesh, ObjectDescription};
pub use obj::{parse, triangulate};
pub use pipeline::{build, build_state, MeshState};
pub use scale::{compute_scale, Aabb, ScaleResult};
