/// Mesh data structures and the flat-shading vertex split
use nalgebra::Point3;

/// A parsed object description: an optional name, vertex positions in file
/// order, and zero-based triangle indices (three per triangle).
///
/// Produced once per [`crate::obj::parse`] call and never mutated; the later
/// pipeline stages derive new values from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDescription {
    /// Object name from the last `o` record, if any
    pub name: Option<String>,
    pub vertices: Vec<Point3<f32>>,
    /// Every index is `< vertices.len()`; the parser rejects anything else
    pub face_indices: Vec<u32>,
}

impl ObjectDescription {
    pub fn triangle_count(&self) -> usize {
        self.face_indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// A flat-shaded mesh buffer: every triangle owns three private vertex
/// copies, so the host renderer can give each face its own normal.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatMesh {
    /// Empty when the source description carried no `o` record
    pub name: String,
    pub vertices: Vec<Point3<f32>>,
    /// Always the identity sequence `0..vertices.len()`
    pub indices: Vec<u32>,
}

impl FlatMesh {
    /// Compose a mesh buffer from already-split vertex and index lists.
    pub fn assemble(name: String, vertices: Vec<Point3<f32>>, indices: Vec<u32>) -> Self {
        Self {
            name,
            vertices,
            indices,
        }
    }

    /// Split and assemble a parsed description into a flat-shaded buffer.
    pub fn from_description(description: &ObjectDescription) -> Self {
        let (vertices, indices) = flatten(&description.vertices, &description.face_indices);
        Self::assemble(
            description.name.clone().unwrap_or_default(),
            vertices,
            indices,
        )
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Rewrite shared-vertex topology into one private vertex per triangle
/// corner.
///
/// For each position `i` in `indices`, copies `vertices[indices[i]]` and
/// emits `i` as the new index, so the returned index list is the identity
/// sequence. Indices must be in range; [`crate::obj::parse`] guarantees that
/// for its output.
pub fn flatten(vertices: &[Point3<f32>], indices: &[u32]) -> (Vec<Point3<f32>>, Vec<u32>) {
    let mut split_vertices = Vec::with_capacity(indices.len());
    let mut split_indices = Vec::with_capacity(indices.len());

    for (position, &index) in indices.iter().enumerate() {
        debug_assert!((index as usize) < vertices.len());
        split_vertices.push(vertices[index as usize]);
        split_indices.push(position as u32);
    }

    (split_vertices, split_indices)
}
