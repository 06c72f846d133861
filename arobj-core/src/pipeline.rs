/// End-to-end composition: text payload in, mesh buffer and placement out
use crate::error::Error;
use crate::geometry::FlatMesh;
use crate::obj;
use crate::scale::{self, ScaleResult};

/// What the host should currently display for a scanned object.
///
/// The pipeline only ever returns `Ready` or `Failed`; `Pending` exists for
/// the host to show while the payload is still being fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshState {
    Pending,
    Ready {
        mesh: FlatMesh,
        placement: ScaleResult,
    },
    Failed(Error),
}

impl MeshState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Run the full pipeline: parse, derive placement, split vertices, assemble.
///
/// Pure and re-entrant; the same input always yields bit-identical output.
pub fn build(text: &str, target_size: f32) -> Result<(FlatMesh, ScaleResult), Error> {
    let description = obj::parse(text)?;
    let placement = scale::compute_scale(target_size, &description.vertices)?;
    let mesh = FlatMesh::from_description(&description);
    Ok((mesh, placement))
}

/// Like [`build`], folded into the display state the host renders.
pub fn build_state(text: &str, target_size: f32) -> MeshState {
    match build(text, target_size) {
        Ok((mesh, placement)) => MeshState::Ready { mesh, placement },
        Err(error) => MeshState::Failed(error),
    }
}
