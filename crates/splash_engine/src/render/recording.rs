//! Renderer that records draw calls instead of drawing
//!
//! Used by the headless runner and by tests that assert on what a frame
//! would have put on screen.

use super::{MaterialHandle, MeshHandle, RenderError, RenderResult, Renderer};
use crate::foundation::math::Mat4;
use std::collections::HashSet;

/// One recorded draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Mesh that was drawn
    pub mesh: MeshHandle,
    /// Material it was drawn with
    pub material: MaterialHandle,
    /// World matrix it was drawn at
    pub world: Mat4,
}

/// Renderer that keeps every draw call of the current frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
    known_meshes: Option<HashSet<MeshHandle>>,
    total_draws: u64,
}

impl RecordingRenderer {
    /// Create a recorder that accepts any handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that rejects meshes it was not told about
    pub fn with_known_meshes<I: IntoIterator<Item = MeshHandle>>(meshes: I) -> Self {
        Self {
            known_meshes: Some(meshes.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Drop the calls recorded so far (call at the start of each frame)
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Draw calls recorded since the last [`clear`](Self::clear)
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of recorded calls that used `mesh`
    pub fn count_mesh(&self, mesh: MeshHandle) -> usize {
        self.calls.iter().filter(|call| call.mesh == mesh).count()
    }

    /// Whether any recorded call used `mesh`
    pub fn drew(&self, mesh: MeshHandle) -> bool {
        self.calls.iter().any(|call| call.mesh == mesh)
    }

    /// Draws accepted over the recorder's lifetime
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, mesh: MeshHandle, material: MaterialHandle, world: &Mat4) -> RenderResult<()> {
        if let Some(known) = &self.known_meshes {
            if !known.contains(&mesh) {
                return Err(RenderError::InvalidHandle { kind: "mesh", id: mesh.0 });
            }
        }

        self.calls.push(DrawCall {
            mesh,
            material,
            world: *world,
        });
        self.total_draws += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_clears() {
        let mut renderer = RecordingRenderer::new();
        renderer.draw(MeshHandle(1), MaterialHandle(2), &Mat4::identity()).unwrap();
        renderer.draw(MeshHandle(1), MaterialHandle(3), &Mat4::identity()).unwrap();

        assert_eq!(renderer.count_mesh(MeshHandle(1)), 2);
        assert!(!renderer.drew(MeshHandle(9)));

        renderer.clear();
        assert!(renderer.calls().is_empty());
        assert_eq!(renderer.total_draws(), 2);
    }

    #[test]
    fn test_unknown_mesh_is_rejected() {
        let mut renderer = RecordingRenderer::with_known_meshes([MeshHandle(1)]);

        let err = renderer
            .draw(MeshHandle(7), MaterialHandle(0), &Mat4::identity())
            .unwrap_err();

        assert!(matches!(err, RenderError::InvalidHandle { kind: "mesh", id: 7 }));
        assert!(renderer.calls().is_empty());
    }
}
