//! # Rendering seam
//!
//! Gameplay never talks to a graphics API. It hands the renderer an opaque
//! mesh handle, an opaque material handle and a world matrix, once per
//! visible object per frame. Whatever sits behind [`Renderer`] (a GPU
//! backend, a recorder for tests) owns the actual resources.
//!
//! A failed draw means a collaborator broke an invariant (a stale or unknown
//! handle); it is reported as [`RenderError`] and propagated to the
//! application shell rather than recovered here.

mod recording;

pub use recording::{DrawCall, RecordingRenderer};

use crate::foundation::math::Mat4;
use thiserror::Error;

/// Handle to a mesh resource owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u64);

/// Handle to a material resource owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialHandle(pub u64);

/// Draw sink consumed by the game loop
pub trait Renderer {
    /// Queue one mesh draw with the given material and world transform
    fn draw(&mut self, mesh: MeshHandle, material: MaterialHandle, world: &Mat4) -> RenderResult<()>;
}

/// Errors surfaced by a renderer implementation
#[derive(Error, Debug)]
pub enum RenderError {
    /// A handle did not refer to a live resource
    #[error("Invalid {kind} handle: {id}")]
    InvalidHandle {
        /// Which kind of resource ("mesh" or "material")
        kind: &'static str,
        /// Raw handle value
        id: u64,
    },
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
