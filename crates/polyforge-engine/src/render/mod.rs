//! GPU rendering subsystem.
//!
//! [`MeshRenderer`] owns the mesh program and pipelines and turns position,
//! color and index streams into draw calls.
//!
//! Convention:
//! - geometry is already in clip space; the only per-draw input is a model
//!   matrix (identity for 2D draws)
//! - vertex shader remaps depth from `[-1, 1]` to wgpu's `[0, 1]`

mod ctx;
mod error;
mod mesh_renderer;
mod program;
mod vertex;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::{RenderError, ShaderStage};
pub use mesh_renderer::{MeshRenderer, RendererConfig};
pub use program::{CompiledStage, Program};
