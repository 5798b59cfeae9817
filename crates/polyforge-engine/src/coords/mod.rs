//! Transform math shared by callers and the renderer.
//!
//! Mesh positions are already in clip space; the only transform in the system
//! is the per-draw model matrix (rotation + uniform scale).

mod transform;

pub use transform::{build_transform, Transform};
