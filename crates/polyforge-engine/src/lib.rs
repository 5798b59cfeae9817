//! Polyforge engine crate.
//!
//! Parametric mesh generators plus the wgpu pipeline that draws them:
//! - `mesh`: pure generators for 2D and 3D primitives
//! - `paint`: color palette and resolution
//! - `coords`: model transforms
//! - `render`: shader program and mesh renderer
//! - `device`, `window`, `core`, `time`: platform loop and GPU context

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod mesh;
pub mod render;
pub mod paint;
