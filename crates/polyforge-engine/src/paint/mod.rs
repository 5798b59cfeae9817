//! Color model shared by the mesh generators and the renderer.
//!
//! Scope:
//! - per-vertex colors (`Rgb`) and their replication across a mesh
//! - the fixed named palette and name resolution
//! - clear colors (`Rgba`)

pub mod color;
pub mod palette;

pub use color::{replicate, replicate_flat, ColorSpec, Rgb, Rgba};
pub use palette::{lookup_color, resolve_color, NamedColor, UnknownColorName};
