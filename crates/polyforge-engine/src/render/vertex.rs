//! GPU-side layouts shared by the mesh pipelines.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Attribute locations fed to the vertex stage.
pub(super) const POSITION_LOCATION: u32 = 0;
pub(super) const COLOR_LOCATION: u32 = 1;

pub(super) const ATTRIBUTE_LOCATIONS: [u32; 2] = [POSITION_LOCATION, COLOR_LOCATION];

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![POSITION_LOCATION => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![COLOR_LOCATION => Float32x3];

/// Positions and colors travel in two tightly packed `vec3<f32>` streams,
/// slot 0 and slot 1.
pub(super) fn buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    let stride = std::mem::size_of::<[f32; 3]>() as u64;
    [
        wgpu::VertexBufferLayout {
            array_stride: stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &COLOR_ATTRS,
        },
    ]
}

/// Model matrix uniform (`@group(0) @binding(0)`), column-major.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ModelUniform {
    pub matrix: [f32; 16],
}

impl ModelUniform {
    pub(super) const SIZE: u64 = std::mem::size_of::<ModelUniform>() as u64;

    pub(super) fn new(matrix: Mat4) -> Self {
        Self {
            matrix: matrix.to_cols_array(),
        }
    }
}
