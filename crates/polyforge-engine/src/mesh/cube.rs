use glam::Vec3;

use crate::paint::{resolve_color, ColorSpec, NamedColor};

use super::Mesh;

pub const CUBE_COLOR: NamedColor = NamedColor::Blue;

/// Unit corners: front face (`z = +1`) then back face (`z = -1`), each
/// counter-clockwise starting bottom-left.
const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
];

/// Two triangles per face, outward winding.
#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2,  0, 2, 3, // front
    4, 6, 5,  4, 7, 6, // back
    4, 0, 3,  4, 3, 7, // left
    1, 5, 6,  1, 6, 2, // right
    4, 5, 1,  4, 1, 0, // bottom
    3, 2, 6,  3, 6, 7, // top
];

/// Axis-aligned cube with half-extent `0.5 * scale` centered at `position`.
pub fn cube(color: impl Into<ColorSpec>, scale: f32, position: Vec3) -> Mesh {
    let s = scale * 0.5;
    let positions = CORNERS
        .iter()
        .map(|&[x, y, z]| (position + Vec3::new(x, y, z) * s).to_array())
        .collect();

    Mesh::indexed(positions, resolve_color(color), CUBE_INDICES.to_vec())
}
