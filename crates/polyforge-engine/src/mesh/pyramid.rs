use glam::Vec3;

use crate::paint::{resolve_color, ColorSpec, NamedColor};

use super::Mesh;

pub const PYRAMID_COLOR: NamedColor = NamedColor::Yellow;

/// Square base on the `y = -1` plane (front-left, front-right, back-right,
/// back-left) plus the apex.
const CORNERS: [[f32; 3]; 5] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [0.0, 1.0, 0.0],
];

#[rustfmt::skip]
pub const PYRAMID_INDICES: [u32; 18] = [
    0, 2, 1,  0, 3, 2, // base, facing down
    0, 1, 4,           // front
    1, 2, 4,           // right
    2, 3, 4,           // back
    3, 0, 4,           // left
];

/// Square pyramid; base half-extent and apex height are both `0.5 * scale`
/// measured from `position`.
pub fn pyramid(color: impl Into<ColorSpec>, scale: f32, position: Vec3) -> Mesh {
    let s = scale * 0.5;
    let positions = CORNERS
        .iter()
        .map(|&[x, y, z]| (position + Vec3::new(x, y, z) * s).to_array())
        .collect();

    Mesh::indexed(positions, resolve_color(color), PYRAMID_INDICES.to_vec())
}
