use glam::Vec2;

use crate::paint::{resolve_color, ColorSpec, NamedColor};

use super::{Mesh, Topology};

pub const TRIANGLE_COLOR: NamedColor = NamedColor::Red;

/// Unit template: apex up, base along `y = -0.5`.
const TEMPLATE: [[f32; 2]; 3] = [[0.0, 0.5], [-0.5, -0.5], [0.5, -0.5]];

/// Single 2D triangle in the `z = 0` plane, drawn as a triangle list.
pub fn triangle(color: impl Into<ColorSpec>, scale: f32, position: Vec2) -> Mesh {
    let positions = TEMPLATE
        .iter()
        .map(|&[x, y]| [position.x + x * scale, position.y + y * scale, 0.0])
        .collect();

    Mesh::unindexed(positions, resolve_color(color), Topology::TriangleList)
}
