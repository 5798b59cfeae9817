use glam::Vec2;

use crate::paint::{resolve_color, ColorSpec, NamedColor};

use super::{Mesh, Topology};

pub const SQUARE_COLOR: NamedColor = NamedColor::Blue;

/// Two explicit triangles; corners are repeated instead of indexed.
const TEMPLATE: [[f32; 2]; 6] = [
    [-0.5, 0.5],
    [-0.5, -0.5],
    [0.5, -0.5],
    [-0.5, 0.5],
    [0.5, -0.5],
    [0.5, 0.5],
];

/// Axis-aligned 2D square of side `scale`, 6 vertices, no index buffer.
pub fn square(color: impl Into<ColorSpec>, scale: f32, position: Vec2) -> Mesh {
    let positions = TEMPLATE
        .iter()
        .map(|&[x, y]| [position.x + x * scale, position.y + y * scale, 0.0])
        .collect();

    Mesh::unindexed(positions, resolve_color(color), Topology::TriangleList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::testing::{assert_uniform_color, double_area};

    #[test]
    fn white_unit_square_has_six_white_vertices() {
        let mesh = square("WHITE", 1.0, Vec2::ZERO);
        assert_eq!(mesh.vertex_count(), 6);
        assert!(mesh.indices.is_none());
        assert_uniform_color(&mesh, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn triangles_cover_the_unit_square() {
        let mesh = square("WHITE", 1.0, Vec2::ZERO);

        // Both triangles lie inside [-0.5, 0.5]^2 ...
        for p in &mesh.positions {
            assert!(p[0].abs() <= 0.5 && p[1].abs() <= 0.5 && p[2] == 0.0);
        }
        // ... and their areas add up to the full square.
        let area: f32 = mesh
            .triangles()
            .into_iter()
            .map(|t| double_area(&mesh, t) * 0.5)
            .sum();
        approx::assert_relative_eq!(area, 1.0);

        // All four corners are reached.
        for corner in [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]] {
            assert!(mesh.positions.iter().any(|p| p[0] == corner[0] && p[1] == corner[1]));
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise() {
        let mesh = square(SQUARE_COLOR, 1.0, Vec2::ZERO);
        for [a, b, c] in mesh.triangles() {
            let at = |i: u32| {
                let [x, y, _] = mesh.positions[i as usize];
                Vec2::new(x, y)
            };
            let (a, b, c) = (at(a), at(b), at(c));
            assert!((b - a).perp_dot(c - a) > 0.0);
        }
    }
}
