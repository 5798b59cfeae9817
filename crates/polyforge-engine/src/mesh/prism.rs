use glam::Vec3;

use crate::paint::{resolve_color, ColorSpec, NamedColor};

use super::Mesh;

pub const PRISM_COLOR: NamedColor = NamedColor::Green;

/// Front cap (`z = +1`) then back cap (`z = -1`): top, bottom-left, bottom-right.
const CORNERS: [[f32; 3]; 6] = [
    [0.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
];

#[rustfmt::skip]
pub const PRISM_INDICES: [u32; 24] = [
    0, 1, 2,           // front cap
    3, 5, 4,           // back cap
    1, 4, 5,  1, 5, 2, // bottom
    0, 4, 1,  0, 3, 4, // left
    0, 2, 5,  0, 5, 3, // right
];

/// Triangular prism extruded along z; caps and depth span `scale`.
pub fn triangular_prism(color: impl Into<ColorSpec>, scale: f32, position: Vec3) -> Mesh {
    let s = scale * 0.5;
    let positions = CORNERS
        .iter()
        .map(|&[x, y, z]| (position + Vec3::new(x, y, z) * s).to_array())
        .collect();

    Mesh::indexed(positions, resolve_color(color), PRISM_INDICES.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::testing::{assert_outward, tetra_volume};

    #[test]
    fn prism_has_six_vertices_and_eight_triangles() {
        let mesh = triangular_prism(PRISM_COLOR, 1.0, Vec3::ZERO);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn caps_and_sides_wind_outward() {
        let mesh = triangular_prism(PRISM_COLOR, 1.0, Vec3::ZERO);
        // Centroid of the triangular cross-section.
        assert_outward(&mesh, [0.0, -1.0 / 6.0, 0.0]);
    }

    #[test]
    fn signed_volume_matches_extruded_area() {
        // Cross-section: base 2s, height 2s -> area 2s^2; depth 2s.
        let mesh = triangular_prism(PRISM_COLOR, 2.0, Vec3::ZERO);
        let volume: f32 = mesh
            .triangles()
            .into_iter()
            .map(|t| tetra_volume(&mesh, t, [0.0; 3]))
            .sum();
        approx::assert_relative_eq!(volume, 4.0, epsilon = 1e-5);
    }
}
