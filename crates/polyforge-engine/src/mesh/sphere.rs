use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::paint::{resolve_color, ColorSpec, NamedColor};

use super::Mesh;

pub const SPHERE_COLOR: NamedColor = NamedColor::Magenta;
pub const DEFAULT_SPHERE_DETAIL: u32 = 1;

/// Latitude/longitude ("UV") sphere of radius `0.5 * scale`.
///
/// `detail` multiplies the band counts: `8 * detail` latitude bands from the
/// +y pole down and `16 * detail` longitude slices. The grid holds
/// `(lat + 1) * (lon + 1)` vertices; the extra column repeats the `phi = 0`
/// seam so every cell can be indexed the same way.
///
/// Cells touching a pole collapse to zero-area triangles. They are kept.
pub fn sphere(color: impl Into<ColorSpec>, scale: f32, position: Vec3, detail: u32) -> Mesh {
    let radius = scale * 0.5;
    let lat_segments = 8 * detail;
    let lon_segments = 16 * detail;
    let row = lon_segments + 1;

    let mut positions = Vec::with_capacity(((lat_segments + 1) * row) as usize);
    for lat in 0..=lat_segments {
        let theta = lat as f32 * PI / lat_segments as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=lon_segments {
            let phi = lon as f32 * TAU / lon_segments as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let dir = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            positions.push((position + dir * radius).to_array());
        }
    }

    let mut indices = Vec::with_capacity((6 * lat_segments * lon_segments) as usize);
    for lat in 0..lat_segments {
        for lon in 0..lon_segments {
            let first = lat * row + lon;
            let second = first + row;

            // Cell triangles {first, second, first + 1} and
            // {second, second + 1, first + 1}, ordered counter-clockwise
            // from outside (phi grows clockwise seen from +y).
            indices.extend_from_slice(&[first, first + 1, second]);
            indices.extend_from_slice(&[second, first + 1, second + 1]);
        }
    }

    Mesh::indexed(positions, resolve_color(color), indices)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::mesh::testing::{assert_outward, assert_uniform_color, double_area, tetra_volume};

    #[test]
    fn detail_one_counts() {
        let mesh = sphere(SPHERE_COLOR, 1.0, Vec3::ZERO, 1);
        assert_eq!(mesh.vertex_count(), (8 + 1) * (16 + 1));
        assert_eq!(mesh.vertex_count(), 153);
        assert_eq!(mesh.triangle_count(), 2 * 8 * 16);
        assert!(mesh.validate().is_ok());
        assert_uniform_color(&mesh, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn detail_scales_both_band_counts() {
        let mesh = sphere(SPHERE_COLOR, 1.0, Vec3::ZERO, 2);
        assert_eq!(mesh.vertex_count(), 17 * 33);
        assert_eq!(mesh.triangle_count(), 2 * 16 * 32);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn vertices_lie_on_the_sphere() {
        let center = Vec3::new(-0.5, 0.0, 0.25);
        let mesh = sphere("red", 0.5, center, 2);
        for p in &mesh.positions {
            assert_abs_diff_eq!(Vec3::from_array(*p).distance(center), 0.25, epsilon = 1e-5);
        }
    }

    #[test]
    fn grid_follows_theta_phi_parametrisation() {
        let mesh = sphere(SPHERE_COLOR, 2.0, Vec3::ZERO, 1);
        // lat 0 is the +y pole.
        assert_abs_diff_eq!(mesh.positions[0][1], 1.0, epsilon = 1e-6);
        // lat 4 (equator), lon 4 (phi = pi / 2) points along +z.
        let p = mesh.positions[4 * 17 + 4];
        assert_abs_diff_eq!(p[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p[1], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p[2], 1.0, epsilon = 1e-6);
        // Seam column duplicates phi = 0.
        for lat in 0..=8 {
            let a = mesh.positions[lat * 17];
            let b = mesh.positions[lat * 17 + 16];
            for axis in 0..3 {
                assert_abs_diff_eq!(a[axis], b[axis], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn cells_use_first_second_grid_indices() {
        let mesh = sphere(SPHERE_COLOR, 1.0, Vec3::ZERO, 1);
        let tris = mesh.triangles();
        let sorted = |mut t: [u32; 3]| {
            t.sort_unstable();
            t
        };
        // Cell (lat 1, lon 2): first = 19, second = 36.
        let cell = (16 + 2) * 2;
        assert_eq!(sorted(tris[cell]), [19, 20, 36]);
        assert_eq!(sorted(tris[cell + 1]), [20, 36, 37]);
    }

    #[test]
    fn pole_triangles_are_degenerate() {
        let mesh = sphere(SPHERE_COLOR, 1.0, Vec3::ZERO, 1);
        let tris = mesh.triangles();
        // First triangle of every top-row cell has two vertices at the pole.
        for lon in 0..16 {
            assert!(double_area(&mesh, tris[lon * 2]) < 1e-6);
        }
        // Second triangle of every bottom-row cell likewise.
        let last_row = 7 * 16 * 2;
        for lon in 0..16 {
            assert!(double_area(&mesh, tris[last_row + lon * 2 + 1]) < 1e-6);
        }
    }

    #[test]
    fn winding_is_outward() {
        let mesh = sphere(SPHERE_COLOR, 1.0, Vec3::ZERO, 1);
        assert_outward(&mesh, [0.0; 3]);

        let volume: f32 = mesh
            .triangles()
            .into_iter()
            .map(|t| tetra_volume(&mesh, t, [0.0; 3]))
            .sum();
        assert!(volume > 0.0);
    }
}
