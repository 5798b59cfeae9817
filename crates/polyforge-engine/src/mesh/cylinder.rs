use std::f32::consts::TAU;

use glam::Vec3;

use crate::paint::{resolve_color, ColorSpec, NamedColor};

use super::Mesh;

pub const CYLINDER_COLOR: NamedColor = NamedColor::Cyan;
pub const DEFAULT_CYLINDER_SEGMENTS: u32 = 16;
pub const DEFAULT_CYLINDER_HEIGHT: f32 = 1.0;

/// Capped cylinder around the y axis.
///
/// Vertex layout:
/// - `0`: bottom cap center, `1`: top cap center
/// - `2 + i`: bottom rim vertex `i`
/// - `2 + segments + i`: top rim vertex `i`
///
/// Each segment contributes a bottom fan triangle, a top fan triangle (opposite
/// winding) and two side triangles: `4 * segments` triangles in total.
pub fn cylinder(
    color: impl Into<ColorSpec>,
    scale: f32,
    position: Vec3,
    segments: u32,
    height: f32,
) -> Mesh {
    let radius = scale * 0.5;
    let h = height * 0.5;
    let n = segments as usize;

    let mut positions = Vec::with_capacity(2 + 2 * n);
    positions.push((position - Vec3::Y * h).to_array());
    positions.push((position + Vec3::Y * h).to_array());

    let rim: Vec<Vec3> = (0..segments)
        .map(|i| {
            let angle = i as f32 * TAU / segments as f32;
            position + Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect();
    positions.extend(rim.iter().map(|p| (*p - Vec3::Y * h).to_array()));
    positions.extend(rim.iter().map(|p| (*p + Vec3::Y * h).to_array()));

    let bottom = |i: u32| 2 + i;
    let top = |i: u32| 2 + segments + i;

    let mut indices = Vec::with_capacity(12 * n);
    for i in 0..segments {
        let next = (i + 1) % segments;

        indices.extend_from_slice(&[0, bottom(i), bottom(next)]);
        indices.extend_from_slice(&[1, top(next), top(i)]);

        indices.extend_from_slice(&[bottom(i), top(i), top(next)]);
        indices.extend_from_slice(&[bottom(i), top(next), bottom(next)]);
    }

    Mesh::indexed(positions, resolve_color(color), indices)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use approx::assert_abs_diff_eq;
    use glam::Vec2;

    use super::*;
    use crate::mesh::testing::{assert_outward, assert_uniform_color};

    fn edge(a: u32, b: u32) -> (u32, u32) {
        (a.min(b), a.max(b))
    }

    fn edges(tri: &[u32]) -> BTreeSet<(u32, u32)> {
        [edge(tri[0], tri[1]), edge(tri[1], tri[2]), edge(tri[2], tri[0])]
            .into_iter()
            .collect()
    }

    #[test]
    fn four_segments_give_ten_vertices_and_sixteen_triangles() {
        let mesh = cylinder(CYLINDER_COLOR, 1.0, Vec3::ZERO, 4, 1.0);
        assert_eq!(mesh.vertex_count(), 2 + 2 * 4);
        assert_eq!(mesh.triangle_count(), 4 * 4);
        assert!(mesh.validate().is_ok());
        assert_uniform_color(&mesh, [0.0, 1.0, 1.0]);
    }

    #[test]
    fn index_pattern_per_segment() {
        let mesh = cylinder(CYLINDER_COLOR, 1.0, Vec3::ZERO, 4, 1.0);
        let indices = mesh.indices.as_deref().unwrap();
        // Segment 0: bottom fan, top fan, two side triangles.
        assert_eq!(&indices[..12], &[0, 2, 3, 1, 7, 6, 2, 6, 7, 2, 7, 3]);
        // Last segment wraps back to rim vertex 0.
        assert_eq!(&indices[36..], &[0, 5, 2, 1, 6, 9, 5, 9, 6, 5, 6, 2]);
    }

    #[test]
    fn adjacent_side_triangles_share_the_vertical_edge() {
        let segments = 4;
        let mesh = cylinder(CYLINDER_COLOR, 1.0, Vec3::ZERO, segments, 1.0);
        let tris: Vec<&[u32]> = mesh.indices.as_deref().unwrap().chunks(3).collect();

        for i in 0..segments {
            let prev = (i + segments - 1) % segments;
            // Per segment: [bottom fan, top fan, side a, side b].
            let side_a = tris[(i * 4 + 2) as usize];
            let prev_side_b = tris[(prev * 4 + 3) as usize];

            let shared: Vec<_> = edges(side_a).intersection(&edges(prev_side_b)).copied().collect();
            assert_eq!(shared, vec![edge(2 + i, 2 + segments + i)]);
        }
    }

    #[test]
    fn rims_sit_at_half_height() {
        let mesh = cylinder(CYLINDER_COLOR, 0.5, Vec3::new(0.0, 0.1, 0.0), 12, 0.8);
        assert_abs_diff_eq!(mesh.positions[0][1], -0.3, epsilon = 1e-6);
        assert_abs_diff_eq!(mesh.positions[1][1], 0.5, epsilon = 1e-6);
        for p in &mesh.positions[2..14] {
            assert_abs_diff_eq!(p[1], -0.3, epsilon = 1e-6);
            assert_abs_diff_eq!(Vec2::new(p[0], p[2]).length(), 0.25, epsilon = 1e-6);
        }
        for p in &mesh.positions[14..] {
            assert_abs_diff_eq!(p[1], 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn all_faces_wind_outward() {
        let mesh = cylinder(CYLINDER_COLOR, 1.0, Vec3::ZERO, DEFAULT_CYLINDER_SEGMENTS, 1.0);
        assert_outward(&mesh, [0.0; 3]);
    }

    #[test]
    fn zero_segments_yield_only_cap_centers() {
        let mesh = cylinder(CYLINDER_COLOR, 1.0, Vec3::ZERO, 0, 1.0);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.triangle_count(), 0);
    }
}
