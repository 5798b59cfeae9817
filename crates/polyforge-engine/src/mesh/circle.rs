use std::f32::consts::TAU;

use glam::Vec2;

use crate::paint::{resolve_color, ColorSpec, NamedColor};

use super::{Mesh, Topology};

pub const CIRCLE_COLOR: NamedColor = NamedColor::Green;
pub const POLYGON_COLOR: NamedColor = NamedColor::Yellow;
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 32;

/// Circle approximated by a triangle fan of `segments` slices.
///
/// Layout: center first, then `segments + 1` rim vertices. The last rim vertex
/// repeats the first one so the fan closes without an index buffer.
pub fn circle(color: impl Into<ColorSpec>, scale: f32, position: Vec2, segments: u32) -> Mesh {
    Mesh::unindexed(fan(scale, position, segments), resolve_color(color), Topology::TriangleFan)
}

/// Regular polygon with `sides` sides; same fan layout as [`circle`].
pub fn polygon(sides: u32, color: impl Into<ColorSpec>, scale: f32, position: Vec2) -> Mesh {
    Mesh::unindexed(fan(scale, position, sides), resolve_color(color), Topology::TriangleFan)
}

fn fan(scale: f32, position: Vec2, segments: u32) -> Vec<[f32; 3]> {
    let radius = 0.5 * scale;

    let mut positions = Vec::with_capacity(segments as usize + 2);
    positions.push([position.x, position.y, 0.0]);

    for i in 0..=segments {
        let angle = i as f32 * TAU / segments as f32;
        positions.push([
            position.x + radius * angle.cos(),
            position.y + radius * angle.sin(),
            0.0,
        ]);
    }

    positions
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn eight_segment_circle_closes_its_seam() {
        let mesh = circle("red", 1.0, Vec2::ZERO, 8);
        assert_eq!(mesh.vertex_count(), 8 + 2);
        assert_eq!(mesh.topology, Topology::TriangleFan);
        assert!(mesh.indices.is_none());

        let first_rim = mesh.positions[1];
        let last_rim = mesh.positions[9];
        assert_abs_diff_eq!(first_rim[0], last_rim[0], epsilon = 1e-6);
        assert_abs_diff_eq!(first_rim[1], last_rim[1], epsilon = 1e-6);
        assert_eq!(mesh.colors[1], mesh.colors[9]);
    }

    #[test]
    fn rim_sits_at_half_scale_around_position() {
        let center = Vec2::new(0.2, -0.3);
        let mesh = circle(CIRCLE_COLOR, 0.8, center, 16);
        assert_eq!(mesh.positions[0], [0.2, -0.3, 0.0]);
        for p in &mesh.positions[1..] {
            let r = Vec2::new(p[0], p[1]).distance(center);
            assert_abs_diff_eq!(r, 0.4, epsilon = 1e-5);
            assert_eq!(p[2], 0.0);
        }
    }

    #[test]
    fn fan_assembles_one_triangle_per_segment() {
        let mesh = circle(CIRCLE_COLOR, 1.0, Vec2::ZERO, DEFAULT_CIRCLE_SEGMENTS);
        assert_eq!(mesh.triangle_count(), DEFAULT_CIRCLE_SEGMENTS as usize);
        assert!(mesh.triangles().iter().all(|t| t[0] == 0));
    }

    #[test]
    fn hexagon_corners_are_sixty_degrees_apart() {
        let mesh = polygon(6, POLYGON_COLOR, 2.0, Vec2::ZERO);
        assert_eq!(mesh.vertex_count(), 8);
        assert_abs_diff_eq!(mesh.positions[1][0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(mesh.positions[2][0], 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(mesh.positions[2][1], 3f32.sqrt() / 2.0, epsilon = 1e-6);
        assert!(mesh.colors.iter().all(|c| *c == [1.0, 1.0, 0.0]));
    }

    #[test]
    fn zero_segments_is_degenerate_not_a_panic() {
        let mesh = polygon(0, POLYGON_COLOR, 1.0, Vec2::ZERO);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.validate().is_ok());
    }
}
