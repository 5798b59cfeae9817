//! Parametric mesh generators.
//!
//! Every generator is a pure function returning a self-contained [`Mesh`]:
//! positions, one color per vertex and, for solids, a triangle index list.
//!
//! Conventions:
//! - positions live directly in clip space (roughly `[-1, 1]` on every axis);
//!   shapes are placed at generation time, the model matrix only rotates/scales
//! - `scale = 1.0` yields a shape that spans one unit (radius / half-extent 0.5)
//! - triangles wind counter-clockwise when seen from outside a solid
//! - no generator validates its parameters; zero or negative inputs produce
//!   degenerate or empty geometry, never an error
//!
//! Adding a primitive:
//! - add a generator file under `mesh::*`
//! - add a variant to [`Shape`]

mod circle;
mod cube;
mod cylinder;
mod prism;
mod pyramid;
mod shape;
mod sphere;
mod square;
mod triangle;

pub use circle::{circle, polygon, CIRCLE_COLOR, DEFAULT_CIRCLE_SEGMENTS, POLYGON_COLOR};
pub use cube::{cube, CUBE_COLOR, CUBE_INDICES};
pub use cylinder::{cylinder, CYLINDER_COLOR, DEFAULT_CYLINDER_HEIGHT, DEFAULT_CYLINDER_SEGMENTS};
pub use prism::{triangular_prism, PRISM_COLOR, PRISM_INDICES};
pub use pyramid::{pyramid, PYRAMID_COLOR, PYRAMID_INDICES};
pub use shape::Shape;
pub use sphere::{sphere, DEFAULT_SPHERE_DETAIL, SPHERE_COLOR};
pub use square::{square, SQUARE_COLOR};
pub use triangle::{triangle, TRIANGLE_COLOR};

use crate::paint::{replicate, Rgb};

/// How a non-indexed vertex stream is assembled into triangles.
///
/// Indexed meshes are always assembled as a triangle list.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Every three consecutive vertices form one triangle.
    #[default]
    TriangleList,
    /// The first vertex is shared; each following pair forms a triangle with it.
    TriangleFan,
}

/// A renderable shape: positions, per-vertex colors and optional indices.
///
/// Invariants (checked by [`Mesh::validate`]):
/// - `colors.len() == positions.len()`
/// - every index is `< positions.len()`
/// - the index count is a multiple of 3
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Option<Vec<u32>>,
    pub topology: Topology,
}

/// Broken [`Mesh`] invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("{colors} colors for {positions} positions")]
    ColorCountMismatch { positions: usize, colors: usize },
    #[error("index {index} at slot {slot} is out of range for {positions} positions")]
    IndexOutOfRange {
        slot: usize,
        index: u32,
        positions: usize,
    },
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),
}

impl Mesh {
    /// Builds a non-indexed mesh, coloring every vertex with `color`.
    pub fn unindexed(positions: Vec<[f32; 3]>, color: Rgb, topology: Topology) -> Self {
        let colors = replicate(color, positions.len());
        Self {
            positions,
            colors,
            indices: None,
            topology,
        }
    }

    /// Builds an indexed triangle-list mesh, coloring every vertex with `color`.
    pub fn indexed(positions: Vec<[f32; 3]>, color: Rgb, indices: Vec<u32>) -> Self {
        let colors = replicate(color, positions.len());
        Self {
            positions,
            colors,
            indices: Some(indices),
            topology: Topology::TriangleList,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Number of triangles the mesh assembles into.
    pub fn triangle_count(&self) -> usize {
        match (&self.indices, self.topology) {
            (Some(indices), _) => indices.len() / 3,
            (None, Topology::TriangleList) => self.positions.len() / 3,
            (None, Topology::TriangleFan) => self.positions.len().saturating_sub(2),
        }
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` stream.
    #[inline]
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as a flat `r, g, b, r, g, b, ...` stream.
    #[inline]
    pub fn flat_colors(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Iterates triangles as vertex-index triples in assembly order.
    ///
    /// Fans are expanded to `(0, i, i + 1)`.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        match (&self.indices, self.topology) {
            (Some(indices), _) => indices
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect(),
            (None, Topology::TriangleList) => (0..self.triangle_count() as u32)
                .map(|t| [t * 3, t * 3 + 1, t * 3 + 2])
                .collect(),
            (None, Topology::TriangleFan) => fan_indices(self.positions.len() as u32)
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect(),
        }
    }

    /// Checks the structural invariants.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.colors.len() != self.positions.len() {
            return Err(MeshError::ColorCountMismatch {
                positions: self.positions.len(),
                colors: self.colors.len(),
            });
        }
        if let Some(indices) = &self.indices {
            if indices.len() % 3 != 0 {
                return Err(MeshError::PartialTriangle(indices.len()));
            }
            if let Some((slot, &index)) = indices
                .iter()
                .enumerate()
                .find(|&(_, &i)| i as usize >= self.positions.len())
            {
                return Err(MeshError::IndexOutOfRange {
                    slot,
                    index,
                    positions: self.positions.len(),
                });
            }
        }
        Ok(())
    }
}

/// Triangle-list indices equivalent to a fan over `vertex_count` vertices.
pub fn fan_indices(vertex_count: u32) -> Vec<u32> {
    (1..vertex_count.saturating_sub(1))
        .flat_map(|i| [0, i, i + 1])
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::NamedColor;

    #[test]
    fn fan_indices_cover_every_rim_pair() {
        assert_eq!(fan_indices(5), vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
        assert!(fan_indices(2).is_empty());
        assert!(fan_indices(0).is_empty());
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let mut mesh = Mesh::indexed(
            vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            NamedColor::Red.rgb(),
            vec![0, 1, 3],
        );
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                slot: 2,
                index: 3,
                positions: 3
            })
        );
        mesh.indices = Some(vec![0, 1]);
        assert_eq!(mesh.validate(), Err(MeshError::PartialTriangle(2)));
    }

    #[test]
    fn validate_rejects_color_mismatch() {
        let mut mesh = Mesh::unindexed(vec![[0.0; 3]; 3], Rgb::white(), Topology::TriangleList);
        mesh.colors.pop();
        assert_eq!(
            mesh.validate(),
            Err(MeshError::ColorCountMismatch {
                positions: 3,
                colors: 2
            })
        );
    }

    #[test]
    fn flat_views_interleave_components() {
        let mesh = Mesh::unindexed(
            vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
            Rgb::new(0.1, 0.2, 0.3),
            Topology::TriangleList,
        );
        assert_eq!(mesh.flat_positions(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(mesh.flat_colors(), &[0.1, 0.2, 0.3, 0.1, 0.2, 0.3]);
    }
}
