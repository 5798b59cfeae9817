use core::fmt;
use core::str::FromStr;

use glam::{Vec2, Vec3};

use crate::paint::{ColorSpec, NamedColor};

use super::*;

/// Primitive selector carrying the shape-specific parameters.
///
/// Every generator is reachable through [`Shape::build`]; 2D shapes take the
/// `x`/`y` of `position` and ignore `z`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Triangle,
    Square,
    Circle { segments: u32 },
    Polygon { sides: u32 },
    Cube,
    Pyramid,
    TriangularPrism,
    Cylinder { segments: u32, height: f32 },
    Sphere { detail: u32 },
}

impl Shape {
    /// All primitives with their default parameters.
    pub const ALL: [Shape; 9] = [
        Shape::Triangle,
        Shape::Square,
        Shape::Circle {
            segments: DEFAULT_CIRCLE_SEGMENTS,
        },
        Shape::Polygon { sides: 6 },
        Shape::Cube,
        Shape::Pyramid,
        Shape::TriangularPrism,
        Shape::Cylinder {
            segments: DEFAULT_CYLINDER_SEGMENTS,
            height: DEFAULT_CYLINDER_HEIGHT,
        },
        Shape::Sphere {
            detail: DEFAULT_SPHERE_DETAIL,
        },
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Circle { .. } => "circle",
            Shape::Polygon { .. } => "polygon",
            Shape::Cube => "cube",
            Shape::Pyramid => "pyramid",
            Shape::TriangularPrism => "prism",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Sphere { .. } => "sphere",
        }
    }

    /// Color used when the caller has no preference.
    pub const fn default_color(self) -> NamedColor {
        match self {
            Shape::Triangle => TRIANGLE_COLOR,
            Shape::Square => SQUARE_COLOR,
            Shape::Circle { .. } => CIRCLE_COLOR,
            Shape::Polygon { .. } => POLYGON_COLOR,
            Shape::Cube => CUBE_COLOR,
            Shape::Pyramid => PYRAMID_COLOR,
            Shape::TriangularPrism => PRISM_COLOR,
            Shape::Cylinder { .. } => CYLINDER_COLOR,
            Shape::Sphere { .. } => SPHERE_COLOR,
        }
    }

    /// True for shapes that produce an index buffer.
    pub const fn is_solid(self) -> bool {
        !matches!(
            self,
            Shape::Triangle | Shape::Square | Shape::Circle { .. } | Shape::Polygon { .. }
        )
    }

    pub fn build(self, color: impl Into<ColorSpec>, scale: f32, position: Vec3) -> Mesh {
        let flat = Vec2::new(position.x, position.y);
        match self {
            Shape::Triangle => triangle(color, scale, flat),
            Shape::Square => square(color, scale, flat),
            Shape::Circle { segments } => circle(color, scale, flat, segments),
            Shape::Polygon { sides } => polygon(sides, color, scale, flat),
            Shape::Cube => cube(color, scale, position),
            Shape::Pyramid => pyramid(color, scale, position),
            Shape::TriangularPrism => triangular_prism(color, scale, position),
            Shape::Cylinder { segments, height } => {
                cylinder(color, scale, position, segments, height)
            }
            Shape::Sphere { detail } => sphere(color, scale, position, detail),
        }
    }

    /// Builds the shape with its default color, unit scale, at the origin.
    pub fn build_default(self) -> Mesh {
        self.build(self.default_color(), 1.0, Vec3::ZERO)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a shape name (case-insensitive) into its default-parameter preset.
impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown shape '{s}'"))
    }
}
