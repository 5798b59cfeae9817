//! The scenes shown by the studio, in presentation order.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};
use polyforge_engine::coords::Transform;
use polyforge_engine::mesh::{Mesh, Shape, DEFAULT_CIRCLE_SEGMENTS};
use polyforge_engine::paint::{ColorSpec, NamedColor};

/// Base view angles shared by every 3D scene.
pub const ANGLE_X: f32 = PI / 8.0;
pub const ANGLE_Y: f32 = PI / 6.0;

const SPHERE: Shape = Shape::Sphere { detail: 2 };
const HEXAGON: Shape = Shape::Polygon { sides: 6 };

/// One mesh and the model transform it is drawn with.
pub struct Item {
    pub shape: Shape,
    pub mesh: Mesh,
    pub transform: Option<Transform>,
}

impl Item {
    /// Drawn as generated, in clip space.
    fn flat(shape: Shape, color: impl Into<ColorSpec>, scale: f32, x: f32, y: f32) -> Self {
        Self {
            shape,
            mesh: shape.build(color, scale, Vec3::new(x, y, 0.0)),
            transform: None,
        }
    }

    /// Built at `position`, then drawn through `transform`.
    fn posed(
        shape: Shape,
        color: impl Into<ColorSpec>,
        scale: f32,
        position: Vec3,
        transform: Transform,
    ) -> Self {
        Self {
            shape,
            mesh: shape.build(color, scale, position),
            transform: Some(transform),
        }
    }

    pub fn matrix(&self) -> Option<Mat4> {
        self.transform.map(Transform::matrix)
    }
}

pub struct Scene {
    pub name: &'static str,
    pub caption: &'static str,
    pub depth_test: bool,
    pub items: Vec<Item>,
}

/// Builds every scene. Geometry is generated once, up front.
pub fn scenes() -> Vec<Scene> {
    vec![
        Scene {
            name: "sphere",
            caption: "Magenta sphere",
            depth_test: true,
            items: vec![Item::posed(
                SPHERE,
                "MAGENTA",
                0.7,
                Vec3::ZERO,
                Transform::new(ANGLE_X, ANGLE_Y, 0.8),
            )],
        },
        Scene {
            name: "cube",
            caption: "Blue cube",
            depth_test: true,
            items: vec![Item::posed(
                Shape::Cube,
                "BLUE",
                0.6,
                Vec3::ZERO,
                Transform::new(ANGLE_X, ANGLE_Y, 0.8),
            )],
        },
        Scene {
            name: "cylinder",
            caption: "Cyan cylinder",
            depth_test: true,
            items: vec![Item::posed(
                Shape::Cylinder {
                    segments: 16,
                    height: 1.0,
                },
                "CYAN",
                0.5,
                Vec3::ZERO,
                Transform::new(ANGLE_X, ANGLE_Y + PI / 8.0, 0.8),
            )],
        },
        Scene {
            name: "comparison",
            caption: "Sphere, cube and cylinder",
            depth_test: true,
            items: vec![
                Item::posed(
                    SPHERE,
                    "RED",
                    0.25,
                    Vec3::new(-0.5, 0.0, 0.0),
                    Transform::new(ANGLE_X, ANGLE_Y - PI / 12.0, 0.7),
                ),
                Item::posed(
                    Shape::Cube,
                    "GREEN",
                    0.25,
                    Vec3::ZERO,
                    Transform::new(ANGLE_X, ANGLE_Y, 0.7),
                ),
                Item::posed(
                    Shape::Cylinder {
                        segments: 12,
                        height: 0.8,
                    },
                    "BLUE",
                    0.2,
                    Vec3::new(0.5, 0.0, 0.0),
                    Transform::new(ANGLE_X, ANGLE_Y + PI / 12.0, 0.7),
                ),
            ],
        },
        Scene {
            name: "pyramid",
            caption: "Yellow pyramid",
            depth_test: true,
            items: vec![Item::posed(
                Shape::Pyramid,
                "YELLOW",
                0.6,
                Vec3::ZERO,
                Transform::new(ANGLE_X, ANGLE_Y + PI / 8.0, 0.8),
            )],
        },
        Scene {
            name: "prism",
            caption: "Green triangular prism",
            depth_test: true,
            items: vec![Item::posed(
                Shape::TriangularPrism,
                "GREEN",
                0.6,
                Vec3::ZERO,
                Transform::new(ANGLE_X + PI / 12.0, ANGLE_Y, 0.8),
            )],
        },
        Scene {
            name: "solids",
            caption: "Cube, pyramid and prism",
            depth_test: true,
            items: vec![
                Item::posed(
                    Shape::Cube,
                    "RED",
                    0.25,
                    Vec3::new(-0.4, 0.2, 0.0),
                    Transform::new(ANGLE_X, ANGLE_Y, 0.6),
                ),
                Item::posed(
                    Shape::Pyramid,
                    "BLUE",
                    0.25,
                    Vec3::new(0.4, 0.2, 0.0),
                    Transform::new(ANGLE_X, ANGLE_Y + PI / 6.0, 0.6),
                ),
                Item::posed(
                    Shape::TriangularPrism,
                    "GREEN",
                    0.25,
                    Vec3::new(0.0, -0.2, 0.0),
                    Transform::new(ANGLE_X + PI / 8.0, ANGLE_Y, 0.6),
                ),
            ],
        },
        Scene {
            name: "triangle",
            caption: "Red triangle",
            depth_test: false,
            items: vec![Item::flat(Shape::Triangle, "RED", 1.0, 0.0, 0.0)],
        },
        Scene {
            name: "flat",
            caption: "Square, circle, hexagon and triangle",
            depth_test: false,
            items: vec![
                Item::flat(Shape::Square, NamedColor::Blue, 0.6, -0.5, 0.5),
                Item::flat(
                    Shape::Circle {
                        segments: DEFAULT_CIRCLE_SEGMENTS,
                    },
                    NamedColor::Green,
                    0.6,
                    0.5,
                    0.5,
                ),
                Item::flat(HEXAGON, NamedColor::Yellow, 0.6, -0.5, -0.5),
                Item::flat(Shape::Triangle, NamedColor::Red, 0.6, 0.5, -0.5),
            ],
        },
    ]
}

/// Index of the scene called `name` (case-insensitive).
pub fn find(scenes: &[Scene], name: &str) -> Option<usize> {
    scenes.iter().position(|s| s.name.eq_ignore_ascii_case(name))
}
