//! Shape builders
//!
//! Each builder returns a self-contained [`Cgo`] stream that can be composed
//! with others and rendered through a [`crate::CgoSink`].

use lin_alg::f64::Vec3;
use sketch_color::Color;

use crate::{Cgo, CgoOp, PrimitiveMode};

/// Default arrow head length, as a multiple of the shaft radius
pub const DEFAULT_HEAD_LENGTH_SCALE: f64 = 3.0;
/// Default arrow head radius, as a multiple of the head length
pub const DEFAULT_HEAD_RADIUS_SCALE: f64 = 0.6;
/// Default line width for wire boxes
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;
/// Shortest arrow that still has a direction
pub const MIN_ARROW_LENGTH: f64 = 1e-4;

/// Solid sphere
pub fn sphere(center: Vec3, radius: f64, color: Color) -> Cgo {
    Cgo::from(vec![CgoOp::Color(color), CgoOp::Sphere { center, radius }])
}

/// Cylinder from `p1` to `p2`, colored from `color1` to `color2`
pub fn cylinder(p1: Vec3, p2: Vec3, radius: f64, color1: Color, color2: Color) -> Cgo {
    Cgo::from(vec![CgoOp::Cylinder {
        start: p1,
        end: p2,
        radius,
        color1,
        color2,
    }])
}

/// Cone from base `p1` to tip `p2`
///
/// The base is always capped and the tip always open.
pub fn cone(p1: Vec3, p2: Vec3, radius1: f64, radius2: f64, color1: Color, color2: Color) -> Cgo {
    Cgo::from(vec![CgoOp::Cone {
        start: p1,
        end: p2,
        radius1,
        radius2,
        color1,
        color2,
        base_cap: true,
        tip_cap: false,
    }])
}

/// Arrow from `p1` (tail) to `p2` (tip)
///
/// Built as a cylinder shaft followed by a cone head that ends at `p2`.
///
/// # Example
///
/// ```
/// use lin_alg::f64::Vec3;
/// use sketch_cgo::Arrow;
/// use sketch_color::Color;
///
/// let cgo = Arrow::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0), 0.5, Color::RED)
///     .color2(Color::WHITE)
///     .head_length(2.0)
///     .build();
/// assert_eq!(cgo.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Arrow {
    p1: Vec3,
    p2: Vec3,
    radius: f64,
    color1: Color,
    color2: Option<Color>,
    color3: Option<Color>,
    head_length: Option<f64>,
    head_radius: Option<f64>,
    head_length_scale: f64,
    head_radius_scale: f64,
}

impl Arrow {
    pub fn new(p1: Vec3, p2: Vec3, radius: f64, color1: Color) -> Self {
        Self {
            p1,
            p2,
            radius,
            color1,
            color2: None,
            color3: None,
            head_length: None,
            head_radius: None,
            head_length_scale: DEFAULT_HEAD_LENGTH_SCALE,
            head_radius_scale: DEFAULT_HEAD_RADIUS_SCALE,
        }
    }

    /// Color at the shaft end and head base (default: `color1`)
    pub fn color2(mut self, color: Color) -> Self {
        self.color2 = Some(color);
        self
    }

    /// Color at the head tip (default: `color2`)
    pub fn color3(mut self, color: Color) -> Self {
        self.color3 = Some(color);
        self
    }

    pub fn head_length(mut self, length: f64) -> Self {
        self.head_length = Some(length);
        self
    }

    pub fn head_radius(mut self, radius: f64) -> Self {
        self.head_radius = Some(radius);
        self
    }

    pub fn head_length_scale(mut self, scale: f64) -> Self {
        self.head_length_scale = scale;
        self
    }

    pub fn head_radius_scale(mut self, scale: f64) -> Self {
        self.head_radius_scale = scale;
        self
    }

    /// Resolved head length
    pub fn resolved_head_length(&self) -> f64 {
        self.head_length
            .unwrap_or(self.radius * self.head_length_scale)
    }

    /// Resolved head radius
    pub fn resolved_head_radius(&self) -> f64 {
        self.head_radius
            .unwrap_or(self.resolved_head_length() * self.head_radius_scale)
    }

    /// Whether the endpoints are too close to define a direction
    pub fn is_degenerate(&self) -> bool {
        (self.p1 - self.p2).magnitude() <= MIN_ARROW_LENGTH
    }

    /// Junction between shaft and head
    ///
    /// A degenerate arrow has a null direction, so the junction is `p2`.
    pub fn junction(&self) -> Vec3 {
        let direction = if self.is_degenerate() {
            Vec3::new(0.0, 0.0, 0.0)
        } else {
            (self.p1 - self.p2).to_normalized()
        };
        self.p2 + direction * self.resolved_head_length()
    }

    pub fn build(&self) -> Cgo {
        let color2 = self.color2.unwrap_or(self.color1);
        let color3 = self.color3.unwrap_or(color2);
        let mid = self.junction();

        cylinder(self.p1, mid, self.radius, self.color1, color2)
            + cone(mid, self.p2, self.resolved_head_radius(), 0.0, color2, color3)
    }
}

impl From<Arrow> for Cgo {
    fn from(arrow: Arrow) -> Self {
        arrow.build()
    }
}

/// Box edges as vertex index pairs (0-based): front, back, then the four sides
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (3, 7),
    (1, 5),
    (2, 6),
];

/// Wire box through eight corner vertices
///
/// Vertices follow the numbering of `sketch_geom::BoundingBox::vertices`.
/// Emits a line-width directive, then one `LINES` block of 12 segments in a
/// single color.
pub fn wire_box(vertices: &[Vec3; 8], color: Color, line_width: f32) -> Cgo {
    let mut cgo = Cgo::from(vec![
        CgoOp::LineWidth(line_width),
        CgoOp::Begin(PrimitiveMode::Lines),
        CgoOp::Color(color),
    ]);
    for &(a, b) in &BOX_EDGES {
        cgo.push(CgoOp::Vertex(vertices[a]));
        cgo.push(CgoOp::Vertex(vertices[b]));
    }
    cgo.push(CgoOp::End);
    cgo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz(v: Vec3) -> (f64, f64, f64) {
        (v.x, v.y, v.z)
    }

    fn close(a: Vec3, b: (f64, f64, f64)) -> bool {
        (a.x - b.0).abs() < 1e-9 && (a.y - b.1).abs() < 1e-9 && (a.z - b.2).abs() < 1e-9
    }

    fn cube() -> [Vec3; 8] {
        let v = |x, y, z| Vec3::new(x, y, z);
        [
            v(0.0, 1.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(0.0, 0.0, 0.0),
            v(0.0, 1.0, 1.0),
            v(1.0, 1.0, 1.0),
            v(1.0, 0.0, 1.0),
            v(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_sphere() {
        let cgo = sphere(Vec3::new(1.0, 2.0, 3.0), 0.5, Color::new(0.1, 0.2, 0.3));
        assert_eq!(
            cgo.to_floats(),
            vec![6.0, 0.1, 0.2, 0.3, 7.0, 1.0, 2.0, 3.0, 0.5]
        );
    }

    #[test]
    fn test_cylinder() {
        let cgo = cylinder(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            0.25,
            Color::RED,
            Color::BLUE,
        );
        assert_eq!(
            cgo.to_floats(),
            vec![9.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.25, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_cone_caps() {
        let floats = cone(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            1.0,
            0.0,
            Color::WHITE,
            Color::WHITE,
        )
        .to_floats();
        assert_eq!(floats[0], 27.0);
        assert_eq!(&floats[16..], &[1.0, 0.0]);
    }

    #[test]
    fn test_arrow_defaults() {
        let arrow = Arrow::new(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            0.5,
            Color::RED,
        );
        assert_eq!(arrow.resolved_head_length(), 1.5);
        assert!((arrow.resolved_head_radius() - 0.9).abs() < 1e-12);
        assert!(close(arrow.junction(), (1.5, 0.0, 0.0)));

        let cgo = arrow.build();
        assert_eq!(cgo.len(), 2);
        match &cgo.ops()[0] {
            CgoOp::Cylinder {
                start,
                end,
                radius,
                color1,
                color2,
            } => {
                assert_eq!(xyz(*start), (10.0, 0.0, 0.0));
                assert!(close(*end, (1.5, 0.0, 0.0)));
                assert_eq!(*radius, 0.5);
                assert_eq!(*color1, Color::RED);
                assert_eq!(*color2, Color::RED);
            }
            other => panic!("expected cylinder, got {:?}", other),
        }
        match &cgo.ops()[1] {
            CgoOp::Cone {
                start,
                end,
                radius2,
                color1,
                color2,
                ..
            } => {
                assert!(close(*start, (1.5, 0.0, 0.0)));
                assert_eq!(xyz(*end), (0.0, 0.0, 0.0));
                assert_eq!(*radius2, 0.0);
                assert_eq!(*color1, Color::RED);
                assert_eq!(*color2, Color::RED);
            }
            other => panic!("expected cone, got {:?}", other),
        }
    }

    #[test]
    fn test_arrow_colors_cascade() {
        let cgo = Arrow::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 4.0),
            0.2,
            Color::RED,
        )
        .color2(Color::GREEN)
        .build();

        match &cgo.ops()[1] {
            CgoOp::Cone { color1, color2, .. } => {
                assert_eq!(*color1, Color::GREEN);
                assert_eq!(*color2, Color::GREEN);
            }
            other => panic!("expected cone, got {:?}", other),
        }
    }

    #[test]
    fn test_arrow_explicit_head() {
        let arrow = Arrow::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
            0.2,
            Color::RED,
        )
        .head_length(1.0)
        .head_radius(0.4)
        .color3(Color::BLUE);

        assert!(close(arrow.junction(), (0.0, 4.0, 0.0)));
        match &arrow.build().ops()[1] {
            CgoOp::Cone {
                radius1, color2, ..
            } => {
                assert_eq!(*radius1, 0.4);
                assert_eq!(*color2, Color::BLUE);
            }
            other => panic!("expected cone, got {:?}", other),
        }
    }

    #[test]
    fn test_arrow_coincident_endpoints() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let arrow = Arrow::new(p, p, 0.2, Color::RED);
        assert!(arrow.is_degenerate());
        assert_eq!(xyz(arrow.junction()), (1.0, 2.0, 3.0));

        let floats = arrow.build().to_floats();
        assert!(floats.iter().all(|f| f.is_finite()));
        assert_eq!(&floats[..7], &[9.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);

        let near = Arrow::new(p, p + Vec3::new(0.0, 0.0, 5e-5), 0.2, Color::RED);
        assert!(near.is_degenerate());
        assert!(near.build().to_floats().iter().all(|f| f.is_finite()));
        assert!(!Arrow::new(p, Vec3::new(0.0, 0.0, 0.0), 0.2, Color::RED).is_degenerate());
    }

    #[test]
    fn test_wire_box_layout() {
        let cgo = wire_box(&cube(), Color::GRAY, 3.0);
        let ops = cgo.ops();

        assert!(matches!(ops[0], CgoOp::LineWidth(w) if w == 3.0));
        assert!(matches!(ops[1], CgoOp::Begin(PrimitiveMode::Lines)));
        assert!(matches!(ops[2], CgoOp::Color(c) if c == Color::GRAY));
        assert!(matches!(ops[ops.len() - 1], CgoOp::End));
        assert_eq!(cgo.count(|op| matches!(op, CgoOp::Vertex(_))), 24);
        assert_eq!(cgo.count(|op| matches!(op, CgoOp::Color(_))), 1);
    }

    #[test]
    fn test_wire_box_edges() {
        let vertices = cube();
        let cgo = wire_box(&vertices, Color::GRAY, DEFAULT_LINE_WIDTH);
        let points: Vec<(f64, f64, f64)> = cgo
            .ops()
            .iter()
            .filter_map(|op| match op {
                CgoOp::Vertex(v) => Some(xyz(*v)),
                _ => None,
            })
            .collect();

        // Front face 1-2, 2-3, 3-4, 4-1
        assert_eq!(points[0], xyz(vertices[0]));
        assert_eq!(points[1], xyz(vertices[1]));
        assert_eq!(points[6], xyz(vertices[3]));
        assert_eq!(points[7], xyz(vertices[0]));
        // Sides 1-5, 4-8, 2-6, 3-7
        assert_eq!(&points[16..], &[
            xyz(vertices[0]),
            xyz(vertices[4]),
            xyz(vertices[3]),
            xyz(vertices[7]),
            xyz(vertices[1]),
            xyz(vertices[5]),
            xyz(vertices[2]),
            xyz(vertices[6]),
        ]);
        // Every segment is an edge of the unit cube
        for pair in points.chunks(2) {
            let (a, b) = (pair[0], pair[1]);
            let d = (a.0 - b.0).abs() + (a.1 - b.1).abs() + (a.2 - b.2).abs();
            assert_eq!(d, 1.0);
        }
    }
}
