//! CGO instructions and their float encoding

use lin_alg::f64::Vec3;
use sketch_color::Color;

/// PyMOL CGO opcodes
pub mod opcode {
    pub const BEGIN: f32 = 2.0;
    pub const END: f32 = 3.0;
    pub const VERTEX: f32 = 4.0;
    pub const COLOR: f32 = 6.0;
    pub const SPHERE: f32 = 7.0;
    pub const CYLINDER: f32 = 9.0;
    pub const LINEWIDTH: f32 = 10.0;
    pub const ALPHA: f32 = 25.0;
    pub const CONE: f32 = 27.0;
}

/// Primitive mode for Begin/End blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    Lines,
}

impl PrimitiveMode {
    /// GL mode constant as used in the CGO float list
    pub fn code(self) -> f32 {
        match self {
            PrimitiveMode::Lines => 1.0,
        }
    }
}

/// CGO instruction
///
/// One tagged token of a primitive stream. Coordinates are kept in double
/// precision until the stream is flattened for the host.
#[derive(Debug, Clone)]
pub enum CgoOp {
    /// Set alpha (transparency) for subsequent primitives
    Alpha(f32),
    /// Set color for subsequent primitives
    Color(Color),
    /// Set line width for line primitives
    LineWidth(f32),
    /// Begin a primitive block
    Begin(PrimitiveMode),
    /// End a primitive block
    End,
    /// Vertex inside a Begin/End block
    Vertex(Vec3),
    /// Sphere at a position
    Sphere { center: Vec3, radius: f64 },
    /// Cylinder between two points, colored from `color1` to `color2`
    Cylinder {
        start: Vec3,
        end: Vec3,
        radius: f64,
        color1: Color,
        color2: Color,
    },
    /// Truncated cone from `start` (radius1) to `end` (radius2)
    Cone {
        start: Vec3,
        end: Vec3,
        radius1: f64,
        radius2: f64,
        color1: Color,
        color2: Color,
        /// Cap the `start` end
        base_cap: bool,
        /// Cap the `end` end
        tip_cap: bool,
    },
}

fn push_vec(out: &mut Vec<f32>, v: Vec3) {
    out.extend([v.x as f32, v.y as f32, v.z as f32]);
}

fn push_color(out: &mut Vec<f32>, c: Color) {
    out.extend(c.to_array());
}

fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

impl CgoOp {
    /// Number of floats this op occupies in the flattened list
    pub fn width(&self) -> usize {
        match self {
            CgoOp::Alpha(_) | CgoOp::LineWidth(_) | CgoOp::Begin(_) => 2,
            CgoOp::End => 1,
            CgoOp::Color(_) | CgoOp::Vertex(_) => 4,
            CgoOp::Sphere { .. } => 5,
            CgoOp::Cylinder { .. } => 14,
            CgoOp::Cone { .. } => 18,
        }
    }

    /// Append the opcode and operands to `out`
    pub fn write_floats(&self, out: &mut Vec<f32>) {
        match *self {
            CgoOp::Alpha(a) => out.extend([opcode::ALPHA, a]),
            CgoOp::Color(c) => {
                out.push(opcode::COLOR);
                push_color(out, c);
            }
            CgoOp::LineWidth(w) => out.extend([opcode::LINEWIDTH, w]),
            CgoOp::Begin(mode) => out.extend([opcode::BEGIN, mode.code()]),
            CgoOp::End => out.push(opcode::END),
            CgoOp::Vertex(v) => {
                out.push(opcode::VERTEX);
                push_vec(out, v);
            }
            CgoOp::Sphere { center, radius } => {
                out.push(opcode::SPHERE);
                push_vec(out, center);
                out.push(radius as f32);
            }
            CgoOp::Cylinder {
                start,
                end,
                radius,
                color1,
                color2,
            } => {
                out.push(opcode::CYLINDER);
                push_vec(out, start);
                push_vec(out, end);
                out.push(radius as f32);
                push_color(out, color1);
                push_color(out, color2);
            }
            CgoOp::Cone {
                start,
                end,
                radius1,
                radius2,
                color1,
                color2,
                base_cap,
                tip_cap,
            } => {
                out.push(opcode::CONE);
                push_vec(out, start);
                push_vec(out, end);
                out.extend([radius1 as f32, radius2 as f32]);
                push_color(out, color1);
                push_color(out, color2);
                out.extend([flag(base_cap), flag(tip_cap)]);
            }
        }
    }
}
