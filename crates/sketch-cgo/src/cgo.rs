//! Primitive streams

use std::ops::{Add, AddAssign};

use crate::CgoOp;

/// An ordered stream of CGO instructions
///
/// Streams compose by concatenation with `+`. Composition keeps order, so
/// `a + b` draws `a` first and state directives in `b` (color, line width)
/// apply only to what follows them.
#[derive(Debug, Clone, Default)]
pub struct Cgo {
    ops: Vec<CgoOp>,
}

impl Cgo {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the instructions
    pub fn ops(&self) -> &[CgoOp] {
        &self.ops
    }

    /// Append an instruction
    pub fn push(&mut self, op: CgoOp) {
        self.ops.push(op);
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Count instructions matching a predicate
    pub fn count(&self, pred: impl Fn(&CgoOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Flatten to the host's CGO float list
    pub fn to_floats(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.ops.iter().map(CgoOp::width).sum());
        for op in &self.ops {
            op.write_floats(&mut out);
        }
        out
    }
}

impl From<Vec<CgoOp>> for Cgo {
    fn from(ops: Vec<CgoOp>) -> Self {
        Self { ops }
    }
}

impl FromIterator<CgoOp> for Cgo {
    fn from_iter<I: IntoIterator<Item = CgoOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl Add for Cgo {
    type Output = Cgo;

    fn add(mut self, other: Cgo) -> Cgo {
        self.ops.extend(other.ops);
        self
    }
}

impl AddAssign for Cgo {
    fn add_assign(&mut self, other: Cgo) {
        self.ops.extend(other.ops);
    }
}
