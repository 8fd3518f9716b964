use std::ops::{Add, BitOr, Mul, Sub};

use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::object::Object;
use crate::object::shapes::Shape;

/// Constructive solid geometry operator.
///
/// Operators are structural tags: the renderer computes the boolean geometry, this crate
/// only keeps the children in order. For [`CsgOp::Difference`] the first child is the
/// positive volume and every later child is subtracted from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CsgOp {
    /// `union`, inside any child.
    Union,
    /// `merge`, a union with interior surfaces removed.
    Merge,
    /// `difference`, first child minus the rest.
    Difference,
    /// `intersection`, inside every child.
    Intersection,
}

impl CsgOp {
    /// Renderer keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Merge => "merge",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
        }
    }

    /// Fewest children the operator accepts.
    pub fn min_children(self) -> usize {
        match self {
            Self::Union | Self::Merge => 1,
            Self::Difference | Self::Intersection => 2,
        }
    }
}

impl Object {
    /// CSG node over `children`, kept in the given order.
    pub fn csg(op: CsgOp, children: impl IntoIterator<Item = Object>) -> RaysceneResult<Self> {
        let children: Vec<Object> = children.into_iter().collect();
        if children.len() < op.min_children() {
            return Err(RaysceneError::value(format!(
                "{} needs at least {} children, got {}",
                op.keyword(),
                op.min_children(),
                children.len()
            )));
        }
        Ok(Self::from_shape(Shape::Csg { op, children }))
    }

    /// `union { ... }`.
    pub fn union(children: impl IntoIterator<Item = Object>) -> RaysceneResult<Self> {
        Self::csg(CsgOp::Union, children)
    }

    /// `merge { ... }`.
    pub fn merge(children: impl IntoIterator<Item = Object>) -> RaysceneResult<Self> {
        Self::csg(CsgOp::Merge, children)
    }

    /// `difference { ... }`.
    pub fn difference(children: impl IntoIterator<Item = Object>) -> RaysceneResult<Self> {
        Self::csg(CsgOp::Difference, children)
    }

    /// `intersection { ... }`.
    pub fn intersection(children: impl IntoIterator<Item = Object>) -> RaysceneResult<Self> {
        Self::csg(CsgOp::Intersection, children)
    }

    /// Operator of a CSG node, `None` for primitives.
    pub fn csg_op(&self) -> Option<CsgOp> {
        match &self.shape {
            Shape::Csg { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// Children of a CSG node in emission order; empty for primitives.
    pub fn children(&self) -> &[Object] {
        match &self.shape {
            Shape::Csg { children, .. } => children,
            _ => &[],
        }
    }

    /// Append one more child to a CSG node.
    pub fn with_child(mut self, child: Object) -> RaysceneResult<Self> {
        match &mut self.shape {
            Shape::Csg { children, .. } => {
                children.push(child);
                Ok(self)
            }
            other => Err(RaysceneError::value(format!(
                "{} is not a CSG node and takes no children",
                other.keyword()
            ))),
        }
    }

    /// `self op rhs`, extending `self` when it is already a bare node of the same operator.
    fn combine(self, op: CsgOp, rhs: Object) -> Object {
        match self {
            Object {
                shape: Shape::Csg { op: lhs_op, mut children },
                attachments,
            } if lhs_op == op && attachments.is_empty() => {
                children.push(rhs);
                Self::from_shape(Shape::Csg { op, children })
            }
            lhs => Self::from_shape(Shape::Csg {
                op,
                children: vec![lhs, rhs],
            }),
        }
    }
}

impl Add for Object {
    type Output = Object;

    /// Union.
    fn add(self, rhs: Object) -> Object {
        self.combine(CsgOp::Union, rhs)
    }
}

impl Sub for Object {
    type Output = Object;

    /// Difference.
    fn sub(self, rhs: Object) -> Object {
        self.combine(CsgOp::Difference, rhs)
    }
}

impl Mul for Object {
    type Output = Object;

    /// Intersection.
    fn mul(self, rhs: Object) -> Object {
        self.combine(CsgOp::Intersection, rhs)
    }
}

impl BitOr for Object {
    type Output = Object;

    /// Merge.
    fn bitor(self, rhs: Object) -> Object {
        self.combine(CsgOp::Merge, rhs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/csg.rs"]
mod tests;
