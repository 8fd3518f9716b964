//! Ordered transformation sequences.
//!
//! A [`Transform`] is a value: every builder call returns a new sequence and leaves the
//! receiver untouched, so one sequence can seed several branches of a scene. Operations
//! are emitted exactly in append order; nothing is merged, reordered or simplified.

use crate::foundation::core::{IntoVector, Vector, finite};
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::foundation::math;
use crate::serialize::sdl::{Encoder, Sdl};

/// Principal rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// +x
    X,
    /// +y
    Y,
    /// +z
    Z,
}

/// Scale factor of a [`TransformOp::Scale`].
#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    /// Same factor on every axis (`scale 2`).
    Uniform(f64),
    /// Per-axis factors (`scale <1, 2, 3>`).
    Axes(Vector),
}

/// Elementary operation of a [`Transform`].
#[derive(Clone, Debug, PartialEq)]
pub enum TransformOp {
    /// `translate <x, y, z>`
    Translate(Vector),
    /// `rotate <x, y, z>` in degrees, applied x then y then z by the renderer.
    Rotate(Vector),
    /// `scale s` or `scale <x, y, z>`
    Scale(Scale),
    /// `matrix <...>` with 12 values in row-vector layout.
    Matrix([f64; 12]),
    /// `transform { ... [inverse] }`
    Group {
        /// Grouped operations.
        ops: Transform,
        /// Apply the inverse of the group.
        inverse: bool,
    },
}

/// Persistent, append-only sequence of [`TransformOp`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, op: TransformOp) -> Self {
        let mut ops = Vec::with_capacity(self.ops.len() + 1);
        ops.extend_from_slice(&self.ops);
        ops.push(op);
        Self { ops }
    }

    /// Append a translation.
    pub fn translate(&self, v: impl IntoVector) -> RaysceneResult<Self> {
        let v = v.into_vector()?.expect_3d("translation")?;
        Ok(self.push(TransformOp::Translate(v)))
    }

    /// Append a rotation of `angle_deg` degrees about a principal axis.
    pub fn rotate(&self, axis: Axis, angle_deg: f64) -> RaysceneResult<Self> {
        let a = finite("rotation angle", angle_deg)?;
        let v = match axis {
            Axis::X => Vector::xyz(a, 0.0, 0.0),
            Axis::Y => Vector::xyz(0.0, a, 0.0),
            Axis::Z => Vector::xyz(0.0, 0.0, a),
        }?;
        Ok(self.push(TransformOp::Rotate(v)))
    }

    /// Append Euler rotations in degrees about x, then y, then z.
    pub fn rotate_xyz(&self, degrees: impl IntoVector) -> RaysceneResult<Self> {
        let v = degrees.into_vector()?.expect_3d("rotation")?;
        Ok(self.push(TransformOp::Rotate(v)))
    }

    /// Append a rotation about an arbitrary axis through the origin, emitted as a matrix.
    pub fn rotate_about(&self, axis: impl IntoVector, angle_deg: f64) -> RaysceneResult<Self> {
        let axis = axis.into_vector()?.expect_3d("rotation axis")?;
        let angle = finite("rotation angle", angle_deg)?;
        let dir = match axis.to_dvec3() {
            Some(d) if d.length_squared() > 0.0 => d,
            _ => return Err(RaysceneError::value("rotation axis must be non-zero")),
        };
        Ok(self.push(TransformOp::Matrix(math::axis_rotation_matrix(dir, angle))))
    }

    /// Append a uniform scale.
    pub fn scale(&self, factor: f64) -> RaysceneResult<Self> {
        nonzero_factor(factor)?;
        Ok(self.push(TransformOp::Scale(Scale::Uniform(factor))))
    }

    /// Append a per-axis scale.
    pub fn scale_xyz(&self, factors: impl IntoVector) -> RaysceneResult<Self> {
        let v = factors.into_vector()?.expect_3d("scale")?;
        for c in v.components() {
            nonzero_factor(*c)?;
        }
        Ok(self.push(TransformOp::Scale(Scale::Axes(v))))
    }

    /// Append a raw 4x3 matrix in the renderer's row-vector layout.
    pub fn matrix(&self, m: [f64; 12]) -> RaysceneResult<Self> {
        for (i, v) in m.iter().enumerate() {
            finite(&format!("matrix element {i}"), *v)?;
        }
        Ok(self.push(TransformOp::Matrix(m)))
    }

    /// Sequence applying `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Self {
        let mut ops = self.ops.clone();
        ops.extend_from_slice(&other.ops);
        Self { ops }
    }

    /// Wrap the sequence into one `transform { }` group.
    pub fn grouped(&self) -> Self {
        Self {
            ops: vec![TransformOp::Group {
                ops: self.clone(),
                inverse: false,
            }],
        }
    }

    /// Wrap the sequence into a group applied in reverse.
    pub fn inverse(&self) -> Self {
        Self {
            ops: vec![TransformOp::Group {
                ops: self.clone(),
                inverse: true,
            }],
        }
    }

    /// Operations in application order.
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Number of top-level operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Return `true` for the identity sequence.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// One line (or group block) per operation, in order.
    pub(crate) fn emit_ops(&self, enc: &Encoder) -> Vec<Sdl> {
        self.ops.iter().map(|op| op.emit(enc)).collect()
    }
}

impl TransformOp {
    fn emit(&self, enc: &Encoder) -> Sdl {
        match self {
            Self::Translate(v) => Sdl::line(format!("translate {}", enc.vector(v))),
            Self::Rotate(v) => Sdl::line(format!("rotate {}", enc.vector(v))),
            Self::Scale(Scale::Uniform(s)) => Sdl::line(format!("scale {}", enc.num(*s))),
            Self::Scale(Scale::Axes(v)) => Sdl::line(format!("scale {}", enc.vector(v))),
            Self::Matrix(m) => Sdl::line(format!("matrix <{}>", enc.nums(m))),
            Self::Group { ops, inverse } => {
                let mut items = ops.emit_ops(enc);
                if *inverse {
                    items.push(Sdl::line("inverse"));
                }
                Sdl::block("transform", items)
            }
        }
    }
}

fn nonzero_factor(v: f64) -> RaysceneResult<f64> {
    finite("scale factor", v)?;
    if v == 0.0 {
        return Err(RaysceneError::value("scale factor must be non-zero"));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/sequence.rs"]
mod tests;
