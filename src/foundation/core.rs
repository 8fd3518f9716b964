use crate::foundation::error::{RaysceneError, RaysceneResult};
use smallvec::SmallVec;

/// Numeric vector literal with 2 to 4 finite components.
///
/// Emitted as `<x, y, z>` by the serializer.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector(SmallVec<[f64; 4]>);

impl Vector {
    /// Smallest accepted arity.
    pub const MIN_ARITY: usize = 2;
    /// Largest accepted arity.
    pub const MAX_ARITY: usize = 4;

    /// Create a vector from a component slice.
    pub fn new(components: &[f64]) -> RaysceneResult<Self> {
        if !(Self::MIN_ARITY..=Self::MAX_ARITY).contains(&components.len()) {
            return Err(RaysceneError::value(format!(
                "vector needs {}..={} components, got {}",
                Self::MIN_ARITY,
                Self::MAX_ARITY,
                components.len()
            )));
        }
        for (i, c) in components.iter().enumerate() {
            finite(&format!("vector component {i}"), *c)?;
        }
        Ok(Self(SmallVec::from_slice(components)))
    }

    /// Two-component vector.
    pub fn uv(u: f64, v: f64) -> RaysceneResult<Self> {
        Self::new(&[u, v])
    }

    /// Three-component vector.
    pub fn xyz(x: f64, y: f64, z: f64) -> RaysceneResult<Self> {
        Self::new(&[x, y, z])
    }

    /// Four-component vector.
    pub fn xyzw(x: f64, y: f64, z: f64, w: f64) -> RaysceneResult<Self> {
        Self::new(&[x, y, z, w])
    }

    /// Number of components.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Components in order.
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// Return `true` when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == 0.0)
    }

    /// Fail unless the vector has exactly three components.
    pub(crate) fn expect_3d(self, what: &str) -> RaysceneResult<Self> {
        if self.arity() != 3 {
            return Err(RaysceneError::value(format!(
                "{what} must be a 3-component vector, got {} components",
                self.arity()
            )));
        }
        Ok(self)
    }

    /// Convert a three-component vector into a `glam` vector.
    pub(crate) fn to_dvec3(&self) -> Option<glam::DVec3> {
        match self.0.as_slice() {
            [x, y, z] => Some(glam::DVec3::new(*x, *y, *z)),
            _ => None,
        }
    }
}

/// Conversion into a validated [`Vector`].
///
/// Accepted by every API that takes a point, direction or size.
pub trait IntoVector {
    /// Validate and convert.
    fn into_vector(self) -> RaysceneResult<Vector>;
}

impl IntoVector for Vector {
    fn into_vector(self) -> RaysceneResult<Vector> {
        Ok(self)
    }
}

impl IntoVector for &Vector {
    fn into_vector(self) -> RaysceneResult<Vector> {
        Ok(self.clone())
    }
}

impl<const N: usize> IntoVector for [f64; N] {
    fn into_vector(self) -> RaysceneResult<Vector> {
        Vector::new(&self)
    }
}

impl IntoVector for &[f64] {
    fn into_vector(self) -> RaysceneResult<Vector> {
        Vector::new(self)
    }
}

impl IntoVector for Vec<f64> {
    fn into_vector(self) -> RaysceneResult<Vector> {
        Vector::new(&self)
    }
}

impl IntoVector for (f64, f64) {
    fn into_vector(self) -> RaysceneResult<Vector> {
        Vector::uv(self.0, self.1)
    }
}

impl IntoVector for (f64, f64, f64) {
    fn into_vector(self) -> RaysceneResult<Vector> {
        Vector::xyz(self.0, self.1, self.2)
    }
}

impl IntoVector for glam::DVec3 {
    fn into_vector(self) -> RaysceneResult<Vector> {
        Vector::xyz(self.x, self.y, self.z)
    }
}

/// Validate that a scalar is finite.
pub(crate) fn finite(what: &str, v: f64) -> RaysceneResult<f64> {
    if !v.is_finite() {
        return Err(RaysceneError::value(format!("{what} must be finite, got {v}")));
    }
    Ok(v)
}

/// Validate that a scalar is finite and strictly positive.
pub(crate) fn positive(what: &str, v: f64) -> RaysceneResult<f64> {
    finite(what, v)?;
    if v <= 0.0 {
        return Err(RaysceneError::value(format!("{what} must be > 0, got {v}")));
    }
    Ok(v)
}

/// Validate that a scalar is finite and not negative.
pub(crate) fn non_negative(what: &str, v: f64) -> RaysceneResult<f64> {
    finite(what, v)?;
    if v < 0.0 {
        return Err(RaysceneError::value(format!("{what} must be >= 0, got {v}")));
    }
    Ok(v)
}

/// Validate that a scalar lies in `[0, 1]`.
pub(crate) fn unit_interval(what: &str, v: f64) -> RaysceneResult<f64> {
    finite(what, v)?;
    if !(0.0..=1.0).contains(&v) {
        return Err(RaysceneError::value(format!(
            "{what} must be within [0, 1], got {v}"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
