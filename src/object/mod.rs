//! Geometric objects: primitives, CSG nodes and their attachments.
//!
//! An [`Object`] owns its children outright. Attachments (modifiers, transforms, flags)
//! are append-only and emitted after the shape arguments in attachment order, so a
//! transform attached to a CSG node applies to the combined result.

pub(crate) mod csg;
pub(crate) mod shapes;

use crate::foundation::core::IntoVector;
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::modifier::{Modifier, ModifierKind};
use crate::serialize::sdl::{Emit, Encoder, Sdl};
use crate::transform::{Axis, Transform};
use crate::value::Color;

pub use csg::CsgOp;
pub use shapes::Spline;

use shapes::Shape;

/// Bare keyword switch on an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectFlag {
    /// `hollow`, lets media fill the interior.
    Hollow,
    /// `no_shadow`
    NoShadow,
    /// `no_image`
    NoImage,
    /// `no_reflection`
    NoReflection,
    /// `double_illuminate`
    DoubleIlluminate,
    /// `inverse`, swaps inside and outside.
    Inverse,
}

impl ObjectFlag {
    fn keyword(self) -> &'static str {
        match self {
            Self::Hollow => "hollow",
            Self::NoShadow => "no_shadow",
            Self::NoImage => "no_image",
            Self::NoReflection => "no_reflection",
            Self::DoubleIlluminate => "double_illuminate",
            Self::Inverse => "inverse",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Attachment {
    Modifier(Modifier),
    Transform(Transform),
    Flag(ObjectFlag),
}

/// Primitive or CSG node with its attachments.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    shape: Shape,
    attachments: Vec<Attachment>,
}

impl Object {
    fn from_shape(shape: Shape) -> Self {
        Self {
            shape,
            attachments: Vec::new(),
        }
    }

    /// Renderer keyword of the node (`sphere`, `difference`, ...).
    pub fn keyword(&self) -> &'static str {
        self.shape.keyword()
    }

    /// Number of attachments.
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }

    /// Attach an appearance block.
    ///
    /// `media` and `density` belong inside an `interior` and are rejected here.
    pub fn with(mut self, modifier: impl Into<Modifier>) -> RaysceneResult<Self> {
        let modifier = modifier.into();
        if matches!(modifier.kind(), ModifierKind::Media | ModifierKind::Density) {
            return Err(RaysceneError::value(format!(
                "{} cannot be attached to an object directly; nest it in an interior",
                modifier.kind().keyword()
            )));
        }
        self.attachments.push(Attachment::Modifier(modifier));
        Ok(self)
    }

    /// Attach `pigment { color ... }`.
    pub fn color(mut self, color: Color) -> Self {
        self.attachments.push(Attachment::Modifier(Modifier::from(color)));
        self
    }

    /// Attach a transformation sequence.
    pub fn transform(mut self, t: &Transform) -> Self {
        self.attachments.push(Attachment::Transform(t.clone()));
        self
    }

    /// Attach `translate <v>`.
    pub fn translate(self, v: impl IntoVector) -> RaysceneResult<Self> {
        Ok(self.transform(&Transform::new().translate(v)?))
    }

    /// Attach a rotation about a principal axis.
    pub fn rotate(self, axis: Axis, angle_deg: f64) -> RaysceneResult<Self> {
        Ok(self.transform(&Transform::new().rotate(axis, angle_deg)?))
    }

    /// Attach `rotate <x, y, z>`.
    pub fn rotate_xyz(self, degrees: impl IntoVector) -> RaysceneResult<Self> {
        Ok(self.transform(&Transform::new().rotate_xyz(degrees)?))
    }

    /// Attach a uniform scale.
    pub fn scale(self, factor: f64) -> RaysceneResult<Self> {
        Ok(self.transform(&Transform::new().scale(factor)?))
    }

    /// Attach a per-axis scale.
    pub fn scale_xyz(self, factors: impl IntoVector) -> RaysceneResult<Self> {
        Ok(self.transform(&Transform::new().scale_xyz(factors)?))
    }

    /// Attach a keyword switch.
    pub fn flag(mut self, flag: ObjectFlag) -> Self {
        self.attachments.push(Attachment::Flag(flag));
        self
    }

    /// Independent deep copy; later attachments on either side do not affect the other.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub(crate) fn emit_node(&self, enc: &Encoder) -> Sdl {
        let mut items = self.shape.emit_args(enc);
        for attachment in &self.attachments {
            match attachment {
                Attachment::Modifier(m) => items.push(m.emit(enc)),
                Attachment::Transform(t) => items.extend(t.emit_ops(enc)),
                Attachment::Flag(f) => items.push(Sdl::line(f.keyword())),
            }
        }
        Sdl::block(self.shape.keyword(), items)
    }
}

impl Emit for Object {
    fn emit(&self, enc: &Encoder) -> Sdl {
        self.emit_node(enc)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/object.rs"]
mod tests;
