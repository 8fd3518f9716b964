//! Rayscene builds ray-tracer scenes as typed values and writes them out as
//! scene-description text for an external renderer.
//!
//! - Build [`Object`]s from primitives, combine them with CSG operators, attach
//!   [`Modifier`]s and [`Transform`]s
//! - Assemble a [`Scene`] with exactly one [`Camera`] plus lights and objects
//! - Write the document with a [`Serializer`] configured by [`SdlOptions`]
//!
//! Every input is validated when a node is built. Serializing a finished scene is a pure,
//! deterministic read: identical trees always produce byte-identical text.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod modifier;
pub(crate) mod object;
pub(crate) mod scene;
pub(crate) mod serialize;
pub(crate) mod transform;
pub(crate) mod value;

pub use crate::foundation::core::{IntoVector, Vector};
pub use crate::foundation::error::{RaysceneError, RaysceneResult};
pub use crate::modifier::{
    BlendMap, ImageFormat, MapKind, Modifier, ModifierKind, Pattern, PatternKind,
};
pub use crate::object::{CsgOp, Object, ObjectFlag, Spline};
pub use crate::scene::{AreaLight, Camera, LightSource, Orbit, SDL_VERSION, Scene, SceneItem};
pub use crate::serialize::{SceneFingerprint, SdlOptions, Serializer};
pub use crate::transform::{Axis, Scale, Transform, TransformOp};
pub use crate::value::{Color, Value};
