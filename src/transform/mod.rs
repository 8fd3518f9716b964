pub(crate) mod sequence;

pub use sequence::{Axis, Scale, Transform, TransformOp};
