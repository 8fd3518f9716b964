pub(crate) mod color;
mod names;

use crate::foundation::core::{Vector, finite};
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::serialize::sdl::Encoder;

pub use color::Color;

/// Property value carried by a modifier.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Scalar literal.
    Float(f64),
    /// Whole-number literal, written without a fractional part at any precision.
    Count(u64),
    /// Vector literal.
    Vector(Vector),
    /// Color literal.
    Color(Color),
    /// Bare keyword switch: `true` emits the key alone, `false` emits nothing.
    Flag(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Self::Color(c)
    }
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Count(_) => "whole number",
            Self::Vector(_) => "vector",
            Self::Color(_) => "color",
            Self::Flag(_) => "flag",
        }
    }

    /// `None` for flags, which carry no literal.
    pub(crate) fn encode(&self, enc: &Encoder) -> Option<String> {
        match self {
            Self::Float(v) => Some(enc.num(*v)),
            Self::Count(n) => Some(n.to_string()),
            Self::Vector(v) => Some(enc.vector(v)),
            Self::Color(c) => Some(c.encode(enc)),
            Self::Flag(_) => None,
        }
    }
}

/// Value type a property name accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ValueType {
    Float,
    /// Non-negative whole number.
    Count,
    Color,
    FloatOrColor,
    FloatOrVector,
    Flag,
}

impl ValueType {
    /// Validate `value` for property `key` of modifier `kind`.
    pub(crate) fn check(self, kind: &str, key: &str, value: Value) -> RaysceneResult<Value> {
        let what = format!("{kind} {key}");
        let ok = match (&value, self) {
            (Value::Float(v), Self::Float | Self::FloatOrColor | Self::FloatOrVector) => {
                finite(&what, *v)?;
                true
            }
            (Value::Float(v), Self::Count) => {
                finite(&what, *v)?;
                if *v < 0.0 || v.fract() != 0.0 || *v > u64::MAX as f64 {
                    return Err(RaysceneError::value(format!(
                        "{what} must be a non-negative whole number, got {v}"
                    )));
                }
                return Ok(Value::Count(*v as u64));
            }
            (Value::Count(_), Self::Count) => true,
            (Value::Vector(v), Self::FloatOrVector) => v.arity() == 3,
            (Value::Color(_), Self::Color | Self::FloatOrColor) => true,
            (Value::Flag(_), Self::Flag) => true,
            _ => false,
        };
        if !ok {
            return Err(RaysceneError::value(format!(
                "{what} expects {}, got {}",
                self.describe(),
                value.type_name()
            )));
        }
        Ok(value)
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Float => "a float",
            Self::Count => "a whole number",
            Self::Color => "a color",
            Self::FloatOrColor => "a float or a color",
            Self::FloatOrVector => "a float or a 3-component vector",
            Self::Flag => "a flag",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/value.rs"]
mod tests;
