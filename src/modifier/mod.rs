//! Appearance blocks: pigment, normal, finish, interior, media, density, texture and
//! interior_texture.
//!
//! A [`Modifier`] holds an optional leading [`Pattern`] and an ordered list of entries.
//! Setting a property that is already present drops the old entry and appends the new
//! one, so the emitted block carries only the last value at its latest position. Nested
//! modifiers never see their parent's properties.

pub(crate) mod map;
pub(crate) mod pattern;
pub(crate) mod schema;

use crate::foundation::core::IntoVector;
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::serialize::sdl::{Emit, Encoder, Sdl};
use crate::transform::{Axis, Transform};
use crate::value::{Color, Value};

pub use map::{BlendMap, MapKind};
pub use pattern::{ImageFormat, Pattern, PatternKind};
pub use schema::ModifierKind;

#[derive(Clone, Debug, PartialEq)]
enum Entry {
    Property { key: &'static str, value: Value },
    Map(BlendMap),
    Nested(Modifier),
    Transform(Transform),
}

/// Keyed appearance block (`pigment { ... }`, `finish { ... }`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct Modifier {
    kind: ModifierKind,
    pattern: Option<Pattern>,
    entries: Vec<Entry>,
}

impl Modifier {
    /// Empty block of the given kind.
    pub fn new(kind: ModifierKind) -> Self {
        Self {
            kind,
            pattern: None,
            entries: Vec::new(),
        }
    }

    /// Empty `pigment { }`.
    pub fn pigment() -> Self {
        Self::new(ModifierKind::Pigment)
    }

    /// Empty `normal { }`.
    pub fn normal() -> Self {
        Self::new(ModifierKind::Normal)
    }

    /// Empty `finish { }`.
    pub fn finish() -> Self {
        Self::new(ModifierKind::Finish)
    }

    /// Empty `interior { }`.
    pub fn interior() -> Self {
        Self::new(ModifierKind::Interior)
    }

    /// Empty `texture { }`.
    pub fn texture() -> Self {
        Self::new(ModifierKind::Texture)
    }

    /// Empty `interior_texture { }`.
    pub fn interior_texture() -> Self {
        Self::new(ModifierKind::InteriorTexture)
    }

    /// Empty `media { }`.
    pub fn media() -> Self {
        Self::new(ModifierKind::Media)
    }

    /// Empty `density { }`.
    pub fn density() -> Self {
        Self::new(ModifierKind::Density)
    }

    /// Block built from `(key, value)` pairs applied in order.
    pub fn from_pairs<K, V>(
        kind: ModifierKind,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> RaysceneResult<Self>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        pairs
            .into_iter()
            .try_fold(Self::new(kind), |m, (k, v)| m.set(k.as_ref(), v))
    }

    /// Block kind.
    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    /// Current value of a property, if set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find_map(|e| match e {
            Entry::Property { key: k, value } if *k == key => Some(value),
            _ => None,
        })
    }

    /// Leading pattern, if any.
    pub fn pattern_ref(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Set a recognized property; the latest write wins.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> RaysceneResult<Self> {
        let Some((key, ty)) = self.kind.property(key) else {
            return Err(RaysceneError::unknown_key(self.kind.keyword(), key));
        };
        let value = ty.check(self.kind.keyword(), key, value.into())?;
        self.entries.retain(|e| !matches!(e, Entry::Property { key: k, .. } if *k == key));
        self.entries.push(Entry::Property { key, value });
        Ok(self)
    }

    /// Set a bare keyword switch (`uv_mapping`, `conserve_energy`).
    pub fn flag(self, key: &str) -> RaysceneResult<Self> {
        self.set(key, true)
    }

    /// Set the leading pattern, replacing any previous one.
    pub fn pattern(mut self, pattern: Pattern) -> RaysceneResult<Self> {
        let kw = self.kind.keyword();
        if !self.kind.accepts_pattern() {
            return Err(RaysceneError::value(format!("{kw} does not take a pattern")));
        }
        if pattern.has_depth() && self.kind != ModifierKind::Normal {
            return Err(RaysceneError::value(format!(
                "pattern depth is only valid in normal, not {kw}"
            )));
        }
        if pattern.has_colors() && self.kind != ModifierKind::Pigment {
            return Err(RaysceneError::value(format!(
                "inline pattern colors are only valid in pigment, not {kw}"
            )));
        }
        if pattern.is_image_map() && self.kind != ModifierKind::Pigment {
            return Err(RaysceneError::value(format!(
                "image_map is only valid in pigment, not {kw}"
            )));
        }
        self.pattern = Some(pattern);
        Ok(self)
    }

    /// Attach a blend map, replacing any previous one.
    pub fn map(mut self, map: BlendMap) -> RaysceneResult<Self> {
        if !self.kind.accepts_map(map.kind()) {
            return Err(RaysceneError::value(format!(
                "{} does not take a {}",
                self.kind.keyword(),
                map.kind().keyword()
            )));
        }
        if map.is_empty() {
            return Err(RaysceneError::value(format!(
                "{} needs at least one entry",
                map.kind().keyword()
            )));
        }
        self.entries.retain(|e| !matches!(e, Entry::Map(_)));
        self.entries.push(Entry::Map(map));
        Ok(self)
    }

    /// Nest a child block; a second child of the same kind replaces the first.
    pub fn nest(mut self, child: Modifier) -> RaysceneResult<Self> {
        if !self.kind.accepts_child(child.kind) {
            return Err(RaysceneError::value(format!(
                "{} cannot be nested in {}",
                child.kind.keyword(),
                self.kind.keyword()
            )));
        }
        let kind = child.kind;
        self.entries.retain(|e| !matches!(e, Entry::Nested(m) if m.kind == kind));
        self.entries.push(Entry::Nested(child));
        Ok(self)
    }

    /// Append a transformation sequence.
    pub fn transform(mut self, t: &Transform) -> Self {
        self.entries.push(Entry::Transform(t.clone()));
        self
    }

    /// Append `translate <v>`.
    pub fn translate(self, v: impl IntoVector) -> RaysceneResult<Self> {
        let t = Transform::new().translate(v)?;
        Ok(self.transform(&t))
    }

    /// Append a rotation about a principal axis.
    pub fn rotate(self, axis: Axis, angle_deg: f64) -> RaysceneResult<Self> {
        let t = Transform::new().rotate(axis, angle_deg)?;
        Ok(self.transform(&t))
    }

    /// Append a uniform scale.
    pub fn scale(self, factor: f64) -> RaysceneResult<Self> {
        let t = Transform::new().scale(factor)?;
        Ok(self.transform(&t))
    }

    /// Block body without the keyword wrapper, as written inside blend-map entries.
    pub(crate) fn emit_body(&self, enc: &Encoder) -> Vec<Sdl> {
        let mut items = Vec::with_capacity(self.entries.len() + 1);
        if let Some(p) = &self.pattern {
            items.push(p.emit(enc));
        }
        for entry in &self.entries {
            match entry {
                Entry::Property { key, value } => match value {
                    Value::Flag(true) => items.push(Sdl::line(*key)),
                    Value::Flag(false) => {}
                    other => {
                        if let Some(lit) = other.encode(enc) {
                            items.push(Sdl::line(format!("{key} {lit}")));
                        }
                    }
                },
                Entry::Map(map) => items.push(map.emit(enc)),
                Entry::Nested(child) => items.push(child.emit(enc)),
                Entry::Transform(t) => items.extend(t.emit_ops(enc)),
            }
        }
        items
    }
}

impl Emit for Modifier {
    fn emit(&self, enc: &Encoder) -> Sdl {
        Sdl::block(self.kind.keyword(), self.emit_body(enc))
    }
}

impl From<Color> for Modifier {
    fn from(color: Color) -> Self {
        Self {
            kind: ModifierKind::Pigment,
            pattern: None,
            entries: vec![Entry::Property {
                key: "color",
                value: Value::Color(color),
            }],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modifier/modifier.rs"]
mod tests;
