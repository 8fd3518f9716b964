use crate::foundation::core::{finite, unit_interval};
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::modifier::{Modifier, ModifierKind};
use crate::serialize::sdl::{Encoder, Sdl};
use crate::value::Color;

/// Kind of blend map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapKind {
    /// `color_map`
    Color,
    /// `pigment_map`
    Pigment,
    /// `normal_map`
    Normal,
    /// `texture_map`
    Texture,
    /// `density_map`
    Density,
    /// `slope_map`
    Slope,
}

impl MapKind {
    /// Renderer keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Color => "color_map",
            Self::Pigment => "pigment_map",
            Self::Normal => "normal_map",
            Self::Texture => "texture_map",
            Self::Density => "density_map",
            Self::Slope => "slope_map",
        }
    }

    fn body_kind(self) -> Option<ModifierKind> {
        match self {
            Self::Pigment => Some(ModifierKind::Pigment),
            Self::Normal => Some(ModifierKind::Normal),
            Self::Texture => Some(ModifierKind::Texture),
            Self::Density => Some(ModifierKind::Density),
            Self::Color | Self::Slope => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum MapValue {
    Color(Color),
    Body(Modifier),
    Slope { height: f64, slope: f64 },
}

/// Pattern-value-indexed list of colors, modifier bodies or slopes.
#[derive(Clone, Debug, PartialEq)]
pub struct BlendMap {
    kind: MapKind,
    entries: Vec<(f64, MapValue)>,
}

impl BlendMap {
    /// Renderer limit on entries per map.
    pub const MAX_ENTRIES: usize = 256;

    /// Empty map of the given kind.
    pub fn new(kind: MapKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Map kind.
    pub fn kind(&self) -> MapKind {
        self.kind
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no entry was added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(mut self, at: f64, value: MapValue) -> RaysceneResult<Self> {
        let at = unit_interval("map entry position", at)?;
        if let Some((last, _)) = self.entries.last() {
            if at < *last {
                return Err(RaysceneError::value(format!(
                    "{} entries must be non-decreasing, {at} follows {last}",
                    self.kind.keyword()
                )));
            }
        }
        if self.entries.len() == Self::MAX_ENTRIES {
            return Err(RaysceneError::value(format!(
                "{} holds at most {} entries",
                self.kind.keyword(),
                Self::MAX_ENTRIES
            )));
        }
        self.entries.push((at, value));
        Ok(self)
    }

    /// Add `[at color]` to a color map.
    pub fn color(self, at: f64, color: Color) -> RaysceneResult<Self> {
        if self.kind != MapKind::Color {
            return Err(RaysceneError::value(format!(
                "{} does not take color entries",
                self.kind.keyword()
            )));
        }
        self.push(at, MapValue::Color(color))
    }

    /// Add `[at body]` to a pigment, normal, texture or density map.
    pub fn body(self, at: f64, body: Modifier) -> RaysceneResult<Self> {
        if self.kind.body_kind() != Some(body.kind()) {
            return Err(RaysceneError::value(format!(
                "{} does not take {} entries",
                self.kind.keyword(),
                body.kind().keyword()
            )));
        }
        self.push(at, MapValue::Body(body))
    }

    /// Add `[at <height, slope>]` to a slope map.
    pub fn slope(self, at: f64, height: f64, slope: f64) -> RaysceneResult<Self> {
        if self.kind != MapKind::Slope {
            return Err(RaysceneError::value(format!(
                "{} does not take slope entries",
                self.kind.keyword()
            )));
        }
        finite("slope map height", height)?;
        finite("slope map slope", slope)?;
        self.push(at, MapValue::Slope { height, slope })
    }

    pub(crate) fn emit(&self, enc: &Encoder) -> Sdl {
        let items = self
            .entries
            .iter()
            .map(|(at, value)| {
                let value = match value {
                    MapValue::Color(c) => format!("color {}", c.encode(enc)),
                    MapValue::Body(m) => {
                        let parts: Vec<String> =
                            m.emit_body(enc).iter().map(Sdl::inline).collect();
                        parts.join(" ")
                    }
                    MapValue::Slope { height, slope } => {
                        format!("<{}, {}>", enc.num(*height), enc.num(*slope))
                    }
                };
                Sdl::line(format!("[{} {value}]", enc.num(*at)))
            })
            .collect();
        Sdl::block(self.kind.keyword(), items)
    }
}
