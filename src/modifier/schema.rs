use crate::modifier::map::MapKind;
use crate::value::ValueType::{self, Color, Count, Flag, Float, FloatOrColor, FloatOrVector};

/// Kind of appearance block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// `texture { }`, groups pigment, normal and finish.
    Texture,
    /// `interior_texture { }`, the texture of inside surfaces exposed by open or
    /// clipped shapes. Takes the same contents as `texture`.
    InteriorTexture,
    /// `pigment { }`, surface color.
    Pigment,
    /// `normal { }`, surface bumps.
    Normal,
    /// `finish { }`, lighting response.
    Finish,
    /// `interior { }`, refraction and attenuation.
    Interior,
    /// `media { }`, participating volume.
    Media,
    /// `density { }`, media density field.
    Density,
}

const PIGMENT: &[(&str, ValueType)] = &[
    ("color", Color),
    ("quick_color", Color),
    ("frequency", Float),
    ("phase", Float),
    ("turbulence", FloatOrVector),
    ("octaves", Float),
    ("omega", Float),
    ("lambda", Float),
    ("uv_mapping", Flag),
];

const NORMAL: &[(&str, ValueType)] = &[
    ("bump_size", Float),
    ("accuracy", Float),
    ("frequency", Float),
    ("phase", Float),
    ("turbulence", FloatOrVector),
    ("octaves", Float),
    ("omega", Float),
    ("lambda", Float),
    ("uv_mapping", Flag),
];

const FINISH: &[(&str, ValueType)] = &[
    ("ambient", FloatOrColor),
    ("emission", FloatOrColor),
    ("diffuse", Float),
    ("brilliance", Float),
    ("phong", Float),
    ("phong_size", Float),
    ("specular", Float),
    ("roughness", Float),
    ("metallic", Float),
    ("reflection", FloatOrColor),
    ("crand", Float),
    ("conserve_energy", Flag),
];

const INTERIOR: &[(&str, ValueType)] = &[
    ("ior", Float),
    ("caustics", Float),
    ("dispersion", Float),
    ("dispersion_samples", Count),
    ("fade_distance", Float),
    ("fade_power", Float),
    ("fade_color", Color),
];

const MEDIA: &[(&str, ValueType)] = &[
    ("method", Count),
    ("intervals", Count),
    ("samples", Count),
    ("confidence", Float),
    ("variance", Float),
    ("ratio", Float),
    ("absorption", Color),
    ("emission", Color),
];

const DENSITY: &[(&str, ValueType)] = &[
    ("frequency", Float),
    ("phase", Float),
    ("turbulence", FloatOrVector),
];

const TEXTURE: &[(&str, ValueType)] = &[("uv_mapping", Flag)];

impl ModifierKind {
    /// Renderer keyword opening the block.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Texture => "texture",
            Self::InteriorTexture => "interior_texture",
            Self::Pigment => "pigment",
            Self::Normal => "normal",
            Self::Finish => "finish",
            Self::Interior => "interior",
            Self::Media => "media",
            Self::Density => "density",
        }
    }

    /// Recognized property names with their value types.
    pub(crate) fn properties(self) -> &'static [(&'static str, ValueType)] {
        match self {
            Self::Texture | Self::InteriorTexture => TEXTURE,
            Self::Pigment => PIGMENT,
            Self::Normal => NORMAL,
            Self::Finish => FINISH,
            Self::Interior => INTERIOR,
            Self::Media => MEDIA,
            Self::Density => DENSITY,
        }
    }

    /// Names accepted by [`Modifier::set`](crate::Modifier::set).
    pub fn property_names(self) -> impl Iterator<Item = &'static str> {
        self.properties().iter().map(|(name, _)| *name)
    }

    pub(crate) fn property(self, key: &str) -> Option<(&'static str, ValueType)> {
        self.properties()
            .iter()
            .find(|(name, _)| *name == key)
            .copied()
    }

    pub(crate) fn accepts_child(self, child: ModifierKind) -> bool {
        matches!(
            (self, child),
            (Self::Texture | Self::InteriorTexture, Self::Pigment | Self::Normal | Self::Finish)
                | (Self::Interior, Self::Media)
                | (Self::Media, Self::Density)
        )
    }

    pub(crate) fn accepts_pattern(self) -> bool {
        matches!(
            self,
            Self::Pigment | Self::Normal | Self::Density | Self::Texture | Self::InteriorTexture
        )
    }

    pub(crate) fn accepts_map(self, map: MapKind) -> bool {
        matches!(
            (self, map),
            (Self::Pigment, MapKind::Color | MapKind::Pigment)
                | (Self::Density, MapKind::Color | MapKind::Density)
                | (Self::Normal, MapKind::Normal | MapKind::Slope)
                | (Self::Texture | Self::InteriorTexture, MapKind::Texture)
        )
    }
}
