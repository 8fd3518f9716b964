use crate::foundation::core::{IntoVector, Vector, finite};
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::foundation::format::quoted;
use crate::serialize::sdl::{Encoder, Sdl};
use crate::value::Color;

/// Procedural pattern keywords that take no positional argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PatternKind {
    Agate,
    Bozo,
    Brick,
    Bumps,
    Checker,
    Crackle,
    Dents,
    Granite,
    Hexagon,
    Leopard,
    Marble,
    Onion,
    Radial,
    Ripples,
    Spherical,
    Spotted,
    Waves,
    Wood,
    Wrinkles,
}

impl PatternKind {
    /// Renderer keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Agate => "agate",
            Self::Bozo => "bozo",
            Self::Brick => "brick",
            Self::Bumps => "bumps",
            Self::Checker => "checker",
            Self::Crackle => "crackle",
            Self::Dents => "dents",
            Self::Granite => "granite",
            Self::Hexagon => "hexagon",
            Self::Leopard => "leopard",
            Self::Marble => "marble",
            Self::Onion => "onion",
            Self::Radial => "radial",
            Self::Ripples => "ripples",
            Self::Spherical => "spherical",
            Self::Spotted => "spotted",
            Self::Waves => "waves",
            Self::Wood => "wood",
            Self::Wrinkles => "wrinkles",
        }
    }

    /// How many inline colors a list pattern takes (0 for non-list patterns).
    fn list_len(self) -> usize {
        match self {
            Self::Checker | Self::Brick => 2,
            Self::Hexagon => 3,
            _ => 0,
        }
    }
}

/// File format keyword of an image map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Tga,
    Gif,
    Ppm,
    Tiff,
    Exr,
    Hdr,
}

impl ImageFormat {
    fn keyword(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Tga => "tga",
            Self::Gif => "gif",
            Self::Ppm => "ppm",
            Self::Tiff => "tiff",
            Self::Exr => "exr",
            Self::Hdr => "hdr",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum PatternBody {
    Keyword(PatternKind),
    Gradient(Vector),
    ImageMap {
        format: ImageFormat,
        // Already quoted and escaped.
        path: String,
        interpolate: Option<u8>,
        uv_mapping: bool,
    },
}

/// Leading type token of a pigment, normal, density or texture block.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    body: PatternBody,
    depth: Option<f64>,
    colors: Vec<Color>,
}

impl Pattern {
    /// Keyword pattern (`checker`, `bumps`, ...).
    pub fn new(kind: PatternKind) -> Self {
        Self {
            body: PatternBody::Keyword(kind),
            depth: None,
            colors: Vec::new(),
        }
    }

    /// `gradient <v>` along a non-zero direction.
    pub fn gradient(direction: impl IntoVector) -> RaysceneResult<Self> {
        let v = direction.into_vector()?.expect_3d("gradient direction")?;
        if v.is_zero() {
            return Err(RaysceneError::value("gradient direction must be non-zero"));
        }
        Ok(Self {
            body: PatternBody::Gradient(v),
            depth: None,
            colors: Vec::new(),
        })
    }

    /// `image_map { <format> "<path>" }`.
    pub fn image_map(format: ImageFormat, path: &str) -> RaysceneResult<Self> {
        if path.is_empty() {
            return Err(RaysceneError::value("image map path must be non-empty"));
        }
        Ok(Self {
            body: PatternBody::ImageMap {
                format,
                path: quoted(path)?,
                interpolate: None,
                uv_mapping: false,
            },
            depth: None,
            colors: Vec::new(),
        })
    }

    /// Image map interpolation: 2 (bilinear), 3 (bicubic) or 4 (normalized distance).
    pub fn interpolate(mut self, mode: u8) -> RaysceneResult<Self> {
        let PatternBody::ImageMap { interpolate, .. } = &mut self.body else {
            return Err(RaysceneError::value("interpolate applies to image maps only"));
        };
        if !(2..=4).contains(&mode) {
            return Err(RaysceneError::value(format!(
                "image map interpolate must be 2, 3 or 4, got {mode}"
            )));
        }
        *interpolate = Some(mode);
        Ok(self)
    }

    /// Map the image through the object's UV coordinates.
    pub fn uv_mapped(mut self) -> RaysceneResult<Self> {
        let PatternBody::ImageMap { uv_mapping, .. } = &mut self.body else {
            return Err(RaysceneError::value("uv_mapping applies to image maps only"));
        };
        *uv_mapping = true;
        Ok(self)
    }

    /// Bump depth following the pattern (normal blocks only).
    pub fn depth(mut self, depth: f64) -> RaysceneResult<Self> {
        self.depth = Some(finite("pattern depth", depth)?);
        Ok(self)
    }

    /// Inline colors of a list pattern (`checker`, `brick`, `hexagon`).
    pub fn with_colors(mut self, colors: Vec<Color>) -> RaysceneResult<Self> {
        let max = match self.body {
            PatternBody::Keyword(kind) => kind.list_len(),
            _ => 0,
        };
        if max == 0 {
            return Err(RaysceneError::value(
                "only checker, brick and hexagon take inline colors",
            ));
        }
        if colors.is_empty() || colors.len() > max {
            return Err(RaysceneError::value(format!(
                "list pattern takes 1..={max} colors, got {}",
                colors.len()
            )));
        }
        self.colors = colors;
        Ok(self)
    }

    pub(crate) fn has_depth(&self) -> bool {
        self.depth.is_some()
    }

    pub(crate) fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    pub(crate) fn is_image_map(&self) -> bool {
        matches!(self.body, PatternBody::ImageMap { .. })
    }

    pub(crate) fn emit(&self, enc: &Encoder) -> Sdl {
        let mut s = match &self.body {
            PatternBody::Keyword(kind) => kind.keyword().to_string(),
            PatternBody::Gradient(v) => format!("gradient {}", enc.vector(v)),
            PatternBody::ImageMap {
                format,
                path,
                interpolate,
                uv_mapping,
            } => {
                let mut inner = format!("{} {path}", format.keyword());
                if let Some(mode) = interpolate {
                    inner.push_str(&format!(" interpolate {mode}"));
                }
                let prefix = if *uv_mapping { "uv_mapping " } else { "" };
                format!("{prefix}image_map {{ {inner} }}")
            }
        };
        if let Some(d) = self.depth {
            s.push(' ');
            s.push_str(&enc.num(d));
        }
        if !self.colors.is_empty() {
            let colors: Vec<String> = self
                .colors
                .iter()
                .map(|c| format!("color {}", c.encode(enc)))
                .collect();
            s.push(' ');
            s.push_str(&colors.join(", "));
        }
        Sdl::line(s)
    }
}
