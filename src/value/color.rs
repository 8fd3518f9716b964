use crate::foundation::core::{finite, unit_interval};
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::foundation::format;
use crate::serialize::sdl::Encoder;
use crate::value::names::CSS_COLORS;

/// Ten-color categorical palette used for automatic coloring.
const PALETTE: [u32; 10] = [
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22,
    0x17becf,
];

/// Color literal: numeric RGB or a renderer identifier, with optional filter/transmit.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    base: ColorBase,
    filter: Option<f64>,
    transmit: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
enum ColorBase {
    Rgb([f64; 3]),
    Named(String),
}

impl Color {
    /// `rgb <r, g, b>`.
    pub fn rgb(r: f64, g: f64, b: f64) -> RaysceneResult<Self> {
        for (name, v) in [("red", r), ("green", g), ("blue", b)] {
            finite(&format!("color {name}"), v)?;
        }
        Ok(Self {
            base: ColorBase::Rgb([r, g, b]),
            filter: None,
            transmit: None,
        })
    }

    /// `rgbf <r, g, b, f>`.
    pub fn rgbf(r: f64, g: f64, b: f64, filter: f64) -> RaysceneResult<Self> {
        Self::rgb(r, g, b)?.with_filter(filter)
    }

    /// `rgbt <r, g, b, t>`.
    pub fn rgbt(r: f64, g: f64, b: f64, transmit: f64) -> RaysceneResult<Self> {
        Self::rgb(r, g, b)?.with_transmit(transmit)
    }

    /// `rgbft <r, g, b, f, t>`.
    pub fn rgbft(r: f64, g: f64, b: f64, filter: f64, transmit: f64) -> RaysceneResult<Self> {
        Self::rgb(r, g, b)?
            .with_filter(filter)?
            .with_transmit(transmit)
    }

    /// RGB plus opacity; stored as `transmit = 1 - alpha`.
    pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> RaysceneResult<Self> {
        Self::rgb(r, g, b)?.with_alpha(alpha)
    }

    /// 8-bit RGB, scaled into `[0, 1]`.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            base: ColorBase::Rgb([
                f64::from(r) / 255.0,
                f64::from(g) / 255.0,
                f64::from(b) / 255.0,
            ]),
            filter: None,
            transmit: None,
        }
    }

    /// Identifier defined by the renderer or an include file (`Yellow`, `Gray50`).
    pub fn named(ident: &str) -> RaysceneResult<Self> {
        let ident = format::identifier(ident)?;
        Ok(Self {
            base: ColorBase::Named(ident.to_string()),
            filter: None,
            transmit: None,
        })
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA`, a lowercase CSS color name, or a renderer identifier.
    ///
    /// The alpha byte of `#RRGGBBAA` becomes `transmit = 1 - a/255`.
    pub fn parse(s: &str) -> RaysceneResult<Self> {
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Ok(i) = CSS_COLORS.binary_search_by(|(name, _)| (*name).cmp(s)) {
            return Ok(Self::from_packed(CSS_COLORS[i].1));
        }
        Self::named(s)
    }

    fn parse_hex(hex: &str) -> RaysceneResult<Self> {
        let bad = || RaysceneError::value(format!("'#{hex}' is not a #RRGGBB or #RRGGBBAA color"));
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let packed = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
        if hex.len() == 6 {
            return Ok(Self::from_packed(packed));
        }
        let alpha = f64::from(packed & 0xff) / 255.0;
        Self::from_packed(packed >> 8).with_alpha(alpha)
    }

    fn from_packed(rgb: u32) -> Self {
        Self::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Color `index` of the categorical palette, cycling.
    pub fn palette(index: usize) -> Self {
        Self::from_packed(PALETTE[index % PALETTE.len()])
    }

    /// Set the filter amount in `[0, 1]`.
    pub fn with_filter(mut self, filter: f64) -> RaysceneResult<Self> {
        self.filter = Some(unit_interval("color filter", filter)?);
        Ok(self)
    }

    /// Set the transmit amount in `[0, 1]`.
    pub fn with_transmit(mut self, transmit: f64) -> RaysceneResult<Self> {
        self.transmit = Some(unit_interval("color transmit", transmit)?);
        Ok(self)
    }

    /// Set opacity in `[0, 1]`, overriding any transmit value.
    pub fn with_alpha(self, alpha: f64) -> RaysceneResult<Self> {
        let alpha = unit_interval("color alpha", alpha)?;
        self.with_transmit(1.0 - alpha)
    }

    /// Numeric components, `None` for identifiers.
    pub fn components(&self) -> Option<[f64; 3]> {
        match &self.base {
            ColorBase::Rgb(c) => Some(*c),
            ColorBase::Named(_) => None,
        }
    }

    /// Filter amount, if set.
    pub fn filter(&self) -> Option<f64> {
        self.filter
    }

    /// Transmit amount, if set.
    pub fn transmit(&self) -> Option<f64> {
        self.transmit
    }

    pub(crate) fn encode(&self, enc: &Encoder) -> String {
        match &self.base {
            ColorBase::Named(name) => {
                let mut out = name.clone();
                if let Some(f) = self.filter {
                    out.push_str(&format!(" filter {}", enc.num(f)));
                }
                if let Some(t) = self.transmit {
                    out.push_str(&format!(" transmit {}", enc.num(t)));
                }
                out
            }
            ColorBase::Rgb(rgb) => {
                let rgb = enc.nums(rgb);
                match (self.filter, self.transmit) {
                    (Some(f), Some(t)) => {
                        format!("rgbft <{rgb}, {}, {}>", enc.num(f), enc.num(t))
                    }
                    (Some(f), None) => format!("rgbf <{rgb}, {}>", enc.num(f)),
                    (None, Some(t)) => format!("rgbt <{rgb}, {}>", enc.num(t)),
                    (None, None) => format!("rgb <{rgb}>"),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/color.rs"]
mod tests;
