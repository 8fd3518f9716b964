use crate::foundation::error::{RaysceneError, RaysceneResult};

/// Formatting configuration passed explicitly into a [`Serializer`](crate::Serializer).
///
/// Indentation is cosmetic; precision changes the literals, so two documents are only
/// comparable when produced with equal options.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdlOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// `None`: shortest round-trip decimals. `Some(n)`: `n` significant digits.
    pub precision: Option<u8>,
    /// Write a block whose body is one single-line item on a single line.
    pub inline_single: bool,
}

impl Default for SdlOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            precision: None,
            inline_single: true,
        }
    }
}

impl SdlOptions {
    /// Largest accepted indentation width.
    pub const MAX_INDENT: usize = 16;

    /// Options with a fixed number of significant digits.
    pub fn with_precision(digits: u8) -> Self {
        Self {
            precision: Some(digits),
            ..Self::default()
        }
    }

    /// Parse options from JSON; absent fields take their defaults.
    pub fn from_json_str(s: &str) -> RaysceneResult<Self> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| RaysceneError::config(format!("invalid serializer options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check value ranges.
    pub fn validate(&self) -> RaysceneResult<()> {
        if let Some(p) = self.precision {
            if !(1..=17).contains(&p) {
                return Err(RaysceneError::config(format!(
                    "precision must be within 1..=17 significant digits, got {p}"
                )));
            }
        }
        if self.indent > Self::MAX_INDENT {
            return Err(RaysceneError::config(format!(
                "indent must be <= {}, got {}",
                Self::MAX_INDENT,
                self.indent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/options.rs"]
mod tests;
