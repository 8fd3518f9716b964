use std::fmt::Write as _;

use crate::foundation::core::Vector;
use crate::foundation::format;
use crate::serialize::options::SdlOptions;

/// Text IR every node lowers into before the writer lays it out.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Sdl {
    /// One logical line (`<0, 0, 0>, 1`, `phong 0.9`, `translate <1, 0, 0>`).
    Line(String),
    /// `keyword { items }`.
    Block {
        keyword: &'static str,
        items: Vec<Sdl>,
    },
}

impl Sdl {
    pub(crate) fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub(crate) fn block(keyword: &'static str, items: Vec<Sdl>) -> Self {
        Self::Block { keyword, items }
    }

    /// Render on a single line regardless of options (blend-map entries).
    pub(crate) fn inline(&self) -> String {
        match self {
            Self::Line(s) => s.clone(),
            Self::Block { keyword, items } if items.is_empty() => format!("{keyword} {{}}"),
            Self::Block { keyword, items } => {
                let body: Vec<String> = items.iter().map(Sdl::inline).collect();
                format!("{keyword} {{ {} }}", body.join(" "))
            }
        }
    }

    fn single_line(&self) -> Option<String> {
        match self {
            Self::Line(s) => Some(s.clone()),
            Self::Block { keyword, items } => match items.as_slice() {
                [] => Some(format!("{keyword} {{}}")),
                [only] => only
                    .single_line()
                    .map(|s| format!("{keyword} {{ {s} }}")),
                _ => None,
            },
        }
    }

    /// Append this node to `out`, one item per line, indented by `depth` levels.
    pub(crate) fn write(
        &self,
        out: &mut String,
        depth: usize,
        opts: &SdlOptions,
    ) -> std::fmt::Result {
        let pad = " ".repeat(depth * opts.indent);

        if opts.inline_single {
            if let Some(s) = self.single_line() {
                return writeln!(out, "{pad}{s}");
            }
        }

        match self {
            Self::Line(s) => writeln!(out, "{pad}{s}"),
            Self::Block { keyword, items } if items.is_empty() => {
                writeln!(out, "{pad}{keyword} {{}}")
            }
            Self::Block { keyword, items } => {
                writeln!(out, "{pad}{keyword} {{")?;
                for item in items {
                    item.write(out, depth + 1, opts)?;
                }
                writeln!(out, "{pad}}}")
            }
        }
    }
}

/// Primitive literal encoder bound to one precision setting.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Encoder {
    precision: Option<u8>,
}

impl Encoder {
    pub(crate) fn new(opts: &SdlOptions) -> Self {
        Self {
            precision: opts.precision,
        }
    }

    pub(crate) fn num(&self, v: f64) -> String {
        format::number(v, self.precision)
    }

    pub(crate) fn nums(&self, vs: &[f64]) -> String {
        let parts: Vec<String> = vs.iter().map(|v| self.num(*v)).collect();
        parts.join(", ")
    }

    pub(crate) fn vector(&self, v: &Vector) -> String {
        format!("<{}>", self.nums(v.components()))
    }
}

/// Lowering of a node into [`Sdl`].
pub(crate) trait Emit {
    fn emit(&self, enc: &Encoder) -> Sdl;
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/sdl.rs"]
mod tests;
