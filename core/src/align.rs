//! Per-axis alignment rules and their lenient resolution.
//!
//! Each axis resolves independently to one of four rules. The enums below
//! are the resolved form the aligner matches on; [`AlignSpec`] is the loose
//! form accepted at the configuration boundary, where numeric codes and name
//! strings are both valid and anything unrecognized selects the per-axis
//! default rather than failing.
//!
//! The defaults are asymmetric on purpose: a missing or unrecognized
//! horizontal value selects [`AlignX::Baseline`] while a missing or
//! unrecognized vertical value selects [`AlignY::Bottom`]. Numeric code `0`
//! is always the explicit first variant (`Left` / `Top`), never the default.

use alloc::string::String;

/// Horizontal alignment rule.
///
/// Numeric aliases follow declaration order: `0` = `Left`, `1` = `Baseline`,
/// `2` = `Right`, `3` = `Center`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AlignX {
    /// Anchor the element's right edge at the target's left edge.
    Left,
    /// Anchor the element's left edge at the target's left edge.
    #[default]
    Baseline,
    /// Anchor the element's left edge at the target's right edge.
    Right,
    /// Center the element over the target's horizontal extent.
    Center,
}

/// Vertical alignment rule.
///
/// Numeric aliases follow declaration order: `0` = `Top`, `1` = `Baseline`,
/// `2` = `Bottom`, `3` = `Middle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AlignY {
    /// Anchor the element's bottom edge at the target's top edge.
    Top,
    /// Anchor the element's bottom edge at the target's bottom edge.
    Baseline,
    /// Anchor the element's top edge at the target's bottom edge.
    #[default]
    Bottom,
    /// Center the element over the target's vertical extent.
    Middle,
}

/// A loosely-typed alignment value as accepted from configuration sources.
///
/// Callers hand over whatever their configuration carried, a numeric code or
/// a name string, and resolution is total: recognized values map to their
/// variant, everything else maps to the axis default. With the `serde`
/// feature this deserializes untagged, so `0` and `"top"` are equally valid
/// in a config file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum AlignSpec {
    /// Numeric alias, `0` through `3` in variant declaration order.
    Code(i64),
    /// Name alias, e.g. `"baseline"`.
    Name(String),
}

impl AlignSpec {
    /// Resolves against the horizontal rules.
    ///
    /// Unrecognized input selects [`AlignX::Baseline`]; this is deliberate
    /// absorption, not an error path.
    #[must_use]
    pub fn resolve_x(&self) -> AlignX {
        match self {
            Self::Code(0) => AlignX::Left,
            Self::Code(1) => AlignX::Baseline,
            Self::Code(2) => AlignX::Right,
            Self::Code(3) => AlignX::Center,
            Self::Code(_) => AlignX::default(),
            Self::Name(name) => match name.as_str() {
                "left" => AlignX::Left,
                "baseline" => AlignX::Baseline,
                "right" => AlignX::Right,
                "center" => AlignX::Center,
                _ => AlignX::default(),
            },
        }
    }

    /// Resolves against the vertical rules.
    ///
    /// Unrecognized input selects [`AlignY::Bottom`], not `Baseline`; the
    /// two axes fall back to different rules.
    #[must_use]
    pub fn resolve_y(&self) -> AlignY {
        match self {
            Self::Code(0) => AlignY::Top,
            Self::Code(1) => AlignY::Baseline,
            Self::Code(2) => AlignY::Bottom,
            Self::Code(3) => AlignY::Middle,
            Self::Code(_) => AlignY::default(),
            Self::Name(name) => match name.as_str() {
                "top" => AlignY::Top,
                "baseline" => AlignY::Baseline,
                "bottom" => AlignY::Bottom,
                "middle" => AlignY::Middle,
                _ => AlignY::default(),
            },
        }
    }
}

impl From<i64> for AlignSpec {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for AlignSpec {
    fn from(name: &str) -> Self {
        Self::Name(String::from(name))
    }
}

impl From<String> for AlignSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
