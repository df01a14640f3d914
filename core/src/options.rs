//! Stick configuration: resolved options and the override merge.
//!
//! Configuration flows in two steps. Callers describe what they want with
//! [`StickOverrides`], where every field is optional and alignment values
//! are still in their loose form. [`StickOverrides::resolve`] then merges
//! over the defaults once, producing an immutable [`StickOptions`] that the
//! rest of the operation reads.

use crate::align::{AlignSpec, AlignX, AlignY};

/// Resolved configuration for one stick operation.
///
/// Constructed once per invocation, either directly or by merging
/// [`StickOverrides`] over [`StickOptions::default`], and never mutated
/// afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StickOptions {
    /// Horizontal alignment rule.
    pub align_x: AlignX,
    /// Vertical alignment rule.
    pub align_y: AlignY,
    /// Signed vertical adjustment in pixels, additive in the direction of
    /// the computed offset.
    pub offset_top: f32,
    /// Signed horizontal adjustment in pixels, additive in the direction of
    /// the computed offset.
    pub offset_left: f32,
}

impl StickOptions {
    /// Replaces the horizontal rule.
    #[must_use]
    pub const fn align_x(mut self, align: AlignX) -> Self {
        self.align_x = align;
        self
    }

    /// Replaces the vertical rule.
    #[must_use]
    pub const fn align_y(mut self, align: AlignY) -> Self {
        self.align_y = align;
        self
    }

    /// Replaces the vertical pixel adjustment.
    #[must_use]
    pub const fn offset_top(mut self, px: f32) -> Self {
        self.offset_top = px;
        self
    }

    /// Replaces the horizontal pixel adjustment.
    #[must_use]
    pub const fn offset_left(mut self, px: f32) -> Self {
        self.offset_left = px;
        self
    }
}

/// Caller-supplied partial configuration.
///
/// Every field is optional. A missing alignment key resolves to the axis
/// default ([`AlignX::Baseline`] / [`AlignY::Bottom`]); a present key goes
/// through the lenient [`AlignSpec`] resolution, so unrecognized values end
/// up at the same defaults. Missing offsets are zero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StickOverrides {
    /// Horizontal alignment, as a numeric code or name string.
    pub align_x: Option<AlignSpec>,
    /// Vertical alignment, as a numeric code or name string.
    pub align_y: Option<AlignSpec>,
    /// Vertical pixel adjustment.
    pub offset_top: Option<f32>,
    /// Horizontal pixel adjustment.
    pub offset_left: Option<f32>,
}

impl StickOverrides {
    /// Sets the horizontal alignment.
    #[must_use]
    pub fn align_x(mut self, align: impl Into<AlignSpec>) -> Self {
        self.align_x = Some(align.into());
        self
    }

    /// Sets the vertical alignment.
    #[must_use]
    pub fn align_y(mut self, align: impl Into<AlignSpec>) -> Self {
        self.align_y = Some(align.into());
        self
    }

    /// Sets the vertical pixel adjustment.
    #[must_use]
    pub const fn offset_top(mut self, px: f32) -> Self {
        self.offset_top = Some(px);
        self
    }

    /// Sets the horizontal pixel adjustment.
    #[must_use]
    pub const fn offset_left(mut self, px: f32) -> Self {
        self.offset_left = Some(px);
        self
    }

    /// Merges these overrides over the defaults.
    ///
    /// Pure function; the returned options are the only configuration the
    /// aligner ever sees. Malformed alignment values are absorbed here, not
    /// rejected.
    #[must_use]
    pub fn resolve(&self) -> StickOptions {
        StickOptions {
            align_x: self
                .align_x
                .as_ref()
                .map_or_else(AlignX::default, AlignSpec::resolve_x),
            align_y: self
                .align_y
                .as_ref()
                .map_or_else(AlignY::default, AlignSpec::resolve_y),
            offset_top: self.offset_top.unwrap_or(0.0),
            offset_left: self.offset_left.unwrap_or(0.0),
        }
    }
}
