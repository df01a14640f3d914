//! The aligner: maps alignment rules onto concrete edge assignments.
//!
//! Each axis produces exactly one assignment. Vertically that is a `top` or
//! a `bottom` offset, horizontally a `left` or a `right` offset; the
//! opposite edge is never written. `Top` and `Baseline` vertical rules
//! anchor the element by its bottom edge, which suits content that grows
//! upward from the target (a tooltip above a field); `Bottom` and `Middle`
//! anchor by top edge. The horizontal rules mirror this with `Left`
//! anchoring by right edge.
//!
//! All functions here are pure. Matches are exhaustive over the resolved
//! rule enums; the lenient fallback for unrecognized configuration happens
//! earlier, at [`crate::align::AlignSpec`] resolution.

use core::fmt;

use crate::align::{AlignX, AlignY};
use crate::geometry::{Size, TargetBounds, Viewport};
use crate::options::StickOptions;

// ============================================================================
// Output types
// ============================================================================

/// The vertical edge of the viewport an offset is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalEdge {
    /// Distance from the viewport's top edge.
    Top,
    /// Distance from the viewport's bottom edge.
    Bottom,
}

/// The horizontal edge of the viewport an offset is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalEdge {
    /// Distance from the viewport's left edge.
    Left,
    /// Distance from the viewport's right edge.
    Right,
}

/// A single vertical assignment: the anchored edge and its distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalOffset {
    /// Which edge the offset is measured from.
    pub edge: VerticalEdge,
    /// The distance in pixels.
    pub px: f32,
}

/// A single horizontal assignment: the anchored edge and its distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalOffset {
    /// Which edge the offset is measured from.
    pub edge: HorizontalEdge,
    /// The distance in pixels.
    pub px: f32,
}

/// The two offsets assigned to one element.
///
/// Carries exactly one assignment per axis by construction; there is no way
/// to express "both top and bottom" here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// The vertical assignment.
    pub vertical: VerticalOffset,
    /// The horizontal assignment.
    pub horizontal: HorizontalOffset,
}

/// A pixel value formatted the way style systems expect it: `Px(90.0)`
/// displays as `90px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Px(pub f32);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

// ============================================================================
// Alignment
// ============================================================================

/// Computes the vertical assignment for one element.
///
/// `element` is the element's own outer size; only the `Middle` rule reads
/// it, the other rules position purely from the target and viewport.
#[must_use]
pub fn align_vertical(
    target: &TargetBounds,
    viewport: &Viewport,
    element: Size,
    align: AlignY,
    offset_top: f32,
) -> VerticalOffset {
    match align {
        AlignY::Top => VerticalOffset {
            edge: VerticalEdge::Bottom,
            px: viewport.height - target.top - offset_top,
        },
        AlignY::Baseline => VerticalOffset {
            edge: VerticalEdge::Bottom,
            px: viewport.height - target.bottom - offset_top,
        },
        AlignY::Bottom => VerticalOffset {
            edge: VerticalEdge::Top,
            px: target.bottom + offset_top,
        },
        AlignY::Middle => VerticalOffset {
            edge: VerticalEdge::Top,
            px: target.top + (target.height - element.height) / 2.0 + offset_top,
        },
    }
}

/// Computes the horizontal assignment for one element.
///
/// Mirrors [`align_vertical`]; only the `Center` rule reads the element's
/// own size.
#[must_use]
pub fn align_horizontal(
    target: &TargetBounds,
    viewport: &Viewport,
    element: Size,
    align: AlignX,
    offset_left: f32,
) -> HorizontalOffset {
    match align {
        AlignX::Left => HorizontalOffset {
            edge: HorizontalEdge::Right,
            px: viewport.width - target.left - offset_left,
        },
        AlignX::Baseline => HorizontalOffset {
            edge: HorizontalEdge::Left,
            px: target.left + offset_left,
        },
        AlignX::Right => HorizontalOffset {
            edge: HorizontalEdge::Left,
            px: target.right + offset_left,
        },
        AlignX::Center => HorizontalOffset {
            edge: HorizontalEdge::Left,
            px: target.left + (target.width - element.width) / 2.0 + offset_left,
        },
    }
}

/// Runs both axes for one element.
#[must_use]
pub fn place(
    target: &TargetBounds,
    viewport: &Viewport,
    element: Size,
    options: &StickOptions,
) -> Placement {
    Placement {
        vertical: align_vertical(target, viewport, element, options.align_y, options.offset_top),
        horizontal: align_horizontal(
            target,
            viewport,
            element,
            options.align_x,
            options.offset_left,
        ),
    }
}
