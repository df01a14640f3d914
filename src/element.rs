//! The ports between the positioning math and a host environment.
//!
//! The algorithm itself never touches a live UI. Geometry comes in through
//! [`ElementGeometry`] and the computed offsets go out through
//! [`ApplyOffsets`]; a host adapter implements both against whatever its
//! environment actually is (a browser DOM, a retained widget tree, or the
//! in-memory [`crate::headless::HeadlessElement`]).
//!
//! Readings are snapshots. The host is read once at the start of an
//! operation and written once per element, with no revalidation in between;
//! if the environment mutates concurrently the written position can be
//! stale. That is inherent to single-shot positioning and not guarded
//! against here.

use affix_core::{HorizontalOffset, InvalidTarget, Point, Size, TargetBounds, VerticalOffset, Viewport};

/// Read port: geometry queries against the host environment.
///
/// Both the target and every stuck element are read through this trait.
/// Implementations report `None` when the element cannot currently be
/// measured (not rendered, or detached from its document).
pub trait ElementGeometry {
    /// Document-relative offset of the element's border box.
    fn document_offset(&self) -> Option<Point>;

    /// Outer dimensions of the element, including padding and border.
    fn outer_size(&self) -> Option<Size>;
}

/// Write port: receives the computed offsets for one element.
///
/// Each stick operation assigns exactly one vertical and one horizontal
/// offset. The opposite edges are deliberately not cleared; an
/// implementation that needs them reset is responsible for that itself.
/// Implementations are expected to interpret the values as fixed-position
/// offsets from the named viewport edge.
pub trait ApplyOffsets {
    /// Assigns the vertical offset.
    fn apply_vertical(&mut self, offset: VerticalOffset);

    /// Assigns the horizontal offset.
    fn apply_horizontal(&mut self, offset: HorizontalOffset);
}

/// Resolves the target's viewport-relative bounds.
///
/// This is the guarded entry into the pure bounds computation: a target
/// that reports no geometry, a non-finite offset, or a box without area is
/// surfaced as [`InvalidTarget`] instead of being turned into NaN offsets
/// downstream.
///
/// # Errors
///
/// [`InvalidTarget::Unrendered`] if the target reports no geometry,
/// [`InvalidTarget::EmptyBox`] if the reported geometry is degenerate.
pub fn target_bounds(
    target: &impl ElementGeometry,
    viewport: &Viewport,
) -> Result<TargetBounds, InvalidTarget> {
    let offset = target.document_offset().ok_or(InvalidTarget::Unrendered)?;
    let outer = target.outer_size().ok_or(InvalidTarget::Unrendered)?;
    if !offset.is_finite() || !outer.has_area() {
        return Err(InvalidTarget::EmptyBox);
    }
    Ok(TargetBounds::compute(offset, outer, viewport))
}
