//! An in-memory element store.
//!
//! [`HeadlessElement`] is the reference implementation of both ports: a
//! plain record holding the readings a host would provide and the offset
//! slots a host would write. It makes the whole operation runnable without
//! any rendering environment, which is what the tests use and what
//! server-side position precomputation can use.

use affix_core::{
    HorizontalEdge, HorizontalOffset, Point, Size, VerticalEdge, VerticalOffset,
};

use crate::element::{ApplyOffsets, ElementGeometry};

/// A plain element record for environments without a live UI.
///
/// Applied offsets accumulate across invocations: assigning `top` leaves a
/// previously assigned `bottom` in place, exactly as a style system keeps
/// untouched properties. Callers that re-stick an element with a different
/// alignment are responsible for clearing the now-stale opposite edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeadlessElement {
    offset: Option<Point>,
    size: Option<Size>,
    top: Option<f32>,
    bottom: Option<f32>,
    left: Option<f32>,
    right: Option<f32>,
}

impl HeadlessElement {
    /// Creates an element with the given document-relative offset and outer
    /// size.
    #[must_use]
    pub const fn new(offset: Point, size: Size) -> Self {
        Self {
            offset: Some(offset),
            size: Some(size),
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }

    /// Creates an element that reports no geometry, as a detached or
    /// unrendered element would.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            offset: None,
            size: None,
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }

    /// The assigned `top` offset, if any invocation has set it.
    #[must_use]
    pub const fn top(&self) -> Option<f32> {
        self.top
    }

    /// The assigned `bottom` offset, if any invocation has set it.
    #[must_use]
    pub const fn bottom(&self) -> Option<f32> {
        self.bottom
    }

    /// The assigned `left` offset, if any invocation has set it.
    #[must_use]
    pub const fn left(&self) -> Option<f32> {
        self.left
    }

    /// The assigned `right` offset, if any invocation has set it.
    #[must_use]
    pub const fn right(&self) -> Option<f32> {
        self.right
    }
}

impl ElementGeometry for HeadlessElement {
    fn document_offset(&self) -> Option<Point> {
        self.offset
    }

    fn outer_size(&self) -> Option<Size> {
        self.size
    }
}

impl ApplyOffsets for HeadlessElement {
    fn apply_vertical(&mut self, offset: VerticalOffset) {
        match offset.edge {
            VerticalEdge::Top => self.top = Some(offset.px),
            VerticalEdge::Bottom => self.bottom = Some(offset.px),
        }
    }

    fn apply_horizontal(&mut self, offset: HorizontalOffset) {
        match offset.edge {
            HorizontalEdge::Left => self.left = Some(offset.px),
            HorizontalEdge::Right => self.right = Some(offset.px),
        }
    }
}
