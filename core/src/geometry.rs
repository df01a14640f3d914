//! Geometry readings and the viewport-relative bounding box.
//!
//! All values are logical pixels (`f32`). Coordinates grow rightward and
//! downward from the document origin; the viewport carries the scroll
//! readings needed to convert document-relative offsets into
//! viewport-relative ones.

// ============================================================================
// Point
// ============================================================================

/// A document-relative coordinate in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in pixels.
    pub x: f32,
    /// The y-coordinate in pixels.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns true if both coordinates are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ============================================================================
// Size
// ============================================================================

/// Outer box dimensions in logical pixels.
///
/// "Outer" follows the border-box convention: padding and border are
/// included, margin is not.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in pixels.
    pub width: f32,
    /// The height in pixels.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if the box encloses a positive, finite area.
    ///
    /// A detached or unrendered element reports a degenerate box; such a box
    /// has no edge to stick anything to.
    #[must_use]
    pub const fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Readings of the scrolling window: inner dimensions plus scroll amounts.
///
/// The viewport is supplied by the caller. Nothing in this crate reads a
/// live environment, so a `Viewport` is just the snapshot the positioning
/// pass works from.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Inner width of the scrolling window in pixels.
    pub width: f32,
    /// Inner height of the scrolling window in pixels.
    pub height: f32,
    /// Current horizontal scroll amount in pixels.
    pub scroll_x: f32,
    /// Current vertical scroll amount in pixels.
    pub scroll_y: f32,
}

impl Viewport {
    /// Creates an unscrolled viewport with the given inner dimensions.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Replaces the scroll readings, keeping the dimensions.
    #[must_use]
    pub const fn with_scroll(mut self, scroll_x: f32, scroll_y: f32) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}

// ============================================================================
// TargetBounds
// ============================================================================

/// The target element's bounding box, normalized to viewport coordinates.
///
/// Every field is derived from three readings (document-relative offset,
/// outer size, scroll) and the following invariants hold by construction:
///
/// - `bottom = top + height`
/// - `right = left + width`
/// - `middle = top + height / 2`
/// - `center = left + width / 2`
///
/// Bounds are computed fresh at the start of each stick operation and
/// discarded afterwards; there is no caching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetBounds {
    /// Viewport-relative top edge.
    pub top: f32,
    /// Viewport-relative left edge.
    pub left: f32,
    /// Viewport-relative bottom edge.
    pub bottom: f32,
    /// Viewport-relative right edge.
    pub right: f32,
    /// Vertical midpoint.
    pub middle: f32,
    /// Horizontal midpoint.
    pub center: f32,
    /// Outer width of the target.
    pub width: f32,
    /// Outer height of the target.
    pub height: f32,
}

impl TargetBounds {
    /// Derives the viewport-relative box from a document-relative offset,
    /// the target's outer size, and the current scroll readings.
    ///
    /// Pure function of its inputs; callers guard against degenerate
    /// geometry before calling (see [`crate::error::InvalidTarget`]).
    #[must_use]
    pub const fn compute(offset: Point, outer: Size, viewport: &Viewport) -> Self {
        let top = offset.y - viewport.scroll_y;
        let left = offset.x - viewport.scroll_x;
        Self {
            top,
            left,
            bottom: top + outer.height,
            right: left + outer.width,
            middle: top + outer.height / 2.0,
            center: left + outer.width / 2.0,
            width: outer.width,
            height: outer.height,
        }
    }
}
