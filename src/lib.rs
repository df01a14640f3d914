#![doc = include_str!("../README.md")]

pub mod element;
pub mod headless;
pub mod stick;

#[doc(inline)]
pub use element::{ApplyOffsets, ElementGeometry, target_bounds};
#[doc(inline)]
pub use headless::HeadlessElement;
#[doc(inline)]
pub use stick::stick;

pub use affix_core::{
    AlignSpec, AlignX, AlignY, HorizontalEdge, HorizontalOffset, InvalidTarget, Placement, Point,
    Px, Size, StickOptions, StickOverrides, TargetBounds, VerticalEdge, VerticalOffset, Viewport,
};
