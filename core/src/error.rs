//! Error taxonomy for target resolution.

use thiserror::Error;

/// The target element cannot provide usable geometry.
///
/// This is the only error the positioning pass surfaces. Unrecognized
/// alignment configuration is deliberately *not* an error: loose values are
/// absorbed into the per-axis default rules at resolution time (see
/// [`crate::align::AlignSpec`]). A target without a box, on the other hand,
/// would poison every downstream coordinate with NaN, so it is reported
/// instead of computed around.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidTarget {
    /// The target reported no geometry at all (not rendered, or detached
    /// from the document).
    #[error("target element is not rendered")]
    Unrendered,
    /// The target reported a zero-sized or non-finite box.
    #[error("target element has no usable box")]
    EmptyBox,
}
