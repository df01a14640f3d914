//! The stick operation.
//!
//! One invocation positions a collection of elements against a single
//! target: the configuration is merged over defaults once, the target's
//! bounds are computed once (every element sticks to the same target), and
//! the aligner then runs once per element so that middle/center rules can
//! read each element's own dimensions.

use affix_core::{InvalidTarget, StickOverrides, Viewport, place};
use tracing::{debug, warn};

use crate::element::{ApplyOffsets, ElementGeometry, target_bounds};

/// Positions every element in `elements` against `target`.
///
/// Runs synchronously to completion: merge configuration, resolve the
/// target's viewport-relative bounds, then align and write offsets for each
/// element in turn. Each element receives exactly one vertical and one
/// horizontal offset through its write port; previously assigned opposite
/// edges are left untouched.
///
/// Elements that report no geometry are skipped with a warning so that one
/// unmeasurable element does not prevent the rest from being positioned.
/// Repeated calls with unchanged readings assign identical offsets.
///
/// Returns the borrowed collection, so calls chain:
///
/// ```
/// use affix::{stick, HeadlessElement, Point, Size, StickOverrides, Viewport};
///
/// let viewport = Viewport::new(800.0, 600.0);
/// let target = HeadlessElement::new(Point::new(30.0, 50.0), Size::new(100.0, 40.0));
/// let mut badges = [HeadlessElement::new(Point::zero(), Size::new(10.0, 10.0))];
///
/// let badges = stick(&mut badges, &target, &viewport, &StickOverrides::default())?;
/// assert_eq!(badges[0].top(), Some(90.0));
/// # Ok::<(), affix::InvalidTarget>(())
/// ```
///
/// # Errors
///
/// [`InvalidTarget`] if the target itself cannot be measured. Malformed
/// alignment configuration is never an error; unrecognized values resolve
/// to the per-axis defaults.
pub fn stick<'a, T, E>(
    elements: &'a mut [E],
    target: &T,
    viewport: &Viewport,
    overrides: &StickOverrides,
) -> Result<&'a mut [E], InvalidTarget>
where
    T: ElementGeometry,
    E: ElementGeometry + ApplyOffsets,
{
    let options = overrides.resolve();
    let bounds = target_bounds(target, viewport)?;
    debug!(?bounds, ?options, "resolved target bounds");

    for (index, element) in elements.iter_mut().enumerate() {
        let Some(outer) = element.outer_size() else {
            warn!(index, "element reports no geometry, skipping");
            continue;
        };
        let placement = place(&bounds, viewport, outer, &options);
        debug!(index, ?placement, "applying placement");
        element.apply_vertical(placement.vertical);
        element.apply_horizontal(placement.horizontal);
    }

    Ok(elements)
}

#[cfg(test)]
mod tests {
    use affix_core::{Point, Size};

    use super::*;
    use crate::headless::HeadlessElement;

    // Target at viewport top=50 left=30, 100x40: bottom=90, right=130.
    fn target() -> HeadlessElement {
        HeadlessElement::new(Point::new(30.0, 50.0), Size::new(100.0, 40.0))
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn element() -> HeadlessElement {
        HeadlessElement::new(Point::zero(), Size::new(10.0, 10.0))
    }

    #[test]
    fn bottom_right_sets_top_and_left() {
        let mut elements = [element()];
        stick(
            &mut elements,
            &target(),
            &viewport(),
            &StickOverrides::default().align_y("bottom").align_x("right"),
        )
        .unwrap();

        assert_eq!(elements[0].top(), Some(90.0));
        assert_eq!(elements[0].left(), Some(130.0));
        assert_eq!(elements[0].bottom(), None);
        assert_eq!(elements[0].right(), None);
    }

    #[test]
    fn top_left_with_offsets_sets_bottom_and_right() {
        let mut elements = [element()];
        stick(
            &mut elements,
            &target(),
            &viewport(),
            &StickOverrides::default()
                .align_y("top")
                .align_x("left")
                .offset_top(5.0)
                .offset_left(5.0),
        )
        .unwrap();

        assert_eq!(elements[0].bottom(), Some(545.0));
        assert_eq!(elements[0].right(), Some(765.0));
        assert_eq!(elements[0].top(), None);
        assert_eq!(elements[0].left(), None);
    }

    #[test]
    fn every_rule_assigns_exactly_one_edge_per_axis() {
        for align_y in ["top", "baseline", "bottom", "middle"] {
            for align_x in ["left", "baseline", "right", "center"] {
                let mut elements = [element()];
                stick(
                    &mut elements,
                    &target(),
                    &viewport(),
                    &StickOverrides::default().align_y(align_y).align_x(align_x),
                )
                .unwrap();

                let vertical_edges =
                    usize::from(elements[0].top().is_some()) + usize::from(elements[0].bottom().is_some());
                let horizontal_edges =
                    usize::from(elements[0].left().is_some()) + usize::from(elements[0].right().is_some());
                assert_eq!(vertical_edges, 1, "{align_y}/{align_x}");
                assert_eq!(horizontal_edges, 1, "{align_y}/{align_x}");
            }
        }
    }

    #[test]
    fn numeric_codes_match_their_name_aliases() {
        let mut by_name = [element()];
        let mut by_code = [element()];

        stick(
            &mut by_name,
            &target(),
            &viewport(),
            &StickOverrides::default().align_y("top").align_x("center"),
        )
        .unwrap();
        stick(
            &mut by_code,
            &target(),
            &viewport(),
            &StickOverrides::default().align_y(0).align_x(3),
        )
        .unwrap();

        assert_eq!(by_name, by_code);
    }

    #[test]
    fn unrecognized_configuration_behaves_like_the_defaults() {
        let mut defaulted = [element()];
        let mut garbage = [element()];

        stick(&mut defaulted, &target(), &viewport(), &StickOverrides::default()).unwrap();
        stick(
            &mut garbage,
            &target(),
            &viewport(),
            &StickOverrides::default().align_y(99).align_x("foo"),
        )
        .unwrap();

        // Vertical falls back to bottom, horizontal to baseline.
        assert_eq!(garbage[0].top(), Some(90.0));
        assert_eq!(garbage[0].left(), Some(30.0));
        assert_eq!(defaulted, garbage);
    }

    #[test]
    fn middle_center_uses_each_elements_own_size() {
        let mut elements = [
            HeadlessElement::new(Point::zero(), Size::new(10.0, 10.0)),
            HeadlessElement::new(Point::zero(), Size::new(30.0, 20.0)),
        ];
        stick(
            &mut elements,
            &target(),
            &viewport(),
            &StickOverrides::default().align_y("middle").align_x("center"),
        )
        .unwrap();

        assert_eq!(elements[0].top(), Some(65.0));
        assert_eq!(elements[0].left(), Some(75.0));
        assert_eq!(elements[1].top(), Some(60.0));
        assert_eq!(elements[1].left(), Some(65.0));
    }

    #[test]
    fn unmeasurable_elements_are_skipped_not_fatal() {
        let mut elements = [HeadlessElement::detached(), element()];
        stick(&mut elements, &target(), &viewport(), &StickOverrides::default()).unwrap();

        assert_eq!(elements[0].top(), None);
        assert_eq!(elements[1].top(), Some(90.0));
    }

    #[test]
    fn invalid_target_is_surfaced() {
        let mut elements = [element()];
        let result = stick(
            &mut elements,
            &HeadlessElement::detached(),
            &viewport(),
            &StickOverrides::default(),
        );

        assert_eq!(result.unwrap_err(), InvalidTarget::Unrendered);
        // Nothing was written.
        assert_eq!(elements[0].top(), None);
        assert_eq!(elements[0].left(), None);
    }

    #[test]
    fn scrolled_viewport_shifts_the_bounds() {
        let mut elements = [element()];
        stick(
            &mut elements,
            &target(),
            &viewport().with_scroll(10.0, 25.0),
            &StickOverrides::default(),
        )
        .unwrap();

        // Document offset 50 minus scroll 25, plus target height 40.
        assert_eq!(elements[0].top(), Some(65.0));
        assert_eq!(elements[0].left(), Some(20.0));
    }

    #[test]
    fn repeated_invocations_are_idempotent() {
        let overrides = StickOverrides::default().align_y("middle").align_x("center");
        let mut elements = [element()];

        stick(&mut elements, &target(), &viewport(), &overrides).unwrap();
        let first = elements[0];
        stick(&mut elements, &target(), &viewport(), &overrides).unwrap();

        assert_eq!(elements[0], first);
    }

    #[test]
    fn restick_does_not_clear_previously_assigned_edges() {
        let mut elements = [element()];

        stick(&mut elements, &target(), &viewport(), &StickOverrides::default()).unwrap();
        assert_eq!(elements[0].top(), Some(90.0));

        stick(
            &mut elements,
            &target(),
            &viewport(),
            &StickOverrides::default().align_y("top"),
        )
        .unwrap();

        // The new bottom assignment lands, the stale top assignment stays.
        assert_eq!(elements[0].bottom(), Some(550.0));
        assert_eq!(elements[0].top(), Some(90.0));
    }

    #[test]
    fn returns_the_collection_for_chaining() {
        let mut elements = [element(), element()];
        let returned = stick(
            &mut elements,
            &target(),
            &viewport(),
            &StickOverrides::default(),
        )
        .unwrap();

        assert_eq!(returned.len(), 2);
        // Second call on the returned borrow, as a fluent caller would.
        stick(returned, &target(), &viewport(), &StickOverrides::default().align_x("right"))
            .unwrap();
    }
}
