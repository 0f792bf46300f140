//! Centering resolver.
//!
//! Decides which materialized slot holds the focus and how far the list must
//! travel to bring it to the centered slot position.

use super::error::FocusListError;
use super::geometry::ViewportGeometry;
use super::item_provider::ItemProvider;
use super::layout_manager::FocusLayoutManager;
use super::slot::SlotBounds;

/// Oracle that picks the central slot from the materialized window.
///
/// Returns the window slot index, or `None` if no slot qualifies.
pub trait CenterFinder {
    fn find_central_slot(&self, slots: &[SlotBounds], geometry: &ViewportGeometry)
        -> Option<usize>;
}

impl<F> CenterFinder for F
where
    F: Fn(&[SlotBounds], &ViewportGeometry) -> Option<usize>,
{
    fn find_central_slot(
        &self,
        slots: &[SlotBounds],
        geometry: &ViewportGeometry,
    ) -> Option<usize> {
        self(slots, geometry)
    }
}

/// Picks the slot whose vertical center is nearest the center of the
/// padded content box.
///
/// Ties go to the upper slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestCenterFinder;

impl CenterFinder for NearestCenterFinder {
    fn find_central_slot(
        &self,
        slots: &[SlotBounds],
        geometry: &ViewportGeometry,
    ) -> Option<usize> {
        let center = geometry.center_y();
        slots
            .iter()
            .enumerate()
            .min_by_key(|(i, bounds)| ((bounds.center_y() - center).abs(), *i))
            .map(|(i, _)| i)
    }
}

impl<P: ItemProvider> FocusLayoutManager<P> {
    /// Window slot index of the central slot.
    ///
    /// Failing to find one is an invariant violation and is never papered
    /// over; the error propagates to the host.
    pub fn central_slot(&self) -> Result<usize, FocusListError> {
        let bounds: Vec<SlotBounds> = self.window.bounds().collect();
        match self.center_finder.find_central_slot(&bounds, &self.geometry) {
            Some(index) if index < bounds.len() => Ok(index),
            Some(index) => Err(FocusListError::SlotIndexOutOfRange {
                index,
                materialized: bounds.len(),
            }),
            None => Err(FocusListError::CentralSlotNotFound {
                materialized: bounds.len(),
            }),
        }
    }

    /// Adapter position shown by the central slot.
    ///
    /// `Ok(None)` when the central slot's item was removed and the list has
    /// not been laid out since.
    pub fn central_index(&self) -> Result<Option<usize>, FocusListError> {
        let slot = self.central_slot()?;
        Ok(self.window.get(slot).and_then(|placed| placed.position()))
    }

    /// Distance the central slot's top is away from the centered top.
    pub fn offset_to_center(&self) -> Result<i32, FocusListError> {
        let slot = self.central_slot()?;
        let top = self
            .window
            .get(slot)
            .map(|placed| placed.top())
            .ok_or(FocusListError::SlotIndexOutOfRange {
                index: slot,
                materialized: self.window.len(),
            })?;
        Ok(self.geometry.centered_top() - top)
    }

    /// Smoothly scrolls the central slot into the centered position.
    ///
    /// Does nothing when the window is empty or already centered.
    pub fn animate_to_center(&mut self) -> Result<(), FocusListError> {
        if self.window.is_empty() {
            return Ok(());
        }
        let scroll_to_middle = self.offset_to_center()?;
        self.smooth_scroll_by(-scroll_to_middle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::test_helpers::{laid_out_manager, RecordingProvider};
    use crate::focus::Padding;
    use ticdesign_animation::NANOS_PER_MILLI;

    fn bounds(top: i32, height: i32) -> SlotBounds {
        SlotBounds {
            position: Some(0),
            left: 0,
            top,
            right: 100,
            bottom: top + height,
        }
    }

    fn refusing_finder(_: &[SlotBounds], _: &ViewportGeometry) -> Option<usize> {
        None
    }

    fn bogus_finder(_: &[SlotBounds], _: &ViewportGeometry) -> Option<usize> {
        Some(7)
    }

    #[test]
    fn nearest_center_finder_prefers_the_closest_slot() {
        let geometry = ViewportGeometry::new(200, 300);
        let slots = [bounds(0, 101), bounds(101, 101), bounds(202, 101)];
        assert_eq!(
            NearestCenterFinder.find_central_slot(&slots, &geometry),
            Some(1)
        );
        assert_eq!(NearestCenterFinder.find_central_slot(&[], &geometry), None);
    }

    #[test]
    fn ties_go_to_the_upper_slot() {
        let geometry = ViewportGeometry::new(200, 200);
        let slots = [bounds(50, 40), bounds(110, 40)];
        // centers at 70 and 130, both 30 away from 100
        assert_eq!(
            NearestCenterFinder.find_central_slot(&slots, &geometry),
            Some(0)
        );
    }

    #[test]
    fn initial_layout_centers_the_first_item() {
        let manager = laid_out_manager(10);
        assert_eq!(manager.central_slot(), Ok(0));
        assert_eq!(manager.central_index(), Ok(Some(0)));
        assert_eq!(manager.offset_to_center(), Ok(0));
    }

    #[test]
    fn finder_that_refuses_is_a_hard_error() {
        let mut manager = laid_out_manager(10);
        manager.set_center_finder(Box::new(refusing_finder));
        assert_eq!(
            manager.central_slot(),
            Err(FocusListError::CentralSlotNotFound { materialized: 2 })
        );
        assert!(manager.animate_to_center().is_err());
    }

    #[test]
    fn finder_returning_a_bogus_index_is_rejected() {
        let mut manager = laid_out_manager(10);
        manager.set_center_finder(Box::new(bogus_finder));
        assert_eq!(
            manager.central_slot(),
            Err(FocusListError::SlotIndexOutOfRange {
                index: 7,
                materialized: 2
            })
        );
    }

    #[test]
    fn asymmetric_clipped_padding_snaps_once() {
        let geometry = ViewportGeometry::new(200, 600).with_padding(Padding::vertical(0, 300));
        let mut manager = FocusLayoutManager::new(RecordingProvider::new(20), geometry);
        manager.on_layout().expect("layout");
        assert_eq!(manager.central_index(), Ok(Some(0)));
        assert_eq!(manager.offset_to_center(), Ok(0));

        manager.scroll_vertically_by(40).expect("scroll");
        assert_eq!(manager.central_index(), Ok(Some(0)));
        assert_eq!(manager.offset_to_center(), Ok(40));

        manager.animate_to_center().expect("first snap");
        manager.on_frame(0).expect("first frame");
        manager.on_frame(3_000 * NANOS_PER_MILLI).expect("last frame");

        assert_eq!(manager.central_index(), Ok(Some(0)));
        assert_eq!(manager.offset_to_center(), Ok(0));
        assert!(!manager.is_smooth_scrolling());

        let snapped: Vec<_> = manager.slots().collect();
        manager.animate_to_center().expect("second snap");
        assert!(!manager.is_smooth_scrolling());
        assert_eq!(manager.slots().collect::<Vec<_>>(), snapped);
    }
}
