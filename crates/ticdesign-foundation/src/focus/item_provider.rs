//! Item provider trait for the focus list.

/// Supplies materialized slots for adapter positions.
///
/// The engine only tracks where slots sit; the content behind a slot belongs
/// to the provider. Every slot handed out by [`ItemProvider::materialize`] is
/// eventually handed back through [`ItemProvider::release`].
pub trait ItemProvider {
    /// Opaque handle for one materialized item.
    type Slot;

    /// The total number of items in the list (materialized or not).
    fn item_count(&self) -> usize;

    /// Binds the item at `position` to a slot.
    fn materialize(&mut self, position: usize) -> Self::Slot;

    /// Takes back a slot the engine no longer shows.
    fn release(&mut self, slot: Self::Slot);
}

impl<P: ItemProvider + ?Sized> ItemProvider for Box<P> {
    type Slot = P::Slot;

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn materialize(&mut self, position: usize) -> Self::Slot {
        (**self).materialize(position)
    }

    fn release(&mut self, slot: Self::Slot) {
        (**self).release(slot)
    }
}
