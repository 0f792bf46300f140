//! Callback registry shared by the proximity and tap notifications.

use std::rc::Rc;

/// Ordered set of callbacks, addressed by the id returned on registration.
pub(crate) struct ListenerRegistry<E> {
    listeners: Vec<(u64, Rc<dyn Fn(&E)>)>,
    next_id: u64,
}

impl<E> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
        }
    }
}

impl<E> ListenerRegistry<E> {
    pub(crate) fn add(&mut self, listener: Rc<dyn Fn(&E)>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Snapshot of the callbacks, so they can run without borrowing the registry.
    pub(crate) fn snapshot(&self) -> Vec<Rc<dyn Fn(&E)>> {
        self.listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub(crate) fn notify(&self, event: &E) {
        for listener in self.snapshot() {
            listener(event);
        }
    }
}
