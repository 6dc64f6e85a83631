//! Callback-registry notification channel.
//!
//! Replaces the reactive-streams subjects of the original design with a
//! plain subscriber list. Replay-of-last-value is the store's job: it
//! invokes a fresh callback with the current snapshot before registering it
//! here. Notification is synchronous, in registration order, on the
//! notifying thread.

/// Opaque handle returned by `subscribe_*`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An ordered set of boxed `FnMut` subscribers for one channel.
pub(crate) struct SubscriberSet<T> {
  next_id: u64,
  entries: Vec<(SubscriptionId, Box<dyn FnMut(T)>)>,
}

impl<T: Clone> SubscriberSet<T> {
  pub(crate) fn new() -> Self {
    Self { next_id: 0, entries: Vec::new() }
  }

  pub(crate) fn subscribe(&mut self, f: impl FnMut(T) + 'static) -> SubscriptionId {
    let id = SubscriptionId(self.next_id);
    self.next_id += 1;
    self.entries.push((id, Box::new(f)));
    id
  }

  /// Remove a subscriber. Returns `false` if the id was never registered or
  /// was already removed.
  pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    let before = self.entries.len();
    self.entries.retain(|(entry_id, _)| *entry_id != id);
    self.entries.len() != before
  }

  /// Deliver `value` to every subscriber, each receiving its own clone.
  pub(crate) fn notify(&mut self, value: &T) {
    for (_, f) in &mut self.entries {
      f(value.clone());
    }
  }
}
