//! Observer port for committed task collection changes.

use crate::task::domain::Task;
use std::fmt;

/// Receives the task collection after each applied transition.
///
/// Observers run synchronously once the new state is committed and never
/// see a partially updated collection. Any `FnMut(&[Task])` closure is an
/// observer.
pub trait TaskObserver {
    /// Called with the committed collection.
    fn tasks_changed(&mut self, tasks: &[Task]);
}

impl<F> TaskObserver for F
where
    F: FnMut(&[Task]),
{
    fn tasks_changed(&mut self, tasks: &[Task]) {
        self(tasks);
    }
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}
