use std::collections::HashSet;

use crate::domain::ConnectionId;

/// Ids with a re-index trigger outstanding.
///
/// Owned by the dialog state and only touched by the reducer, which runs on a
/// single task. Sharing it across threads would need a `Mutex` around the set.
#[derive(Debug, Clone, Default)]
pub struct ReindexTracker {
    in_flight: HashSet<ConnectionId>,
}

impl ReindexTracker {
    /// Returns `false` (and changes nothing) if a trigger is already outstanding.
    pub fn begin(&mut self, id: &ConnectionId) -> bool {
        self.in_flight.insert(id.clone())
    }

    /// Returns whether the id was in flight.
    pub fn finish(&mut self, id: &ConnectionId) -> bool {
        self.in_flight.remove(id)
    }

    pub fn is_in_flight(&self, id: &ConnectionId) -> bool {
        self.in_flight.contains(id)
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}
