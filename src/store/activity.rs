//! Bounded activity log

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::models::activity::{ActivityAction, ActivityEvent};

/// Append-only event log with a fixed capacity ring buffer.
///
/// Event order is invocation order; when full, the oldest event is evicted.
/// Recording is infallible and never aborts the caller's request.
#[derive(Clone)]
pub struct ActivityLog {
    events: Arc<Mutex<VecDeque<ActivityEvent>>>,
    capacity: usize,
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(1024)))),
            capacity: capacity.max(1),
        }
    }

    /// Append an event, evicting the oldest when at capacity
    pub fn record(&self, event: ActivityEvent) {
        let mut events = self.lock();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Last `n` events, oldest first
    pub fn recent(&self, n: usize) -> Vec<ActivityEvent> {
        let events = self.lock();
        let skip = events.len().saturating_sub(n);
        events.iter().skip(skip).cloned().collect()
    }

    /// Every event attributed to `actor`, in log order
    pub fn events_for(&self, actor: &str) -> Vec<ActivityEvent> {
        self.lock()
            .iter()
            .filter(|event| event.actor == actor)
            .cloned()
            .collect()
    }

    pub fn count_for(&self, actor: &str) -> usize {
        self.lock()
            .iter()
            .filter(|event| event.actor == actor)
            .count()
    }

    pub fn count_by_action(&self, actor: &str, action: ActivityAction) -> usize {
        self.lock()
            .iter()
            .filter(|event| event.actor == actor && event.action == action)
            .count()
    }

    pub fn last_activity_for(&self, actor: &str) -> Option<DateTime<Utc>> {
        self.lock()
            .iter()
            .rev()
            .find(|event| event.actor == actor)
            .map(|event| event.timestamp)
    }

    // A poisoned lock only means another thread panicked mid-append; the
    // buffer itself is still usable.
    fn lock(&self) -> MutexGuard<'_, VecDeque<ActivityEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
