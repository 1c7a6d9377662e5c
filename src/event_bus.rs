use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEventType {
    Click,
}

impl fmt::Display for UiEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEventType::Click => write!(f, "click"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiEvent {
    pub event_type: UiEventType,
    pub target_id: String,
    pub metadata: EventMetadata,
}

#[derive(Debug, Clone)]
pub struct EventMetadata {
    pub source: String,
    pub timestamp: u64,
}

impl UiEvent {
    pub fn click(target_id: &str, source: &str) -> Self {
        Self {
            event_type: UiEventType::Click,
            target_id: target_id.to_string(),
            metadata: EventMetadata {
                source: source.to_string(),
                timestamp: chrono::Utc::now().timestamp_millis().max(0) as u64,
            },
        }
    }
}

type Callback = Arc<dyn Fn(&UiEvent) + Send + Sync>;
type SubscriberMap = DashMap<String, Vec<(u64, Callback)>>;

fn subscription_key(event_type: UiEventType, target_id: &str) -> String {
    format!("{}#{}", event_type, target_id)
}

/// Delivers UI events to the callbacks registered for an event type on a
/// given element id.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<SubscriberMap>,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback`; it stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    #[must_use = "dropping the subscription removes the callback"]
    pub fn subscribe<F>(&self, event_type: UiEventType, target_id: &str, callback: F) -> Subscription
    where
        F: Fn(&UiEvent) + Send + Sync + 'static,
    {
        let key = subscription_key(event_type, target_id);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: Callback = Arc::new(callback);

        self.subscribers
            .entry(key.clone())
            .or_default()
            .push((id, callback));

        Subscription {
            key,
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Runs every matching callback and returns how many ran.
    pub fn publish(&self, event: &UiEvent) -> usize {
        let key = subscription_key(event.event_type, &event.target_id);

        // Callbacks run after the shard guard is released so they may
        // subscribe or unsubscribe themselves.
        let callbacks: Vec<Callback> = match self.subscribers.get(&key) {
            Some(entries) => entries.iter().map(|(_, cb)| cb.clone()).collect(),
            None => Vec::new(),
        };

        for callback in &callbacks {
            callback(event);
        }
        callbacks.len()
    }

    pub fn subscriber_count(&self, event_type: UiEventType, target_id: &str) -> usize {
        self.subscribers
            .get(&subscription_key(event_type, target_id))
            .map(|entries| entries.len())
            .unwrap_or(0)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscribers.len())
            .finish()
    }
}

/// Handle to a registered callback. Removes the callback when dropped.
pub struct Subscription {
    key: String,
    id: u64,
    subscribers: Weak<SubscriberMap>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }

    fn remove(&self) {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return;
        };
        let now_empty = match subscribers.get_mut(&self.key) {
            Some(mut entries) => {
                entries.retain(|(id, _)| *id != self.id);
                entries.is_empty()
            }
            None => false,
        };
        if now_empty {
            subscribers.remove_if(&self.key, |_, entries| entries.is_empty());
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("id", &self.id)
            .finish()
    }
}
