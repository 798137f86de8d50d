//! Page-scoped publish/subscribe bus for cross-widget events.
//!
//! DESIGN
//! ======
//! The tag editor and the related-records panel must never reference each
//! other, so one-to-many notification goes through an injectable bus instance
//! provided via Leptos context. Registrations are keyed by (page context,
//! topic) so independent page instances do not cross-talk. A subscription
//! made before its page context is announced is deferred, then flushed in
//! registration order once the context arrives — component setup runs before
//! page effects, so this is the common path on first render.
//!
//! Handlers are snapshotted before dispatch and invoked with the lock
//! released, so a handler may subscribe or publish reentrantly.

#[cfg(test)]
#[path = "bus_test.rs"]
mod bus_test;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Topic on which the tag editor requests a related-records listing.
pub const TOPIC_SHOW_RELATED: &str = "tags:related";

type Handler = Arc<dyn Fn(&serde_json::Value) + Send + Sync>;

struct Subscription {
    context: String,
    topic: String,
    owner: String,
    handler: Handler,
}

#[derive(Default)]
struct BusInner {
    contexts: HashSet<String>,
    active: Vec<Subscription>,
    deferred: Vec<Subscription>,
}

/// Shared publish/subscribe channel. Cloning yields another handle to the
/// same channel.
#[derive(Clone, Default)]
pub struct PubSub {
    inner: Arc<Mutex<BusInner>>,
}

impl PubSub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BusInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make a page context known to the bus and flush any deferred
    /// registrations for it, preserving registration order.
    pub fn announce_context(&self, context: &str) {
        let mut inner = self.lock();
        if !inner.contexts.insert(context.to_owned()) {
            return;
        }
        let deferred = std::mem::take(&mut inner.deferred);
        for sub in deferred {
            if sub.context == context {
                inner.active.push(sub);
            } else {
                inner.deferred.push(sub);
            }
        }
    }

    /// Register `handler` against (`context`, `topic`). If the context has
    /// not been announced yet, the registration is deferred until it is.
    /// `owner` groups subscriptions for [`PubSub::unsubscribe_all`].
    pub fn subscribe(
        &self,
        context: &str,
        topic: &str,
        owner: &str,
        handler: impl Fn(&serde_json::Value) + Send + Sync + 'static,
    ) {
        let sub = Subscription {
            context: context.to_owned(),
            topic: topic.to_owned(),
            owner: owner.to_owned(),
            handler: Arc::new(handler),
        };
        let mut inner = self.lock();
        if inner.contexts.contains(context) {
            inner.active.push(sub);
        } else {
            inner.deferred.push(sub);
        }
    }

    /// Invoke every handler registered for (`context`, `topic`), synchronously,
    /// in registration order. Zero subscribers is a silent no-op. Deferred
    /// registrations never receive events (no replay).
    pub fn publish(&self, context: &str, topic: &str, payload: &serde_json::Value) {
        let handlers: Vec<Handler> = self
            .lock()
            .active
            .iter()
            .filter(|s| s.context == context && s.topic == topic)
            .map(|s| Arc::clone(&s.handler))
            .collect();
        for handler in handlers {
            handler(payload);
        }
    }

    /// Drop every subscription (active or deferred) made by `owner`, across
    /// all contexts and topics. Called on component teardown so destroyed
    /// components never receive events.
    pub fn unsubscribe_all(&self, owner: &str) {
        let mut inner = self.lock();
        inner.active.retain(|s| s.owner != owner);
        inner.deferred.retain(|s| s.owner != owner);
    }
}
