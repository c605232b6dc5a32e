//! Keyboard subscriptions.
//!
//! A dropdown only receives keys while it holds a [`Subscription`] and has
//! focus. Subscribing is the acquire half, dropping the guard is the release
//! half, so a widget that goes away can never leave a handler behind.

use std::sync::{Arc, RwLock, Weak};

#[derive(Debug, Default)]
struct RouterInner {
    next_id: u64,
    subscribers: Vec<(u64, String)>,
}

/// Routes key presses to the focused, subscribed widget.
#[derive(Debug, Clone, Default)]
pub struct KeyRouter {
    inner: Arc<RwLock<RouterInner>>,
}

impl KeyRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `widget_id` for key delivery until the guard is dropped.
    pub fn subscribe(&self, widget_id: impl Into<String>) -> Subscription {
        let widget_id = widget_id.into();
        let mut id = 0;
        if let Ok(mut guard) = self.inner.write() {
            id = guard.next_id;
            guard.next_id += 1;
            guard.subscribers.push((id, widget_id.clone()));
        }
        log::debug!("KeyRouter::subscribe widget={} id={}", widget_id, id);
        Subscription {
            id,
            widget_id,
            router: Arc::downgrade(&self.inner),
        }
    }

    /// The widget that should receive a key, if the focused one is subscribed.
    pub fn route(&self, focused: Option<&str>) -> Option<String> {
        let focused = focused?;
        self.is_subscribed(focused).then(|| focused.to_string())
    }

    pub fn is_subscribed(&self, widget_id: &str) -> bool {
        self.subscription_count(widget_id) > 0
    }

    /// Live subscriptions held for one widget.
    pub fn subscription_count(&self, widget_id: &str) -> usize {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .subscribers
                    .iter()
                    .filter(|(_, id)| id == widget_id)
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.subscribers.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for one key subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    widget_id: String,
    router: Weak<RwLock<RouterInner>>,
}

impl Subscription {
    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.router.upgrade()
            && let Ok(mut guard) = inner.write()
        {
            guard.subscribers.retain(|(id, _)| *id != self.id);
            log::debug!(
                "Subscription::drop widget={} id={}",
                self.widget_id,
                self.id
            );
        }
    }
}
