use tracing::debug;

use super::surface::{sync_theme_classes, ClassSurface};
use super::types::Theme;

pub type SubscriptionId = u64;

type Subscriber = Box<dyn Fn(Theme)>;

/// Holds the active theme and keeps a class surface in step with it.
///
/// Every mutation updates the value, then re-syncs the surface, then calls the
/// subscribers in registration order.
pub struct ThemeStore {
    current: Theme,
    surface: Box<dyn ClassSurface>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: SubscriptionId,
}

impl ThemeStore {
    /// Create a store seeded with `seed` and apply it to `surface` immediately.
    pub fn new(seed: Theme, surface: Box<dyn ClassSurface>) -> Self {
        sync_theme_classes(surface.as_ref(), seed);
        Self {
            current: seed,
            surface,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Replace the theme. Setting the current value again is allowed and
    /// still re-syncs the surface and notifies subscribers.
    pub fn set_theme(&mut self, next: Theme) {
        let previous = self.current;
        self.current = next;
        sync_theme_classes(self.surface.as_ref(), next);
        debug!(from = %previous, to = %next, "Theme changed");

        for (_, notify) in &self.subscribers {
            notify(next);
        }
    }

    /// Switch to the other theme and return it.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set_theme(next);
        next
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}
