//! Observable theme cell.
//!
//! Observers run synchronously, in registration order, after every change of
//! value and before [`ThemeCell::set`] returns. Writing the current value is
//! not a change. Locks are released before observers run, so an observer may
//! read the cell.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::Theme;

type Observer = Arc<dyn Fn(Theme) + Send + Sync>;

/// Handle returned by [`ThemeCell::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Shared theme value with change notification.
pub struct ThemeCell {
    value: RwLock<Theme>,
    observers: RwLock<Vec<(Subscription, Observer)>>,
    next_id: AtomicU64,
}

impl ThemeCell {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self {
            value: RwLock::new(initial),
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Current value.
    pub fn get(&self) -> Theme {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `theme`, notifying observers if the value changed.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, theme: Theme) -> bool {
        {
            let mut value = self.value.write().unwrap_or_else(PoisonError::into_inner);
            if *value == theme {
                return false;
            }
            *value = theme;
        }
        self.notify(theme);
        true
    }

    /// Register `observer` to run after every change of value.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        let subscription = Subscription(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((subscription, Arc::new(observer)));
        subscription
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(id, _)| *id != subscription);
        observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, theme: Theme) {
        let observers: Vec<Observer> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(theme);
        }
    }
}

impl Default for ThemeCell {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for ThemeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeCell")
            .field("value", &self.get())
            .field("observers", &self.observer_count())
            .finish()
    }
}
