//! Theme preference holder and its browser-facing seams.
//!
//! DESIGN
//! ======
//! The holder is a cloneable handle around one shared state, provided to the
//! component tree through context. The document surface subscribes to the
//! cell at construction, so any change of value, whoever made it, is mirrored
//! onto the document. Persistence happens only through [`ThemePreference::set_theme`].
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails. Missing storage reads as "no stored value", a missing
//! media query reads as "not dark", and an unparseable stored value is
//! ignored in favour of the OS signal.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::{STORAGE_KEY, Subscription, Theme, ThemeCell};

/// Key/value persistence (browser `localStorage`).
pub trait PreferenceStore: Send + Sync {
    /// Stored value for `key`, or `None` if absent or storage is unavailable.
    fn load(&self, key: &str) -> Option<String>;
    /// Best-effort write; failures are swallowed.
    fn save(&self, key: &str, value: &str);
}

/// Where the presentation attribute is written (the document root).
pub trait ThemeSurface: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// Platform "prefers dark appearance" signal.
pub trait ColorSchemeSignal: Send + Sync {
    /// `false` when the platform offers no signal.
    fn prefers_dark(&self) -> bool;
}

/// Where the mount-time theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A valid value was found under [`STORAGE_KEY`].
    Stored,
    /// Nothing usable was stored; the OS preference decided.
    System,
}

/// Outcome of [`ThemePreference::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub theme: Theme,
    pub source: ResolutionSource,
}

/// Single authority for the active theme.
#[derive(Clone)]
pub struct ThemePreference {
    inner: Arc<Inner>,
}

struct Inner {
    cell: ThemeCell,
    store: Box<dyn PreferenceStore>,
    surface: Arc<dyn ThemeSurface>,
    scheme: Box<dyn ColorSchemeSignal>,
    resolution: OnceLock<Resolution>,
}

impl ThemePreference {
    /// Build an unresolved holder and mirror its cell onto `surface`.
    pub fn new<S, D, P>(store: S, surface: D, scheme: P) -> Self
    where
        S: PreferenceStore + 'static,
        D: ThemeSurface + 'static,
        P: ColorSchemeSignal + 'static,
    {
        let surface: Arc<dyn ThemeSurface> = Arc::new(surface);
        let cell = ThemeCell::default();
        let mirror = Arc::clone(&surface);
        cell.subscribe(move |theme| mirror.apply(theme));

        Self {
            inner: Arc::new(Inner {
                cell,
                store: Box::new(store),
                surface,
                scheme: Box::new(scheme),
                resolution: OnceLock::new(),
            }),
        }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.inner.cell.get()
    }

    /// The shared cell. Writing it directly re-applies the presentation
    /// attribute but does not persist.
    pub fn cell(&self) -> &ThemeCell {
        &self.inner.cell
    }

    /// Make `theme` active: update the cell, apply the attribute, persist.
    pub fn set_theme(&self, theme: Theme) {
        // Persist before notifying: an observer that calls back into
        // `set_theme` must have its value land in storage last.
        self.inner.store.save(STORAGE_KEY, theme.as_str());
        // A change reaches the surface through the mirror observer.
        if !self.inner.cell.set(theme) {
            self.inner.surface.apply(theme);
        }
    }

    /// Switch to the opposite theme and return it.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().opposite();
        self.set_theme(next);
        next
    }

    /// Resolve the initial theme. Only the first call does any work; later
    /// calls return the first resolution.
    pub fn initialize(&self) -> Resolution {
        *self.inner.resolution.get_or_init(|| self.resolve())
    }

    /// `None` until [`initialize`](Self::initialize) has run.
    pub fn resolution(&self) -> Option<Resolution> {
        self.inner.resolution.get().copied()
    }

    /// Observe every change of the active theme.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        self.inner.cell.subscribe(observer)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.inner.cell.unsubscribe(subscription)
    }

    fn resolve(&self) -> Resolution {
        let stored = self.inner.store.load(STORAGE_KEY).and_then(|raw| {
            raw.parse::<Theme>()
                .map_err(|err| {
                    leptos::logging::warn!("ignoring stored theme: {err}");
                })
                .ok()
        });

        let resolution = match stored {
            Some(theme) => Resolution {
                theme,
                source: ResolutionSource::Stored,
            },
            None => Resolution {
                theme: if self.inner.scheme.prefers_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                },
                source: ResolutionSource::System,
            },
        };

        self.set_theme(resolution.theme);
        resolution
    }
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("theme", &self.theme())
            .field("resolution", &self.resolution())
            .finish_non_exhaustive()
    }
}
