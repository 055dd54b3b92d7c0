//! `web-sys` implementations of the theme seams.
//!
//! Reads and writes `localStorage`, sets `data-theme` on `<html>`, and queries
//! `(prefers-color-scheme: dark)`. Outside the `csr` build every adapter is a
//! no-op that reports "absent", so native tests and tooling stay deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use super::{ColorSchemeSignal, PreferenceStore, Theme, ThemePreference, ThemeSurface};
#[cfg(feature = "csr")]
use super::THEME_ATTRIBUTE;

#[cfg(feature = "csr")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Window `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                leptos::logging::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("failed to write {key} to localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// The `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSignal for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

/// Holder wired to the real browser.
pub fn browser_preference() -> ThemePreference {
    ThemePreference::new(LocalStorage, DocumentRoot, SystemColorScheme)
}
