//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context (`ThemePreference` and
//! the mirrored `RwSignal<Theme>` provided by `app::App`) or take it as props.

pub mod nav_bar;
pub mod pager_controls;
pub mod status_line;
pub mod theme_toggle;
