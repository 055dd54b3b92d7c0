//! Header button that flips light/dark.

use leptos::prelude::*;

use crate::theme::{Theme, ThemePreference};

/// Glyph showing what the button switches *to*.
fn toggle_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() { "☀" } else { "☾" }
}

fn toggle_title(theme: Theme) -> String {
    format!("Switch to {} theme", theme.opposite())
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let prefs = expect_context::<ThemePreference>();
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            class="btn nav-bar__theme-toggle"
            on:click=move |_| {
                prefs.toggle_theme();
            }
            title=move || toggle_title(theme.get())
        >
            {move || toggle_glyph(theme.get())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_and_title_describe_the_other_theme() {
        assert_eq!(toggle_glyph(Theme::Dark), "☀");
        assert_eq!(toggle_glyph(Theme::Light), "☾");
        assert_eq!(toggle_title(Theme::Dark), "Switch to light theme");
    }
}
