//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    dashboard::DashboardPage, rl_checkpoints::RlCheckpointsPage, rl_samples::RlSamplesPage,
    why_log::WhyLogPage,
};
use crate::routes::DASHBOARD_PATH;
use crate::theme::browser::browser_preference;

/// Root application component.
///
/// Provides the theme holder and a signal mirroring it, resolves the initial
/// theme once on mount, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let prefs = browser_preference();
    let theme = RwSignal::new(prefs.theme());
    let mirror = prefs.subscribe(move |next| theme.set(next));
    provide_context(prefs.clone());
    provide_context(theme);

    // Runs once after mount, before any user input can reach the toggle.
    let mount_prefs = prefs.clone();
    Effect::new(move || {
        let resolution = mount_prefs.initialize();
        leptos::logging::log!("theme {} from {:?}", resolution.theme, resolution.source);
    });

    on_cleanup(move || {
        prefs.unsubscribe(mirror);
    });

    view! {
        <Title text="Z-Memory"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("why-log") view=WhyLogPage/>
                    <Route path=(StaticSegment("rl"), StaticSegment("samples")) view=RlSamplesPage/>
                    <Route path=(StaticSegment("rl"), StaticSegment("checkpoints")) view=RlCheckpointsPage/>
                </Routes>
            </main>
        </Router>
    }
}
