//! Top navigation generated from the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::theme_toggle::ThemeToggle;
use crate::routes::nav_views;

#[component]
pub fn NavBar() -> impl IntoView {
    let links = nav_views()
        .map(|view| {
            view! {
                <A href=view.path() attr:class="nav-bar__link">
                    {view.title()}
                </A>
            }
        })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Z-Memory"</span>
            <div class="nav-bar__links">{links}</div>
            <span class="nav-bar__spacer"></span>
            <ThemeToggle/>
        </nav>
    }
}
