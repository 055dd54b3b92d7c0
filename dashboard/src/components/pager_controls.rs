//! Previous/next buttons for a [`Pager`] signal.

use leptos::prelude::*;

use crate::state::pager::Pager;

#[component]
pub fn PagerControls(pager: RwSignal<Pager>) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=move || !pager.get().has_prev()
                on:click=move |_| pager.update(|p| *p = p.prev())
            >
                "‹ Prev"
            </button>
            <span class="pager__summary">{move || pager.get().summary()}</span>
            <span class="pager__page">
                {move || {
                    let p = pager.get();
                    format!("page {} / {}", p.page() + 1, p.page_count())
                }}
            </span>
            <button
                class="btn pager__next"
                disabled=move || !pager.get().has_next()
                on:click=move |_| pager.update(|p| *p = p.next())
            >
                "Next ›"
            </button>
        </div>
    }
}
