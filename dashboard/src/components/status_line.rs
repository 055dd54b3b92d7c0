//! Loading / error / empty placeholders shared by the list pages.

use leptos::prelude::*;

use crate::net::api::ApiError;

#[component]
pub fn ErrorLine(error: ApiError) -> impl IntoView {
    view! { <p class="status-line status-line--error">{error.to_string()}</p> }
}

#[component]
pub fn LoadingLine() -> impl IntoView {
    view! { <p class="status-line">"Loading..."</p> }
}

#[component]
pub fn EmptyLine(#[prop(into)] text: String) -> impl IntoView {
    view! { <p class="status-line status-line--empty">{text}</p> }
}
