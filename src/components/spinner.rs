//! Loading Spinner

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="spinner-wrap" role="status">
            <div class="spinner"></div>
            <span class="spinner-label">{label}</span>
        </div>
    }
}
