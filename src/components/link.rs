//! Link Component
//!
//! Anchor that switches pages through the app context instead of reloading.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::router::Route;

#[component]
pub fn Link(
    to: Route,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <a
            href=to.to_path()
            class=class
            on:click=move |ev| {
                // Let modified clicks open a new tab
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
                    return;
                }
                ev.prevent_default();
                ctx.navigate(to);
            }
        >
            {children()}
        </a>
    }
}
