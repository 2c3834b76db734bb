//! Route Guard
//!
//! Renders protected pages inside the layout, or bounces to login.

use leptos::prelude::*;

use crate::components::Layout;
use crate::context::AppContext;
use crate::router::Route;
use crate::session;

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Checks both storage areas, so session-only logins pass too
    let authenticated = move || {
        let _ = ctx.session_version.get();
        session::is_authenticated()
    };

    Effect::new(move |_| {
        // A sign-out may already have moved us to a public page
        if !authenticated() && ctx.route.get_untracked().requires_auth() {
            web_sys::console::log_1(&"[Guard] No token, redirecting to login".into());
            ctx.redirect(Route::Login);
        }
    });

    move || {
        if authenticated() {
            let page = children.clone();
            view! { <Layout>{page()}</Layout> }.into_any()
        } else {
            ().into_any()
        }
    }
}
