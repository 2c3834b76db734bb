//! Layout Shell
//!
//! Sidebar navigation with logout, collapsible on narrow screens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Link;
use crate::context::AppContext;
use crate::router::{Route, NAVIGATION};
use crate::store::{store_set_current_user, use_app_store, AppStateStoreFields};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (sidebar_open, set_sidebar_open) = signal(false);

    // Load the signed-in user once per session
    Effect::new(move |_| {
        let _ = ctx.session_version.get();
        if store.current_user().read_untracked().is_some() {
            return;
        }
        spawn_local(async move {
            match api::current_user().await {
                Ok(user) => store_set_current_user(&store, Some(user)),
                Err(e) => ctx.report("Layout", &e),
            }
        });
    });

    let logout = move |_| {
        spawn_local(async move {
            // The local token goes away even if the server call fails
            if let Err(e) = api::logout().await {
                web_sys::console::error_1(&format!("[Layout] logout failed: {}", e).into());
            }
            ctx.sign_out(Route::Login);
        });
    };

    view! {
        <div class="app-layout">
            <button
                class="sidebar-toggle"
                aria-label="Toggle navigation"
                on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <aside class=move || if sidebar_open.get() { "sidebar open" } else { "sidebar" }>
                <div class="sidebar-brand">"Inventory"</div>
                <nav class="sidebar-nav" on:click=move |_| set_sidebar_open.set(false)>
                    {NAVIGATION.iter().map(|(label, route)| {
                        let route = *route;
                        view! {
                            <div class=move || if route.is_active_on(&ctx.route.get()) { "nav-entry active" } else { "nav-entry" }>
                                <Link to=route class="nav-link">{*label}</Link>
                            </div>
                        }
                    }).collect_view()}
                </nav>
                <div class="sidebar-footer">
                    <span class="sidebar-user">
                        {move || store.current_user().get().map(|u| u.name).unwrap_or_default()}
                    </span>
                    <button class="logout-btn" on:click=logout>"Logout"</button>
                </div>
            </aside>

            <main class="main-content">
                {children()}
            </main>
        </div>
    }
}
