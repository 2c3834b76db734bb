//! Inventory Frontend App
//!
//! Root component: provides context and store, switches pages by route.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Protected;
use crate::context::AppContext;
use crate::pages::{
    DashboardPage, EditProfilePage, InventoryPage, ItemDetailPage, ItemFormPage, LoginPage, NotFoundPage,
    ProfilePage, RegisterPage, SettingsPage,
};
use crate::router::{self, Route};
use crate::store::{store_clear, AppState};

#[component]
pub fn App() -> impl IntoView {
    let route = signal(router::current_route());
    let session_version = signal(0u32);

    let ctx = AppContext::new(route, session_version);
    provide_context(ctx);

    let store = Store::new(AppState::default());
    provide_context(store);

    // Browser back/forward
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_with_location());

    // Data from a previous session must not leak into the next one
    Effect::new(move |prev: Option<u32>| {
        let version = ctx.session_version.get();
        if prev.is_some_and(|p| p != version) {
            store_clear(&store);
        }
        version
    });

    // "/" has no page of its own
    Effect::new(move |_| {
        if ctx.route.get() == Route::Root {
            ctx.redirect(Route::Login);
        }
    });

    move || {
        let current = ctx.route.get();
        web_sys::console::log_1(&format!("[APP] Route {}", current.to_path()).into());
        match current {
            Route::Root => ().into_any(),
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::NotFound => view! { <NotFoundPage /> }.into_any(),
            Route::Dashboard => view! { <Protected><DashboardPage /></Protected> }.into_any(),
            Route::Inventory => view! { <Protected><InventoryPage /></Protected> }.into_any(),
            Route::ItemDetail(id) => view! { <Protected><ItemDetailPage id=id /></Protected> }.into_any(),
            Route::ItemForm { edit_id } => view! { <Protected><ItemFormPage edit_id=edit_id /></Protected> }.into_any(),
            Route::Profile => view! { <Protected><ProfilePage /></Protected> }.into_any(),
            Route::EditProfile => view! { <Protected><EditProfilePage /></Protected> }.into_any(),
            Route::Settings => view! { <Protected><SettingsPage /></Protected> }.into_any(),
        }
    }
}
