//! Settings Page
//!
//! Theme, self-selected role, user roles and the API server address.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Notice, NoticeBanner, Spinner};
use crate::config::{self, ApiConfig, Theme, DEFAULT_API_BASE_URL};
use crate::context::AppContext;
use crate::models::Role;
use crate::store::{store_set_user_role, store_set_users, use_app_store, AppStateStoreFields};

fn role_options(selected: Role) -> impl IntoView {
    Role::ALL
        .iter()
        .map(|role| view! { <option value=role.as_str() selected={*role == selected}>{role.label()}</option> })
        .collect_view()
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let notice = RwSignal::new(None::<Notice>);

    // Theme
    let (theme, set_theme) = signal(Theme::load());
    let toggle_theme = move |_| {
        let next = match theme.get_untracked() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        next.save();
        next.apply();
        set_theme.set(next);
    };

    // Own role, kept locally
    let (own_role, set_own_role) = signal(config::load_role_preference());

    // Users
    let (users_loading, set_users_loading) = signal(true);
    let (selected_user, set_selected_user) = signal::<Option<u64>>(None);
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_users().await {
                Ok(users) => {
                    web_sys::console::log_1(&format!("[Settings] Loaded {} users", users.len()).into());
                    store_set_users(&store, users);
                }
                Err(e) => ctx.report("Settings", &e),
            }
            set_users_loading.set(false);
        });
    });

    // API server
    let (api_url, set_api_url) = signal(ApiConfig::load().base_url);
    let save_api_url = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match config::save_base_url(&api_url.get_untracked()) {
            Some(url) => {
                set_api_url.set(url);
                notice.set(Some(Notice::success("API server saved.")));
            }
            None => notice.set(Some(Notice::error("Enter an address starting with http:// or https://."))),
        }
    };
    let reset_api_url = move |_| {
        config::reset_base_url();
        set_api_url.set(ApiConfig::load().base_url);
        notice.set(Some(Notice::success("API server reset.")));
    };

    view! {
        <div class="page settings-page">
            <div class="page-header">
                <h1>"Settings"</h1>
            </div>

            <NoticeBanner notice=notice />

            <div class="card">
                <h2>"Appearance"</h2>
                <div class="setting-row">
                    <span>{move || format!("Theme: {}", if theme.get() == Theme::Dark { "Dark" } else { "Light" })}</span>
                    <button class="btn secondary" on:click=toggle_theme>
                        {move || if theme.get() == Theme::Dark { "Switch to Light" } else { "Switch to Dark" }}
                    </button>
                </div>
            </div>

            <div class="card">
                <h2>"My role"</h2>
                <select
                    class="form-input"
                    on:change=move |ev| {
                        let role = Role::parse(&event_target_value(&ev));
                        config::save_role_preference(role);
                        set_own_role.set(role);
                    }
                >
                    {move || role_options(own_role.get())}
                </select>
            </div>

            <div class="card">
                <h2>"Users"</h2>
                <Show when=move || !users_loading.get() fallback=|| view! { <Spinner /> }>
                    <Show
                        when=move || !store.users().with(Vec::is_empty)
                        fallback=|| view! { <p class="empty">"No users found."</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr><th></th><th>"Name"</th><th>"Email"</th><th>"Role"</th></tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || store.users().get()
                                    key=|user| user.id
                                    children=move |user| {
                                        let id = user.id;
                                        let is_selected = move || selected_user.get() == Some(id);
                                        view! {
                                            <tr class=move || if is_selected() { "selected" } else { "" }>
                                                <td>
                                                    <input
                                                        type="radio"
                                                        name="selected-user"
                                                        prop:checked=is_selected
                                                        on:change=move |_| set_selected_user.set(Some(id))
                                                    />
                                                </td>
                                                <td>{user.name.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>
                                                    <select
                                                        class="form-input"
                                                        disabled=move || !is_selected()
                                                        on:change=move |ev| {
                                                            let role = Role::parse(&event_target_value(&ev));
                                                            store_set_user_role(&store, id, role);
                                                            notice.set(Some(Notice::success("Role updated! (demo only)")));
                                                        }
                                                    >
                                                        {role_options(user.role)}
                                                    </select>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </div>

            <form class="card" on:submit=save_api_url>
                <h2>"API server"</h2>
                <p class="setting-hint">
                    {move || {
                        let _ = api_url.get();
                        if ApiConfig::is_overridden() { "Using a custom server." } else { "Using the default server." }
                    }}
                </p>
                <input
                    type="url"
                    class="form-input"
                    placeholder=DEFAULT_API_BASE_URL
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
                <div class="form-actions">
                    <button type="button" class="btn secondary" on:click=reset_api_url>"Reset"</button>
                    <button type="submit" class="btn primary">"Save"</button>
                </div>
            </form>
        </div>
    }
}
