//! Profile Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Link, Spinner};
use crate::context::AppContext;
use crate::format::format_date;
use crate::router::Route;
use crate::store::{store_set_current_user, use_app_store, AppStateStoreFields};

/// Initials for the picture placeholder
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (failed, set_failed) = signal(false);

    // Always refresh; the sidebar copy may be stale after an edit
    Effect::new(move |_| {
        spawn_local(async move {
            match api::current_user().await {
                Ok(user) => store_set_current_user(&store, Some(user)),
                Err(e) => {
                    set_failed.set(true);
                    ctx.report("Profile", &e);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page profile-page">
            <div class="page-header">
                <h1>"Profile"</h1>
            </div>
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let user = match store.current_user().get() {
                    Some(user) if !failed.get() => user,
                    _ => return view! { <div class="notice error">"User information could not be loaded."</div> }.into_any(),
                };
                let picture = match user.profile_image.clone() {
                    Some(src) => view! { <img class="avatar large" src=src alt=user.name.clone() /> }.into_any(),
                    None => view! { <div class="avatar large placeholder">{initials(&user.name)}</div> }.into_any(),
                };
                view! {
                    <div class="card profile-card">
                        {picture}
                        <div class="profile-info">
                            <h2>{user.name.clone()}</h2>
                            <p class="profile-email">{user.email.clone()}</p>
                            <p class="profile-role">{user.role.label()}</p>
                            <p class="profile-joined">{format!("Joined {}", format_date(user.created_at.as_deref()))}</p>
                        </div>
                        <Link to=Route::EditProfile class="btn primary">"Edit Profile"</Link>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
