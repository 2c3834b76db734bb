//! Edit Profile Page
//!
//! Profile details, password change and account deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::register::pick_image;
use crate::api;
use crate::components::{confirm, Link, Notice, NoticeBanner};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::PickedImage;
use crate::router::Route;
use crate::store::{store_set_current_user, use_app_store};
use crate::validation::{FieldErrors, PasswordForm, ProfileForm};

const DELETE_PROMPT: &str = "Are you sure you want to delete your account? This action is irreversible.";

fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || errors.with(|e| e.get(field)).map(|e| view! { <p class="field-error">{e}</p> })
}

/// Password input with a show/hide toggle
#[component]
fn PasswordInput(
    id: &'static str,
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    view! {
        <label class="form-label" for=id>{label}</label>
        <div class="password-row">
            <input
                id=id
                class="form-input"
                type=move || if visible.get() { "text" } else { "password" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button type="button" class="btn link" on:click=move |_| set_visible.update(|v| *v = !*v)>
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let profile = RwSignal::new(ProfileForm::default());
    let profile_errors = RwSignal::new(FieldErrors::new());
    let (image, set_image) = signal(PickedImage::Empty);
    let (saving_profile, set_saving_profile) = signal(false);

    let password = RwSignal::new(PasswordForm::default());
    let password_errors = RwSignal::new(FieldErrors::new());
    let (saving_password, set_saving_password) = signal(false);

    let notice = RwSignal::new(None::<Notice>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::current_user().await {
                Ok(user) => {
                    profile.set(ProfileForm { name: user.name.clone(), email: user.email.clone() });
                    store_set_current_user(&store, Some(user));
                }
                Err(e) => {
                    notice.set(Some(Notice::error("User information could not be loaded.")));
                    ctx.report("EditProfile", &e);
                }
            }
        });
    });

    let save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if image.with_untracked(PickedImage::is_reading) {
            return;
        }
        let update = match profile.get_untracked().validate() {
            Ok(update) => update,
            Err(e) => {
                profile_errors.set(e);
                return;
            }
        };
        profile_errors.set(FieldErrors::new());
        set_saving_profile.set(true);

        spawn_local(async move {
            match api::update_profile(&update, image.with_untracked(PickedImage::upload)).await {
                Ok(()) => {
                    notice.set(Some(Notice::success("Profile updated!")));
                    // Pick up the new name and picture
                    if let Ok(user) = api::current_user().await {
                        store_set_current_user(&store, Some(user));
                    }
                }
                Err(e) => {
                    if let ApiError::Validation { errors, .. } = &e {
                        profile_errors.set(FieldErrors::from_server(errors));
                    }
                    notice.set(Some(Notice::error("Could not update profile.")));
                    ctx.report("EditProfile", &e);
                }
            }
            set_saving_profile.set(false);
        });
    };

    let save_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let change = match password.get_untracked().validate() {
            Ok(change) => change,
            Err(e) => {
                password_errors.set(e);
                return;
            }
        };
        password_errors.set(FieldErrors::new());
        set_saving_password.set(true);

        spawn_local(async move {
            match api::change_password(&change).await {
                Ok(()) => {
                    password.set(PasswordForm::default());
                    notice.set(Some(Notice::success("Password updated!")));
                }
                Err(e) => {
                    if let ApiError::Validation { errors, .. } = &e {
                        password_errors.set(FieldErrors::from_server(errors));
                    }
                    notice.set(Some(Notice::error("Could not update password.")));
                    ctx.report("EditProfile", &e);
                }
            }
            set_saving_password.set(false);
        });
    };

    let delete_account = move |_| {
        if !confirm(DELETE_PROMPT) {
            return;
        }
        spawn_local(async move {
            match api::delete_account().await {
                Ok(()) => {
                    web_sys::console::log_1(&"[EditProfile] Account deleted".into());
                    ctx.sign_out(Route::Register);
                }
                Err(e) => {
                    notice.set(Some(Notice::error("Could not delete account.")));
                    ctx.report("EditProfile", &e);
                }
            }
        });
    };

    view! {
        <div class="page edit-profile-page">
            <div class="page-header">
                <h1>"Edit Profile"</h1>
                <Link to=Route::Profile class="btn secondary">"Back to profile"</Link>
            </div>

            <NoticeBanner notice=notice />

            <form class="card form-card" on:submit=save_profile>
                <h2>"Profile details"</h2>
                <label class="form-label" for="name">"Name"</label>
                <input
                    id="name"
                    class="form-input"
                    prop:value=move || profile.with(|p| p.name.clone())
                    on:input=move |ev| profile.update(|p| p.name = event_target_value(&ev))
                />
                {field_error(profile_errors, "name")}

                <label class="form-label" for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    class="form-input"
                    prop:value=move || profile.with(|p| p.email.clone())
                    on:input=move |ev| profile.update(|p| p.email = event_target_value(&ev))
                />
                {field_error(profile_errors, "email")}

                <label class="form-label" for="profile_image">"Profile picture"</label>
                <input
                    id="profile_image"
                    type="file"
                    accept="image/*"
                    on:change=move |ev| pick_image(ev, set_image, "EditProfile")
                />
                {field_error(profile_errors, "profileImage")}

                <button
                    type="submit"
                    class="btn primary"
                    disabled=move || saving_profile.get() || image.with(PickedImage::is_reading)
                >
                    {move || {
                        if saving_profile.get() {
                            "Saving..."
                        } else if image.with(PickedImage::is_reading) {
                            "Reading picture..."
                        } else {
                            "Save profile"
                        }
                    }}
                </button>
            </form>

            <form class="card form-card" on:submit=save_password>
                <h2>"Change password"</h2>
                <PasswordInput
                    id="current"
                    label="Current password"
                    value=Signal::derive(move || password.with(|p| p.current.clone()))
                    on_input=Callback::new(move |v| password.update(|p| p.current = v))
                />
                {field_error(password_errors, "current")}
                <PasswordInput
                    id="new"
                    label="New password"
                    value=Signal::derive(move || password.with(|p| p.new.clone()))
                    on_input=Callback::new(move |v| password.update(|p| p.new = v))
                />
                {field_error(password_errors, "new")}
                <PasswordInput
                    id="confirm"
                    label="Confirm new password"
                    value=Signal::derive(move || password.with(|p| p.confirm.clone()))
                    on_input=Callback::new(move |v| password.update(|p| p.confirm = v))
                />
                {field_error(password_errors, "confirm")}

                <button type="submit" class="btn primary" disabled=move || saving_password.get()>
                    {move || if saving_password.get() { "Updating..." } else { "Update password" }}
                </button>
            </form>

            <div class="card danger-zone">
                <h2>"Delete account"</h2>
                <p>"Deleting your account removes all of your data."</p>
                <button class="btn danger" on:click=delete_account>"Delete account"</button>
            </div>
        </div>
    }
}
