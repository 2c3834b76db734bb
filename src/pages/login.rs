//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Link;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::router::Route;
use crate::validation::{FieldErrors, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let credentials = match current.validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_submitting.set(true);

        spawn_local(async move {
            match api::login(&credentials).await {
                Ok(response) => {
                    web_sys::console::log_1(&"[Login] Signed in".into());
                    ctx.sign_in(&response.token, current.remember_me);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Login] {}", e).into());
                    let message = match e {
                        ApiError::Unauthorized => "Invalid email or password.".to_string(),
                        other => other.user_message(),
                    };
                    errors.update(|errs| errs.add("password", message));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Sign in"</h1>

                <label class="form-label" for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    class="form-input"
                    autocomplete="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                {move || errors.with(|e| e.get("email")).map(|e| view! { <p class="field-error">{e}</p> })}

                <label class="form-label" for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    class="form-input"
                    autocomplete="current-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                {move || errors.with(|e| e.get("password")).map(|e| view! { <p class="field-error">{e}</p> })}

                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.remember_me)
                        on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                    />
                    "Remember me"
                </label>

                <button type="submit" class="btn primary full" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class="auth-switch">
                    "Don't have an account? "
                    <Link to=Route::Register>"Register"</Link>
                </p>
            </form>
        </div>
    }
}
