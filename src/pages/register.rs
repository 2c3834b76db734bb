//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{alert, Link};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::PickedImage;
use crate::router::Route;
use crate::validation::{FieldErrors, RegisterForm};

/// Read the picked picture into a signal as soon as it is chosen
pub(crate) fn pick_image(ev: web_sys::Event, target: WriteSignal<PickedImage>, tag: &'static str) {
    let file = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0));
    let Some(file) = file else {
        target.set(PickedImage::Empty);
        return;
    };
    target.set(PickedImage::Reading);
    spawn_local(async move {
        match api::read_image(file).await {
            Ok(upload) => target.set(PickedImage::Ready(upload)),
            Err(e) => {
                web_sys::console::error_1(&format!("[{}] {}", tag, e).into());
                target.set(PickedImage::Empty);
            }
        }
    });
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (image, set_image) = signal(PickedImage::Empty);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if image.with_untracked(PickedImage::is_reading) {
            return;
        }
        let registration = match form.get_untracked().validate() {
            Ok(registration) => registration,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_submitting.set(true);

        spawn_local(async move {
            match api::register(&registration, image.with_untracked(PickedImage::upload)).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[Register] Account created".into());
                    ctx.navigate(Route::Login);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Register] {}", e).into());
                    if let ApiError::Validation { errors: server, .. } = &e {
                        errors.set(FieldErrors::from_server(server));
                        alert(&e.validation_messages().join("\n"));
                    } else {
                        alert(&e.user_message());
                    }
                }
            }
            set_submitting.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.get(field)).map(|e| view! { <p class="field-error">{e}</p> })
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Create an account"</h1>

                <label class="form-label" for="name">"Full name"</label>
                <input
                    id="name"
                    type="text"
                    class="form-input"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                {field_error("name")}

                <label class="form-label" for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    class="form-input"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                {field_error("email")}

                <label class="form-label" for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    class="form-input"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                {field_error("password")}

                <label class="form-label" for="profile_image">"Profile picture (optional)"</label>
                <input
                    id="profile_image"
                    type="file"
                    accept="image/*"
                    on:change=move |ev| pick_image(ev, set_image, "Register")
                />
                {field_error("profileImage")}

                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.agree_terms)
                        on:change=move |ev| form.update(|f| f.agree_terms = event_target_checked(&ev))
                    />
                    "I agree to the terms and conditions"
                </label>
                {field_error("agreeTerms")}

                <button
                    type="submit"
                    class="btn primary full"
                    disabled=move || submitting.get() || image.with(PickedImage::is_reading)
                >
                    {move || {
                        if submitting.get() {
                            "Creating account..."
                        } else if image.with(PickedImage::is_reading) {
                            "Reading picture..."
                        } else {
                            "Register"
                        }
                    }}
                </button>

                <p class="auth-switch">
                    "Already have an account? "
                    <Link to=Route::Login>"Sign in"</Link>
                </p>
            </form>
        </div>
    }
}
