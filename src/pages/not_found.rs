//! Not Found Page

use leptos::prelude::*;

use crate::components::Link;
use crate::router::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you are looking for does not exist or has been moved."</p>
            <div class="not-found-actions">
                <Link to=Route::Dashboard class="btn primary">"Go Home"</Link>
                <Link to=Route::Inventory class="btn secondary">"View Inventory"</Link>
            </div>
        </div>
    }
}
