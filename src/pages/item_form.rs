//! Item Form Page
//!
//! Add a new item, or edit one when opened with an id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, confirm, Spinner};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::router::Route;
use crate::validation::{FieldErrors, ItemForm, ITEM_CATEGORIES};

const LOAD_FAILED: &str = "Could not load item for editing.";
const CANCEL_PROMPT: &str = "Are you sure you want to cancel? All entered data will be lost.";

/// Labelled input bound to one field of the form
#[component]
fn FormField(
    form: RwSignal<ItemForm>,
    errors: RwSignal<FieldErrors>,
    field: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=field>{label}</label>
            <input
                id=field
                name=field
                type=input_type
                class=move || if errors.with(|e| e.get(field).is_some()) { "form-input invalid" } else { "form-input" }
                placeholder=placeholder
                step={(input_type == "number").then_some("any")}
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| {
                    form.update(|f| f.set(field, event_target_value(&ev)));
                    errors.update(|e| e.clear(field));
                }
            />
            {move || errors.with(|e| e.get(field)).map(|e| view! { <p class="field-error">{e}</p> })}
        </div>
    }
}

#[component]
pub fn ItemFormPage(edit_id: Option<u64>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(ItemForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (loading, set_loading) = signal(edit_id.is_some());
    let (saving, set_saving) = signal(false);

    if let Some(id) = edit_id {
        spawn_local(async move {
            match api::get_item(id).await {
                Ok(item) => form.set(ItemForm::from_item(&item)),
                Err(e) => {
                    let expired = e.is_unauthorized();
                    ctx.report("ItemForm", &e);
                    if !expired {
                        alert(LOAD_FAILED);
                        ctx.navigate(Route::Inventory);
                    }
                }
            }
            set_loading.set(false);
        });
    }

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.get_untracked().validate() {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_saving.set(true);

        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::update_item(id, &payload).await,
                None => api::create_item(&payload).await,
            };
            match result {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[ItemForm] Saved {}", payload.sku).into());
                    ctx.navigate(Route::Inventory);
                }
                Err(ApiError::Validation { errors: server, .. }) => {
                    errors.set(FieldErrors::from_server(&server));
                }
                Err(e) if e.is_unauthorized() => ctx.report("ItemForm", &e),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ItemForm] {}", e).into());
                    alert("Server error");
                }
            }
            set_saving.set(false);
        });
    };

    let cancel = move |_| {
        if confirm(CANCEL_PROMPT) {
            ctx.navigate(Route::Inventory);
        }
    };

    let editing = edit_id.is_some();

    view! {
        <div class="page item-form-page">
            <div class="page-header">
                <h1>{if editing { "Edit Item" } else { "Add New Item" }}</h1>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <form class="card form-card" on:submit=submit>
                    <div class="form-grid">
                        <FormField form=form errors=errors field="name" label="Product Name" />
                        <FormField form=form errors=errors field="sku" label="SKU" />

                        <div class="form-group">
                            <label class="form-label" for="category">"Category"</label>
                            <select
                                id="category"
                                class="form-input"
                                prop:value=move || form.with(|f| f.category.clone())
                                on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            >
                                <option value="">"Select a category"</option>
                                {ITEM_CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                            </select>
                        </div>

                        <FormField form=form errors=errors field="price" label="Price (FCFA)" input_type="number" />
                        <FormField form=form errors=errors field="stock" label="Current Stock" input_type="number" />
                        <FormField form=form errors=errors field="minStockLevel" label="Min Stock Level" input_type="number" />
                        <FormField form=form errors=errors field="location" label="Location" placeholder="Warehouse A, Shelf 3B" />
                        <FormField form=form errors=errors field="supplier" label="Supplier" />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn secondary" on:click=cancel>"Cancel"</button>
                        <button type="submit" class="btn primary" disabled=move || saving.get()>
                            {move || match (editing, saving.get()) {
                                (true, true) => "Updating…",
                                (true, false) => "Update",
                                (false, true) => "Saving…",
                                (false, false) => "Save",
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
