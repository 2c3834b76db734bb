//! Stock Adjustment Modal
//!
//! Asks for a quantity and records a stock in/out movement for one item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{StockAdjustment, StockType};
use crate::validation::parse_quantity;

const ADJUST_FAILED: &str = "Failed to update stock. Please try again.";

/// Shown while `kind` is set; closing clears it
#[component]
pub fn StockModal(
    item_id: u64,
    #[prop(into)] item_name: Signal<String>,
    kind: RwSignal<Option<StockType>>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (quantity, set_quantity) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let close = move || {
        set_quantity.set(String::new());
        set_error.set(None);
        kind.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(stock_type) = kind.get_untracked() else { return };
        let amount = match parse_quantity(&quantity.get_untracked()) {
            Ok(amount) => amount,
            Err(message) => {
                set_error.set(Some(message.to_string()));
                return;
            }
        };

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let adjustment = StockAdjustment { kind: stock_type, quantity: amount };
            match api::adjust_stock(item_id, &adjustment).await {
                Ok(()) => {
                    web_sys::console::log_1(
                        &format!("[Stock] {} {} for item {}", stock_type.title(), amount, item_id).into(),
                    );
                    close();
                    on_done.run(());
                }
                Err(e) => {
                    set_error.set(Some(ADJUST_FAILED.to_string()));
                    ctx.report("Stock", &e);
                }
            }
            set_submitting.set(false);
        });
    };

    move || {
        kind.get().map(|stock_type| view! {
            <div class="modal-backdrop" on:click=move |_| close()>
                <form class="modal" on:submit=submit on:click=|ev| ev.stop_propagation()>
                    <h3 class="modal-title">{stock_type.title()}</h3>
                    <p class="modal-body">
                        {move || format!("How many units do you want to {} {}?", stock_type.prompt_verb(), item_name.get())}
                    </p>
                    <input
                        type="number"
                        min="1"
                        step="1"
                        class="form-input"
                        placeholder="Quantity"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="btn secondary" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="btn primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Saving..." } else { "Confirm" }}
                        </button>
                    </div>
                </form>
            </div>
        })
    }
}
