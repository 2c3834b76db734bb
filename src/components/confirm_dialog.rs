//! Confirm Dialog Component
//!
//! Modal asking the user to confirm a destructive action.

use leptos::prelude::*;

/// Modal confirmation with confirm/cancel actions
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `message` - Body text, usually naming the thing being removed
/// * `busy` - Disables both buttons while the action runs
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(default = "Delete")] confirm_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <h3 class="modal-title">{title}</h3>
                    <p class="modal-body">{move || message.get()}</p>
                    <div class="modal-actions">
                        <button
                            class="btn secondary"
                            disabled=move || busy.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
