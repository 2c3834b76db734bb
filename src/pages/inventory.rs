//! Inventory Page
//!
//! Searchable, sortable item table with view/edit/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, ConfirmDialog, Link};
use crate::context::AppContext;
use crate::format::format_money;
use crate::inventory::{category_options, showing_summary, visible_items, SortKey, SortState, TableFilter};
use crate::models::Item;
use crate::router::Route;
use crate::store::{store_remove_item, store_set_items, use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let filter = RwSignal::new(TableFilter::default());
    let (sort, set_sort) = signal(SortState::default());
    let pending_delete = RwSignal::new(None::<Item>);
    let (deleting, set_deleting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_items().await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[Inventory] Loaded {} items", items.len()).into());
                    store_set_items(&store, items);
                }
                Err(e) => ctx.report("Inventory", &e),
            }
            set_loading.set(false);
        });
    });

    let categories = Memo::new(move |_| store.items().with(|items| category_options(items)));
    let rows = Memo::new(move |_| {
        let filter = filter.get();
        let sort = sort.get();
        store.items().with(|items| visible_items(items, &filter, sort))
    });

    let confirm_delete = move |_| {
        let Some(item) = pending_delete.get_untracked() else { return };
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_item(item.id).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[Inventory] Deleted item {}", item.id).into());
                    store_remove_item(&store, item.id);
                }
                Err(e) => {
                    alert("Failed to delete item.");
                    ctx.report("Inventory", &e);
                }
            }
            set_deleting.set(false);
            pending_delete.set(None);
        });
    };

    view! {
        <div class="page inventory-page">
            <div class="page-header">
                <h1>"Inventory"</h1>
                <Link to={Route::ItemForm { edit_id: None }} class="btn primary">"Add Item"</Link>
            </div>

            <div class="table-toolbar">
                <input
                    type="search"
                    class="form-input"
                    placeholder="Search items..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="form-input"
                    prop:value=move || filter.with(|f| f.category.clone())
                    on:change=move |ev| filter.update(|f| f.category = event_target_value(&ev))
                >
                    {move || categories.get().into_iter().map(|c| view! {
                        <option value=c.clone()>{c.clone()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="card table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            {SortKey::COLUMNS.iter().map(|key| {
                                let key = *key;
                                view! {
                                    <th class="sortable" on:click=move |_| set_sort.update(|s| *s = s.toggled(key))>
                                        {key.label()} " " {move || sort.get().arrow(key)}
                                    </th>
                                }
                            }).collect_view()}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || !rows.with(Vec::is_empty) || loading.get()>
                            <For
                                each=move || rows.get()
                                key=|item| (item.id, item.stock, item.updated_at.clone())
                                children=move |item| {
                                    let id = item.id;
                                    let low = item.is_low_stock();
                                    let for_delete = item.clone();
                                    view! {
                                        <tr class=if low { "low-stock" } else { "" }>
                                            <td>{item.name.clone()}</td>
                                            <td>{item.category_name().to_string()}</td>
                                            <td class=if low { "stock low" } else { "stock" }>{item.stock}</td>
                                            <td>{format_money(item.price)}</td>
                                            <td>{item.sku.clone()}</td>
                                            <td class="row-actions">
                                                <Link to=Route::ItemDetail(id) class="action view">"View"</Link>
                                                <Link to={Route::ItemForm { edit_id: Some(id) }} class="action edit">"Edit"</Link>
                                                <button
                                                    class="action delete"
                                                    on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                        <Show when=move || rows.with(Vec::is_empty) && !loading.get()>
                            <tr>
                                <td colspan="6" class="empty">"No items found."</td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
                <p class="table-footer">
                    {move || if loading.get() {
                        "Loading...".to_string()
                    } else {
                        showing_summary(rows.with(Vec::len), store.items().with(Vec::len))
                    }}
                </p>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Confirm Deletion"
                message=Signal::derive(move || {
                    pending_delete.with(|item| {
                        let name = item.as_ref().map(|i| i.name.clone()).unwrap_or_default();
                        format!("Are you sure you want to delete {}? This action cannot be undone.", name)
                    })
                })
                busy=deleting
                on_confirm=confirm_delete
                on_cancel=move |_| pending_delete.set(None)
            />
        </div>
    }
}
