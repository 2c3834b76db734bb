//! Item Detail Page
//!
//! Product information, stock in/out, per-item trend and movement history.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_charts::LineChart;

use crate::api;
use crate::chart_data::{has_trend, to_series};
use crate::components::{Link, PeriodSelector, Spinner, StockModal};
use crate::context::AppContext;
use crate::format::{format_money, format_timestamp, or_dash};
use crate::models::{ChartData, Item, StockHistory, StockType, TrendPeriod};
use crate::router::Route;
use crate::store::{store_update_item, use_app_store};

#[component]
fn InfoRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-row">
            <dt>{label}</dt>
            <dd>{children()}</dd>
        </div>
    }
}

#[component]
pub fn ItemDetailPage(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (item, set_item) = signal::<Option<Item>>(None);
    let (loading, set_loading) = signal(true);
    let (history, set_history) = signal(Vec::<StockHistory>::new());
    let (history_loading, set_history_loading) = signal(true);
    let (trend, set_trend) = signal(ChartData::default());
    let (period, set_period) = signal(TrendPeriod::default());
    let (reload, set_reload) = signal(0u32);
    let stock_kind = RwSignal::new(None::<StockType>);

    // Item and history, refetched after every stock movement
    Effect::new(move |_| {
        let _ = reload.get();
        set_history_loading.set(true);
        spawn_local(async move {
            match api::get_item(id).await {
                Ok(loaded) => {
                    // Keep the cached table row in step with the new stock level
                    store_update_item(&store, loaded.clone());
                    set_item.set(Some(loaded));
                }
                Err(e) => {
                    set_item.set(None);
                    ctx.report("ItemDetail", &e);
                }
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            match api::item_history(id).await {
                Ok(entries) => set_history.set(entries),
                Err(e) => ctx.report("ItemDetail", &e),
            }
            set_history_loading.set(false);
        });
    });

    Effect::new(move |_| {
        let period = period.get();
        let _ = reload.get();
        spawn_local(async move {
            match api::item_trend(id, period).await {
                Ok(data) => set_trend.set(data),
                Err(e) => {
                    set_trend.set(ChartData::default());
                    ctx.report("ItemDetail", &e);
                }
            }
        });
    });

    let item_name = Signal::derive(move || item.with(|i| i.as_ref().map(|i| i.name.clone()).unwrap_or_default()));
    let trend_labels = Signal::derive(move || trend.with(|t| t.labels.clone()));
    let trend_series = Signal::derive(move || trend.with(to_series));

    let not_found = move || {
        view! {
            <div class="card not-found-card">
                <h2>"Item not found"</h2>
                <p>{format!("The item with ID {} does not exist.", id)}</p>
                <Link to=Route::Inventory class="btn primary">"Return to inventory"</Link>
            </div>
        }
    };

    let details = move |item: Item| {
        let low = item.is_low_stock();
        view! {
            <div class="page-header">
                <div>
                    <Link to=Route::Inventory class="back-link">"← Back to inventory"</Link>
                    <h1>{item.name.clone()}</h1>
                </div>
                <div class="header-actions">
                    <button class="btn success" on:click=move |_| stock_kind.set(Some(StockType::In))>"Stock In"</button>
                    <button class="btn warning" on:click=move |_| stock_kind.set(Some(StockType::Out))>"Stock Out"</button>
                    <Link to={Route::ItemForm { edit_id: Some(item.id) }} class="btn secondary">"Edit"</Link>
                </div>
            </div>

            <div class="detail-grid">
                <div class="card">
                    {item.image.clone().map(|src| view! { <img class="item-image" src=src alt=item.name.clone() /> })}
                    <h2>"Product Information"</h2>
                    <dl class="info-list">
                        <InfoRow label="SKU">{item.sku.clone()}</InfoRow>
                        <InfoRow label="Category">{or_dash(item.category.as_deref())}</InfoRow>
                        <InfoRow label="Price">{format_money(item.price)}</InfoRow>
                        <InfoRow label="Current Stock">
                            <span class=if low { "stock low" } else { "stock ok" }>{format!("{} units", item.stock)}</span>
                        </InfoRow>
                        <InfoRow label="Min Stock Level">{item.min_stock_level}</InfoRow>
                        <InfoRow label="Location">{or_dash(item.location.as_deref())}</InfoRow>
                        <InfoRow label="Supplier">{or_dash(item.supplier.as_deref())}</InfoRow>
                        <InfoRow label="Last Updated">{format_timestamp(item.updated_at.as_deref())}</InfoRow>
                    </dl>
                </div>

                <div class="card chart-card">
                    <div class="card-header">
                        <h2>"Stock In/Out Trends"</h2>
                        <PeriodSelector period=period set_period=set_period />
                    </div>
                    <Show
                        when=move || trend.with(has_trend)
                        fallback=|| view! { <p class="empty">"No trend data available."</p> }
                    >
                        <LineChart labels=trend_labels series=trend_series />
                    </Show>
                </div>
            </div>
        }
    };

    view! {
        <div class="page item-detail-page">
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                match item.get() {
                    Some(item) => details(item).into_any(),
                    None => not_found().into_any(),
                }
            }}

            <Show when=move || item.with(Option::is_some)>
                <div class="card">
                    <h2>"Stock History"</h2>
                    {move || {
                        if history_loading.get() {
                            return view! { <p class="empty">"Loading history..."</p> }.into_any();
                        }
                        let entries = history.get();
                        if entries.is_empty() {
                            return view! { <p class="empty">"No stock history available."</p> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr><th>"Date"</th><th>"Type"</th><th>"Quantity"</th></tr>
                                </thead>
                                <tbody>
                                    {entries.into_iter().map(|entry| {
                                        let (class, sign) = match entry.kind {
                                            StockType::In => ("movement in", "+"),
                                            StockType::Out => ("movement out", "-"),
                                        };
                                        view! {
                                            <tr>
                                                <td>{format_timestamp(entry.created_at.as_deref())}</td>
                                                <td class=class>{entry.kind.title()}</td>
                                                <td class=class>{format!("{}{}", sign, entry.quantity)}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </div>
            </Show>

            <StockModal
                item_id=id
                item_name=item_name
                kind=stock_kind
                on_done=move |_| set_reload.update(|v| *v += 1)
            />
        </div>
    }
}
