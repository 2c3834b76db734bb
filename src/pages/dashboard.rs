//! Dashboard Page
//!
//! Summary cards, value trend, category split, transactions and recent activity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_charts::{BarChart, DoughnutChart, LineChart};

use crate::api;
use crate::chart_data::{category_slices, to_series};
use crate::components::{PeriodSelector, Spinner};
use crate::context::AppContext;
use crate::format::{format_amount, CURRENCY};
use crate::models::{Dashboard, TrendPeriod};

const LOAD_FAILED: &str = "Could not load dashboard data.";

#[component]
fn SummaryCard(title: &'static str, value: String, #[prop(optional)] tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("summary-card {}", tone)>
            <span class="summary-title">{title}</span>
            <span class="summary-value">{value}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (period, set_period) = signal(TrendPeriod::default());
    let (dashboard, set_dashboard) = signal::<Option<Dashboard>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Refetch whenever the period changes
    Effect::new(move |_| {
        let period = period.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::get_dashboard(period).await {
                Ok(data) => {
                    web_sys::console::log_1(
                        &format!("[Dashboard] Loaded {} data, {} activities", period.as_str(), data.recent_activity.len()).into(),
                    );
                    set_dashboard.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(LOAD_FAILED.to_string()));
                    ctx.report("Dashboard", &e);
                }
            }
            set_loading.set(false);
        });
    });

    let trend_labels = Signal::derive(move || dashboard.with(|d| d.as_ref().map(|d| d.trend_data.labels.clone()).unwrap_or_default()));
    let trend_series = Signal::derive(move || dashboard.with(|d| d.as_ref().map(|d| to_series(&d.trend_data)).unwrap_or_default()));
    let tx_labels = Signal::derive(move || dashboard.with(|d| d.as_ref().map(|d| d.transaction_data.labels.clone()).unwrap_or_default()));
    let tx_series = Signal::derive(move || dashboard.with(|d| d.as_ref().map(|d| to_series(&d.transaction_data)).unwrap_or_default()));
    let slices = Signal::derive(move || dashboard.with(|d| d.as_ref().map(|d| category_slices(&d.category_data)).unwrap_or_default()));

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <PeriodSelector period=period set_period=set_period />
            </div>

            {move || error.get().map(|e| view! { <div class="notice error">{e}</div> })}

            <Show when=move || !loading.get() || dashboard.with(Option::is_some) fallback=|| view! { <Spinner /> }>
                {move || dashboard.get().map(|d| {
                    let summary = d.summary.clone();
                    view! {
                        <div class="summary-grid">
                            <SummaryCard title="Total Items" value=summary.total_items.to_string() />
                            <SummaryCard title="Low Stock Items" value=summary.low_stock.to_string() tone="warning" />
                            <SummaryCard title="Recent Orders" value=summary.recent_orders.to_string() />
                            <SummaryCard
                                title="Inventory Value"
                                value=format!("{} {}", format_amount(summary.total_value), CURRENCY)
                            />
                        </div>

                        <div class="chart-grid">
                            <div class="card chart-card wide">
                                <LineChart labels=trend_labels series=trend_series title="Inventory Value Trends" />
                            </div>
                            <div class="card chart-card">
                                <DoughnutChart slices=slices title="Inventory by Category" />
                            </div>
                            <div class="card chart-card">
                                <BarChart labels=tx_labels series=tx_series title="Weekly Transactions" />
                            </div>
                        </div>

                        <div class="card">
                            <h2>"Recent Activity"</h2>
                            {if d.recent_activity.is_empty() {
                                view! { <p class="empty">"No recent activity."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="activity-list">
                                        {d.recent_activity.into_iter().map(|a| view! {
                                            <li class="activity">
                                                <span class=a.kind.css_class()></span>
                                                <span class="activity-item">{a.item}</span>
                                                <span class="activity-qty">{a.quantity}</span>
                                                <span class="activity-date">{a.date}</span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }.into_any()
                            }}
                        </div>
                    }
                })}
            </Show>
        </div>
    }
}
