//! Period Selector Component

use leptos::prelude::*;

use crate::models::TrendPeriod;

/// Row of period buttons; the active one is highlighted
#[component]
pub fn PeriodSelector(
    period: ReadSignal<TrendPeriod>,
    set_period: WriteSignal<TrendPeriod>,
) -> impl IntoView {
    view! {
        <div class="period-selector">
            {TrendPeriod::ALL.iter().map(|p| {
                let p = *p;
                view! {
                    <button
                        type="button"
                        class=move || if period.get() == p { "period-btn active" } else { "period-btn" }
                        on:click=move |_| set_period.set(p)
                    >
                        {p.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
