//! Leptos Charts
//!
//! Minimal SVG charts for Leptos: line, grouped bar and doughnut.
//! Layout math lives in [`geometry`] so it can be tested off the browser.

pub mod geometry;

use leptos::prelude::*;

use geometry::{bar_rects, doughnut_segments, format_tick, label_positions, line_points, points_attr, Frame, Scale};

/// One named series of values, aligned with the chart labels
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: String,
}

/// One doughnut slice
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub fill: String,
    pub stroke: String,
}

const CHART_FRAME: Frame = Frame::new(640.0, 280.0);
const Y_TICKS: usize = 4;

/// Series colour swatches
#[component]
fn Legend(items: Vec<(String, String)>) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            {items.into_iter().map(|(label, color)| view! {
                <li class="chart-legend-item">
                    <span class="chart-legend-swatch" style=format!("background-color: {};", color)></span>
                    <span class="chart-legend-label">{label}</span>
                </li>
            }).collect_view()}
        </ul>
    }
}

/// Grid lines, y tick labels and x labels
fn axes(frame: Frame, scale: Scale, labels: Vec<String>, banded: bool) -> impl IntoView {
    let ticks = scale.ticks(Y_TICKS);
    let xs = label_positions(labels.len(), &frame, banded);
    let label_y = format!("{:.2}", frame.height - 8.0);

    view! {
        <g class="chart-axes">
            {ticks.into_iter().map(|tick| {
                let y = format!("{:.2}", frame.y_for(tick, &scale));
                view! {
                    <line
                        class="chart-grid"
                        x1=format!("{:.2}", frame.pad_left)
                        x2=format!("{:.2}", frame.right())
                        y1=y.clone()
                        y2=y.clone()
                        stroke="#e5e7eb"
                    />
                    <text class="chart-tick" x=format!("{:.2}", frame.pad_left - 6.0) y=y text-anchor="end" dominant-baseline="middle">
                        {format_tick(tick)}
                    </text>
                }
            }).collect_view()}
            {xs.into_iter().zip(labels).map(|(x, label)| view! {
                <text class="chart-label" x=format!("{:.2}", x) y=label_y.clone() text-anchor="middle">
                    {label}
                </text>
            }).collect_view()}
        </g>
    }
}

fn legend_items(series: &[Series]) -> Vec<(String, String)> {
    series.iter().map(|s| (s.label.clone(), s.color.clone())).collect()
}

/// Line chart with one polyline per series
#[component]
pub fn LineChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] series: Signal<Vec<Series>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let frame = CHART_FRAME;

    view! {
        <figure class="chart chart-line">
            {title.map(|t| view! { <figcaption class="chart-title">{t}</figcaption> })}
            {move || {
                let labels = labels.get();
                let series = series.get();
                if labels.is_empty() || series.is_empty() {
                    return view! { <p class="chart-empty">"No data"</p> }.into_any();
                }
                let scale = Scale::fit(series.iter().flat_map(|s| s.values.iter().copied()));
                let legend = legend_items(&series);

                view! {
                    <Legend items=legend />
                    <svg class="chart-svg" viewBox=frame.view_box() preserveAspectRatio="xMidYMid meet">
                        {axes(frame, scale, labels, false)}
                        {series.into_iter().map(|s| {
                            let points = line_points(&s.values, &frame, &scale);
                            let color = s.color.clone();
                            view! {
                                <g class="chart-series">
                                    <polyline points=points_attr(&points) fill="none" stroke=s.color stroke-width="2" />
                                    {points.into_iter().map(|(x, y)| view! {
                                        <circle cx=format!("{:.2}", x) cy=format!("{:.2}", y) r="3" fill=color.clone() />
                                    }).collect_view()}
                                </g>
                            }
                        }).collect_view()}
                    </svg>
                }.into_any()
            }}
        </figure>
    }
}

/// Grouped bar chart
#[component]
pub fn BarChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] series: Signal<Vec<Series>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let frame = CHART_FRAME;

    view! {
        <figure class="chart chart-bar">
            {title.map(|t| view! { <figcaption class="chart-title">{t}</figcaption> })}
            {move || {
                let labels = labels.get();
                let series = series.get();
                if labels.is_empty() || series.is_empty() {
                    return view! { <p class="chart-empty">"No data"</p> }.into_any();
                }
                let scale = Scale::fit(series.iter().flat_map(|s| s.values.iter().copied()));
                let legend = legend_items(&series);
                let colors: Vec<String> = series.iter().map(|s| s.color.clone()).collect();
                let values: Vec<Vec<f64>> = series.into_iter().map(|s| s.values).collect();
                let rects = bar_rects(&values, labels.len(), &frame, &scale);

                view! {
                    <Legend items=legend />
                    <svg class="chart-svg" viewBox=frame.view_box() preserveAspectRatio="xMidYMid meet">
                        {axes(frame, scale, labels, true)}
                        {rects.into_iter().map(|rect| view! {
                            <rect
                                class="chart-bar-rect"
                                x=format!("{:.2}", rect.x)
                                y=format!("{:.2}", rect.y)
                                width=format!("{:.2}", rect.width)
                                height=format!("{:.2}", rect.height)
                                fill=colors[rect.series].clone()
                            />
                        }).collect_view()}
                    </svg>
                }.into_any()
            }}
        </figure>
    }
}

/// Doughnut chart with a legend
#[component]
pub fn DoughnutChart(
    #[prop(into)] slices: Signal<Vec<Slice>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    const SIZE: f64 = 240.0;

    view! {
        <figure class="chart chart-doughnut">
            {title.map(|t| view! { <figcaption class="chart-title">{t}</figcaption> })}
            {move || {
                let slices = slices.get();
                let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
                let segments = doughnut_segments(&values, SIZE / 2.0, SIZE / 2.0, SIZE / 2.0 - 4.0, SIZE / 4.0);
                if segments.is_empty() {
                    return view! { <p class="chart-empty">"No data"</p> }.into_any();
                }
                let legend: Vec<(String, String)> = slices.iter().map(|s| (s.label.clone(), s.fill.clone())).collect();

                view! {
                    <svg class="chart-svg" viewBox=format!("0 0 {} {}", SIZE, SIZE)>
                        {segments.into_iter().map(|segment| {
                            let slice = &slices[segment.index];
                            view! {
                                <path
                                    d=segment.path
                                    fill=slice.fill.clone()
                                    stroke=slice.stroke.clone()
                                    stroke-width="1"
                                    fill-rule="evenodd"
                                />
                            }
                        }).collect_view()}
                    </svg>
                    <Legend items=legend />
                }.into_any()
            }}
        </figure>
    }
}
