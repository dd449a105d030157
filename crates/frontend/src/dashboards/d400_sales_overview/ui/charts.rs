use crate::dashboards::d400_sales_overview::model::{bar_layout, line_points};
use crate::shared::components::table::format_compact;
use leptos::prelude::*;

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 240.0;
/// Room under the plot for the x labels.
const LABEL_BAND: f64 = 24.0;

/// One category of a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// Secondary series drawn as a line, e.g. order count
    pub secondary: f64,
}

/// Bars for the primary value with a line for the secondary one.
/// Clicking a bar reports its index.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<BarDatum>>,
    #[prop(optional)] on_bar_click: Option<Callback<usize>>,
) -> impl IntoView {
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT + LABEL_BAND);

    let chart = move || {
        let data = data.get();
        let values: Vec<f64> = data.iter().map(|d| d.value).collect();
        let secondary: Vec<f64> = data.iter().map(|d| d.secondary).collect();
        let bars = bar_layout(&values, CHART_WIDTH, CHART_HEIGHT);
        let line = line_points(&secondary, CHART_WIDTH, CHART_HEIGHT)
            .into_iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        let clickable = on_bar_click.is_some();

        let bar_views = bars
            .into_iter()
            .zip(data)
            .enumerate()
            .map(|(idx, (bar, datum))| {
                let tooltip = format!("{}: {} ({} orders)", datum.label, format_compact(datum.value), datum.secondary);
                view! {
                    <g
                        class="bar-chart__bar"
                        class:bar-chart__bar--clickable=clickable
                        on:click=move |_| {
                            if let Some(cb) = on_bar_click {
                                cb.run(idx);
                            }
                        }
                    >
                        <title>{tooltip}</title>
                        <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="3"></rect>
                        <text
                            class="bar-chart__label"
                            x={bar.x + bar.width / 2.0}
                            y={CHART_HEIGHT + LABEL_BAND - 6.0}
                            text-anchor="middle"
                        >
                            {datum.label}
                        </text>
                    </g>
                }
            })
            .collect_view();

        view! {
            {bar_views}
            <polyline class="bar-chart__line" points=line fill="none"></polyline>
        }
    };

    view! {
        <svg class="bar-chart" viewBox=view_box preserveAspectRatio="none">
            <line class="bar-chart__axis" x1="0" y1=CHART_HEIGHT x2=CHART_WIDTH y2=CHART_HEIGHT></line>
            {chart}
        </svg>
    }
}
