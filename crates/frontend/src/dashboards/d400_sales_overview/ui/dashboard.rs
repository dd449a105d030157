use super::charts::{BarChart, BarDatum};
use crate::dashboards::d400_sales_overview::api::{load_dashboard, DashboardData};
use crate::dashboards::d400_sales_overview::model::{daily_points, monthly_buckets, ChartView, MONTH_LABELS};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_number_int, format_vnd};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d400_sales_overview::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (data, set_data) = signal(None::<DashboardData>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let chart_view = RwSignal::new(ChartView::Monthly);

    let load = move || {
        let range = DateRange::new(&date_from.get_untracked(), &date_to.get_untracked());
        if range.is_set() {
            log::debug!("Loading dashboard for {:?}..{:?}", range.start, range.end);
        } else {
            log::debug!("Loading dashboard for all time");
        }
        chart_view.set(ChartView::default());
        set_loading.set(true);
        spawn_local(async move {
            match load_dashboard(range).await {
                Ok(loaded) => {
                    set_data.set(Some(loaded));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load dashboard: {}", e);
                    set_data.set(None);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let summary = move || data.with(|d| d.as_ref().map(|d| d.summary.clone()));
    let comparison = move || summary().and_then(|s| s.comparison);

    let chart_data = Signal::derive(move || {
        data.with(|d| {
            let Some(d) = d else {
                return Vec::new();
            };
            match chart_view.get() {
                ChartView::Monthly => monthly_buckets(&d.revenue)
                    .into_iter()
                    .map(|b| BarDatum {
                        label: b.label().to_string(),
                        value: b.revenue,
                        secondary: b.orders as f64,
                    })
                    .collect(),
                ChartView::Daily(month) => daily_points(&d.revenue, month)
                    .into_iter()
                    .map(|p| BarDatum {
                        label: p.label,
                        value: p.revenue,
                        secondary: p.orders as f64,
                    })
                    .collect(),
            }
        })
    });

    let drill_down = Callback::new(move |idx: usize| {
        if chart_view.get_untracked() == ChartView::Monthly {
            chart_view.set(ChartView::Daily(idx as u32 + 1));
        }
    });

    load();

    view! {
        <PageFrame page_id="d400_sales_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Sales overview" subtitle="Revenue, orders and best sellers">
                <DateRangePicker
                    date_from=date_from
                    date_to=date_to
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        set_date_from.set(from);
                        set_date_to.set(to);
                        load();
                    })
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Revenue"
                    icon_name="revenue"
                    value=Signal::derive(move || summary().map(|s| format_vnd(s.total_revenue)))
                    change_percent=Signal::derive(move || comparison().and_then(|c| c.revenue_comparison))
                />
                <StatCard
                    label="Orders"
                    icon_name="orders"
                    value=Signal::derive(move || summary().map(|s| format_number_int(s.total_orders as f64)))
                    change_percent=Signal::derive(move || comparison().and_then(|c| c.orders_comparison))
                />
                <StatCard
                    label="Average order value"
                    icon_name="trending"
                    value=Signal::derive(move || summary().map(|s| format_vnd(s.average_order_value)))
                />
                <StatCard
                    label="New customers"
                    icon_name="user-plus"
                    value=Signal::derive(move || summary().map(|s| format_number_int(s.new_customers as f64)))
                />
            </div>

            <div class="dashboard-card">
                <div class="dashboard-card__header">
                    <h2 class="dashboard-card__title">
                        {move || match chart_view.get() {
                            ChartView::Monthly => "Revenue by month".to_string(),
                            ChartView::Daily(m) => format!("Revenue in {}", MONTH_LABELS[(m as usize - 1) % 12]),
                        }}
                    </h2>
                    <Show when=move || chart_view.get() != ChartView::Monthly>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| chart_view.set(ChartView::Monthly)
                        >
                            {icon("chevron-left")}
                            " All months"
                        </Button>
                    </Show>
                </div>
                <Show
                    when=move || !chart_data.with(|d| d.is_empty())
                    fallback=move || view! {
                        <div class="dashboard-card__empty">
                            {move || if loading.get() { "Loading..." } else { "No sales in this period." }}
                        </div>
                    }
                >
                    <BarChart data=chart_data on_bar_click=drill_down />
                </Show>
                <div class="dashboard-card__hint">
                    {move || match chart_view.get() {
                        ChartView::Monthly => "Click a month to see its days.",
                        ChartView::Daily(_) => "Bars show revenue, the line shows order count.",
                    }}
                </div>
            </div>

            <div class="dashboard-card">
                <div class="dashboard-card__header">
                    <h2 class="dashboard-card__title">"Top products"</h2>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Product"</th>
                            <th class="data-table__num">"Quantity"</th>
                            <th class="data-table__num">"Revenue"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            data.with(|d| d.as_ref().map(|d| d.top_products.clone()).unwrap_or_default())
                                .into_iter()
                                .enumerate()
                                .map(|(i, p)| view! {
                                    <tr>
                                        <td>{i + 1}</td>
                                        <td>{p.product.product_name}</td>
                                        <td class="data-table__num">{format_number_int(p.total_quantity as f64)}</td>
                                        <td class="data-table__num">{format_vnd(p.total_revenue)}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
