use crate::shared::components::table::format_percent_change;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Direction class for a period-over-period change.
fn change_class(pct: f64) -> &'static str {
    if pct > 0.0 {
        "stat-card__change stat-card__change--up"
    } else if pct < 0.0 {
        "stat-card__change stat-card__change--down"
    } else {
        "stat-card__change stat-card__change--flat"
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value (None while loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Change % relative to the previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
) -> impl IntoView {
    let change_view = move || {
        change_percent.get().map(|pct| {
            view! {
                <span class=change_class(pct)>
                    {format_percent_change(pct)}
                    <span class="stat-card__change-hint">" vs previous period"</span>
                </span>
            }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "…".to_string())}
                </div>
                {change_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_class() {
        assert!(change_class(4.2).ends_with("--up"));
        assert!(change_class(-0.1).ends_with("--down"));
        assert!(change_class(0.0).ends_with("--flat"));
    }
}
