use chrono::{Datelike, Duration, Local, NaiveDate};
use leptos::prelude::*;
use thaw::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// First and last day of the month containing `date`, as yyyy-mm-dd.
pub fn month_range(date: NaiveDate) -> (String, String) {
    let start = date.with_day(1).unwrap_or(date);
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let end = next_month.map(|d| d - Duration::days(1)).unwrap_or(date);
    (
        start.format(DATE_FORMAT).to_string(),
        end.format(DATE_FORMAT).to_string(),
    )
}

/// `days` days ending on `today`, inclusive.
pub fn last_days_range(today: NaiveDate, days: i64) -> (String, String) {
    let start = today - Duration::days(days.max(1) - 1);
    (
        start.format(DATE_FORMAT).to_string(),
        today.format(DATE_FORMAT).to_string(),
    )
}

/// Two date inputs plus quick presets. Empty strings mean "no bound".
#[component]
pub fn DateRangePicker(
    /// yyyy-mm-dd or empty
    #[prop(into)]
    date_from: Signal<String>,
    #[prop(into)] date_to: Signal<String>,
    /// Called with (from, to)
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let today = move || Local::now().date_naive();

    view! {
        <div class="date-range-picker">
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_from.get()
                on:change=move |ev| {
                    on_change.run((event_target_value(&ev), date_to.get_untracked()))
                }
            />
            <span class="date-range-picker__sep">"–"</span>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_to.get()
                on:change=move |ev| {
                    on_change.run((date_from.get_untracked(), event_target_value(&ev)))
                }
            />
            <Space>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_change.run(month_range(today()))
                >
                    "This month"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_change.run(last_days_range(today(), 30))
                >
                    "Last 30 days"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_change.run((String::new(), String::new()))
                >
                    "All time"
                </Button>
            </Space>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_range() {
        assert_eq!(
            month_range(d(2024, 2, 17)),
            ("2024-02-01".to_string(), "2024-02-29".to_string())
        );
        assert_eq!(
            month_range(d(2024, 12, 5)),
            ("2024-12-01".to_string(), "2024-12-31".to_string())
        );
    }

    #[test]
    fn test_last_days_range() {
        assert_eq!(
            last_days_range(d(2025, 3, 30), 30),
            ("2025-03-01".to_string(), "2025-03-30".to_string())
        );
        assert_eq!(
            last_days_range(d(2025, 3, 30), 0),
            ("2025-03-30".to_string(), "2025-03-30".to_string())
        );
    }
}
