//! Aggregation and chart geometry for the sales dashboard. Pure functions only.

use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d400_sales_overview::RevenuePoint;
use std::collections::BTreeMap;

use crate::shared::date_utils::{format_day_month, parse_backend_datetime};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Revenue and order count of one calendar month, summed over every year in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthBucket {
    /// 1..=12
    pub month: u32,
    pub revenue: f64,
    pub orders: usize,
}

impl MonthBucket {
    pub fn label(&self) -> &'static str {
        MONTH_LABELS[(self.month as usize - 1) % 12]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPoint {
    pub date: NaiveDate,
    /// dd/MM
    pub label: String,
    pub revenue: f64,
    pub orders: usize,
}

/// Which series the revenue chart shows. Every reload starts from the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartView {
    #[default]
    Monthly,
    /// Days of one month, 1..=12
    Daily(u32),
}

/// Twelve buckets, January first. Points with unparseable dates are skipped.
pub fn monthly_buckets(points: &[RevenuePoint]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = (1..=12)
        .map(|month| MonthBucket { month, revenue: 0.0, orders: 0 })
        .collect();
    for point in points {
        let Some(dt) = parse_backend_datetime(&point.date) else {
            continue;
        };
        let bucket = &mut buckets[dt.month0() as usize];
        bucket.revenue += point.value;
        bucket.orders += 1;
    }
    buckets
}

/// Per-day totals of `month`, sorted by date.
pub fn daily_points(points: &[RevenuePoint], month: u32) -> Vec<DayPoint> {
    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for point in points {
        let Some(dt) = parse_backend_datetime(&point.date) else {
            continue;
        };
        if dt.month() != month {
            continue;
        }
        let entry = by_day.entry(dt.date()).or_insert((0.0, 0));
        entry.0 += point.value;
        entry.1 += 1;
    }
    by_day
        .into_iter()
        .map(|(date, (revenue, orders))| DayPoint {
            date,
            label: format_day_month(date),
            revenue,
            orders,
        })
        .collect()
}

/// One bar in SVG user units; y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fraction of each slot left as a gap between bars.
const BAR_GAP_RATIO: f64 = 0.2;

/// Lays out `values` as bars filling a `width` × `height` box, scaled to the
/// largest value. Negative values are drawn as zero.
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<Bar> {
    if values.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let slot = width / values.len() as f64;
    let gap = slot * BAR_GAP_RATIO;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let bar_height = if max > 0.0 { v.max(0.0) / max * height } else { 0.0 };
            Bar {
                x: i as f64 * slot + gap / 2.0,
                y: height - bar_height,
                width: slot - gap,
                height: bar_height,
            }
        })
        .collect()
}

/// Polyline points for a line chart over the same box, e.g. order counts.
pub fn line_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let slot = if values.is_empty() { 0.0 } else { width / values.len() as f64 };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = if max > 0.0 { height - v.max(0.0) / max * height } else { height };
            (i as f64 * slot + slot / 2.0, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, value: f64) -> RevenuePoint {
        RevenuePoint { date: date.to_string(), value }
    }

    fn sample() -> Vec<RevenuePoint> {
        vec![
            point("2025-01-15T10:00:00", 100.0),
            point("2025-01-15T18:30:00", 50.0),
            point("2025-01-03", 25.0),
            point("2024-01-20T09:00:00Z", 10.0),
            point("2025-03-02T08:00:00", 300.0),
            point("not a date", 999.0),
        ]
    }

    #[test]
    fn test_reload_view_is_monthly() {
        assert_eq!(ChartView::default(), ChartView::Monthly);
        assert_ne!(ChartView::default(), ChartView::Daily(3));
    }

    #[test]
    fn test_monthly_buckets() {
        let buckets = monthly_buckets(&sample());
        assert_eq!(buckets.len(), 12);
        assert_eq!(buckets[0].label(), "Jan");
        assert_eq!(buckets[0].revenue, 185.0);
        assert_eq!(buckets[0].orders, 4);
        assert_eq!(buckets[1].orders, 0);
        assert_eq!(buckets[2].revenue, 300.0);
        let total: f64 = buckets.iter().map(|b| b.revenue).sum();
        assert_eq!(total, 485.0);
    }

    #[test]
    fn test_daily_points_sorted_and_grouped() {
        let days = daily_points(&sample(), 1);
        let labels: Vec<&str> = days.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["20/01", "03/01", "15/01"]);
        assert_eq!(days[2].revenue, 150.0);
        assert_eq!(days[2].orders, 2);
        assert!(daily_points(&sample(), 2).is_empty());
    }

    #[test]
    fn test_bar_layout_scales_to_max() {
        let bars = bar_layout(&[50.0, 100.0, 0.0, -5.0], 400.0, 200.0);
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[1].height, 200.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 100.0);
        assert_eq!(bars[2].height, 0.0);
        assert_eq!(bars[3].height, 0.0);
        assert_eq!(bars[0].width, 80.0);
        assert_eq!(bars[1].x, 110.0);
    }

    #[test]
    fn test_bar_layout_all_zero() {
        let bars = bar_layout(&[0.0, 0.0], 100.0, 50.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 50.0));
        assert!(bar_layout(&[], 100.0, 50.0).is_empty());
    }

    #[test]
    fn test_line_points() {
        let pts = line_points(&[0.0, 2.0], 100.0, 40.0);
        assert_eq!(pts, vec![(25.0, 40.0), (75.0, 0.0)]);
    }
}
