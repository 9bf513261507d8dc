//! Campaign performance dashboard presenter.
//!
//! Turns a campaign's [`MetricTotals`] into the three headline figures and a
//! bar-chart series. Rates are not range-checked; a malformed dataset can
//! produce a rate above 100%.

use serde::Serialize;

use crate::metric_names::{
    is_headline_metric, METRIC_CLICK_THROUGH_RATE, METRIC_EMAILS_SENT, METRIC_OPEN_RATE,
};
use crate::metrics::MetricTotals;
use crate::types::DbId;

/// Title shown above the metrics bar chart.
pub const CHART_TITLE: &str = "Key Performance Metrics";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One bar in the metrics chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub metric_name: String,
    pub total_value: f64,
    /// Whether this metric is also shown as a headline figure.
    pub is_headline: bool,
}

/// Bar-chart payload: x = `metric_name`, y = `total_value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub series: Vec<ChartPoint>,
}

/// Everything the dashboard page renders for one selected campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub campaign_id: DbId,
    pub campaign_name: String,
    pub emails_sent: f64,
    pub open_rate_pct: String,
    pub click_through_rate_pct: String,
    /// `false` when the campaign has no performance records at all.
    pub has_data: bool,
    pub chart: BarChart,
}

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

/// Format a percentage value with two decimals, e.g. `25.5` -> `"25.50%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Build the chart series from aggregated totals, ordered by metric name.
pub fn chart_series(totals: &MetricTotals) -> Vec<ChartPoint> {
    totals
        .iter()
        .map(|(name, total)| ChartPoint {
            metric_name: name.to_string(),
            total_value: total,
            is_headline: is_headline_metric(name),
        })
        .collect()
}

/// Assemble the dashboard view for a campaign.
///
/// Absent headline metrics default to zero.
pub fn build_dashboard_view(
    campaign_id: DbId,
    campaign_name: &str,
    totals: &MetricTotals,
) -> DashboardView {
    DashboardView {
        campaign_id,
        campaign_name: campaign_name.to_string(),
        emails_sent: totals.get_or_zero(METRIC_EMAILS_SENT),
        open_rate_pct: format_percent(totals.get_or_zero(METRIC_OPEN_RATE)),
        click_through_rate_pct: format_percent(totals.get_or_zero(METRIC_CLICK_THROUGH_RATE)),
        has_data: !totals.is_empty(),
        chart: BarChart {
            title: CHART_TITLE,
            series: chart_series(totals),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
