//! Well-known performance metric names.
//!
//! The `performance_data.metric_name` column is free text; these are the
//! names the dashboard headline figures look for. Any other name is still
//! summed and charted, just not promoted to a headline.

/// Total number of emails sent through a campaign's channels.
pub const METRIC_EMAILS_SENT: &str = "Emails Sent";

/// Email open rate, stored as a percentage (e.g. `25.5` for 25.5%).
pub const METRIC_OPEN_RATE: &str = "Open Rate";

/// Click-through rate, stored as a percentage.
pub const METRIC_CLICK_THROUGH_RATE: &str = "Click-Through Rate";

/// All headline metric names, in display order.
pub const HEADLINE_METRICS: &[&str] = &[
    METRIC_EMAILS_SENT,
    METRIC_OPEN_RATE,
    METRIC_CLICK_THROUGH_RATE,
];

/// Returns `true` if `name` is one of the headline metrics.
pub fn is_headline_metric(name: &str) -> bool {
    HEADLINE_METRICS.contains(&name)
}
