//! Domain types and decision logic for the hourly price window.

pub mod chart;
pub mod classify;
pub mod window;

use chrono::{DateTime, Utc};

/// One hourly spot-price quotation, as received from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    /// Start of the hour this price covers.
    pub starts_at: DateTime<Utc>,
    /// Total price in currency units, taxes included.
    pub total: f64,
}
