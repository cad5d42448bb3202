//! Current-price detection and the price→color ladder.

use chrono::{DateTime, Timelike, Utc};

use crate::prices::PriceRecord;

/// Highlight color for the hour that is running right now.
const CURRENT_COLOR: &str = "#FFFFFF";

/// Whether `price` covers the hour containing `now`.
///
/// Prices are bucketed to whole clock hours, so both instants are compared
/// at hour granularity: full calendar date plus hour of day. Comparing the
/// full date (not just day-of-month) keeps a record from exactly one month
/// ago from matching.
pub fn is_current(price: &PriceRecord, now: DateTime<Utc>) -> bool {
    price.starts_at.date_naive() == now.date_naive() && price.starts_at.hour() == now.hour()
}

/// First record in the window covering `now`, if any.
///
/// `None` is a legitimate outcome (the provider may simply have no data
/// for the current hour) and callers render a placeholder instead.
pub fn current_price(prices: &[PriceRecord], now: DateTime<Utc>) -> Option<&PriceRecord> {
    prices.iter().find(|price| is_current(price, now))
}

/// Display color for one price.
///
/// The current hour is always white. Every other hour is colored by a fixed
/// ascending threshold ladder on the total price, from cool blue (very
/// cheap) up to purple (very expensive). The boundaries are user-facing
/// semantics and must not drift.
pub fn color_for(price: &PriceRecord, now: DateTime<Utc>) -> &'static str {
    if is_current(price, now) {
        return CURRENT_COLOR;
    }

    match price.total {
        t if t <= 0.20 => "#6464ff",
        t if t < 0.25 => "#00ff00",
        t if t < 0.30 => "#ffff00",
        t if t < 0.35 => "#ff8000",
        t if t < 0.40 => "#ff0000",
        _ => "#800080",
    }
}
