//! Scaling a run of prices into per-bar pixel geometry.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::awtrix::AwtrixDrawCommand;
use crate::prices::classify::color_for;
use crate::prices::PriceRecord;

/// Bars that fit on the display to the right of the price label.
pub const BAR_COUNT: usize = 24;
/// Inclusive vertical pixel range the prices scale into.
const Y_MIN: i32 = 1;
const Y_MAX: i32 = 8;
/// First column of the chart area.
const X_OFFSET: i32 = 12;

/// Map prices to one `df` bar each, earliest first.
///
/// At most [`BAR_COUNT`] records are rendered (the earliest-first prefix).
/// Each total is scaled linearly between the cheapest and the most
/// expensive record on display; a higher price gives a taller bar, i.e. a
/// smaller y coordinate on the top-left-origin display. A flat window has
/// no range to scale into, so every bar sits at the midpoint instead.
pub fn map_to_bars(prices: &[PriceRecord], now: DateTime<Utc>) -> Vec<AwtrixDrawCommand> {
    let prices = &prices[..prices.len().min(BAR_COUNT)];
    if prices.is_empty() {
        return Vec::new();
    }

    let min_total = prices.iter().map(|p| p.total).fold(f64::INFINITY, f64::min);
    let max_total = prices
        .iter()
        .map(|p| p.total)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut commands = Vec::with_capacity(prices.len());
    for (i, price) in prices.iter().enumerate() {
        let scaled = if min_total == max_total {
            f64::from(Y_MIN + Y_MAX) / 2.0
        } else {
            f64::from(Y_MIN)
                + f64::from(Y_MAX - Y_MIN) * (price.total - min_total) / (max_total - min_total)
        };
        let color = color_for(price, now);
        debug!(
            "Mapping price {} to {} (min: {}, max: {}, color: {})",
            price.total, scaled as i32, min_total, max_total, color
        );
        commands.push(AwtrixDrawCommand::fill(
            X_OFFSET + i as i32,
            Y_MAX - scaled.floor() as i32,
            1,
            Y_MAX,
            color,
        ));
    }

    commands
}
