//! The fetch → window-update → render cycle and the hourly tick driving it.

use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::info;

use crate::awtrix::{self, AwtrixApp, AwtrixDrawCommand};
use crate::cli::Args;
use crate::prices::{chart, classify, window, PriceRecord};
use crate::tibber;

/// Wait between cycles; the provider publishes at most one new hour per hour.
const UPDATE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Y position of the current-price label.
const LABEL_Y: i32 = 1;

/// Run the scheduler loop forever.
///
/// Strictly sequential: one cycle runs to completion before the next sleep
/// begins, so the price window is never touched concurrently. Any fetch or
/// publish error propagates out and terminates the process; recovery is
/// left to an external supervisor.
pub async fn run(args: &Args) -> anyhow::Result<()> {
    let client = Client::new();
    let mut known_prices: Vec<PriceRecord> = Vec::new();

    loop {
        known_prices = run_cycle(&client, args, known_prices).await?;

        info!("Sleeping for 1 hour");
        tokio::time::sleep(UPDATE_INTERVAL).await;
    }
}

/// One fetch → update → render pass; returns the new price window.
async fn run_cycle(
    client: &Client,
    args: &Args,
    known_prices: Vec<PriceRecord>,
) -> anyhow::Result<Vec<PriceRecord>> {
    info!("Fetching Tibber prices...");
    let fetched = tibber::read_prices(client, &args.tibber_token)
        .await
        .context("could not fetch prices")?;

    let now = Utc::now();

    info!("Updating known prices");
    let known_prices = window::update(known_prices, fetched, now)?;

    update_display(client, &args.awtrix_ip, &known_prices, now)
        .await
        .context("could not update custom application")?;

    Ok(known_prices)
}

/// Render the window to the display: current-price label plus bar chart.
async fn update_display(
    client: &Client,
    awtrix_ip: &str,
    prices: &[PriceRecord],
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let relevant = &prices[..prices.len().min(chart::BAR_COUNT)];

    info!("Identified the following relevant prices");
    for price in relevant {
        info!("Starting at {}: {}", price.starts_at, price.total);
    }

    let label = match classify::current_price(relevant, now) {
        Some(price) => format!(" {}", rounded_price(price.total)),
        // Missing data for the current hour is not fatal; show a placeholder.
        None => "?".to_string(),
    };

    let mut draw = vec![AwtrixDrawCommand::text(0, LABEL_Y, label, "#FFFFFF")];
    let bars = chart::map_to_bars(relevant, now);
    info!("Drawing {} prices...", bars.len());
    draw.extend(bars);

    awtrix::post_application(client, awtrix_ip, &AwtrixApp { draw }).await
}

/// Price in hundredths of the currency unit, rounded half away from zero.
fn rounded_price(total: f64) -> i64 {
    (total * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_price_is_expressed_in_hundredths() {
        assert_eq!(rounded_price(0.23), 23);
        assert_eq!(rounded_price(0.678), 68);
        assert_eq!(rounded_price(1.0), 100);
        assert_eq!(rounded_price(0.0), 0);
    }

    #[test]
    fn negative_prices_round_away_from_zero() {
        assert_eq!(rounded_price(-0.05), -5);
        assert_eq!(rounded_price(-0.125), -13);
    }
}
