//! Fetching hourly spot prices from the Tibber GraphQL API.

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::prices::PriceRecord;

const TIBBER_API_URL: &str = "https://api.tibber.com/v1-beta/gql";

/// Today's and tomorrow's hourly prices for the account's first home.
const PRICE_QUERY: &str = "{ viewer { homes { currentSubscription { priceInfo { \
today { total startsAt } tomorrow { total startsAt } } } } } }";

// Wire structs follow the GraphQL response shape; `tomorrow` is empty until
// the provider publishes next-day prices around noon.

#[derive(Debug, Deserialize)]
struct GqlResponse {
    data: Option<GqlData>,
    #[serde(default)]
    errors: Vec<GqlError>,
}

#[derive(Debug, Deserialize)]
struct GqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GqlData {
    viewer: Viewer,
}

#[derive(Debug, Deserialize)]
struct Viewer {
    #[serde(default)]
    homes: Vec<Home>,
}

#[derive(Debug, Deserialize)]
struct Home {
    #[serde(rename = "currentSubscription")]
    current_subscription: Option<Subscription>,
}

#[derive(Debug, Deserialize)]
struct Subscription {
    #[serde(rename = "priceInfo")]
    price_info: PriceInfo,
}

#[derive(Debug, Deserialize)]
struct PriceInfo {
    #[serde(default)]
    today: Vec<WirePrice>,
    #[serde(default)]
    tomorrow: Vec<WirePrice>,
}

#[derive(Debug, Deserialize)]
struct WirePrice {
    total: f64,
    #[serde(rename = "startsAt")]
    starts_at: String,
}

/// Fetch all known hourly prices, in provider order (chronological).
pub async fn read_prices(client: &Client, token: &str) -> anyhow::Result<Vec<PriceRecord>> {
    let resp = client
        .post(TIBBER_API_URL)
        .bearer_auth(token)
        .json(&json!({ "query": PRICE_QUERY }))
        .send()
        .await
        .context("failed to send request to Tibber")?
        .error_for_status()
        .context("non-success status from Tibber")?;

    let bytes = resp
        .bytes()
        .await
        .context("failed to read Tibber response body")?;

    let parsed: GqlResponse =
        serde_json::from_slice(&bytes).context("failed to parse Tibber GraphQL response")?;

    records_from_response(parsed)
}

fn records_from_response(resp: GqlResponse) -> anyhow::Result<Vec<PriceRecord>> {
    if let Some(err) = resp.errors.first() {
        bail!("Tibber GraphQL error: {}", err.message);
    }

    let data = resp.data.context("Tibber response carried no data")?;
    let home = data
        .viewer
        .homes
        .into_iter()
        .next()
        .context("no homes on this Tibber account")?;
    let price_info = home
        .current_subscription
        .context("home has no active subscription")?
        .price_info;

    price_info
        .today
        .into_iter()
        .chain(price_info.tomorrow)
        .map(to_record)
        .collect()
}

fn to_record(wire: WirePrice) -> anyhow::Result<PriceRecord> {
    let starts_at = DateTime::parse_from_rfc3339(&wire.starts_at)
        .with_context(|| format!("invalid startsAt timestamp: {}", wire.starts_at))?
        .with_timezone(&Utc);

    Ok(PriceRecord {
        starts_at,
        total: wire.total,
    })
}
