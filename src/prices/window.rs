//! Rolling price window: a short historic tail plus everything upcoming.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::prices::PriceRecord;

/// Historic records kept after each update, counted back from `now`.
const HISTORIC_KEEP: usize = 4;

/// Merge freshly fetched prices into the window.
///
/// An empty fetch leaves the window untouched. Otherwise the fetched data
/// replaces the window wholesale: already-elapsed records are trimmed to the
/// last [`HISTORIC_KEEP`] entries and every upcoming record is kept. The
/// result stays in provider order, historic first.
pub fn update(
    window: Vec<PriceRecord>,
    fetched: Vec<PriceRecord>,
    now: DateTime<Utc>,
) -> Result<Vec<PriceRecord>> {
    if fetched.is_empty() {
        return Ok(window);
    }

    let (mut historic, mut upcoming) = split_prices(fetched, now)?;
    if historic.len() > HISTORIC_KEEP {
        historic.drain(..historic.len() - HISTORIC_KEEP);
    }
    historic.append(&mut upcoming);
    Ok(historic)
}

/// Partition prices into (historic, upcoming) around `now`.
///
/// A record starting exactly at `now` fits neither side. Prices are aligned
/// to whole clock hours while `now` carries sub-second resolution, so the
/// case is unreachable with real inputs; if it does show up the input is
/// broken and the error propagates rather than the record being guessed
/// into one of the halves.
fn split_prices(
    prices: Vec<PriceRecord>,
    now: DateTime<Utc>,
) -> Result<(Vec<PriceRecord>, Vec<PriceRecord>)> {
    let mut historic = Vec::new();
    let mut upcoming = Vec::new();

    for price in prices {
        if price.starts_at < now {
            historic.push(price);
        } else if price.starts_at > now {
            upcoming.push(price);
        } else {
            bail!("can't place price starting exactly at {}", price.starts_at);
        }
    }

    Ok((historic, upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap()
    }

    /// `offset` whole hours relative to 12:00 on the reference day.
    fn record(offset: i64) -> PriceRecord {
        PriceRecord {
            starts_at: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap() + Duration::hours(offset),
            total: 0.25,
        }
    }

    fn records(offsets: std::ops::Range<i64>) -> Vec<PriceRecord> {
        offsets.map(record).collect()
    }

    #[test]
    fn empty_fetch_keeps_window() {
        let window = records(-2..3);
        let updated = update(window.clone(), Vec::new(), now()).unwrap();
        assert_eq!(updated, window);
    }

    #[test]
    fn few_historic_records_all_survive() {
        // Offsets -1 and 0 are elapsed at 12:30, the remaining 30 upcoming.
        let updated = update(Vec::new(), records(-1..31), now()).unwrap();
        assert_eq!(updated.len(), 2 + 30);
    }

    #[test]
    fn historic_portion_trimmed_to_last_four() {
        let updated = update(Vec::new(), records(-6..31), now()).unwrap();
        assert_eq!(updated.len(), 4 + 30);
        // The four retained historic entries are the ones closest to now.
        assert_eq!(updated[0], record(-3));
        assert_eq!(updated[3], record(0));
        assert_eq!(updated[4], record(1));
    }

    #[test]
    fn order_is_historic_then_upcoming_unchanged() {
        let updated = update(Vec::new(), records(-2..4), now()).unwrap();
        let offsets: Vec<_> = updated.iter().map(|p| p.starts_at).collect();
        let mut sorted = offsets.clone();
        sorted.sort();
        assert_eq!(offsets, sorted);
    }

    #[test]
    fn record_starting_exactly_now_is_an_error() {
        let exact = PriceRecord {
            starts_at: now(),
            total: 0.25,
        };
        assert!(update(Vec::new(), vec![exact], now()).is_err());
    }

    #[test]
    fn consecutive_fetches_converge_on_four_historic() {
        // First fetch: 2 elapsed records, 30 upcoming.
        let window = update(Vec::new(), records(-1..31), now()).unwrap();
        assert_eq!(window.len(), 32);

        // Next fetch covers more elapsed hours; historic caps at 4.
        let window = update(window, records(-5..31), now()).unwrap();
        assert_eq!(window.len(), 34);
    }
}
