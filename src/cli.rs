//! CLI argument parsing for the price display controller.
//!
//! Uses clap for argument parsing with environment variable fallbacks; a
//! flag always wins over its environment variable.

use clap::{Parser, ValueHint};

/// Tibber's public demo token; serves sample data only.
pub const TIBBER_DEMO_TOKEN: &str = "5K4MVS-OjfWhK_4yrjOlFe1F6kJXPVf7eQYggo8ebAE";

/// Tibber spot prices on an Awtrix pixel-matrix display.
///
/// Fetches hourly electricity prices from the Tibber API once an hour and
/// renders them as a color-coded bar chart with a current-price label.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Your Tibber developer API token
    #[arg(
        long = "tibber-token",
        env = "TIBBER_TOKEN",
        default_value = TIBBER_DEMO_TOKEN
    )]
    pub tibber_token: String,

    /// The IPv4 address of your Awtrix light device
    #[arg(
        long = "awtrix-ip",
        env = "AWTRIX_IP",
        default_value = "127.0.0.1",
        value_hint = ValueHint::Hostname
    )]
    pub awtrix_ip: String,
}
