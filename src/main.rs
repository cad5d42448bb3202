use clap::Parser;
use tracing::warn;

use crate::cli::{Args, TIBBER_DEMO_TOKEN};
use crate::utils::logging::init_logging;

mod app;
mod awtrix;
mod cli;
mod prices;
mod tibber;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    if args.tibber_token == TIBBER_DEMO_TOKEN {
        warn!("Using Tibber demo token. Please provide your own developer token via --tibber-token for real data");
    }

    app::run(&args).await
}
