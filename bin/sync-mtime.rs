#[macro_use]
extern crate tracing;

use anyhow::Result;
use clap::Parser;

use picsort::{cli, normalize};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = cli::SyncArgs::parse().into_config();
    debug!("{:?}", config);

    let summary = normalize::sync_directory(&config)?;

    info!("Successfully adjusted all images/videos");
    info!("{}", summary);
    Ok(())
}
