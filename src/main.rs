#[macro_use]
extern crate tracing;

use anyhow::Result;
use clap::Parser;

use picsort::{cli, sort};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = cli::SortArgs::parse().into_config();
    debug!("{:?}", config);

    let summary = sort::sort_directory(&config)?;

    info!("Successfully moved all images/videos");
    info!("{}", summary);
    Ok(())
}
