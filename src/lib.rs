#[macro_use]
extern crate tracing;

pub mod cli;
pub mod config;
pub mod normalize;
pub mod report;
pub mod scan;
pub mod sort;
pub mod utils;

pub use config::{Mode, SortConfig, SyncConfig};
pub use report::{Outcome, SkipReason, Summary};
