// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::error::Result;
use line_tally_engine::config::Config;
use std::io::{BufRead, Write};
use tracing::info;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stream `input` through the engine, then render the table to `output`.
///
/// # Errors
///
/// Propagates sink, input, and output failures; none are recovered.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: &mut W) -> Result<()> {
    let result = line_tally_engine::run(config, input)?;
    info!(
        lines = result.lines_read,
        distinct = result.table.len(),
        "input exhausted"
    );

    presentation::write_table(output, &result.table, config.format)
}
