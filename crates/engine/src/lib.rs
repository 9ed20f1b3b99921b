// crates/engine/src/lib.rs
use std::io::{BufRead, Write};

pub mod config;
pub mod error;
pub mod options;
pub mod processor;
pub mod sink;
pub mod table;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::sink::AckSink;
use crate::table::FrequencyTable;

/// Outcome of a completed streaming pass.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub table: FrequencyTable,
    pub lines_read: u64,
}

/// Run the line tally engine over `reader`.
///
/// The acknowledgment sink is resolved from `config` before any input is
/// consumed, then every line is echoed and counted. The sink is flushed before
/// returning so that late write failures surface here rather than at drop.
///
/// # Errors
///
/// Returns an error if the sink cannot be opened, if input cannot be read,
/// or if echoing to the sink fails. All of these are fatal.
pub fn run<R: BufRead>(config: &Config, mut reader: R) -> Result<RunResult> {
    let mut sink = AckSink::open(config.ack_path.as_deref())?;
    let mut table = FrequencyTable::new();

    let lines_read = processor::tally_lines(&mut reader, &mut sink, &mut table)?;
    sink.flush().map_err(EngineError::Flush)?;

    Ok(RunResult { table, lines_read })
}
