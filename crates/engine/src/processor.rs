use crate::error::{EngineError, Result};
use crate::table::FrequencyTable;
use log::{debug, trace};
use std::io::{BufRead, Write};

/// Stream `reader` line by line: echo each raw line to `sink`, then count its
/// trimmed form in `table`.
///
/// Lines are split on `\n`; a final line without a terminator is still
/// counted. Bytes are echoed untouched while the counting key is the lossy
/// UTF-8 decoding of the line, so invalid UTF-8 never aborts the run.
///
/// Returns the number of lines read.
///
/// # Errors
///
/// Returns [`EngineError::Read`] if the input cannot be read and
/// [`EngineError::Echo`] if a write to the sink fails. Both abort immediately.
pub fn tally_lines<R, W>(reader: &mut R, sink: &mut W, table: &mut FrequencyTable) -> Result<u64>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line_buf = Vec::new();
    let mut lines: u64 = 0;

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                lines += 1;

                sink.write_all(&line_buf)
                    .map_err(|source| EngineError::Echo { line: lines, source })?;

                let cow = String::from_utf8_lossy(&line_buf);
                let key = trim_key(&cow);
                trace!("line {lines}: key {key:?}");
                table.record(key);
            }
            Err(source) => return Err(EngineError::Read { line: lines, source }),
        }
    }

    debug!("streamed {lines} lines, {} distinct keys", table.len());
    Ok(lines)
}

/// Strip surrounding whitespace from a line to form its counting key.
///
/// Besides Unicode `White_Space`, the ASCII information separators
/// U+001C..=U+001F are stripped, matching the usual `strip` semantics.
#[must_use]
pub fn trim_key(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}
