//! Acknowledgment sink: a write-only destination that receives every input
//! line verbatim, terminator included.

use crate::error::{EngineError, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
pub enum AckSink {
    /// Swallows every write and never fails.
    Discard(io::Sink),
    File(BufWriter<File>),
}

impl AckSink {
    /// Open the sink for `path`, creating or truncating the target file.
    ///
    /// `None` and an empty path both select the discard sink, which touches
    /// nothing on disk.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SinkOpen`] if the file cannot be opened for writing.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path.filter(|p| !p.as_os_str().is_empty()) {
            None => {
                debug!("acknowledgment sink: discard");
                Ok(Self::discard())
            }
            Some(path) => {
                let file = File::create(path).map_err(|source| EngineError::SinkOpen {
                    path: path.to_path_buf(),
                    source,
                })?;
                debug!("acknowledgment sink: {}", path.display());
                Ok(Self::File(BufWriter::new(file)))
            }
        }
    }

    #[must_use]
    pub fn discard() -> Self {
        Self::Discard(io::sink())
    }
}

impl Write for AckSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Discard(sink) => sink.write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Discard(sink) => sink.write_all(buf),
            Self::File(file) => file.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Discard(sink) => sink.flush(),
            Self::File(file) => file.flush(),
        }
    }
}
