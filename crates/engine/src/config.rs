use crate::options::OutputFormat;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Destination for the verbatim echo of every input line.
    /// `None` or an empty path selects the discard sink (see [`AckSink::open`]).
    ///
    /// [`AckSink::open`]: crate::sink::AckSink::open
    #[builder(default)]
    pub ack_path: Option<PathBuf>,

    #[builder(default)]
    pub format: OutputFormat,
}
