use clap::ValueEnum;
use line_tally_engine::options as engine_options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<line> <count>` per distinct line
    #[default]
    Plain,
    /// `<line>\t<count>` per distinct line
    Tsv,
    /// JSON array of `{ "key", "count" }` objects
    Json,
}

impl From<OutputFormat> for engine_options::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Json => Self::Json,
        }
    }
}
