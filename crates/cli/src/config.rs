// crates/cli/src/config.rs
use crate::args::Args;
pub use line_tally_engine::config::{Config, ConfigBuilder};
use line_tally_engine::options as engine_options;

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let format: engine_options::OutputFormat = args.format.into();

        ConfigBuilder::default()
            .ack_path(args.ack_file.clone())
            .format(format)
            .build()
            .expect("Failed to build config")
    }
}
