use clap::Parser;
use line_tally_cli::args::Args;
use line_tally_cli::config::Config;
use line_tally_cli::logging;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);

    debug!("line_tally v{}", line_tally_cli::VERSION);
    let config = Config::from(&args);
    debug!(?config, "resolved configuration");

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    match line_tally_cli::run(&config, stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
