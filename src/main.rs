//! CLI entry point for the flow-field line art generator

use clap::Parser;
use flowlines::io::cli::{BatchProcessor, Cli};

fn main() -> flowlines::Result<()> {
    let cli = Cli::parse();

    // Library events reach env_logger through tracing's log bridge
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("flowlines=debug"))
            .init();
    }

    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
