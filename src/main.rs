use std::process::ExitCode;

use ip_filter::{cli::Args, config::Config, pipeline::execute};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // stdout is reserved for the failure message
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ip_filter=warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::from_cli();
    let config = Config::load(args.config.as_deref());

    let options = match args.into_options(&config) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };

    if execute(&options, &config) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
