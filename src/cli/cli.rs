use std::net::Ipv4Addr;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::config::Config;
use crate::models::AddressRange;
use crate::pipeline::FilterOptions;

#[derive(Parser, Debug, Clone)]
#[command(name = "ip_filter")]
#[command(about = "Filter an access log by time interval and IPv4 address range")]
pub struct Args {
    #[arg(long, help = "Path to the log file")]
    pub file_log: PathBuf,

    #[arg(long, help = "Path to the result file")]
    pub file_output: PathBuf,

    #[arg(long, help = "Lower bound of the time interval")]
    pub time_start: String,

    #[arg(long, help = "Upper bound of the time interval")]
    pub time_end: String,

    #[arg(long, help = "Lower bound of the address range")]
    pub address_start: Option<Ipv4Addr>,

    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(0..=32),
        help = "Subnet mask length, 0 to 32"
    )]
    pub address_mask: Option<u8>,

    #[arg(long, help = "Config file path")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolves the raw arguments into run options, reporting bad times the
    /// same way clap reports any other invalid value.
    pub fn into_options(self, config: &Config) -> Result<FilterOptions, clap::Error> {
        let time_start = resolve_time(config, "--time-start", &self.time_start)?;
        let time_end = resolve_time(config, "--time-end", &self.time_end)?;

        let address = match (self.address_start, self.address_mask) {
            (Some(lower_bound), mask) => Some(
                AddressRange::new(lower_bound, mask)
                    .map_err(|e| Self::command().error(ErrorKind::ValueValidation, e))?,
            ),
            (None, Some(mask)) => {
                debug!(mask, "address mask given without address start, ignoring");
                None
            }
            (None, None) => None,
        };

        Ok(FilterOptions {
            file_log: self.file_log,
            file_output: self.file_output,
            time_start,
            time_end,
            address,
        })
    }
}

fn resolve_time(
    config: &Config,
    flag: &str,
    value: &str,
) -> Result<chrono::NaiveDateTime, clap::Error> {
    config.parse_time(value).ok_or_else(|| {
        Args::command().error(
            ErrorKind::ValueValidation,
            format!(
                "invalid value '{}' for '{}': expected one of {}",
                value,
                flag,
                config.time_formats.join(", ")
            ),
        )
    })
}
