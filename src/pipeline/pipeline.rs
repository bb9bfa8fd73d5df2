use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::Config;
use crate::error::FilterError;
use crate::filter::{filter_by_address, filter_by_date};
use crate::models::AddressRange;
use crate::parser::parse_log;
use crate::writer::save_records;

/// Everything one filter run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub file_log: PathBuf,
    pub file_output: PathBuf,
    pub time_start: NaiveDateTime,
    pub time_end: NaiveDateTime,
    /// `None` skips address filtering entirely
    pub address: Option<AddressRange>,
}

/// Reads the whole log. Invalid UTF-8 is replaced rather than rejected, so a
/// damaged line only fails to parse.
pub fn read_log_file(path: &Path) -> Result<String, FilterError> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FilterError::LogNotFound {
            path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
        },
        _ => FilterError::LogRead(err),
    })?;

    match String::from_utf8(bytes) {
        Ok(data) => Ok(data),
        Err(e) => {
            debug!(path = %path.display(), "log contains invalid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Runs the whole pipeline and returns how many records were written.
pub fn run(options: &FilterOptions, config: &Config) -> Result<usize, FilterError> {
    if options.time_start > options.time_end {
        return Err(FilterError::InvalidRange);
    }

    let data = read_log_file(&options.file_log)?;
    let records = parse_log(&data);
    let mut records = filter_by_date(records, options.time_start, options.time_end);

    if let Some(range) = &options.address {
        records = filter_by_address(records, range);
    }

    save_records(&options.file_output, &records, &config.newline)?;
    Ok(records.len())
}

/// Runs the pipeline and prints the failure message, if any. Returns whether
/// the run succeeded.
pub fn execute(options: &FilterOptions, config: &Config) -> bool {
    match run(options, config) {
        Ok(written) => {
            debug!(written, output = %options.file_output.display(), "filter finished");
            true
        }
        Err(e) => {
            debug!(error = ?e, "filter failed");
            println!("{}", e);
            false
        }
    }
}
