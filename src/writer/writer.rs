use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::FilterError;
use crate::models::{LogMap, LogRecord};

pub fn format_record(record: &LogRecord) -> String {
    record.to_string()
}

/// Replaces `path` with one line per record, each terminated by `newline`.
pub fn save_records(path: &Path, records: &LogMap, newline: &str) -> Result<(), FilterError> {
    write_records(path, records, newline).map_err(map_write_error)?;
    debug!(path = %path.display(), written = records.len(), "result saved");
    Ok(())
}

fn write_records(path: &Path, records: &LogMap, newline: &str) -> io::Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    for record in records {
        out.write_all(format_record(record).as_bytes())?;
        out.write_all(newline.as_bytes())?;
    }
    out.flush()
}

fn map_write_error(err: io::Error) -> FilterError {
    match err.kind() {
        io::ErrorKind::NotFound => FilterError::OutputDirectoryNotFound,
        io::ErrorKind::InvalidFilename => FilterError::OutputPathTooLong,
        _ => FilterError::OutputWrite(err),
    }
}
