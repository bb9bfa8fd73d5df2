use std::net::Ipv4Addr;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{LogMap, LogRecord, LOG_DATE_FORMAT};

// chrono accepts unpadded fields, the log format does not
static LOG_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap());

/// Parses a single `<ipv4>:<yyyy-MM-dd HH:mm:ss>` line.
pub fn parse_log_line(line: &str) -> Option<LogRecord> {
    let (address_tok, date_tok) = line.split_once(':')?;

    let address: Ipv4Addr = address_tok.parse().ok()?;

    if !LOG_DATE_REGEX.is_match(date_tok) {
        return None;
    }
    let timestamp = NaiveDateTime::parse_from_str(date_tok, LOG_DATE_FORMAT).ok()?;

    Some(LogRecord { timestamp, address })
}

/// Parses the whole log, silently dropping lines that do not match the format.
pub fn parse_log(data: &str) -> LogMap {
    let mut records = LogMap::new();
    let mut skipped = 0usize;

    for line in data.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        match parse_log_line(line) {
            Some(record) => {
                records.insert(record);
            }
            None => skipped += 1,
        }
    }

    debug!(parsed = records.len(), skipped, "log parsed");
    records
}
