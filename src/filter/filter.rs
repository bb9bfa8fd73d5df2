use std::net::Ipv4Addr;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::{AddressRange, LogMap, LogRecord, MAX_MASK};

/// Keeps records with `start <= timestamp <= end`.
pub fn filter_by_date(mut records: LogMap, start: NaiveDateTime, end: NaiveDateTime) -> LogMap {
    records.retain(|r| r.timestamp >= start && r.timestamp <= end);
    debug!(kept = records.len(), %start, %end, "date filter applied");
    records
}

/// Keeps records at or above the lower bound whose bytes match it under the mask.
pub fn filter_by_address(mut records: LogMap, range: &AddressRange) -> LogMap {
    let lower_value = address_value(range.lower_bound);
    let lower_bytes = range.lower_bound.octets();
    let mask = range.mask.map(mask_value);

    records.retain(|r| address_matches(r, &lower_bytes, lower_value, mask));
    debug!(
        kept = records.len(),
        lower_bound = %range.lower_bound,
        mask = ?range.mask,
        "address filter applied"
    );
    records
}

fn address_matches(
    record: &LogRecord,
    lower_bytes: &[u8],
    lower_value: i32,
    mask: Option<i32>,
) -> bool {
    let bytes = record.address.octets();
    if bytes.len() != lower_bytes.len() {
        return false;
    }

    if address_value(record.address) < lower_value {
        return false;
    }

    match mask {
        Some(mask) => masked_bytes_match(&bytes, lower_bytes, mask),
        None => true,
    }
}

/// Signed value of the octets taken in native byte order, without normalising
/// to network order. On little-endian hosts the first octet is the least
/// significant byte.
pub fn address_value(address: Ipv4Addr) -> i32 {
    i32::from_ne_bytes(address.octets())
}

/// `-1 << (32 - mask)` with the shift count wrapped to 5 bits, so a mask of 0
/// yields all ones.
pub fn mask_value(mask: u8) -> i32 {
    let shift = u32::from(MAX_MASK.saturating_sub(mask));
    (-1i32).wrapping_shl(shift)
}

/// Compares each byte after ANDing it with the 32-bit mask value.
pub fn masked_bytes_match(a: &[u8], b: &[u8], mask: i32) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b)
        .all(|(&x, &y)| (i32::from(x) & mask) == (i32::from(y) & mask))
}
