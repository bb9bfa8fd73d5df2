use std::collections::HashMap;
use std::fmt;
use std::net::Ipv4Addr;

use chrono::NaiveDateTime;

pub const LOG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub address: Ipv4Addr,
}

impl LogRecord {
    pub fn new(timestamp: NaiveDateTime, address: Ipv4Addr) -> Self {
        LogRecord { timestamp, address }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.address,
            self.timestamp.format(LOG_DATE_FORMAT)
        )
    }
}

/// Records keyed by timestamp, enumerated in insertion order.
///
/// Inserting a timestamp that is already present replaces its address in place,
/// so the earlier record for that second is lost.
#[derive(Debug, Clone, Default)]
pub struct LogMap {
    records: Vec<LogRecord>,
    index: HashMap<NaiveDateTime, usize>,
}

impl LogMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: LogRecord) {
        match self.index.get(&record.timestamp) {
            Some(&pos) => self.records[pos].address = record.address,
            None => {
                self.index.insert(record.timestamp, self.records.len());
                self.records.push(record);
            }
        }
    }

    #[cfg(test)]
    fn get(&self, timestamp: &NaiveDateTime) -> Option<&LogRecord> {
        self.index.get(timestamp).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&LogRecord) -> bool,
    {
        self.records.retain(|record| keep(record));
        self.index = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.timestamp, pos))
            .collect();
    }
}

impl FromIterator<LogRecord> for LogMap {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        let mut map = LogMap::new();
        for record in iter {
            map.insert(record);
        }
        map
    }
}

impl IntoIterator for LogMap {
    type Item = LogRecord;
    type IntoIter = std::vec::IntoIter<LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogMap {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
