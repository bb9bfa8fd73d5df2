mod log;
mod range;

pub use log::{LogMap, LogRecord, LOG_DATE_FORMAT};
pub use range::{AddressRange, MAX_MASK};
