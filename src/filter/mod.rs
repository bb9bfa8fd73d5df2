mod filter;

pub use filter::{address_value, filter_by_address, filter_by_date, mask_value, masked_bytes_match};
