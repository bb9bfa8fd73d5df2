mod writer;

pub use writer::{format_record, save_records};
