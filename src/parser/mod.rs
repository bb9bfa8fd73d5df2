mod parser;

pub use parser::{parse_log, parse_log_line};
