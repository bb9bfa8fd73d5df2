mod pipeline;

pub use pipeline::{execute, read_log_file, run, FilterOptions};
