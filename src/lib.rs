pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod writer;

pub use error::FilterError;
