// Export the scraping and publishing modules
pub mod bogos;
pub mod config;
pub mod error;
pub mod filter;
pub mod matching;
pub mod producers;
pub mod run;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::bogos::{
    bogo_kind, parse_webpage_bogos, retrieve_sales_webpage, BogoItem, BogoKind,
};
pub use crate::config::Config;
pub use crate::error::{ConfigError, ExtractionError, FetchError, ProducerError};
pub use crate::filter::filter_prettify_items;
pub use crate::producers::{build_producer, BogoProducer};
pub use crate::run::{publish_bogo_items, retrieve_bogos, run};
