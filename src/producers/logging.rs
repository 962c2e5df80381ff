//! Channel that writes each line to the process log.

use tracing::info;

use super::BogoProducer;
use crate::error::ProducerError;

/// Publishes each line at info level. Delivery cannot fail.
#[derive(Debug, Default)]
pub struct LoggingProducer;

impl LoggingProducer {
    pub fn new() -> Self {
        LoggingProducer
    }
}

impl BogoProducer for LoggingProducer {
    fn publish(&self, bogo_items: &[String]) -> Result<(), ProducerError> {
        for bogo_text in bogo_items {
            info!("{}", bogo_text);
        }
        Ok(())
    }
}
