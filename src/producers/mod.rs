//! Publishing channels for filtered sale items.

mod logging;
mod mastodon;

pub use logging::LoggingProducer;
pub use mastodon::MastodonProducer;

use serde_json::Value;

use crate::error::ProducerError;

/// A channel that can deliver a batch of publish-ready lines.
pub trait BogoProducer {
    /// Deliver every line. `Ok(())` means all lines were delivered.
    fn publish(&self, bogo_items: &[String]) -> Result<(), ProducerError>;
}

/// Build the producer registered under `producer_type`, handing it its config
/// section.
///
/// The set of producers is closed; an unknown id is an error, and no fallback
/// channel is substituted.
pub fn build_producer(
    producer_type: &str,
    section: Option<&Value>,
) -> Result<Box<dyn BogoProducer>, ProducerError> {
    match producer_type {
        "logging_producer" => Ok(Box::new(LoggingProducer::new())),
        "mastodon_producer" => Ok(Box::new(MastodonProducer::from_config(section)?)),
        _ => Err(ProducerError::UnknownProducer(producer_type.to_string())),
    }
}
