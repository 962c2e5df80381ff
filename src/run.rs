//! Top-level pipeline: retrieve, filter, publish.

use tracing::{error, info, warn};

use crate::bogos::{parse_webpage_bogos, retrieve_sales_webpage, BogoItem};
use crate::config::Config;
use crate::filter::filter_prettify_items;
use crate::producers::build_producer;

/// Fetch the sales page and extract its sale items.
///
/// Any fetch failure is logged and degrades to an empty list so the run can
/// still publish the fallback text instead of crashing.
pub fn retrieve_bogos(bogo_url: &str) -> Vec<BogoItem> {
    match retrieve_sales_webpage(bogo_url) {
        Ok(document) => parse_webpage_bogos(&document),
        Err(e) => {
            error!("failed to retrieve sales webpage: {}", e);
            Vec::new()
        }
    }
}

/// Run the whole pipeline once. Returns the lines that were handed to the
/// producers (the fallback text when nothing survived filtering).
pub fn run(config: &Config) -> Vec<String> {
    let keywords = config.keywords();
    info!("keywords: {:?}", keywords);
    info!("url: {}", config.bogo.url);
    if !config.bogo.prefix_text.is_empty() {
        info!("prefix_text: {}", config.bogo.prefix_text);
    }
    if !config.bogo.postfix_text.is_empty() {
        info!("postfix_text: {}", config.bogo.postfix_text);
    }
    info!("no_bogo_text: {}", config.bogo.no_bogo_text);

    let bogo_items = retrieve_bogos(&config.bogo.url);
    let mut lines = filter_prettify_items(
        &bogo_items,
        &keywords,
        &config.bogo.prefix_text,
        &config.bogo.postfix_text,
    );
    if lines.is_empty() {
        lines.push(config.bogo.no_bogo_text.clone());
    }

    publish_bogo_items(&lines, config);
    lines
}

/// Publish lines through every configured producer.
///
/// Each channel's outcome is independent: an unknown producer id or a failed
/// publish is logged and the remaining producers still run.
pub fn publish_bogo_items(bogo_items: &[String], config: &Config) {
    let producers = config.producers();
    if producers.is_empty() {
        warn!("no producers are configured for publishing");
        return;
    }

    for producer_type in &producers {
        let producer = match build_producer(producer_type, config.section(producer_type)) {
            Ok(producer) => producer,
            Err(e) => {
                error!("{}", e);
                continue;
            }
        };
        if let Err(e) = producer.publish(bogo_items) {
            error!("producer \"{}\" failed to publish: {}", producer_type, e);
        }
    }
}
