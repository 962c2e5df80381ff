//! Errors for the scrape-filter-publish pipeline.

use thiserror::Error;

/// Errors raised while retrieving the sales webpage.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("request for {url} failed with status {status}: {body}")]
    Transport {
        /// URL that was requested
        url: String,
        /// HTTP status code returned
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// The server answered successfully but with an empty body.
    #[error("no content returned from {url}")]
    EmptyContent {
        /// URL that was requested
        url: String,
    },

    /// Transport-level failure (connect, timeout, TLS).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors raised while extracting promotion items from a parsed page.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// A tile that classified as a promotion lacked an expected sub-node.
    #[error("tile \"{tile}\" is missing expected node \"{selector}\"")]
    Shape {
        /// Sale text of the offending tile, for diagnosis
        tile: String,
        /// Selector that found nothing
        selector: &'static str,
    },
}

/// Errors raised while loading and validating the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        /// Path that was read
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for the expected shape.
    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),

    /// A required key is missing or empty.
    #[error("required config key \"{0}\" is missing or empty")]
    MissingKey(&'static str),
}

/// Errors raised while building a producer or publishing through one.
#[derive(Debug, Error)]
pub enum ProducerError {
    /// The configured producer id has no registered implementation.
    #[error("no producer is registered for type \"{0}\"")]
    UnknownProducer(String),

    /// The producer's config section could not be deserialized.
    #[error("invalid producer config section")]
    InvalidSection(#[source] serde_json::Error),

    /// A producer setting is missing or empty.
    #[error("producer setting \"{0}\" is missing or empty")]
    MissingSetting(&'static str),

    /// The publishing endpoint answered with a non-success status.
    #[error("publish request failed with status {status}: {body}")]
    Transport {
        /// HTTP status code returned
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// Transport-level failure while publishing.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
