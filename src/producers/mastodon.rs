//! Channel that posts each line as a status on a Mastodon instance.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::BogoProducer;
use crate::error::ProducerError;

/// How long to wait on each status post before giving up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Default, Deserialize)]
struct MastodonSettings {
    #[serde(default)]
    base_url: String,
    #[serde(default)]
    access_token: String,
}

/// Posts one status per line via the instance's status endpoint, using a
/// pre-obtained access token from the producer's config section.
pub struct MastodonProducer {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MastodonProducer {
    /// Build from the producer's config section, which must supply
    /// `base_url` and `access_token`.
    pub fn from_config(section: Option<&Value>) -> Result<Self, ProducerError> {
        let settings: MastodonSettings = match section {
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(ProducerError::InvalidSection)?
            }
            None => MastodonSettings::default(),
        };

        if settings.base_url.trim().is_empty() {
            return Err(ProducerError::MissingSetting("base_url"));
        }
        if settings.access_token.trim().is_empty() {
            return Err(ProducerError::MissingSetting("access_token"));
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(MastodonProducer {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            access_token: settings.access_token,
        })
    }
}

impl BogoProducer for MastodonProducer {
    fn publish(&self, bogo_items: &[String]) -> Result<(), ProducerError> {
        let endpoint = format!("{}/api/v1/statuses", self.base_url);

        for bogo_text in bogo_items {
            let response = self
                .client
                .post(&endpoint)
                .bearer_auth(&self.access_token)
                .form(&[("status", bogo_text.as_str())])
                .send()?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().unwrap_or_default();
                return Err(ProducerError::Transport {
                    status: status.as_u16(),
                    body,
                });
            }
            debug!("posted status ({} chars)", bogo_text.chars().count());
        }

        Ok(())
    }
}
