//! TinyURL as a key/value store.
//!
//! A blob is stored by asking TinyURL for a custom alias that redirects
//! to a decoy URL carrying the blob in its query string:
//!
//!   {base}/create.php?alias={alias}&url={decoy}%3Fdata={blob}
//!
//! Reading it back requests `{base}/{alias}` without following the
//! redirect and pulls the blob out of the `Location` header.  TinyURL
//! answers 404 for aliases it does not know; that is the only response
//! treated as "not found".

use std::time::Duration;

use regex::Regex;
use ureq::http::header::LOCATION;
use ureq::Agent;

use super::{Lookup, RemoteStore};
use crate::config::Settings;
use crate::errors::{Result, StoreError, TinyCryptError};

/// Status TinyURL returns for an unknown alias.
const NOT_FOUND: u16 = 404;

pub struct TinyUrlStore {
    agent: Agent,
    base_url: String,
    decoy_url: String,
    user_agent: String,
    data_param: Regex,
}

impl TinyUrlStore {
    /// Build a store talking to `base_url` with a per-request timeout.
    pub fn new(base_url: &str, decoy_url: &str, timeout: Duration) -> Result<Self> {
        for (name, url) in [("tinyurl_base", base_url), ("decoy_url", decoy_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(TinyCryptError::ConfigError(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .max_redirects(0)
            .max_redirects_will_error(false)
            .http_status_as_error(false)
            .build();

        let data_param = Regex::new(r"^.+data=(.*)$")
            .map_err(|e| TinyCryptError::ConfigError(format!("redirect pattern: {e}")))?;

        Ok(Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
            decoy_url: decoy_url.to_string(),
            user_agent: format!("tinycrypt/{}", env!("CARGO_PKG_VERSION")),
            data_param,
        })
    }

    /// Build a store from the loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            &settings.tinyurl_base,
            &settings.decoy_url,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    /// The URL that asks TinyURL to create `alias` pointing at the decoy.
    fn create_url(&self, alias: &str, value: &str) -> String {
        format!(
            "{}/create.php?alias={alias}&url={}%3Fdata={}",
            self.base_url,
            self.decoy_url,
            value.replace('=', "%3D")
        )
    }

    fn resolve_url(&self, alias: &str) -> String {
        format!("{}/{alias}", self.base_url)
    }

    /// Pull the blob back out of a redirect target.
    fn extract_blob(&self, location: &str) -> Option<String> {
        let captures = self.data_param.captures(location)?;
        let blob = captures.get(1)?.as_str();
        Some(blob.replace("%3D", "=").replace("%3d", "="))
    }
}

impl RemoteStore for TinyUrlStore {
    fn put(&self, alias: &str, value: &str) -> std::result::Result<(), StoreError> {
        let url = self.create_url(alias, value);
        let response = self
            .agent
            .get(&url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(alias, status = status.as_u16(), "tinyurl create");

        if status.is_success() {
            Ok(())
        } else {
            Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.resolve_url(alias),
            })
        }
    }

    fn get(&self, alias: &str) -> std::result::Result<Lookup, StoreError> {
        let url = self.resolve_url(alias);
        let response = self
            .agent
            .get(&url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(alias, status = status.as_u16(), "tinyurl resolve");

        if status.as_u16() == NOT_FOUND {
            return Ok(Lookup::NotFound);
        }

        if !status.is_redirection() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                StoreError::MalformedResponse(format!("redirect from {url} has no Location"))
            })?;

        self.extract_blob(location)
            .map(Lookup::Found)
            .ok_or_else(|| {
                StoreError::MalformedResponse(format!(
                    "redirect target '{location}' carries no data parameter"
                ))
            })
    }
}
