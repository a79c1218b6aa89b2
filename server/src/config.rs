//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "site";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Directory holding the compiled front end under `pkg/`.
    pub site_dir: PathBuf,
    /// Upstream that `POST /api/chat` is forwarded to.
    pub backend_url: Option<String>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `site`
    /// - `CHAT_BACKEND_URL`: full URL of the upstream chat endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .parse()
                .map_err(|_| HostError::Config(format!("invalid PORT '{raw}'")))?,
            None => DEFAULT_PORT,
        };
        let site_dir = non_empty(lookup("SITE_DIR")).map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);
        let backend_url = non_empty(lookup("CHAT_BACKEND_URL"));
        Ok(Self { port, site_dir, backend_url })
    }

    /// Startup warning for a host with nothing to relay to.
    ///
    /// The widget renders the relay's `{"error": ...}` body as `(no reply)`,
    /// so the console is the only place the cause shows up.
    #[must_use]
    pub fn relay_warning(&self) -> Option<String> {
        match self.backend_url {
            Some(_) => None,
            None => Some(format!(
                "CHAT_BACKEND_URL not set; POST {} answers 502 and every chat turn shows \"{}\"",
                widget::config::DEFAULT_ENDPOINT,
                widget::config::NO_REPLY_PLACEHOLDER
            )),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
