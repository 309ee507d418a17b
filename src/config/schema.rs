use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use teloxide::types::Recipient;

use super::defaults::*;

#[derive(Debug, Clone)]
pub struct Config {
    pub secrets: Secrets,
    pub polling: Polling,
}

/// Credentials read from the environment. Never printed in full.
#[derive(Clone)]
pub struct Secrets {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat: Recipient,
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("practicum_token", &"[REDACTED]")
            .field("telegram_token", &"[REDACTED]")
            .field("chat", &self.chat)
            .finish()
    }
}

/// Contents of the optional settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct SettingsFile {
    #[serde(default)]
    pub polling: Polling,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Polling {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_retry_period_secs")]
    pub retry_period_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for Polling {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            retry_period_secs: default_retry_period_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Polling {
    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
