use reqwest::Url;
use thiserror::Error;

use super::schema::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
    #[error("TELEGRAM_CHAT_ID must be an integer chat id or @channelusername, got {0:?}")]
    InvalidChatId(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let polling = &self.polling;

        let endpoint = Url::parse(&polling.endpoint).map_err(|error| {
            ConfigError::Validation(format!("polling.endpoint is not a valid URL: {}", error))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(
                "polling.endpoint must use http or https".to_string(),
            ));
        }

        if polling.retry_period_secs == 0 {
            return Err(ConfigError::Validation(
                "polling.retry_period_secs must be greater than 0".to_string(),
            ));
        }
        if polling.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "polling.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if polling.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "polling.connect_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if polling.connect_timeout_secs > polling.request_timeout_secs {
            return Err(ConfigError::Validation(
                "polling.connect_timeout_secs must not exceed polling.request_timeout_secs"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
