use std::path::Path;

use teloxide::types::{ChatId, Recipient};

use super::{
    schema::{Config, Polling, Secrets, SettingsFile},
    validate::ConfigError,
};

const CONFIG_PATH_VAR: &str = "HOMEWORK_BOT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

struct EnvKey {
    name: &'static str,
    legacy: &'static str,
}

const PRACTICUM_TOKEN: EnvKey = EnvKey {
    name: "PRACTICUM_TOKEN",
    legacy: "PRACT_TOKEN",
};
const TELEGRAM_TOKEN: EnvKey = EnvKey {
    name: "TELEGRAM_TOKEN",
    legacy: "TOKEN",
};
const TELEGRAM_CHAT_ID: EnvKey = EnvKey {
    name: "TELEGRAM_CHAT_ID",
    legacy: "CHAT_ID",
};

/// Loads `.env` if present, then builds the config from the process
/// environment and the settings file.
pub fn load_config() -> Result<Config, ConfigError> {
    if let Err(error) = dotenvy::dotenv()
        && !error.not_found()
    {
        log::warn!("dotenv_load_failed error={}", error);
    }

    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config_with(path, |key| std::env::var(key).ok())
}

pub fn load_config_with(
    path: impl AsRef<Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let secrets = read_secrets(&lookup)?;
    let polling = read_polling(path.as_ref())?;
    let config = Config { secrets, polling };
    config.validate()?;
    Ok(config)
}

fn read_secrets(lookup: &impl Fn(&str) -> Option<String>) -> Result<Secrets, ConfigError> {
    let practicum_token = lookup_var(lookup, &PRACTICUM_TOKEN);
    let telegram_token = lookup_var(lookup, &TELEGRAM_TOKEN);
    let chat_id = lookup_var(lookup, &TELEGRAM_CHAT_ID);

    let (Some(practicum_token), Some(telegram_token), Some(chat_id)) =
        (practicum_token.clone(), telegram_token.clone(), chat_id.clone())
    else {
        let missing = [
            (PRACTICUM_TOKEN.name, practicum_token.is_none()),
            (TELEGRAM_TOKEN.name, telegram_token.is_none()),
            (TELEGRAM_CHAT_ID.name, chat_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect();
        return Err(ConfigError::MissingVariables(missing));
    };

    Ok(Secrets {
        practicum_token,
        telegram_token,
        chat: parse_recipient(&chat_id)?,
    })
}

/// Numeric chat ids and `@channelusername` are both valid destinations.
fn parse_recipient(value: &str) -> Result<Recipient, ConfigError> {
    if let Some(username) = value.strip_prefix('@')
        && !username.is_empty()
        && username
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    {
        return Ok(Recipient::ChannelUsername(value.to_string()));
    }

    value
        .parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|_| ConfigError::InvalidChatId(value.to_string()))
}

fn lookup_var(lookup: &impl Fn(&str) -> Option<String>, key: &EnvKey) -> Option<String> {
    [key.name, key.legacy]
        .into_iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn read_polling(path: &Path) -> Result<Polling, ConfigError> {
    let path_str = path.display().to_string();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("config_file_absent path={} using=defaults", path_str);
            return Ok(Polling::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path_str,
                source,
            });
        }
    };

    let settings: SettingsFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })?;
    Ok(settings.polling)
}
