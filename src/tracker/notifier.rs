use teloxide::{RequestError, prelude::*, types::Recipient};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to deliver message to chat {chat}: {source}")]
pub struct DeliveryError {
    chat: String,
    source: RequestError,
}

/// Delivers text to the configured chat. Failures are logged here and only
/// reported as `false`, since failure reports also travel through `send`.
pub trait Notifier {
    async fn send(&self, message: &str) -> bool;
}

pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
    chat_label: String,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat: Recipient) -> Self {
        let chat_label = match &chat {
            Recipient::Id(id) => id.0.to_string(),
            Recipient::ChannelUsername(username) => username.clone(),
        };

        Self {
            bot,
            chat,
            chat_label,
        }
    }

    pub async fn try_send(&self, message: &str) -> Result<(), DeliveryError> {
        self.bot
            .send_message(self.chat.clone(), message)
            .await
            .map(|_| ())
            .map_err(|source| DeliveryError {
                chat: self.chat_label.clone(),
                source,
            })
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> bool {
        match self.try_send(message).await {
            Ok(()) => {
                log::debug!(
                    "telegram_message_sent chat={} text={}",
                    self.chat_label,
                    message
                );
                true
            }
            Err(error) => {
                log::error!("telegram_delivery_failed error={}", error);
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) struct RecordingNotifier {
    attempts: std::sync::Mutex<Vec<String>>,
    failing: std::sync::atomic::AtomicBool,
}

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self {
            attempts: std::sync::Mutex::new(Vec::new()),
            failing: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing
            .store(failing, std::sync::atomic::Ordering::SeqCst);
    }

    pub(crate) fn attempts(&self) -> Vec<String> {
        self.attempts.lock().expect("attempts lock").clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> bool {
        self.attempts
            .lock()
            .expect("attempts lock")
            .push(message.to_string());
        !self.failing.load(std::sync::atomic::Ordering::SeqCst)
    }
}
