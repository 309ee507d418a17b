pub(crate) mod notifier;
pub(crate) mod provider;
mod service;
mod session;

pub use notifier::{Notifier, TelegramNotifier};
pub use provider::{HomeworkSource, PracticumClient};
pub use service::Poller;
pub use session::PollSession;
