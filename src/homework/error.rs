use thiserror::Error;

/// Recoverable failure of a single poll cycle.
///
/// The `Display` text is shown to the chat owner inside the failure
/// notification, so it is written in the bot's user language.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("Ошибка при запросе к API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Эндпоинт {endpoint} вернул код {status}")]
    Remote { endpoint: String, status: u16 },
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("Неизвестный статус домашней работы: {0}")]
    UnknownStatus(String),
}

impl PollError {
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Transport(_) => "transport",
            PollError::Remote { .. } => "remote",
            PollError::Shape(_) => "shape",
            PollError::UnknownStatus(_) => "unknown_status",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Ответ API не является словарем")]
    ResponseNotObject,
    #[error("Ключ \"homeworks\" отсутствует в ответе API")]
    MissingHomeworks,
    #[error("Ответ API по ключу \"homeworks\" не является списком")]
    HomeworksNotList,
    #[error("Запись о домашней работе не является словарем")]
    RecordNotObject,
    #[error("Ключ \"{0}\" отсутствует в ответе API")]
    MissingField(&'static str),
    #[error("Значение ключа \"{0}\" не является строкой")]
    FieldNotString(&'static str),
}
