use serde_json::Value;

use super::{
    error::{PollError, ShapeError},
    verdicts::HomeworkStatus,
};

/// One homework entry with its fields checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeworkRecord<'a> {
    pub name: &'a str,
    pub status: HomeworkStatus,
}

impl<'a> HomeworkRecord<'a> {
    pub fn from_value(homework: &'a Value) -> Result<Self, PollError> {
        let record = homework.as_object().ok_or(ShapeError::RecordNotObject)?;
        let name = record
            .get("homework_name")
            .ok_or(ShapeError::MissingField("homework_name"))?;
        let status = record
            .get("status")
            .ok_or(ShapeError::MissingField("status"))?;

        let name = name
            .as_str()
            .ok_or(ShapeError::FieldNotString("homework_name"))?;
        let status = match status.as_str() {
            Some(code) => HomeworkStatus::parse(code)
                .ok_or_else(|| PollError::UnknownStatus(code.to_string()))?,
            None => return Err(PollError::UnknownStatus(status.to_string())),
        };

        Ok(Self { name, status })
    }

    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    HomeworkRecord::from_value(homework).map(|record| record.message())
}

pub fn failure_message(error: &PollError) -> String {
    format!("Сбой в работе программы: {}", error)
}
