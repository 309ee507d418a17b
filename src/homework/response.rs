use serde_json::Value;

use super::error::ShapeError;

/// Checks the decoded API body and returns its `homeworks` list, newest first.
pub fn extract_homeworks(raw: &Value) -> Result<&[Value], ShapeError> {
    let object = raw.as_object().ok_or(ShapeError::ResponseNotObject)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(ShapeError::MissingHomeworks)?;
    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ShapeError::HomeworksNotList)
}

/// Server time of the response. Anything but an integer counts as absent.
pub fn current_date(raw: &Value) -> Option<i64> {
    raw.get("current_date").and_then(Value::as_i64)
}
