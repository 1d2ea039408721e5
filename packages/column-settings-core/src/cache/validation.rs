//! Structural validation of untrusted cache records.

use serde_json::Value;

use crate::error::RecordError;

/// Validates the shape of a candidate record before it is trusted.
///
/// `version` must be a string, `order` an array of strings and `columns`
/// an object whose values each carry a boolean `show`, an optional boolean
/// `pinned` and an optional `fixed` of exactly "left" or "right". A present
/// `null` is a type violation like any other.
pub fn validate_record(value: &Value) -> Result<(), RecordError> {
    let record = value.as_object().ok_or(RecordError::NotAnObject)?;

    if !record.get("version").is_some_and(Value::is_string) {
        return Err(RecordError::InvalidVersion);
    }

    let order = record
        .get("order")
        .and_then(Value::as_array)
        .ok_or(RecordError::InvalidOrder)?;
    if !order.iter().all(Value::is_string) {
        return Err(RecordError::InvalidOrder);
    }

    let columns = record
        .get("columns")
        .and_then(Value::as_object)
        .ok_or(RecordError::InvalidColumns)?;
    for (id, column) in columns {
        validate_column(id, column)?;
    }

    Ok(())
}

/// Validates a single column override.
fn validate_column(id: &str, column: &Value) -> Result<(), RecordError> {
    let show = column.get("show");
    if !show.is_some_and(Value::is_boolean) {
        return Err(RecordError::InvalidShow { id: id.to_string() });
    }

    if let Some(pinned) = column.get("pinned") {
        if !pinned.is_boolean() {
            return Err(RecordError::InvalidPinned { id: id.to_string() });
        }
    }

    if let Some(fixed) = column.get("fixed") {
        if !matches!(fixed.as_str(), Some("left") | Some("right")) {
            return Err(RecordError::InvalidFixed { id: id.to_string() });
        }
    }

    Ok(())
}
