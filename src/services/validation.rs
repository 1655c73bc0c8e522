//! Field checks for the create-environment payload.
//!
//! Checks run in a fixed order and the first failure wins. Optional fields are
//! only checked when their value is truthy in the JavaScript sense, so `null`,
//! `false`, `0` and `""` pass through unchecked and are stored as given.

use serde_json::Value;

use crate::models::NewEnvironment;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 32;
pub const DESCRIPTION_MIN_LENGTH: usize = 3;
pub const DESCRIPTION_MAX_LENGTH: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(r#"Validation Error: "name" is required and must be a "string" between 3 and 32"#)]
    Name,

    #[error(r#"Validation Error: "description" is optional but a "string" must be between 3 and 1024"#)]
    Description,

    #[error(r#"Validation Error: "tags" is optional but must be an "array""#)]
    Tags,

    #[error(r#"Validation Error: "isPrivate" is optional but must be a "boolean""#)]
    IsPrivate,
}

/// Validate a decoded request body and extract the fields that get stored.
///
/// A body that is not a JSON object has no fields, so it fails on `name`.
pub fn validate_create(data: &Value) -> Result<NewEnvironment, ValidationError> {
    let name = match data.get("name") {
        Some(Value::String(name))
            if is_length(name, NAME_MIN_LENGTH, NAME_MAX_LENGTH) =>
        {
            name.clone()
        }
        _ => return Err(ValidationError::Name),
    };

    let description = data.get("description");
    if let Some(value) = description.filter(|v| is_truthy(v)) {
        match value {
            Value::String(text)
                if is_length(text, DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH) => {}
            _ => return Err(ValidationError::Description),
        }
    }

    let tags = data.get("tags");
    if tags.is_some_and(|v| is_truthy(v) && !v.is_array()) {
        return Err(ValidationError::Tags);
    }

    // Checked but never stored: new environments are always public.
    if data
        .get("isPrivate")
        .is_some_and(|v| is_truthy(v) && !v.is_boolean())
    {
        return Err(ValidationError::IsPrivate);
    }

    Ok(NewEnvironment {
        name,
        description: description.cloned(),
        tags: tags.cloned(),
    })
}

/// JavaScript truthiness for a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Length check counting Unicode scalar values, ignoring the text/emoji
/// presentation selectors U+FE0E and U+FE0F.
pub fn is_length(value: &str, min: usize, max: usize) -> bool {
    let len = value
        .chars()
        .filter(|c| !matches!(c, '\u{FE0E}' | '\u{FE0F}'))
        .count();
    (min..=max).contains(&len)
}
