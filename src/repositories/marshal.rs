//! JSON to DynamoDB attribute value conversion.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Serialize a record into a DynamoDB item. The record must serialize to a JSON object.
pub fn to_item<T: Serialize>(record: &T) -> AppResult<HashMap<String, AttributeValue>> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(object_to_item(&map)),
        other => Err(AppError::Internal(format!(
            "expected a JSON object for a DynamoDB item, got {}",
            other
        ))),
    }
}

pub fn to_attribute_value(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(to_attribute_value).collect()),
        Value::Object(map) => AttributeValue::M(object_to_item(map)),
    }
}

fn object_to_item(map: &Map<String, Value>) -> HashMap<String, AttributeValue> {
    map.iter()
        .map(|(key, value)| (key.clone(), to_attribute_value(value)))
        .collect()
}
