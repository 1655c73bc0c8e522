use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use utoipa::ToSchema;
use uuid::Uuid;

/// UTC timestamp with millisecond precision, e.g. `2026-10-19T08:05:03.042Z`
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Stored environment item. Field order and casing match the table layout.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: Uuid,
    pub name: String,
    // Kept as raw JSON: falsy values skip validation and are stored as sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Option<Value>,
    pub is_private: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Environment {
    /// Build a new item from validated input. `is_private` is always false.
    pub fn create(input: NewEnvironment, at: OffsetDateTime) -> Result<Self, time::error::Format> {
        let timestamp = format_timestamp(at)?;

        Ok(Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            tags: input.tags,
            is_private: false,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        })
    }
}

/// Validated fields of a create request
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnvironment {
    pub name: String,
    pub description: Option<Value>,
    pub tags: Option<Value>,
}

/// Documented shape of the create request body
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentRequest {
    /// 3 to 32 characters
    pub name: String,
    /// 3 to 1024 characters
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Accepted but ignored
    pub is_private: Option<bool>,
}

pub fn format_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(UtcOffset::UTC).format(TIMESTAMP_FORMAT)
}
