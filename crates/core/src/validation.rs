//! Inbound payload validation.
//!
//! Create and update payloads deserialize into all-optional request
//! types; serde drops any caller-supplied fields outside the schema
//! (notably `id`, `createdAt`, `updatedAt`), and `validator` enforces
//! the required / non-empty constraints before a payload reaches the
//! store.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::{NewRecord, RecordPatch, DEFAULT_PRIORITY, DEFAULT_STATUS};

/// A single field-level validation failure, surfaced verbatim in the
/// 400 response body.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validation failure carrying one entry per offending field.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        write!(f, "validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                out.push(FieldError {
                    field: field.to_string(),
                    message,
                });
            }
        }
        Self { errors: out }
    }
}

/// Raw create payload (`POST /records` body).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateRecordRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "category is required"),
        length(min = 1, message = "category must not be empty")
    )]
    pub category: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: Option<String>,
    #[validate(length(min = 1, message = "priority must not be empty"))]
    pub priority: Option<String>,
}

/// Raw partial-update payload (`PUT /records/{id}` body). Every field
/// is optional; the empty payload is a valid no-op update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateRecordRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: Option<String>,
    #[validate(length(min = 1, message = "priority must not be empty"))]
    pub priority: Option<String>,
}

/// Validate a create payload, applying the `status` / `priority`
/// defaults when absent.
pub fn validate_create(payload: CreateRecordRequest) -> Result<NewRecord, ValidationError> {
    payload.validate()?;

    Ok(NewRecord {
        // `required` has already rejected the None case.
        name: payload.name.unwrap_or_default(),
        category: payload.category.unwrap_or_default(),
        description: payload.description,
        status: payload
            .status
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        priority: payload
            .priority
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
    })
}

/// Validate a partial-update payload. Present fields must satisfy the
/// same non-empty constraints as create; absent fields pass through.
pub fn validate_update(payload: UpdateRecordRequest) -> Result<RecordPatch, ValidationError> {
    payload.validate()?;

    Ok(RecordPatch {
        name: payload.name,
        category: payload.category,
        description: payload.description,
        status: payload.status,
        priority: payload.priority,
    })
}
