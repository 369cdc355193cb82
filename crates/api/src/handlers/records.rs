//! Handlers for the records CRUD surface.
//!
//! Query routing on the list endpoint: a search term takes precedence
//! over filter criteria (the two are never combined); otherwise
//! status/category filter; otherwise the full list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use recbase_core::error::CoreError;
use recbase_core::record::RecordFilter;
use recbase_core::validation::{
    validate_create, validate_update, CreateRecordRequest, UpdateRecordRequest,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /records`.
#[derive(Debug, Default, Deserialize)]
pub struct ListRecordsParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

/// Empty strings are treated as absent, matching clients that submit
/// blank form fields (`?search=&status=active`).
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// GET /records
///
/// List all records, or the search/filter subset when query parameters
/// are supplied.
pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<ListRecordsParams>,
) -> AppResult<impl IntoResponse> {
    let search = present(params.search);
    let status = present(params.status);
    let category = present(params.category);

    let records = if let Some(query) = search {
        state.store.search(&query).await
    } else if status.is_some() || category.is_some() {
        state.store.filter(&RecordFilter { status, category }).await
    } else {
        state.store.list().await
    };

    Ok(Json(records))
}

/// GET /records/{id}
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = state
        .store
        .get(&id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;

    Ok(Json(record))
}

/// POST /records
pub async fn create_record(
    State(state): State<AppState>,
    Json(input): Json<CreateRecordRequest>,
) -> AppResult<impl IntoResponse> {
    let payload = validate_create(input)?;
    let record = state.store.create(payload).await;

    tracing::info!(id = %record.id, name = %record.name, "Record created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /records/{id}
///
/// Partial update: only the fields present in the body are merged onto
/// the existing record. The empty body is a valid no-op update that
/// still refreshes `updatedAt`.
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateRecordRequest>,
) -> AppResult<impl IntoResponse> {
    let patch = validate_update(input)?;
    let record = state
        .store
        .update(&id, patch)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;

    tracing::info!(id = %record.id, "Record updated");

    Ok(Json(record))
}

/// DELETE /records/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete(&id).await;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }));
    }

    tracing::info!(%id, "Record deleted");

    Ok(StatusCode::NO_CONTENT)
}
