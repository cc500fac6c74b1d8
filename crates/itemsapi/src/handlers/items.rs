//! Item CRUD handlers.
//!
//! Each handler performs exactly one repository call. Validation failures
//! return early as `AppError::BadRequest`; store faults propagate with `?`.

use chrono::Utc;
use lambda_http::{Request, RequestExt};
use serde_json::json;

use itemsapi_core::item::{CreateItemRequest, ItemError, UpdateItemRequest};

use super::{AppError, JsonResponse};
use crate::state::AppState;

/// Reads the `id` query parameter. `Ok(None)` when absent, an error when
/// present but empty.
fn query_id(event: &Request) -> Result<Option<String>, AppError> {
    match event.query_string_parameters().first("id") {
        Some("") => Err(ItemError::MissingId.into()),
        Some(id) => Ok(Some(id.to_string())),
        None => Ok(None),
    }
}

// ============================================================================
// Read
// ============================================================================

/// GET: one item by `?id=`, or a capped scan when no id is given.
pub async fn get_items(state: &AppState, event: &Request) -> Result<JsonResponse, AppError> {
    let Some(id) = query_id(event)? else {
        let items = state.item_repo.scan_items(state.scan_limit).await?;
        tracing::debug!(count = items.len(), "Scanned items");
        return Ok(JsonResponse::ok(json!({
            "count": items.len(),
            "items": items,
        })));
    };

    match state.item_repo.get_item(&id).await? {
        Some(item) => Ok(JsonResponse::ok(serde_json::to_value(item)?)),
        None => Err(AppError::NotFound),
    }
}

// ============================================================================
// Create
// ============================================================================

/// POST: writes a new item, overwriting any item with the same id.
pub async fn create_item(state: &AppState, event: &Request) -> Result<JsonResponse, AppError> {
    let request = CreateItemRequest::from_body(event.body().as_ref())?;
    let item = request.into_item(Utc::now());

    state.item_repo.put_item(&item).await?;
    tracing::info!(item_id = %item.id, "Item created");

    Ok(JsonResponse::created(json!({
        "message": "Item created successfully",
        "item": item,
    })))
}

// ============================================================================
// Update
// ============================================================================

/// PUT: sets `status`, `data` and `updated_at`. Creates the item if missing.
pub async fn update_item(state: &AppState, event: &Request) -> Result<JsonResponse, AppError> {
    let request = UpdateItemRequest::from_body(event.body().as_ref())?;
    let (id, update) = request.into_update(Utc::now());

    let item = state.item_repo.update_item(&id, &update).await?;
    tracing::info!(item_id = %id, "Item updated");

    Ok(JsonResponse::ok(json!({
        "message": "Item updated successfully",
        "item": item,
    })))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE: removes the item named by `?id=`. Succeeds whether or not it existed.
pub async fn delete_item(state: &AppState, event: &Request) -> Result<JsonResponse, AppError> {
    let id = query_id(event)?.ok_or(ItemError::MissingId)?;

    state.item_repo.delete_item(&id).await?;
    tracing::info!(item_id = %id, "Item deleted");

    Ok(JsonResponse::ok(json!({
        "message": "Item deleted successfully",
    })))
}
