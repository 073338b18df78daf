//! Hotel HTTP Routes
//!
//! Endpoints for listing, filtering, sorting, and mutating hotels.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use sqlx::SqlitePool;

use crate::model::{Hotel, HotelPatch, NewHotel, SortKey};
use crate::repo::HotelRepository;

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

// ==================
// Shared State
// ==================

/// Hotel state shared across handlers
pub struct HotelState {
    repo: HotelRepository,
}

impl HotelState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: HotelRepository::new(pool),
        }
    }
}

// ==================
// Routes
// ==================

/// Create hotel routes
pub fn hotel_routes(state: Arc<HotelState>) -> Router {
    Router::new()
        .route("/hotels", get(list_hotels_handler))
        .route("/hotels/location/{location}", get(hotels_by_location_handler))
        .route("/hotels/sort/{key}", get(sort_hotels_handler))
        .route("/hotels/add", post(add_hotel_handler))
        .route("/hotels/update/{id}", put(update_hotel_handler))
        .route("/hotels/delete/{id}", delete(delete_hotel_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_hotels_handler(
    State(state): State<Arc<HotelState>>,
) -> ApiResult<Json<Vec<Hotel>>> {
    Ok(Json(state.repo.fetch_all().await?))
}

async fn hotels_by_location_handler(
    State(state): State<Arc<HotelState>>,
    Path(location): Path<String>,
) -> ApiResult<Json<Vec<Hotel>>> {
    let hotels = state.repo.fetch_by_location(&location).await?;
    if hotels.is_empty() {
        // Queried and found nothing; a backend failure would have
        // surfaced above as 500
        return Err(ApiError::NotFound(format!(
            "No hotels found in location '{location}'."
        )));
    }
    Ok(Json(hotels))
}

async fn sort_hotels_handler(
    State(state): State<Arc<HotelState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<Vec<Hotel>>> {
    let key: SortKey = key.parse().map_err(|_| ApiError::InvalidSortKey)?;
    Ok(Json(state.repo.fetch_sorted(key).await?))
}

async fn add_hotel_handler(
    State(state): State<Arc<HotelState>>,
    body: Result<Json<NewHotel>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(new) = body?;
    state.repo.insert(&new).await?;
    Ok(Json(MessageResponse::new("Hotel added successfully.")))
}

async fn update_hotel_handler(
    State(state): State<Arc<HotelState>>,
    Path(id): Path<String>,
    body: Result<Json<HotelPatch>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    let Json(patch) = body?;
    state.repo.update(id, &patch).await?;
    Ok(Json(MessageResponse::new(format!(
        "Hotel with ID '{id}' updated successfully."
    ))))
}

async fn delete_hotel_handler(
    State(state): State<Arc<HotelState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.repo.delete(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Hotel with ID '{id}' deleted successfully."
    ))))
}

/// Parse a store-assigned identifier from a path segment; a
/// non-numeric segment is a client error, never a crash.
pub(super) fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}
