//! User HTTP Routes
//!
//! Endpoints for listing and mutating users, plus the booking-cost
//! projection.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use sqlx::SqlitePool;

use crate::model::{BookingCost, NewUser, User, UserPatch};
use crate::repo::UserRepository;

use super::errors::ApiResult;
use super::hotel_routes::parse_id;
use super::response::MessageResponse;

// ==================
// Shared State
// ==================

/// User state shared across handlers
pub struct UserState {
    repo: UserRepository,
}

impl UserState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: UserRepository::new(pool),
        }
    }
}

// ==================
// Routes
// ==================

/// Create user routes
pub fn user_routes(state: Arc<UserState>) -> Router {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/booking_cost", get(booking_costs_handler))
        .route("/users/add", post(add_user_handler))
        .route("/users/update/{id}", put(update_user_handler))
        .route("/users/delete/{id}", delete(delete_user_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_users_handler(State(state): State<Arc<UserState>>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.repo.fetch_all().await?))
}

async fn booking_costs_handler(
    State(state): State<Arc<UserState>>,
) -> ApiResult<Json<Vec<BookingCost>>> {
    Ok(Json(state.repo.fetch_booking_costs().await?))
}

async fn add_user_handler(
    State(state): State<Arc<UserState>>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(new) = body?;
    state.repo.insert(&new).await?;
    Ok(Json(MessageResponse::new("User added successfully.")))
}

async fn update_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    let Json(patch) = body?;
    state.repo.update(id, &patch).await?;
    Ok(Json(MessageResponse::new(format!(
        "User with ID '{id}' updated successfully."
    ))))
}

async fn delete_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.repo.delete(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "User with ID '{id}' deleted successfully."
    ))))
}
