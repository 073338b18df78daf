//! HTTP Server
//!
//! Server shell combining the entity routers: builds the router with
//! shared state, applies CORS and request tracing, binds the listening
//! socket. Preflight OPTIONS requests are answered by the CORS layer
//! with headers only.

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Database;

use super::errors::ApiError;
use super::hotel_routes::{hotel_routes, HotelState};
use super::user_routes::{user_routes, UserState};

/// HTTP server for the hotel management API
pub struct HttpServer {
    config: Config,
    router: Router,
}

impl HttpServer {
    /// Create a new server over an open database
    pub fn new(config: Config, database: Database) -> Self {
        let router = Self::build_router(&database);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(database: &Database) -> Router {
        let hotel_state = Arc::new(HotelState::new(database.pool().clone()));
        let user_state = Arc::new(UserState::new(database.pool().clone()));

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            // Route map at root level
            .route("/", get(index_handler))
            .merge(hotel_routes(hotel_state))
            .merge(user_routes(user_state))
            .fallback(unknown_route_handler)
            // A known path with the wrong method is still an unknown
            // route to this API
            .method_not_allowed_fallback(unknown_route_handler)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "hotel management API listening");

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Static route map served at `/`
async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Hotel Management System API",
        "hotel_routes": {
            "Get all hotels": "GET /hotels",
            "Get by location": "GET /hotels/location/{city}",
            "Sort hotels": "GET /hotels/sort/{name|rating|rooms}",
            "Add hotel": "POST /hotels/add",
            "Update hotel": "PUT /hotels/update/{id}",
            "Delete hotel": "DELETE /hotels/delete/{id}",
        },
        "user_routes": {
            "Get all users": "GET /users",
            "Booking costs": "GET /users/booking_cost",
            "Add user": "POST /users/add",
            "Update user": "PUT /users/update/{id}",
            "Delete user": "DELETE /users/delete/{id}",
        },
    }))
}

/// Anything not in the dispatch table
async fn unknown_route_handler() -> ApiError {
    ApiError::NotFound("Route not found.".to_string())
}
