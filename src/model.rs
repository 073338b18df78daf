//! Entity Types
//!
//! Row types for the two entity sets, their insert payloads, and the
//! partial-update patch structs. Patch fields are present-or-absent:
//! `None` means "leave unchanged", so a PUT body only ever overwrites
//! the fields it names. Unknown JSON keys are ignored, not errors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A hotel row as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub hotel_name: String,
    pub rooms_available: i64,
    pub location: String,
    pub rating: f64,
    pub price_per_room: f64,
}

/// Insert payload for a hotel; the id is store-assigned
#[derive(Debug, Clone, Deserialize)]
pub struct NewHotel {
    pub hotel_name: String,
    pub rooms_available: i64,
    pub location: String,
    pub rating: f64,
    pub price_per_room: f64,
}

/// Partial update for a hotel
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelPatch {
    pub hotel_name: Option<String>,
    pub rooms_available: Option<i64>,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub price_per_room: Option<f64>,
}

impl HotelPatch {
    /// True when no updatable field is present
    pub fn is_empty(&self) -> bool {
        self.hotel_name.is_none()
            && self.rooms_available.is_none()
            && self.location.is_none()
            && self.rating.is_none()
            && self.price_per_room.is_none()
    }
}

/// A user row as stored
///
/// `user_id` is the caller-supplied booking identifier, distinct from
/// the store-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub user_id: String,
    pub booking_cost: f64,
}

/// Insert payload for a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub user_name: String,
    pub user_id: String,
    pub booking_cost: f64,
}

/// Partial update for a user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub user_name: Option<String>,
    pub user_id: Option<String>,
    pub booking_cost: Option<f64>,
}

impl UserPatch {
    /// True when no updatable field is present
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none() && self.user_id.is_none() && self.booking_cost.is_none()
    }
}

/// Projection of (user_id, booking_cost) pairs
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct BookingCost {
    pub user_id: String,
    pub booking_cost: f64,
}

/// Sort order for hotel listings
///
/// `name` sorts ascending; `rating` and `rooms` sort descending so the
/// best-rated and largest hotels come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Rating,
    Rooms,
}

/// Error for an unrecognized sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSortKey;

impl FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "rating" => Ok(Self::Rating),
            "rooms" => Ok(Self::Rooms),
            _ => Err(InvalidSortKey),
        }
    }
}
