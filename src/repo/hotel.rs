//! Hotel repository.
//!
//! Uniqueness invariant: no two hotels share the same
//! (hotel_name, location) pair. The check is a lookup inside the same
//! transaction as the insert, so a concurrent insert cannot slip
//! between check and write.

use sqlx::{QueryBuilder, SqlitePool};

use crate::model::{Hotel, HotelPatch, NewHotel, SortKey};

use super::error::{RepoError, RepoResult};

const SELECT_HOTELS: &str =
    "SELECT id, hotel_name, rooms_available, location, rating, price_per_room FROM hotels";

/// Typed operations over the `hotels` table
#[derive(Debug, Clone)]
pub struct HotelRepository {
    pool: SqlitePool,
}

impl HotelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a hotel, failing with `Conflict` when a hotel with the
    /// same name and location already exists.
    #[tracing::instrument(skip(self, new), fields(hotel_name = %new.hotel_name))]
    pub async fn insert(&self, new: &NewHotel) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM hotels WHERE hotel_name = ?1 AND location = ?2")
                .bind(&new.hotel_name)
                .bind(&new.location)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_some() {
            return Err(RepoError::Conflict(format!(
                "Hotel '{}' already exists in {}.",
                new.hotel_name, new.location
            )));
        }

        sqlx::query(
            "INSERT INTO hotels (hotel_name, rooms_available, location, rating, price_per_room)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&new.hotel_name)
        .bind(new.rooms_available)
        .bind(&new.location)
        .bind(new.rating)
        .bind(new.price_per_room)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Every hotel, store default order
    pub async fn fetch_all(&self) -> RepoResult<Vec<Hotel>> {
        Ok(sqlx::query_as(SELECT_HOTELS).fetch_all(&self.pool).await?)
    }

    /// Hotels whose location matches exactly; zero rows is an empty
    /// result, not an error
    pub async fn fetch_by_location(&self, location: &str) -> RepoResult<Vec<Hotel>> {
        let hotels = sqlx::query_as(&format!("{SELECT_HOTELS} WHERE location = ?1"))
            .bind(location)
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }

    /// Every hotel in the order selected by `key`
    pub async fn fetch_sorted(&self, key: SortKey) -> RepoResult<Vec<Hotel>> {
        let order_by = match key {
            SortKey::Name => "hotel_name ASC",
            SortKey::Rating => "rating DESC",
            SortKey::Rooms => "rooms_available DESC",
        };
        let hotels = sqlx::query_as(&format!("{SELECT_HOTELS} ORDER BY {order_by}"))
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }

    /// Overwrite only the fields present in `patch`, leaving the rest
    /// untouched.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: &HotelPatch) -> RepoResult<()> {
        if patch.is_empty() {
            return Err(RepoError::NoFields);
        }

        let mut tx = self.pool.begin().await?;
        if !hotel_exists(&mut tx, id).await? {
            return Err(RepoError::NotFound(format!(
                "Hotel with ID '{id}' not found."
            )));
        }

        let mut builder = QueryBuilder::new("UPDATE hotels SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(hotel_name) = &patch.hotel_name {
                set.push("hotel_name = ");
                set.push_bind_unseparated(hotel_name.clone());
            }
            if let Some(rooms_available) = patch.rooms_available {
                set.push("rooms_available = ");
                set.push_bind_unseparated(rooms_available);
            }
            if let Some(location) = &patch.location {
                set.push("location = ");
                set.push_bind_unseparated(location.clone());
            }
            if let Some(rating) = patch.rating {
                set.push("rating = ");
                set.push_bind_unseparated(rating);
            }
            if let Some(price_per_room) = patch.price_per_room {
                set.push("price_per_room = ");
                set.push_bind_unseparated(price_per_room);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Remove the hotel with the given id.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;
        if !hotel_exists(&mut tx, id).await? {
            return Err(RepoError::NotFound(format!(
                "Hotel with ID '{id}' not found."
            )));
        }

        sqlx::query("DELETE FROM hotels WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

async fn hotel_exists(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM hotels WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row.is_some())
}
