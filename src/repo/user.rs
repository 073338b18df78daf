//! User repository.
//!
//! Uniqueness invariant: the caller-supplied `user_id` is unique across
//! users, checked inside the insert transaction.

use sqlx::{QueryBuilder, SqlitePool};

use crate::model::{BookingCost, NewUser, User, UserPatch};

use super::error::{RepoError, RepoResult};

const SELECT_USERS: &str = "SELECT id, user_name, user_id, booking_cost FROM users";

/// Typed operations over the `users` table
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user, failing with `Conflict` when the user_id is
    /// already taken.
    #[tracing::instrument(skip(self, new), fields(user_id = %new.user_id))]
    pub async fn insert(&self, new: &NewUser) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE user_id = ?1")
            .bind(&new.user_id)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            return Err(RepoError::Conflict(format!(
                "User with ID '{}' already exists.",
                new.user_id
            )));
        }

        sqlx::query("INSERT INTO users (user_name, user_id, booking_cost) VALUES (?1, ?2, ?3)")
            .bind(&new.user_name)
            .bind(&new.user_id)
            .bind(new.booking_cost)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Every user, store default order
    pub async fn fetch_all(&self) -> RepoResult<Vec<User>> {
        Ok(sqlx::query_as(SELECT_USERS).fetch_all(&self.pool).await?)
    }

    /// (user_id, booking_cost) pairs for every user
    pub async fn fetch_booking_costs(&self) -> RepoResult<Vec<BookingCost>> {
        let costs = sqlx::query_as("SELECT user_id, booking_cost FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(costs)
    }

    /// Overwrite only the fields present in `patch`.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: &UserPatch) -> RepoResult<()> {
        if patch.is_empty() {
            return Err(RepoError::NoFields);
        }

        let mut tx = self.pool.begin().await?;
        if !user_exists(&mut tx, id).await? {
            return Err(RepoError::NotFound(format!(
                "User with ID '{id}' not found."
            )));
        }

        let mut builder = QueryBuilder::new("UPDATE users SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(user_name) = &patch.user_name {
                set.push("user_name = ");
                set.push_bind_unseparated(user_name.clone());
            }
            if let Some(user_id) = &patch.user_id {
                set.push("user_id = ");
                set.push_bind_unseparated(user_id.clone());
            }
            if let Some(booking_cost) = patch.booking_cost {
                set.push("booking_cost = ");
                set.push_bind_unseparated(booking_cost);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Remove the user with the given id.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;
        if !user_exists(&mut tx, id).await? {
            return Err(RepoError::NotFound(format!(
                "User with ID '{id}' not found."
            )));
        }

        sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

async fn user_exists(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row.is_some())
}
