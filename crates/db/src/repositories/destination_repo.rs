//! Repository for the `destinations` table.

use sqlx::types::Json;
use sqlx::PgPool;
use datapusher_core::types::DbId;

use crate::models::destination::{CreateDestination, Destination, UpdateDestination};

const COLUMNS: &str = "id, account_id, url, http_method, headers, created_at, updated_at";

/// Provides CRUD operations for destinations and the per-account directory
/// lookup used by the dispatch path.
pub struct DestinationRepo;

impl DestinationRepo {
    /// Insert a new destination.
    ///
    /// The caller checks that the account exists; the foreign key still
    /// rejects a dangling `account_id` if it was deleted in between.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDestination,
    ) -> Result<Destination, sqlx::Error> {
        let query = format!(
            "INSERT INTO destinations (account_id, url, http_method, headers) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(input.account_id)
            .bind(&input.url)
            .bind(input.http_method.as_str())
            .bind(Json(&input.headers))
            .fetch_one(pool)
            .await
    }

    /// List every destination ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations ORDER BY id");
        sqlx::query_as::<_, Destination>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the destinations owned by an account.
    ///
    /// Returns an empty list when the account has none (or does not exist).
    pub async fn list_by_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Vec<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations WHERE account_id = $1 ORDER BY id");
        sqlx::query_as::<_, Destination>(&query)
            .bind(account_id)
            .fetch_all(pool)
            .await
    }

    /// Find a destination by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations WHERE id = $1");
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a destination. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDestination,
    ) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!(
            "UPDATE destinations SET \
                 url = COALESCE($2, url), \
                 http_method = COALESCE($3, http_method), \
                 headers = COALESCE($4, headers) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .bind(&input.url)
            .bind(input.http_method.map(|m| m.as_str()))
            .bind(input.headers.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a destination, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!("DELETE FROM destinations WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
