//! Repository for the `accounts` table.

use sqlx::PgPool;
use datapusher_core::types::DbId;

use crate::models::account::{Account, CreateAccount, UpdateAccount};

const COLUMNS: &str = "id, email, name, token, website, created_at, updated_at";

/// Provides CRUD operations and token lookup for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account with a pre-generated token.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAccount,
        token: &str,
    ) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (email, name, token, website) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(token)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    /// List all accounts ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts ORDER BY id");
        sqlx::query_as::<_, Account>(&query).fetch_all(pool).await
    }

    /// Find an account by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by its (unique) email address.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE email = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a bearer token to its account by exact match.
    pub async fn find_by_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE token = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Update an account. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAccount,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "UPDATE accounts SET \
                 email = COALESCE($2, email), \
                 name = COALESCE($3, name), \
                 website = COALESCE($4, website) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.website)
            .fetch_optional(pool)
            .await
    }

    /// Delete an account. Its destinations are removed by `ON DELETE CASCADE`.
    ///
    /// Returns the deleted row, or `None` if no account had this id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("DELETE FROM accounts WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
