//! PostgreSQL user repository
//!
//! One statement per operation; writes use `RETURNING` so the caller gets
//! the stored row without a second round-trip. Timestamps are always read
//! through `::timestamptz` so tables created with plain `TIMESTAMP` decode too.

use async_trait::async_trait;

use super::{StoreError, UserStore};
use crate::db::pool::Database;
use crate::models::{NewUser, User, UserId};

/// User repository backed by the shared pool
#[derive(Clone)]
pub struct PgUserRepo {
    db: Database,
}

impl PgUserRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserRepo {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let pool = self.db.pool()?;
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, lastname, email,
                   created_at::timestamptz AS created_at,
                   updated_at::timestamptz AS updated_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let pool = self.db.pool()?;
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, lastname, email,
                   created_at::timestamptz AS created_at,
                   updated_at::timestamptz AS updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, user: &NewUser) -> Result<User, StoreError> {
        let pool = self.db.pool()?;
        // Unique email is enforced by the table; a 23505 comes back as DuplicateKey
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, lastname, email)
            VALUES ($1, $2, $3)
            RETURNING id, name, lastname, email,
                      created_at::timestamptz AS created_at,
                      updated_at::timestamptz AS updated_at
            "#,
        )
        .bind(user.name())
        .bind(user.lastname())
        .bind(user.email())
        .fetch_one(pool)
        .await?;

        tracing::debug!(id = created.id, "user created");
        Ok(created)
    }

    async fn update(&self, id: UserId, user: &NewUser) -> Result<User, StoreError> {
        let pool = self.db.pool()?;
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, lastname = $2, email = $3, updated_at = GREATEST(NOW(), created_at)
            WHERE id = $4
            RETURNING id, name, lastname, email,
                      created_at::timestamptz AS created_at,
                      updated_at::timestamptz AS updated_at
            "#,
        )
        .bind(user.name())
        .bind(user.lastname())
        .bind(user.email())
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound { id })?;

        tracing::debug!(id, "user updated");
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> Result<User, StoreError> {
        let pool = self.db.pool()?;
        let deleted = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, lastname, email,
                      created_at::timestamptz AS created_at,
                      updated_at::timestamptz AS updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound { id })?;

        tracing::debug!(id, "user deleted");
        Ok(deleted)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.ping().await
    }
}
