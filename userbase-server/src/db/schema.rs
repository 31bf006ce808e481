//! Schema bootstrap
//!
//! Create-if-absent only: an existing table is left exactly as it is.

use sqlx::PgPool;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        lastname VARCHAR(100) NOT NULL,
        email VARCHAR(255) UNIQUE NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CONSTRAINT users_updated_after_created CHECK (updated_at >= created_at)
    )
"#;

/// Ensure the `users` table exists.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    tracing::info!("users table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_is_create_if_absent() {
        assert!(CREATE_USERS_TABLE.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(!CREATE_USERS_TABLE.contains("DROP"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_twice_is_harmless() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");

        ensure_schema(&pool).await.expect("first bootstrap failed");
        ensure_schema(&pool).await.expect("second bootstrap failed");
    }
}
