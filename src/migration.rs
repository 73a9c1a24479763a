//! Create-if-missing DDL for the `messages` table. There are no versioned migrations.

use crate::error::AppError;
use sqlx::PgPool;

pub const TABLE: &str = "messages";

pub(crate) fn quote_ident(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `"schema"."messages"`
pub fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(TABLE))
}

/// CREATE SCHEMA and CREATE TABLE, both IF NOT EXISTS. Safe to run on every start.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;

    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            body TEXT NOT NULL,
            username TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT messages_updated_after_created CHECK (updated_at >= created_at)
        )
        "#,
        qualified_table(schema)
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(schema = %schema, table = TABLE, "schema ready");
    Ok(())
}
