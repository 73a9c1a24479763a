//! PostgreSQL-backed store over an `sqlx` pool.

use super::MessageStore;
use crate::error::AppError;
use crate::message::{Message, NewMessage};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const COLUMNS: &str = "id, body, username, created_at, updated_at";

#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
    /// Schema-qualified table name, e.g. `"public"."messages"`.
    table: String,
}

impl PgMessageStore {
    /// `schema` must already be validated as a plain identifier.
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgMessageStore {
            pool,
            table: crate::migration::qualified_table(schema),
        }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn list(&self) -> Result<Vec<Message>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY created_at ASC, id ASC",
            COLUMNS, self.table
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Message>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn insert(&self, new: &NewMessage) -> Result<Message, AppError> {
        // Both timestamps default to NOW(), which is fixed for the statement's transaction.
        let sql = format!(
            "INSERT INTO {} (body, username) VALUES ($1, $2) RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Message>(&sql)
            .bind(&new.body)
            .bind(&new.username)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find(&self, id: i64) -> Result<Option<Message>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Message>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_body(&self, id: i64, body: &str) -> Result<Option<Message>, AppError> {
        // updated_at never moves backwards, and the CHECK keeps it >= created_at.
        let sql = format!(
            "UPDATE {} SET body = $2, updated_at = GREATEST(NOW(), updated_at) \
             WHERE id = $1 RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Message>(&sql)
            .bind(id)
            .bind(body)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING id", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<i64> = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_db_name(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", crate::migration::quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Returns (url pointing at the `postgres` maintenance db, target db name).
/// The query string may itself contain slashes (e.g. `sslrootcert=/etc/ssl/ca.pem`), so it is cut off first.
fn split_db_name(url: &str) -> Result<(String, String), AppError> {
    let (location, query) = match url.split_once('?') {
        Some((location, query)) => (location, format!("?{}", query)),
        None => (url, String::new()),
    };
    let path_start = location
        .rfind('/')
        .ok_or_else(|| AppError::Internal("DATABASE_URL: no path".into()))?
        + 1;
    let db_name = location.get(path_start..).unwrap_or("").trim().to_string();
    let base = location.get(..path_start).unwrap_or(location);
    Ok((format!("{}postgres{}", base, query), db_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name() {
        let (admin, name) = split_db_name("postgres://u:p@localhost:5432/board").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "board");
    }

    #[test]
    fn keeps_query_on_admin_url() {
        let (admin, name) = split_db_name("postgres://localhost/board?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "board");
    }

    #[test]
    fn ignores_slashes_in_query() {
        let url = "postgres://localhost/board?sslrootcert=/etc/ssl/ca.pem";
        let (admin, name) = split_db_name(url).unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslrootcert=/etc/ssl/ca.pem");
        assert_eq!(name, "board");
    }
}
