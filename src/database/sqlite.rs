use super::error::DatabaseError;
use sqlx::{
  sqlite::{SqliteConnectOptions, SqlitePoolOptions},
  SqlitePool,
};
use std::{path::Path, str::FromStr};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS preferences (
  key TEXT PRIMARY KEY NOT NULL,
  value TEXT NOT NULL
)
"#;

/// Opens (creating if needed) the database file at `path`.
pub async fn open(path: &Path) -> Result<SqlitePool, DatabaseError> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
  initialize(options).await
}

pub async fn in_memory() -> Result<SqlitePool, DatabaseError> {
  initialize(SqliteConnectOptions::from_str("sqlite::memory:")?).await
}

async fn initialize(options: SqliteConnectOptions) -> Result<SqlitePool, DatabaseError> {
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connect_with(options)
    .await?;
  sqlx::query(SCHEMA).execute(&pool).await?;
  log::info!("Preferences database ready");
  Ok(pool)
}
