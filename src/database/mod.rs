pub mod error;
pub mod sqlite;

use self::error::DatabaseError;
use crate::components::style::ThemeName;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::{path::Path, str::FromStr};

const THEME_KEY: &str = "theme";
const REMEMBERED_EMAIL_KEY: &str = "remembered_email";

/// A single change to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preference {
  Theme(ThemeName),
  RememberedEmail(Option<String>),
}

/// Settings that survive restarts, kept in a small key/value table.
#[derive(Clone)]
pub struct Preferences {
  pool: SqlitePool,
}

impl Preferences {
  pub async fn open(path: &Path) -> Result<Preferences, DatabaseError> {
    Ok(Preferences { pool: sqlite::open(path).await? })
  }

  pub async fn in_memory() -> Result<Preferences, DatabaseError> {
    Ok(Preferences { pool: sqlite::in_memory().await? })
  }

  pub async fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
    let value = sqlx::query_scalar::<_, String>("SELECT value FROM preferences WHERE key = ?1")
      .bind(key)
      .fetch_optional(&self.pool)
      .await?;
    Ok(value)
  }

  pub async fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
    sqlx::query("INSERT OR REPLACE INTO preferences(key, value) VALUES (?1, ?2)")
      .bind(key)
      .bind(value)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  pub async fn delete(&self, key: &str) -> Result<(), DatabaseError> {
    sqlx::query("DELETE FROM preferences WHERE key = ?1").bind(key).execute(&self.pool).await?;
    Ok(())
  }

  /// Dark unless something else was stored.
  pub async fn theme(&self) -> Result<ThemeName, DatabaseError> {
    match self.get(THEME_KEY).await? {
      None => Ok(ThemeName::default()),
      Some(value) => ThemeName::from_str(&value)
        .map_err(|_| DatabaseError::InvalidValue { key: THEME_KEY.to_string(), value }),
    }
  }

  pub async fn remembered_email(&self) -> Result<Option<String>, DatabaseError> {
    self.get(REMEMBERED_EMAIL_KEY).await
  }

  pub async fn apply(&self, preference: &Preference) -> Result<(), DatabaseError> {
    match preference {
      Preference::Theme(theme) => self.set(THEME_KEY, &theme.to_string()).await,
      Preference::RememberedEmail(Some(email)) => self.set(REMEMBERED_EMAIL_KEY, email).await,
      Preference::RememberedEmail(None) => self.delete(REMEMBERED_EMAIL_KEY).await,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn theme_defaults_to_dark() {
    let preferences = Preferences::in_memory().await.unwrap();
    assert_eq!(preferences.theme().await.unwrap(), ThemeName::Dark);
  }

  #[tokio::test]
  async fn theme_survives_a_round_trip() {
    let preferences = Preferences::in_memory().await.unwrap();
    preferences.apply(&Preference::Theme(ThemeName::Light)).await.unwrap();
    assert_eq!(preferences.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));
    assert_eq!(preferences.theme().await.unwrap(), ThemeName::Light);
  }

  #[tokio::test]
  async fn forgetting_the_email_removes_the_row() {
    let preferences = Preferences::in_memory().await.unwrap();
    let remember = Preference::RememberedEmail(Some("ada@uni.edu".to_string()));
    preferences.apply(&remember).await.unwrap();
    assert_eq!(
      preferences.remembered_email().await.unwrap(),
      Some("ada@uni.edu".to_string())
    );
    preferences.apply(&Preference::RememberedEmail(None)).await.unwrap();
    assert_eq!(preferences.remembered_email().await.unwrap(), None);
  }

  #[tokio::test]
  async fn garbage_theme_is_reported() {
    let preferences = Preferences::in_memory().await.unwrap();
    preferences.set(THEME_KEY, "neon").await.unwrap();
    assert!(matches!(
      preferences.theme().await,
      Err(DatabaseError::InvalidValue { .. })
    ));
  }
}
