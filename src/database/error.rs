use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
  #[error("Sqlite error: {0}")]
  Sqlx(#[from] sqlx::Error),
  #[error("Could not prepare the data directory: {0}")]
  Io(#[from] std::io::Error),
  #[error("Stored value for `{key}` is invalid: {value}")]
  InvalidValue { key: String, value: String },
}
