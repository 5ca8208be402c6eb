use crate::utils::load_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
  #[error("Backend is not configured, add credentials to `.config/env.toml`")]
  NotConfigured,
  #[error("Backend rejected the record ({status}): {message}")]
  Rejected { status: u16, message: String },
  #[error("Request failed: {0}")]
  Transport(#[from] hyper::Error),
  #[error("Invalid request: {0}")]
  Request(#[from] hyper::http::Error),
  #[error("Failed to serialize/deserialize JSON due to: {0}")]
  JsonSerDe(#[from] serde_json::Error),
  #[error("Init failed {0}")]
  ConfigOnInit(#[from] ConfigError),
}

impl GatewayError {
  /// Text shown to the user, with any backend detail appended.
  pub fn user_message(&self) -> String {
    const GENERIC: &str = "Something went wrong. Please try again later.";
    match self {
      GatewayError::Rejected { message, .. } if !message.trim().is_empty() => {
        format!("{GENERIC}\n{}", strip_ansi_escapes::strip_str(message.trim()))
      },
      _ => GENERIC.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn rejection_detail_is_appended() {
    let error =
      GatewayError::Rejected { status: 409, message: "duplicate key value".to_string() };
    assert_eq!(
      error.user_message(),
      "Something went wrong. Please try again later.\nduplicate key value"
    );
  }

  #[test]
  fn offline_gets_the_generic_message() {
    assert_eq!(
      GatewayError::NotConfigured.user_message(),
      "Something went wrong. Please try again later."
    );
  }
}
