use std::path::Path;
use thiserror::Error;

const ENV_FILE: &str = ".config/env.toml";

#[derive(serde::Deserialize, Debug)]
pub struct UserConfig {
  supabase_url: String,
  supabase_anon_key: String,
}

impl UserConfig {
  pub fn to_config(&self) -> BackendConfig {
    BackendConfig {
      url: self.supabase_url.trim().to_string(),
      anon_key: self.supabase_anon_key.trim().to_string(),
    }
  }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
  pub url: String,
  pub anon_key: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error(
    "Problem opening config file, make sure configuration exists at `.config/env.toml`."
  )]
  ReadError,
  #[error("Problem setting configuration: {0}")]
  SetError(String),
  #[error("Backend url and key must not be empty")]
  Incomplete,
}

pub fn read_config() -> Result<BackendConfig, ConfigError> {
  read_config_from(Path::new(ENV_FILE))
}

pub fn read_config_from(path: &Path) -> Result<BackendConfig, ConfigError> {
  let config_file = std::fs::read_to_string(path).map_err(|_| ConfigError::ReadError)?;
  parse_config(&config_file)
}

pub fn parse_config(contents: &str) -> Result<BackendConfig, ConfigError> {
  let user_config: UserConfig =
    toml::from_str(contents).map_err(|e| ConfigError::SetError(e.to_string()))?;
  let config = user_config.to_config();
  if config.url.is_empty() || config.anon_key.is_empty() {
    return Err(ConfigError::Incomplete);
  }
  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn reads_backend_credentials() {
    let config = parse_config(
      r#"
        supabase_url = "https://abc.supabase.co"
        supabase_anon_key = " public-anon-key "
      "#,
    )
    .unwrap();
    assert_eq!(
      config,
      BackendConfig {
        url: "https://abc.supabase.co".to_string(),
        anon_key: "public-anon-key".to_string()
      }
    );
  }

  #[test]
  fn blank_credentials_are_incomplete() {
    let result = parse_config("supabase_url = \"\"\nsupabase_anon_key = \"k\"");
    assert!(matches!(result, Err(ConfigError::Incomplete)));
  }

  #[test]
  fn missing_file_is_a_read_error() {
    let result = read_config_from(Path::new("/nonexistent/innohub/env.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError)));
  }
}
