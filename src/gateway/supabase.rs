use super::{error::GatewayError, RecordStore};
use crate::utils::load_config::{read_config, BackendConfig};
use futures::future::BoxFuture;
use hyper::{
  client::HttpConnector,
  header::{AUTHORIZATION, CONTENT_TYPE},
  Body, Client, Method, Request,
};
use hyper_tls::HttpsConnector;

/// Inserts rows through the hosted backend's REST interface.
#[derive(Clone)]
pub struct SupabaseStore {
  client: Client<HttpsConnector<HttpConnector>, Body>,
  config: BackendConfig,
}

impl SupabaseStore {
  pub fn new(config: BackendConfig) -> Self {
    let client = Client::builder().build::<_, Body>(HttpsConnector::new());
    Self { client, config }
  }

  pub fn from_env_file() -> Result<Self, GatewayError> {
    Ok(Self::new(read_config()?))
  }

  pub fn table_url(&self, table: &str) -> String {
    format!("{}/rest/v1/{}", self.config.url.trim_end_matches('/'), table)
  }

  fn build_request(
    &self,
    table: &str,
    record: &serde_json::Value,
  ) -> Result<Request<Body>, GatewayError> {
    let request = Request::builder()
      .method(Method::POST)
      .uri(self.table_url(table))
      .header("apikey", &self.config.anon_key)
      .header(AUTHORIZATION, format!("Bearer {}", self.config.anon_key))
      .header(CONTENT_TYPE, "application/json")
      .header("Prefer", "return=minimal")
      .body(Body::from(serde_json::to_vec(record)?))?;
    Ok(request)
  }
}

impl RecordStore for SupabaseStore {
  fn insert<'a>(
    &'a self,
    table: &'a str,
    record: serde_json::Value,
  ) -> BoxFuture<'a, Result<(), GatewayError>> {
    Box::pin(async move {
      let request = self.build_request(table, &record)?;
      log::info!("Inserting into {table}");
      let response = self.client.request(request).await?;
      let status = response.status();
      if status.is_success() {
        return Ok(());
      }
      let body = hyper::body::to_bytes(response.into_body()).await?;
      let message = String::from_utf8_lossy(&body).to_string();
      log::warn!("Insert into {table} rejected with {status}: {message}");
      Err(GatewayError::Rejected { status: status.as_u16(), message })
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn store() -> SupabaseStore {
    SupabaseStore::new(BackendConfig {
      url: "https://abc.supabase.co/".to_string(),
      anon_key: "anon-key".to_string(),
    })
  }

  #[tokio::test]
  async fn request_targets_the_table_endpoint() {
    let record = serde_json::json!({ "email": "ada@uni.edu" });
    let request = store().build_request("newsletter_subscribers", &record).unwrap();
    assert_eq!(request.method(), &Method::POST);
    assert_eq!(
      request.uri().to_string(),
      "https://abc.supabase.co/rest/v1/newsletter_subscribers"
    );
    let headers = request.headers();
    assert_eq!(headers["apikey"], "anon-key");
    assert_eq!(headers[AUTHORIZATION], "Bearer anon-key");
    assert_eq!(headers[CONTENT_TYPE], "application/json");
    assert_eq!(headers["prefer"], "return=minimal");
    let body = hyper::body::to_bytes(request.into_body()).await.unwrap();
    assert_eq!(serde_json::from_slice::<serde_json::Value>(&body).unwrap(), record);
  }
}
