pub mod error;
pub mod supabase;

use self::error::GatewayError;
use crate::{
  forms::{FormKind, Submission},
  site::hackathon,
};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub const CONTACT_TABLE: &str = "contact_messages";
pub const NEWSLETTER_TABLE: &str = "newsletter_subscribers";

/// Somewhere records can be inserted into, one JSON object per row.
pub trait RecordStore: Send + Sync {
  fn insert<'a>(
    &'a self,
    table: &'a str,
    record: serde_json::Value,
  ) -> BoxFuture<'a, Result<(), GatewayError>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acceptance {
  Stored,
  Authenticated { email: String, remember: bool },
  SignedUp,
  Registered { team_id: String, hackathon: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
  pub kind: FormKind,
  pub acceptance: Acceptance,
  pub message: String,
}

/// Forwards validated submissions. Contact and newsletter records go to the
/// record store, the rest are accepted in-process.
#[derive(Clone, Default)]
pub struct SubmissionGateway {
  store: Option<Arc<dyn RecordStore>>,
}

impl SubmissionGateway {
  pub fn new(store: Arc<dyn RecordStore>) -> Self {
    Self { store: Some(store) }
  }

  pub fn offline() -> Self {
    Self { store: None }
  }

  pub fn is_online(&self) -> bool {
    self.store.is_some()
  }

  pub async fn submit(&self, submission: Submission) -> Result<Receipt, GatewayError> {
    let kind = submission.kind();
    let receipt = match submission {
      Submission::Login { email, remember } => Receipt {
        kind,
        acceptance: Acceptance::Authenticated { email, remember },
        message: "Login successful! Welcome back.".to_string(),
      },
      Submission::Signup { .. } => Receipt {
        kind,
        acceptance: Acceptance::SignedUp,
        message: "Account created successfully! Welcome to Innovation Hub.".to_string(),
      },
      Submission::HackathonRegistration { hackathon, .. } => Receipt {
        kind,
        message: format!(
          "Team registered successfully for {}! Check your email for confirmation.",
          hackathon::display_name(&hackathon)
        ),
        acceptance: Acceptance::Registered { team_id: generate_team_id(), hackathon },
      },
      Submission::Contact(record) => {
        self.store()?.insert(CONTACT_TABLE, serde_json::to_value(record)?).await?;
        Receipt {
          kind,
          acceptance: Acceptance::Stored,
          message: "Message sent successfully! We'll get back to you soon.".to_string(),
        }
      },
      Submission::Newsletter(record) => {
        self.store()?.insert(NEWSLETTER_TABLE, serde_json::to_value(record)?).await?;
        Receipt {
          kind,
          acceptance: Acceptance::Stored,
          message: "Thank you for subscribing to our newsletter!".to_string(),
        }
      },
    };
    tracing::info!(%kind, "submission accepted");
    Ok(receipt)
  }

  fn store(&self) -> Result<&Arc<dyn RecordStore>, GatewayError> {
    self.store.as_ref().ok_or(GatewayError::NotConfigured)
  }
}

/// `TEAM_` followed by nine uppercase alphanumerics.
pub fn generate_team_id() -> String {
  let suffix: String = Uuid::new_v4()
    .simple()
    .to_string()
    .chars()
    .take(9)
    .map(|c| c.to_ascii_uppercase())
    .collect();
  format!("TEAM_{suffix}")
}
