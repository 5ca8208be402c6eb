use super::{validate, FormKind, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name -> value, gathered when a form is submitted. Checkboxes hold
/// `"true"` or `"false"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission(BTreeMap<String, String>);

impl FormSubmission {
  #[cfg(test)]
  pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
    pairs.iter().map(|(name, value)| (name.to_string(), value.to_string())).collect()
  }

  pub fn insert(&mut self, name: &str, value: &str) {
    self.0.insert(name.to_string(), value.to_string());
  }

  /// Missing fields read as empty.
  pub fn get(&self, name: &str) -> &str {
    self.0.get(name).map(String::as_str).unwrap_or("")
  }

  pub fn is_checked(&self, name: &str) -> bool {
    self.get(name) == "true"
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  fn trimmed(&self, name: &str) -> String {
    self.get(name).trim().to_string()
  }
}

impl FromIterator<(String, String)> for FormSubmission {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub subject: String,
  pub message: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
  pub email: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
  Login { email: String, remember: bool },
  Signup { first_name: String, email: String },
  HackathonRegistration { hackathon: String, team_name: String, leader_email: String },
  Contact(ContactMessage),
  Newsletter(NewsletterSubscriber),
}

impl Submission {
  pub fn kind(&self) -> FormKind {
    match self {
      Submission::Login { .. } => FormKind::Login,
      Submission::Signup { .. } => FormKind::Signup,
      Submission::HackathonRegistration { .. } => FormKind::HackathonRegistration,
      Submission::Contact(_) => FormKind::Contact,
      Submission::Newsletter(_) => FormKind::Newsletter,
    }
  }
}

/// Validates `fields` for `kind` and turns them into a submission. Nothing is
/// built unless every constraint holds.
pub fn prepare(
  kind: FormKind,
  fields: &FormSubmission,
  hackathon: Option<&str>,
  now: DateTime<Utc>,
) -> Result<Submission, ValidationError> {
  let submission = match kind {
    FormKind::Login => {
      validate::validate_login(fields)?;
      Submission::Login {
        email: fields.trimmed("email"),
        remember: fields.is_checked("remember_me"),
      }
    },
    FormKind::Signup => {
      validate::validate_signup(fields)?;
      Submission::Signup {
        first_name: fields.trimmed("first_name"),
        email: fields.trimmed("email"),
      }
    },
    FormKind::HackathonRegistration => {
      validate::validate_hackathon_registration(fields)?;
      Submission::HackathonRegistration {
        hackathon: hackathon.unwrap_or_default().to_string(),
        team_name: fields.trimmed("team_name"),
        leader_email: fields.trimmed("leader_email"),
      }
    },
    FormKind::Contact => {
      validate::validate_contact(fields)?;
      Submission::Contact(ContactMessage {
        first_name: fields.trimmed("first_name"),
        last_name: fields.trimmed("last_name"),
        email: fields.trimmed("email"),
        subject: fields.trimmed("subject"),
        message: fields.trimmed("message"),
        created_at: now,
      })
    },
    FormKind::Newsletter => {
      validate::validate_newsletter(fields)?;
      Submission::Newsletter(NewsletterSubscriber {
        email: fields.trimmed("email"),
        created_at: now,
      })
    },
  };
  Ok(submission)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use pretty_assertions::assert_eq;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 1, 10, 30, 0).unwrap()
  }

  #[test]
  fn missing_fields_read_as_empty() {
    let fields = FormSubmission::from_pairs(&[("email", "ada@uni.edu")]);
    assert_eq!(fields.get("email"), "ada@uni.edu");
    assert_eq!(fields.get("phone"), "");
    assert!(!fields.is_checked("accept_terms"));
  }

  #[test]
  fn contact_record_carries_trimmed_fields_and_timestamp() {
    let fields = FormSubmission::from_pairs(&[
      ("first_name", " Ada "),
      ("last_name", "Lovelace"),
      ("email", "ada@uni.edu"),
      ("subject", "Sponsorship"),
      ("message", "We'd like to sponsor Ride Hack."),
    ]);
    let submission = prepare(FormKind::Contact, &fields, None, now()).unwrap();
    assert_eq!(
      submission,
      Submission::Contact(ContactMessage {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@uni.edu".to_string(),
        subject: "Sponsorship".to_string(),
        message: "We'd like to sponsor Ride Hack.".to_string(),
        created_at: now(),
      })
    );
  }

  #[test]
  fn mismatched_signup_never_builds_a_submission() {
    let fields = FormSubmission::from_pairs(&[
      ("first_name", "Ada"),
      ("last_name", "Lovelace"),
      ("email", "ada@uni.edu"),
      ("phone", "555 0101"),
      ("course", "Design"),
      ("year", "1st Year"),
      ("password", "engines"),
      ("confirm_password", "enignes"),
      ("accept_terms", "true"),
    ]);
    let error = prepare(FormKind::Signup, &fields, None, now()).unwrap_err();
    assert!(error.messages.iter().any(|message| message == "Passwords do not match"));
  }

  #[test]
  fn login_keeps_the_remember_flag() {
    let fields = FormSubmission::from_pairs(&[
      ("email", "ada@uni.edu"),
      ("password", "engines"),
      ("remember_me", "true"),
    ]);
    assert_eq!(
      prepare(FormKind::Login, &fields, None, now()),
      Ok(Submission::Login { email: "ada@uni.edu".to_string(), remember: true })
    );
  }

  #[test]
  fn newsletter_serializes_to_the_remote_record_shape() {
    let fields = FormSubmission::from_pairs(&[("email", "ada@uni.edu")]);
    let Submission::Newsletter(record) =
      prepare(FormKind::Newsletter, &fields, None, now()).unwrap()
    else {
      panic!("expected a newsletter submission");
    };
    assert_eq!(
      serde_json::to_value(record).unwrap(),
      serde_json::json!({ "email": "ada@uni.edu", "created_at": "2025-02-01T10:30:00Z" })
    );
  }
}
