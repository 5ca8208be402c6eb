use super::FormSubmission;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
  static ref EMAIL: Regex =
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

const MIN_PASSWORD_LENGTH: usize = 6;

pub const CONTACT_INVALID: &str = "Please fill in all required fields correctly.";
pub const NEWSLETTER_INVALID: &str = "Please enter a valid email address.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .messages.join("\n"))]
pub struct ValidationError {
  pub messages: Vec<String>,
  /// Names of the offending fields, in form order.
  pub fields: Vec<&'static str>,
}

pub fn is_valid_email(email: &str) -> bool {
  EMAIL.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
  password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Collects every violated constraint, in declaration order.
#[derive(Debug, Default)]
struct Violations {
  messages: Vec<String>,
  fields: Vec<&'static str>,
}

impl Violations {
  fn require(&mut self, satisfied: bool, field: &'static str, message: &str) -> &mut Self {
    if !satisfied {
      self.messages.push(message.to_string());
      self.fields.push(field);
    }
    self
  }

  /// Marks a field without adding a message of its own.
  fn flag(&mut self, satisfied: bool, field: &'static str) -> &mut Self {
    if !satisfied {
      self.fields.push(field);
    }
    self
  }

  fn finish(self) -> Result<(), ValidationError> {
    if self.messages.is_empty() {
      Ok(())
    } else {
      Err(ValidationError { messages: self.messages, fields: self.fields })
    }
  }
}

fn filled(fields: &FormSubmission, name: &str) -> bool {
  !fields.get(name).trim().is_empty()
}

pub fn validate_login(fields: &FormSubmission) -> Result<(), ValidationError> {
  let mut violations = Violations::default();
  violations
    .require(is_valid_email(fields.get("email")), "email", "Valid email is required")
    .require(
      is_valid_password(fields.get("password")),
      "password",
      "Password must be at least 6 characters",
    );
  violations.finish()
}

pub fn validate_signup(fields: &FormSubmission) -> Result<(), ValidationError> {
  let mut violations = Violations::default();
  violations
    .require(filled(fields, "first_name"), "first_name", "First name is required")
    .require(filled(fields, "last_name"), "last_name", "Last name is required")
    .require(is_valid_email(fields.get("email")), "email", "Valid email is required")
    .require(filled(fields, "phone"), "phone", "Phone number is required")
    .require(!fields.get("course").is_empty(), "course", "Course selection is required")
    .require(!fields.get("year").is_empty(), "year", "Year selection is required")
    .require(
      is_valid_password(fields.get("password")),
      "password",
      "Password must be at least 6 characters",
    )
    .require(
      fields.get("password") == fields.get("confirm_password"),
      "confirm_password",
      "Passwords do not match",
    )
    .require(
      fields.is_checked("accept_terms"),
      "accept_terms",
      "You must accept the terms and conditions",
    );
  violations.finish()
}

pub fn validate_hackathon_registration(
  fields: &FormSubmission,
) -> Result<(), ValidationError> {
  let mut violations = Violations::default();
  violations
    .require(filled(fields, "team_name"), "team_name", "Team name is required")
    .require(!fields.get("team_size").is_empty(), "team_size", "Team size is required")
    .require(filled(fields, "leader_name"), "leader_name", "Team leader name is required")
    .require(is_valid_email(fields.get("leader_email")), "leader_email", "Valid email is required")
    .require(filled(fields, "leader_phone"), "leader_phone", "Phone number is required")
    .require(filled(fields, "leader_course"), "leader_course", "Course/Branch is required")
    .require(filled(fields, "project_title"), "project_title", "Project title is required")
    .require(
      filled(fields, "project_description"),
      "project_description",
      "Project description is required",
    )
    .require(filled(fields, "tech_stack"), "tech_stack", "Technology stack is required")
    .require(
      fields.is_checked("accept_terms"),
      "accept_terms",
      "You must accept the hackathon terms",
    );
  violations.finish()
}

/// The contact form reports a single generic message, the offending fields
/// are still marked.
pub fn validate_contact(fields: &FormSubmission) -> Result<(), ValidationError> {
  let mut violations = Violations::default();
  violations
    .flag(filled(fields, "first_name"), "first_name")
    .flag(filled(fields, "last_name"), "last_name")
    .flag(is_valid_email(fields.get("email")), "email")
    .flag(filled(fields, "subject"), "subject")
    .flag(filled(fields, "message"), "message");
  if !violations.fields.is_empty() {
    violations.messages.push(CONTACT_INVALID.to_string());
  }
  violations.finish()
}

pub fn validate_newsletter(fields: &FormSubmission) -> Result<(), ValidationError> {
  let mut violations = Violations::default();
  violations.require(is_valid_email(fields.get("email")), "email", NEWSLETTER_INVALID);
  violations.finish()
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn valid_signup() -> FormSubmission {
    FormSubmission::from_pairs(&[
      ("first_name", "Ada"),
      ("last_name", "Lovelace"),
      ("email", "ada@uni.edu"),
      ("phone", "555 0101"),
      ("course", "Computer Science"),
      ("year", "2nd Year"),
      ("password", "engines"),
      ("confirm_password", "engines"),
      ("accept_terms", "true"),
    ])
  }

  #[test]
  fn email_pattern() {
    for valid in ["a@b.co", "first.last@uni.edu", "x+tag@sub.domain.org"] {
      assert!(is_valid_email(valid), "{valid}");
    }
    for invalid in ["", "plain", "a@b", "@b.co", "a@.co", "a b@c.de", "a@b c.de", "a@@b.co"] {
      assert!(!is_valid_email(invalid), "{invalid}");
    }
  }

  #[test]
  fn password_length() {
    assert!(!is_valid_password("12345"));
    assert!(is_valid_password("123456"));
    assert!(is_valid_password("éééééé"));
  }

  #[test]
  fn complete_signup_passes() {
    assert_eq!(validate_signup(&valid_signup()), Ok(()));
  }

  #[test]
  fn mismatched_passwords_are_reported() {
    let mut fields = valid_signup();
    fields.insert("confirm_password", "engine5");
    let error = validate_signup(&fields).unwrap_err();
    assert_eq!(error.messages, vec!["Passwords do not match".to_string()]);
    assert_eq!(error.fields, vec!["confirm_password"]);
  }

  #[test]
  fn signup_accumulates_every_violation_in_order() {
    let error = validate_signup(&FormSubmission::default()).unwrap_err();
    assert_eq!(
      error.messages,
      vec![
        "First name is required",
        "Last name is required",
        "Valid email is required",
        "Phone number is required",
        "Course selection is required",
        "Year selection is required",
        "Password must be at least 6 characters",
        "You must accept the terms and conditions",
      ]
    );
    assert_eq!(error.to_string().lines().count(), 8);
  }

  #[test]
  fn whitespace_only_names_are_missing() {
    let mut fields = valid_signup();
    fields.insert("first_name", "   ");
    let error = validate_signup(&fields).unwrap_err();
    assert_eq!(error.messages, vec!["First name is required".to_string()]);
  }

  #[test]
  fn hackathon_registration_requires_terms() {
    let fields = FormSubmission::from_pairs(&[
      ("team_name", "Null Pointers"),
      ("team_size", "3"),
      ("leader_name", "Grace"),
      ("leader_email", "grace@uni.edu"),
      ("leader_phone", "555 0102"),
      ("leader_course", "Electronics"),
      ("project_title", "Bus tracker"),
      ("project_description", "Live campus shuttle positions"),
      ("tech_stack", "Rust"),
      ("accept_terms", "false"),
    ]);
    let error = validate_hackathon_registration(&fields).unwrap_err();
    assert_eq!(error.messages, vec!["You must accept the hackathon terms".to_string()]);
  }

  #[test]
  fn contact_reports_one_generic_message() {
    let fields = FormSubmission::from_pairs(&[("first_name", "Ada"), ("email", "nope")]);
    let error = validate_contact(&fields).unwrap_err();
    assert_eq!(error.messages, vec![CONTACT_INVALID.to_string()]);
    assert_eq!(error.fields, vec!["last_name", "email", "subject", "message"]);
  }

  #[test]
  fn login_and_newsletter() {
    let login = FormSubmission::from_pairs(&[("email", "ada@uni.edu"), ("password", "short")]);
    assert_eq!(
      validate_login(&login).unwrap_err().messages,
      vec!["Password must be at least 6 characters".to_string()]
    );
    let newsletter = FormSubmission::from_pairs(&[("email", "ada@uni.edu")]);
    assert_eq!(validate_newsletter(&newsletter), Ok(()));
  }
}
