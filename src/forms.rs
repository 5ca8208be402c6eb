pub mod submission;
pub mod validate;

use serde::{Deserialize, Serialize};
use strum::Display;

pub use submission::{FormSubmission, Submission};
pub use validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum FormKind {
  Login,
  Signup,
  HackathonRegistration,
  Contact,
  Newsletter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
  Text,
  Email,
  Phone,
  Secret,
  Multiline,
  Checkbox,
  Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
  pub name: &'static str,
  pub label: &'static str,
  pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
  FieldSpec { name, label, kind }
}

pub const COURSES: &[&str] =
  &["Computer Science", "Electronics", "Mechanical", "Civil", "Business", "Design"];
pub const YEARS: &[&str] = &["1st Year", "2nd Year", "3rd Year", "4th Year", "Postgraduate"];
pub const TEAM_SIZES: &[&str] = &["2", "3", "4", "5"];

const LOGIN: &[FieldSpec] = &[
  field("email", "Email", FieldKind::Email),
  field("password", "Password", FieldKind::Secret),
  field("remember_me", "Remember me", FieldKind::Checkbox),
];

const SIGNUP: &[FieldSpec] = &[
  field("first_name", "First name", FieldKind::Text),
  field("last_name", "Last name", FieldKind::Text),
  field("email", "Email", FieldKind::Email),
  field("phone", "Phone", FieldKind::Phone),
  field("course", "Course", FieldKind::Choice(COURSES)),
  field("year", "Year", FieldKind::Choice(YEARS)),
  field("password", "Password", FieldKind::Secret),
  field("confirm_password", "Confirm password", FieldKind::Secret),
  field("accept_terms", "I accept the terms and conditions", FieldKind::Checkbox),
];

const HACKATHON_REGISTRATION: &[FieldSpec] = &[
  field("team_name", "Team name", FieldKind::Text),
  field("team_size", "Team size", FieldKind::Choice(TEAM_SIZES)),
  field("leader_name", "Team leader", FieldKind::Text),
  field("leader_email", "Leader email", FieldKind::Email),
  field("leader_phone", "Leader phone", FieldKind::Phone),
  field("leader_course", "Course / branch", FieldKind::Text),
  field("project_title", "Project title", FieldKind::Text),
  field("project_description", "Project description", FieldKind::Multiline),
  field("tech_stack", "Tech stack", FieldKind::Text),
  field("accept_terms", "I accept the hackathon terms", FieldKind::Checkbox),
];

const CONTACT: &[FieldSpec] = &[
  field("first_name", "First name", FieldKind::Text),
  field("last_name", "Last name", FieldKind::Text),
  field("email", "Email", FieldKind::Email),
  field("subject", "Subject", FieldKind::Text),
  field("message", "Message", FieldKind::Multiline),
];

const NEWSLETTER: &[FieldSpec] = &[field("email", "Email", FieldKind::Email)];

impl FormKind {
  pub fn fields(&self) -> &'static [FieldSpec] {
    match self {
      FormKind::Login => LOGIN,
      FormKind::Signup => SIGNUP,
      FormKind::HackathonRegistration => HACKATHON_REGISTRATION,
      FormKind::Contact => CONTACT,
      FormKind::Newsletter => NEWSLETTER,
    }
  }

  pub fn submit_label(&self) -> &'static str {
    match self {
      FormKind::Login => "Login",
      FormKind::Signup => "Create account",
      FormKind::HackathonRegistration => "Register team",
      FormKind::Contact => "Send message",
      FormKind::Newsletter => "Subscribe",
    }
  }

  /// Contact and newsletter records go to the hosted backend, everything else
  /// is accepted locally.
  pub fn is_remote(&self) -> bool {
    matches!(self, FormKind::Contact | FormKind::Newsletter)
  }
}
