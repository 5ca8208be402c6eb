use std::{fmt, str::FromStr};

use serde::{
  de::{self, Deserializer, Visitor},
  Deserialize, Serialize,
};

use crate::{
  database::Preference,
  forms::{FormKind, Submission},
  gateway::Receipt,
  site::{modal::ModalId, notification::NotificationKind, page::Page},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Action {
  Tick,
  Render,
  Resize(u16, u16),
  Suspend,
  Resume,
  Quit,
  Refresh,
  Error(String),
  Help,
  Navigate(Page),
  OpenModal(ModalId),
  OpenHackathonRegister(String),
  OpenLightbox(usize),
  SwitchModal(ModalId, ModalId),
  CloseModal(ModalId),
  CloseAllModals,
  Move(MoveDirection),
  Accept,
  FocusNext,
  FocusPrevious,
  EnterForm,
  Blur,
  Scroll(i16),
  Pointer(u16, u16),
  Click(u16, u16),
  ToggleMobileMenu,
  ToggleTheme,
  GoogleSignIn,
  Submit(Submission),
  SubmissionFinished(FormKind, Result<Receipt, String>),
  Notify(NotificationKind, String),
  DismissNotification,
  SavePreference(Preference),
}

fn argument<'a>(value: &'a str, variant: &str) -> Option<&'a str> {
  value
    .strip_prefix(variant)
    .and_then(|rest| rest.strip_prefix('('))
    .and_then(|rest| rest.strip_suffix(')'))
    .map(str::trim)
}

impl<'de> Deserialize<'de> for Action {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct ActionVisitor;

    impl<'de> Visitor<'de> for ActionVisitor {
      type Value = Action;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a valid string representation of Action")
      }

      fn visit_str<E>(self, value: &str) -> Result<Action, E>
      where
        E: de::Error,
      {
        match value {
          "Tick" => Ok(Action::Tick),
          "Render" => Ok(Action::Render),
          "Suspend" => Ok(Action::Suspend),
          "Resume" => Ok(Action::Resume),
          "Quit" => Ok(Action::Quit),
          "Refresh" => Ok(Action::Refresh),
          "Help" => Ok(Action::Help),
          "Accept" => Ok(Action::Accept),
          "FocusNext" => Ok(Action::FocusNext),
          "FocusPrevious" => Ok(Action::FocusPrevious),
          "EnterForm" => Ok(Action::EnterForm),
          "Blur" => Ok(Action::Blur),
          "CloseAllModals" => Ok(Action::CloseAllModals),
          "ToggleMobileMenu" => Ok(Action::ToggleMobileMenu),
          "ToggleTheme" => Ok(Action::ToggleTheme),
          "GoogleSignIn" => Ok(Action::GoogleSignIn),
          "DismissNotification" => Ok(Action::DismissNotification),
          data if data.starts_with("Error(") => {
            let error_msg = data.trim_start_matches("Error(").trim_end_matches(')');
            Ok(Action::Error(error_msg.to_string()))
          },
          data if data.starts_with("Resize(") => {
            let parts: Vec<&str> = data
              .trim_start_matches("Resize(")
              .trim_end_matches(')')
              .split(',')
              .collect();
            if parts.len() == 2 {
              let width: u16 = parts[0].trim().parse().map_err(E::custom)?;
              let height: u16 = parts[1].trim().parse().map_err(E::custom)?;
              Ok(Action::Resize(width, height))
            } else {
              Err(E::custom(format!("Invalid Resize format: {}", value)))
            }
          },
          data => {
            if let Some(page) = argument(data, "Navigate") {
              return Page::from_str(page).map(Action::Navigate).map_err(E::custom);
            }
            if let Some(modal) = argument(data, "OpenModal") {
              return ModalId::from_str(modal).map(Action::OpenModal).map_err(E::custom);
            }
            if let Some(modal) = argument(data, "CloseModal") {
              return ModalId::from_str(modal).map(Action::CloseModal).map_err(E::custom);
            }
            if let Some(id) = argument(data, "OpenHackathonRegister") {
              return Ok(Action::OpenHackathonRegister(id.to_string()));
            }
            if let Some(index) = argument(data, "OpenLightbox") {
              return index.parse().map(Action::OpenLightbox).map_err(E::custom);
            }
            if let Some(delta) = argument(data, "Scroll") {
              return delta.parse().map(Action::Scroll).map_err(E::custom);
            }
            if let Some(direction) = argument(data, "Move") {
              return MoveDirection::from_str(direction).map(Action::Move).map_err(E::custom);
            }
            Err(E::custom(format!("Unknown Action variant: {}", value)))
          },
        }
      }
    }

    deserializer.deserialize_str(ActionVisitor)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::EnumString)]
pub enum MoveDirection {
  Up,
  Down,
  Left,
  Right,
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn parse(value: &str) -> Result<Action, serde_json::Error> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
  }

  #[test]
  fn parses_unit_variants() {
    assert_eq!(parse("Quit").unwrap(), Action::Quit);
    assert_eq!(parse("ToggleTheme").unwrap(), Action::ToggleTheme);
  }

  #[test]
  fn parses_page_and_modal_arguments() {
    assert_eq!(parse("Navigate(ride-hack-detail)").unwrap(), Action::Navigate(Page::RideHackDetail));
    assert_eq!(parse("OpenModal(login)").unwrap(), Action::OpenModal(ModalId::Login));
    assert_eq!(
      parse("OpenHackathonRegister(techfest2024)").unwrap(),
      Action::OpenHackathonRegister("techfest2024".to_string())
    );
  }

  #[test]
  fn parses_numeric_arguments() {
    assert_eq!(parse("Scroll(-5)").unwrap(), Action::Scroll(-5));
    assert_eq!(parse("Resize(80, 24)").unwrap(), Action::Resize(80, 24));
    assert_eq!(parse("Move(Left)").unwrap(), Action::Move(MoveDirection::Left));
  }

  #[test]
  fn rejects_unknown_targets() {
    assert!(parse("Navigate(blog)").is_err());
    assert!(parse("Teleport").is_err());
  }
}
