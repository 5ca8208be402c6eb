use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModalId {
  Login,
  Signup,
  HackathonRegister,
  Success,
  ComingSoon,
  SimpleComingSoon,
  RideHackPopup,
  GalleryLightbox,
}

impl ModalId {
  /// Blocking modals suspend page scrolling while open.
  pub fn is_blocking(&self) -> bool {
    !matches!(self, ModalId::SimpleComingSoon)
  }

  pub fn is_auth(&self) -> bool {
    matches!(self, ModalId::Login | ModalId::Signup)
  }

  pub fn title(&self) -> &'static str {
    match self {
      ModalId::Login => "Welcome back",
      ModalId::Signup => "Join Innovation Hub",
      ModalId::HackathonRegister => "Register for Hackathon",
      ModalId::Success => "You're in!",
      ModalId::ComingSoon => "Coming soon",
      ModalId::SimpleComingSoon => "Coming soon",
      ModalId::RideHackPopup => "Ride Hack 2025",
      ModalId::GalleryLightbox => "Gallery",
    }
  }
}

/// Overlay state. Holds at most one open modal; opening another closes the
/// current one first.
#[derive(Debug, Default)]
pub struct ModalController {
  open: Option<ModalId>,
  scroll_locked: bool,
}

impl ModalController {
  pub fn current(&self) -> Option<ModalId> {
    self.open
  }

  pub fn is_open(&self, modal: ModalId) -> bool {
    self.open == Some(modal)
  }

  pub fn scroll_locked(&self) -> bool {
    self.scroll_locked
  }

  /// Opens `modal`. Returns the modal that had to be closed to make room.
  pub fn open(&mut self, modal: ModalId) -> Option<ModalId> {
    let displaced = match self.open {
      Some(current) if current != modal => {
        self.close(current);
        Some(current)
      },
      _ => None,
    };
    self.open = Some(modal);
    self.scroll_locked = modal.is_blocking();
    debug!(%modal, ?displaced, "modal opened");
    displaced
  }

  /// Closes `modal` if it is the open one.
  pub fn close(&mut self, modal: ModalId) -> bool {
    if self.open != Some(modal) {
      return false;
    }
    self.open = None;
    self.scroll_locked = false;
    debug!(%modal, "modal closed");
    true
  }

  pub fn close_current(&mut self) -> Option<ModalId> {
    let current = self.open?;
    self.close(current);
    Some(current)
  }

  pub fn close_all(&mut self) {
    self.open = None;
    self.scroll_locked = false;
  }

  /// Login <-> signup chaining: the source closes before the target opens.
  pub fn switch(&mut self, from: ModalId, to: ModalId) {
    self.close(from);
    self.open(to);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn open_locks_scroll_for_blocking_modals() {
    let mut modals = ModalController::default();
    modals.open(ModalId::Login);
    assert!(modals.is_open(ModalId::Login));
    assert!(modals.scroll_locked());
    modals.close(ModalId::Login);
    assert_eq!(modals.current(), None);
    assert!(!modals.scroll_locked());
  }

  #[test]
  fn simple_coming_soon_does_not_lock_scroll() {
    let mut modals = ModalController::default();
    modals.open(ModalId::SimpleComingSoon);
    assert!(!modals.scroll_locked());
  }

  #[test]
  fn opening_a_second_modal_closes_the_first() {
    let mut modals = ModalController::default();
    modals.open(ModalId::ComingSoon);
    let displaced = modals.open(ModalId::GalleryLightbox);
    assert_eq!(displaced, Some(ModalId::ComingSoon));
    assert_eq!(modals.current(), Some(ModalId::GalleryLightbox));
    assert!(!modals.is_open(ModalId::ComingSoon));
  }

  #[test]
  fn reopening_the_same_modal_displaces_nothing() {
    let mut modals = ModalController::default();
    modals.open(ModalId::Signup);
    assert_eq!(modals.open(ModalId::Signup), None);
  }

  #[test]
  fn closing_a_modal_that_is_not_open_is_ignored() {
    let mut modals = ModalController::default();
    modals.open(ModalId::Signup);
    assert!(!modals.close(ModalId::Login));
    assert!(modals.is_open(ModalId::Signup));
    assert!(modals.scroll_locked());
  }

  #[test]
  fn switch_chains_auth_modals() {
    let mut modals = ModalController::default();
    modals.open(ModalId::Login);
    modals.switch(ModalId::Login, ModalId::Signup);
    assert_eq!(modals.current(), Some(ModalId::Signup));
    modals.switch(ModalId::Signup, ModalId::Login);
    assert_eq!(modals.current(), Some(ModalId::Login));
  }

  #[test]
  fn close_all_restores_scrolling() {
    let mut modals = ModalController::default();
    modals.open(ModalId::HackathonRegister);
    modals.close_all();
    assert_eq!(modals.current(), None);
    assert!(!modals.scroll_locked());
  }
}
