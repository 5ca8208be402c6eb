use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

const CLOSE_ANIMATION_MS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
  Success,
  Error,
  Info,
}

impl NotificationKind {
  pub fn icon(&self) -> &'static str {
    match self {
      NotificationKind::Success => "✔",
      NotificationKind::Error => "✖",
      NotificationKind::Info => "ℹ",
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
  pub id: u64,
  pub kind: NotificationKind,
  pub message: String,
  pub shown_at: DateTime<Utc>,
  pub closing_since: Option<DateTime<Utc>>,
}

impl Notification {
  pub fn is_closing(&self) -> bool {
    self.closing_since.is_some()
  }
}

/// Transient banners. Each one dismisses itself after `timeout` and lingers
/// for a short closing animation before it is removed.
#[derive(Debug)]
pub struct NotificationCenter {
  items: Vec<Notification>,
  timeout: Duration,
  next_id: u64,
}

impl NotificationCenter {
  pub fn new(timeout: Duration) -> Self {
    Self { items: Vec::new(), timeout, next_id: 0 }
  }

  pub fn items(&self) -> &[Notification] {
    &self.items
  }

  #[cfg(test)]
  pub fn latest(&self) -> Option<&Notification> {
    self.items.last()
  }

  pub fn push(&mut self, kind: NotificationKind, message: &str, now: DateTime<Utc>) -> u64 {
    let id = self.next_id;
    self.next_id += 1;
    let message = strip_ansi_escapes::strip_str(message);
    tracing::info!(%kind, text = %message, "notification");
    self.items.push(Notification { id, kind, message, shown_at: now, closing_since: None });
    id
  }

  /// Starts the closing animation of notification `id`.
  pub fn close(&mut self, id: u64, now: DateTime<Utc>) {
    if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
      item.closing_since.get_or_insert(now);
    }
  }

  pub fn close_latest(&mut self, now: DateTime<Utc>) {
    if let Some(item) = self.items.iter_mut().rev().find(|item| !item.is_closing()) {
      item.closing_since = Some(now);
    }
  }

  pub fn advance(&mut self, now: DateTime<Utc>) {
    let timeout = self.timeout;
    for item in self.items.iter_mut() {
      if item.closing_since.is_none() && now - item.shown_at >= timeout {
        item.closing_since = Some(now);
      }
    }
    self.items.retain(|item| match item.closing_since {
      Some(since) => now - since < Duration::milliseconds(CLOSE_ANIMATION_MS),
      None => true,
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use pretty_assertions::assert_eq;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
  }

  #[test]
  fn dismisses_itself_after_timeout() {
    let mut center = NotificationCenter::new(Duration::seconds(5));
    center.push(NotificationKind::Success, "Saved", now());
    center.advance(now() + Duration::seconds(4));
    assert!(!center.items()[0].is_closing());
    center.advance(now() + Duration::seconds(5));
    assert!(center.items()[0].is_closing());
    center.advance(now() + Duration::milliseconds(5_300));
    assert!(center.items().is_empty());
  }

  #[test]
  fn manual_close_starts_the_animation() {
    let mut center = NotificationCenter::new(Duration::seconds(5));
    let id = center.push(NotificationKind::Info, "Hello", now());
    center.close(id, now() + Duration::seconds(1));
    center.advance(now() + Duration::milliseconds(1_200));
    assert_eq!(center.items().len(), 1);
    center.advance(now() + Duration::milliseconds(1_300));
    assert!(center.items().is_empty());
  }

  #[test]
  fn strips_terminal_escapes_from_messages() {
    let mut center = NotificationCenter::new(Duration::seconds(5));
    center.push(NotificationKind::Error, "\u{1b}[31mboom\u{1b}[0m", now());
    assert_eq!(center.latest().map(|n| n.message.as_str()), Some("boom"));
  }

  #[test]
  fn close_latest_skips_closing_items() {
    let mut center = NotificationCenter::new(Duration::seconds(5));
    let first = center.push(NotificationKind::Info, "one", now());
    let second = center.push(NotificationKind::Info, "two", now());
    center.close_latest(now());
    center.close_latest(now());
    assert!(center.items().iter().all(Notification::is_closing));
    assert_eq!(center.items().iter().map(|n| n.id).collect::<Vec<_>>(), vec![first, second]);
  }
}
