use super::{Animation, Lifecycle};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use tracing::info;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
  pub days: i64,
  pub hours: i64,
  pub minutes: i64,
  pub seconds: i64,
}

impl CountdownParts {
  /// Time left until `target`, clamped to zero once it has passed.
  pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
    let remaining = target.signed_duration_since(now);
    if remaining <= Duration::zero() {
      return Self::default();
    }
    Self {
      days: remaining.num_days(),
      hours: remaining.num_hours() % 24,
      minutes: remaining.num_minutes() % 60,
      seconds: remaining.num_seconds() % 60,
    }
  }

  pub fn is_zero(&self) -> bool {
    *self == Self::default()
  }
}

impl fmt::Display for CountdownParts {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{:02}:{:02}:{:02}:{:02}",
      self.days, self.hours, self.minutes, self.seconds
    )
  }
}

#[derive(Debug, Clone)]
pub struct Countdown {
  label: String,
  target: DateTime<Utc>,
  parts: CountdownParts,
  lifecycle: Lifecycle,
  last_computed: Option<DateTime<Utc>>,
}

impl Countdown {
  pub fn new(label: &str, target: DateTime<Utc>) -> Self {
    Self {
      label: label.to_string(),
      target,
      parts: CountdownParts::default(),
      lifecycle: Lifecycle::Idle,
      last_computed: None,
    }
  }

  /// Generic "coming soon" timer anchored `days` after `launched_at`.
  pub fn coming_soon(launched_at: DateTime<Utc>, days: i64) -> Self {
    Self::new("Launching in", launched_at + Duration::days(days))
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  pub fn target(&self) -> DateTime<Utc> {
    self.target
  }

  pub fn parts(&self) -> CountdownParts {
    self.parts
  }

  pub fn has_finished(&self) -> bool {
    self.lifecycle == Lifecycle::Stopped && self.parts.is_zero()
  }

  fn recompute(&mut self, now: DateTime<Utc>) {
    self.parts = CountdownParts::until(self.target, now);
    self.last_computed = Some(now);
    if now >= self.target {
      self.lifecycle = Lifecycle::Stopped;
      info!(label = %self.label, "countdown reached its target");
    }
  }
}

impl Animation for Countdown {
  fn start(&mut self, now: DateTime<Utc>) {
    self.lifecycle = Lifecycle::Running;
    self.recompute(now);
  }

  fn stop(&mut self) {
    self.lifecycle = Lifecycle::Stopped;
  }

  fn is_running(&self) -> bool {
    self.lifecycle == Lifecycle::Running
  }

  /// Recomputes at most once per second.
  fn advance(&mut self, now: DateTime<Utc>) {
    if !self.is_running() {
      return;
    }
    if let Some(last) = self.last_computed {
      if now.signed_duration_since(last) < Duration::seconds(1) {
        return;
      }
    }
    self.recompute(now);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use pretty_assertions::assert_eq;

  fn target() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 9, 0, 0).unwrap()
  }

  #[test]
  fn splits_remaining_time() {
    let now = target() - Duration::days(2) - Duration::hours(3) - Duration::seconds(61);
    assert_eq!(
      CountdownParts::until(target(), now),
      CountdownParts { days: 2, hours: 3, minutes: 1, seconds: 1 }
    );
  }

  #[test]
  fn past_target_renders_zero_and_stops() {
    let mut countdown = Countdown::new("Ride Hack", target());
    countdown.start(target() + Duration::days(1));
    assert_eq!(countdown.parts().to_string(), "00:00:00:00");
    assert!(!countdown.is_running());
    assert!(countdown.has_finished());
  }

  #[test]
  fn recomputes_at_most_once_per_second() {
    let start = target() - Duration::minutes(10);
    let mut countdown = Countdown::new("Ride Hack", target());
    countdown.start(start);
    assert_eq!(countdown.parts().minutes, 10);
    countdown.advance(start + Duration::milliseconds(900));
    assert_eq!(countdown.parts().minutes, 10);
    countdown.advance(start + Duration::seconds(1));
    assert_eq!(countdown.parts(), CountdownParts { days: 0, hours: 0, minutes: 9, seconds: 59 });
  }

  #[test]
  fn stops_recomputing_after_reaching_target() {
    let mut countdown = Countdown::new("Ride Hack", target());
    countdown.start(target() - Duration::seconds(2));
    countdown.advance(target() + Duration::seconds(1));
    assert!(countdown.has_finished());
    let finished = countdown.parts();
    countdown.advance(target() + Duration::seconds(10));
    assert_eq!(countdown.parts(), finished);
  }

  #[test]
  fn idle_countdown_ignores_ticks() {
    let mut countdown = Countdown::new("Ride Hack", target());
    countdown.advance(target() - Duration::days(1));
    assert_eq!(countdown.parts(), CountdownParts::default());
  }

  #[test]
  fn coming_soon_is_anchored_after_launch() {
    let launched_at = target();
    let mut countdown = Countdown::coming_soon(launched_at, 30);
    countdown.start(launched_at);
    assert_eq!(countdown.target(), launched_at + Duration::days(30));
    assert_eq!(countdown.parts().to_string(), "30:00:00:00");
  }
}
