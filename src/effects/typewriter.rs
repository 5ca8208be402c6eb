use super::{Animation, FrameClock, Lifecycle};
use chrono::{DateTime, Utc};

/// Reveals a line of text one character at a time, once.
#[derive(Debug, Clone)]
pub struct Typewriter {
  text: String,
  revealed: usize,
  chars_per_second: f64,
  budget: f64,
  lifecycle: Lifecycle,
  clock: FrameClock,
}

impl Typewriter {
  pub fn new(text: &str, chars_per_second: f64) -> Self {
    Self {
      text: text.to_string(),
      revealed: 0,
      chars_per_second,
      budget: 0.0,
      lifecycle: Lifecycle::Idle,
      clock: FrameClock::default(),
    }
  }

  pub fn visible(&self) -> String {
    self.text.chars().take(self.revealed).collect()
  }

  pub fn is_complete(&self) -> bool {
    self.revealed >= self.text.chars().count()
  }
}

impl Animation for Typewriter {
  fn start(&mut self, _now: DateTime<Utc>) {
    if self.is_complete() {
      return;
    }
    self.clock.reset();
    self.lifecycle = Lifecycle::Running;
  }

  fn stop(&mut self) {
    self.lifecycle = Lifecycle::Stopped;
  }

  fn is_running(&self) -> bool {
    self.lifecycle == Lifecycle::Running
  }

  fn advance(&mut self, now: DateTime<Utc>) {
    if !self.is_running() {
      return;
    }
    self.budget += self.clock.delta(now) * self.chars_per_second;
    let whole = self.budget.floor();
    self.budget -= whole;
    let total = self.text.chars().count();
    self.revealed = (self.revealed + whole as usize).min(total);
    if self.revealed == total {
      self.lifecycle = Lifecycle::Stopped;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};
  use pretty_assertions::assert_eq;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
  }

  #[test]
  fn reveals_at_the_configured_rate() {
    let mut typewriter = Typewriter::new("Build. Ship. Repeat.", 10.0);
    typewriter.start(now());
    typewriter.advance(now());
    typewriter.advance(now() + Duration::milliseconds(500));
    assert_eq!(typewriter.visible(), "Build");
    typewriter.advance(now() + Duration::milliseconds(650));
    assert_eq!(typewriter.visible(), "Build.");
  }

  #[test]
  fn stops_once_the_text_is_complete() {
    let mut typewriter = Typewriter::new("Hi", 10.0);
    typewriter.start(now());
    typewriter.advance(now());
    typewriter.advance(now() + Duration::seconds(5));
    assert_eq!(typewriter.visible(), "Hi");
    assert!(typewriter.is_complete());
    assert!(!typewriter.is_running());
    typewriter.start(now() + Duration::seconds(6));
    assert!(!typewriter.is_running());
  }
}
