pub mod countdown;
pub mod cube;
pub mod particles;
pub mod typewriter;

use chrono::{DateTime, Utc};
use ratatui::prelude::Rect;

/// Anything stepped by the application tick. Time is always passed in so the
/// same code runs against the wall clock and against synthetic instants.
pub trait Animation {
  fn start(&mut self, now: DateTime<Utc>);
  fn stop(&mut self);
  fn is_running(&self) -> bool;
  fn advance(&mut self, now: DateTime<Utc>);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
  #[default]
  Idle,
  Running,
  Stopped,
}

/// Seconds elapsed between consecutive steps.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
  last: Option<DateTime<Utc>>,
}

impl FrameClock {
  pub fn reset(&mut self) {
    self.last = None;
  }

  pub fn delta(&mut self, now: DateTime<Utc>) -> f64 {
    let delta = self
      .last
      .map(|last| (now - last).num_milliseconds().max(0) as f64 / 1000.0)
      .unwrap_or(0.0);
    self.last = Some(now);
    delta
  }
}

/// Pointer position relative to the centre of `area`, both axes in [-1, 1].
pub fn normalized_pointer(column: u16, row: u16, area: Rect) -> (f64, f64) {
  if area.width == 0 || area.height == 0 {
    return (0.0, 0.0);
  }
  let half_width = area.width as f64 / 2.0;
  let half_height = area.height as f64 / 2.0;
  let x = (column as f64 - area.x as f64 - half_width) / half_width;
  let y = (row as f64 - area.y as f64 - half_height) / half_height;
  (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Rotates a point around the x axis, then around the y axis.
pub fn rotate(point: [f64; 3], angle_x: f64, angle_y: f64) -> [f64; 3] {
  let [x, y, z] = point;
  let (sin_x, cos_x) = angle_x.sin_cos();
  let y1 = y * cos_x - z * sin_x;
  let z1 = y * sin_x + z * cos_x;
  let (sin_y, cos_y) = angle_y.sin_cos();
  let x2 = x * cos_y + z1 * sin_y;
  let z2 = -x * sin_y + z1 * cos_y;
  [x2, y1, z2]
}

const CAMERA_DISTANCE: f64 = 3.0;
const FIELD_OF_VIEW: f64 = 2.0;

/// Perspective projection onto the canvas plane. Returns (x, y, depth scale).
pub fn project(point: [f64; 3]) -> (f64, f64, f64) {
  let [x, y, z] = point;
  let scale = FIELD_OF_VIEW / (z + CAMERA_DISTANCE);
  (x * scale, -y * scale, scale)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};
  use pretty_assertions::assert_eq;

  #[test]
  fn frame_clock_reports_elapsed_seconds() {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut clock = FrameClock::default();
    assert_eq!(clock.delta(start), 0.0);
    assert_eq!(clock.delta(start + Duration::milliseconds(250)), 0.25);
    clock.reset();
    assert_eq!(clock.delta(start + Duration::seconds(9)), 0.0);
  }

  #[test]
  fn pointer_is_normalized_around_the_centre() {
    let area = Rect::new(0, 0, 100, 40);
    assert_eq!(normalized_pointer(50, 20, area), (0.0, 0.0));
    assert_eq!(normalized_pointer(0, 0, area), (-1.0, -1.0));
    assert_eq!(normalized_pointer(200, 80, area), (1.0, 1.0));
  }

  #[test]
  fn rotation_preserves_distance_from_origin() {
    let point = [0.3, -0.4, 0.5];
    let [x, y, z] = rotate(point, 1.2, -0.7);
    let before = 0.3f64.powi(2) + 0.4f64.powi(2) + 0.5f64.powi(2);
    let after = x * x + y * y + z * z;
    assert!((before - after).abs() < 1e-9);
  }
}
