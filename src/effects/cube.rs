use super::{project, rotate, Animation, FrameClock, Lifecycle};
use chrono::{DateTime, Utc};
use std::f64::consts::PI;

const EASING: f64 = 4.0;
const IDLE_SPIN: f64 = 0.3;

const VERTICES: [[f64; 3]; 8] = [
  [-0.5, -0.5, -0.5],
  [0.5, -0.5, -0.5],
  [0.5, 0.5, -0.5],
  [-0.5, 0.5, -0.5],
  [-0.5, -0.5, 0.5],
  [0.5, -0.5, 0.5],
  [0.5, 0.5, 0.5],
  [-0.5, 0.5, 0.5],
];

const EDGES: [(usize, usize); 12] = [
  (0, 1),
  (1, 2),
  (2, 3),
  (3, 0),
  (4, 5),
  (5, 6),
  (6, 7),
  (7, 4),
  (0, 4),
  (1, 5),
  (2, 6),
  (3, 7),
];

/// Wireframe cube that turns to face the pointer.
#[derive(Debug, Clone, Default)]
pub struct CursorCube {
  angle_x: f64,
  angle_y: f64,
  target_x: f64,
  target_y: f64,
  drift: f64,
  lifecycle: Lifecycle,
  clock: FrameClock,
}

impl CursorCube {
  pub fn angles(&self) -> (f64, f64) {
    (self.angle_x + self.drift, self.angle_y + self.drift)
  }

  /// `pointer` is normalized to [-1, 1] on both axes.
  pub fn point_at(&mut self, pointer: (f64, f64)) {
    self.target_y = pointer.0 * PI;
    self.target_x = pointer.1 * PI / 2.0;
  }

  pub fn edges(&self) -> Vec<((f64, f64), (f64, f64))> {
    let (angle_x, angle_y) = self.angles();
    let projected: Vec<(f64, f64)> = VERTICES
      .iter()
      .map(|vertex| {
        let (x, y, _) = project(rotate(*vertex, angle_x, angle_y));
        (x, y)
      })
      .collect();
    EDGES.iter().map(|(from, to)| (projected[*from], projected[*to])).collect()
  }
}

impl Animation for CursorCube {
  fn start(&mut self, _now: DateTime<Utc>) {
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
    let dt = self.clock.delta(now);
    let k = (dt * EASING).min(1.0);
    self.angle_x += (self.target_x - self.angle_x) * k;
    self.angle_y += (self.target_y - self.angle_y) * k;
    self.drift = (self.drift + dt * IDLE_SPIN) % (2.0 * PI);
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
  fn eases_toward_the_pointer() {
    let mut cube = CursorCube::default();
    cube.point_at((0.5, -1.0));
    cube.start(now());
    cube.advance(now());
    cube.advance(now() + Duration::milliseconds(100));
    assert!(cube.angle_y > 0.0 && cube.angle_y < PI / 2.0);
    assert!(cube.angle_x < 0.0 && cube.angle_x > -PI / 2.0);

    cube.advance(now() + Duration::seconds(2));
    assert!((cube.angle_y - PI / 2.0).abs() < 1e-9);
    assert!((cube.angle_x + PI / 2.0).abs() < 1e-9);
  }

  #[test]
  fn stopped_cube_holds_still() {
    let mut cube = CursorCube::default();
    cube.point_at((1.0, 1.0));
    cube.advance(now() + Duration::seconds(1));
    assert_eq!(cube.angles(), (0.0, 0.0));
  }

  #[test]
  fn projects_twelve_edges() {
    assert_eq!(CursorCube::default().edges().len(), 12);
  }
}
