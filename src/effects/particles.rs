use super::{project, rotate, Animation, FrameClock, Lifecycle};
use chrono::{DateTime, Utc};
use std::f64::consts::PI;

const BASE_SPEED: f64 = 0.25;
const POINTER_INFLUENCE: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct ParticleField {
  points: Vec<[f64; 3]>,
  angle_x: f64,
  angle_y: f64,
  pointer: (f64, f64),
  aspect: f64,
  lifecycle: Lifecycle,
  clock: FrameClock,
}

impl ParticleField {
  /// Points spread evenly over a unit sphere (golden angle spiral).
  pub fn new(count: usize) -> Self {
    let golden_angle = PI * (3.0 - 5f64.sqrt());
    let points = (0..count)
      .map(|i| {
        let y = if count > 1 { 1.0 - 2.0 * i as f64 / (count - 1) as f64 } else { 0.0 };
        let radius = (1.0 - y * y).sqrt();
        let theta = golden_angle * i as f64;
        [theta.cos() * radius, y, theta.sin() * radius]
      })
      .collect();
    Self {
      points,
      angle_x: 0.0,
      angle_y: 0.0,
      pointer: (0.0, 0.0),
      aspect: 2.0,
      lifecycle: Lifecycle::Idle,
      clock: FrameClock::default(),
    }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn angles(&self) -> (f64, f64) {
    (self.angle_x, self.angle_y)
  }

  pub fn aspect(&self) -> f64 {
    self.aspect
  }

  pub fn set_pointer(&mut self, pointer: (f64, f64)) {
    self.pointer = pointer;
  }

  /// Terminal cells are roughly twice as tall as they are wide.
  pub fn resize(&mut self, width: u16, height: u16) {
    if height > 0 {
      self.aspect = width as f64 / (height as f64 * 2.0);
    }
  }

  /// Projected (x, y, depth) of every particle.
  pub fn projected(&self) -> Vec<(f64, f64, f64)> {
    self
      .points
      .iter()
      .map(|point| project(rotate(*point, self.angle_x, self.angle_y)))
      .collect()
  }
}

impl Animation for ParticleField {
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
    self.angle_y = (self.angle_y + dt * (BASE_SPEED + self.pointer.0 * POINTER_INFLUENCE))
      % (2.0 * PI);
    self.angle_x = (self.angle_x
      + dt * (BASE_SPEED / 2.0 + self.pointer.1 * POINTER_INFLUENCE))
      % (2.0 * PI);
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
  fn particles_lie_on_the_unit_sphere() {
    let field = ParticleField::new(64);
    assert_eq!(field.len(), 64);
    for [x, y, z] in field.points.iter() {
      assert!(((x * x + y * y + z * z) - 1.0).abs() < 1e-9);
    }
  }

  #[test]
  fn rotates_only_while_running() {
    let mut field = ParticleField::new(16);
    field.advance(now());
    field.advance(now() + Duration::seconds(1));
    assert_eq!(field.angles(), (0.0, 0.0));

    field.start(now());
    field.advance(now());
    field.advance(now() + Duration::seconds(2));
    let (angle_x, angle_y) = field.angles();
    assert!((angle_y - 2.0 * BASE_SPEED).abs() < 1e-9);
    assert!((angle_x - BASE_SPEED).abs() < 1e-9);

    field.stop();
    field.advance(now() + Duration::seconds(5));
    assert_eq!(field.angles(), (angle_x, angle_y));
  }

  #[test]
  fn pointer_speeds_up_rotation() {
    let mut calm = ParticleField::new(8);
    let mut excited = ParticleField::new(8);
    excited.set_pointer((1.0, 0.0));
    for field in [&mut calm, &mut excited] {
      field.start(now());
      field.advance(now());
      field.advance(now() + Duration::milliseconds(500));
    }
    assert!(excited.angles().1 > calm.angles().1);
  }

  #[test]
  fn resize_tracks_terminal_aspect() {
    let mut field = ParticleField::new(8);
    field.resize(120, 30);
    assert_eq!(field.aspect(), 2.0);
    field.resize(120, 0);
    assert_eq!(field.aspect(), 2.0);
  }
}
