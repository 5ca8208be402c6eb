/// Keyboard focus cycling over the focusable elements of a container.
/// Tab past the last element lands on the first, Shift+Tab before the first
/// lands on the last.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FocusRing {
  len: usize,
  index: usize,
}

impl FocusRing {
  pub fn new(len: usize) -> Self {
    Self { len, index: 0 }
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn next(&mut self) -> usize {
    if self.len > 0 {
      self.index = (self.index + 1) % self.len;
    }
    self.index
  }

  pub fn previous(&mut self) -> usize {
    if self.len > 0 {
      self.index = (self.index + self.len - 1) % self.len;
    }
    self.index
  }

  pub fn focus(&mut self, index: usize) {
    if index < self.len {
      self.index = index;
    }
  }

  pub fn reset(&mut self) {
    self.index = 0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn tab_on_last_wraps_to_first() {
    let mut ring = FocusRing::new(3);
    ring.focus(2);
    assert_eq!(ring.next(), 0);
  }

  #[test]
  fn shift_tab_on_first_wraps_to_last() {
    let mut ring = FocusRing::new(4);
    assert_eq!(ring.index(), 0);
    assert_eq!(ring.previous(), 3);
  }

  #[test]
  fn empty_ring_stays_put() {
    let mut ring = FocusRing::new(0);
    assert_eq!(ring.next(), 0);
    assert_eq!(ring.previous(), 0);
    assert!(ring.is_empty());
  }

  #[test]
  fn focus_ignores_out_of_range() {
    let mut ring = FocusRing::new(2);
    ring.focus(5);
    assert_eq!(ring.index(), 0);
  }
}
