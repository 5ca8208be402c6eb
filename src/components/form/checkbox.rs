use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::Rect, widgets::Paragraph, Frame};

use crate::components::style::input_block;

#[derive(Debug, Default)]
pub struct Checkbox {
  label: String,
  checked: bool,
  is_active: bool,
  has_error: bool,
}

impl Checkbox {
  pub fn new(label: &str) -> Self {
    Self { label: label.to_string(), ..Checkbox::default() }
  }

  pub fn height(&self) -> u16 {
    2
  }

  pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let mark = if self.checked { "[x]" } else { "[ ]" };
    f.render_widget(
      Paragraph::new(format!("{mark} {}", self.label))
        .block(input_block(self.is_active, self.has_error)),
      area,
    );
    Ok(())
  }

  pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char(' ') {
      self.toggle();
      return true;
    }
    false
  }

  pub fn toggle(&mut self) {
    self.checked = !self.checked;
  }

  pub fn is_checked(&self) -> bool {
    self.checked
  }

  pub fn set_checked(&mut self, checked: bool) {
    self.checked = checked;
  }

  pub fn set_active(&mut self, val: bool) {
    self.is_active = val;
  }

  pub fn set_error(&mut self, val: bool) {
    self.has_error = val;
  }

  #[cfg(test)]
  pub fn has_error(&self) -> bool {
    self.has_error
  }
}
