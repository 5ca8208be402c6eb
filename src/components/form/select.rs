use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
  prelude::{Constraint, Layout, Rect},
  widgets::{Block, Borders, Paragraph},
  Frame,
};

use crate::components::style::{default_action_block_style, input_block};

/// One value out of a fixed option list, cycled in place.
#[derive(Debug, Default)]
pub struct Select {
  label: String,
  value: Option<usize>,
  options: &'static [&'static str],
  is_active: bool,
  has_error: bool,
}

impl Select {
  pub fn new(options: &'static [&'static str], label: &str) -> Self {
    Self { options, label: label.to_string(), ..Select::default() }
  }

  pub fn height(&self) -> u16 {
    2
  }

  pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let input_area = Layout::vertical(vec![
      Constraint::Length(1),
      Constraint::Length(1),
      Constraint::Min(0),
    ])
    .split(area);

    let inner_input =
      Layout::horizontal(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(input_area[0]);

    // Render input area bottom line
    f.render_widget(
      Block::new()
        .borders(Borders::BOTTOM)
        .style(default_action_block_style(false, self.has_error)),
      input_area[1],
    );

    // Label
    f.render_widget(
      Paragraph::new(self.label.to_string())
        .block(input_block(self.is_active, self.has_error)),
      inner_input[0],
    );

    // Value
    let value = match self.value() {
      Some(value) if self.is_active => format!("‹ {value} ›"),
      Some(value) => value.to_string(),
      None if self.is_active => "‹ Select ›".to_string(),
      None => "Select".to_string(),
    };
    f.render_widget(
      Paragraph::new(value).block(input_block(self.is_active, self.has_error)),
      inner_input[1],
    );

    Ok(())
  }

  pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Right | KeyCode::Char(' ') => {
        self.edit_next();
        true
      },
      KeyCode::Left => {
        self.edit_previous();
        true
      },
      _ => false,
    }
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

  pub fn value(&self) -> Option<&'static str> {
    self.value.and_then(|index| self.options.get(index).copied())
  }

  /// Selects `value` when it is one of the options, clears the selection otherwise.
  pub fn set_value(&mut self, value: &str) {
    self.value = self.options.iter().position(|option| *option == value);
  }

  pub fn clear(&mut self) {
    self.value = None;
    self.has_error = false;
  }

  pub fn edit_next(&mut self) {
    if self.has_no_options() {
      return;
    }
    self.value = Some(match self.value {
      Some(index) => (index + 1) % self.options.len(),
      None => 0,
    });
  }

  pub fn edit_previous(&mut self) {
    if self.has_no_options() {
      return;
    }
    let last = self.options.len() - 1;
    self.value = Some(match self.value {
      Some(0) | None => last,
      Some(index) => index - 1,
    });
  }

  fn has_no_options(&self) -> bool {
    self.options.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  const SIZES: &[&str] = &["2", "3", "4"];

  #[test]
  fn cycles_through_options() {
    let mut select = Select::new(SIZES, "Team size");
    assert_eq!(select.value(), None);
    select.edit_next();
    assert_eq!(select.value(), Some("2"));
    select.edit_previous();
    assert_eq!(select.value(), Some("4"));
    select.edit_next();
    assert_eq!(select.value(), Some("2"));
  }

  #[test]
  fn unknown_values_clear_the_selection() {
    let mut select = Select::new(SIZES, "Team size");
    select.set_value("3");
    assert_eq!(select.value(), Some("3"));
    select.set_value("9");
    assert_eq!(select.value(), None);
  }
}
