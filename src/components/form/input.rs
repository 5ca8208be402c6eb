use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
  prelude::{Constraint, Layout, Margin, Rect},
  widgets::{Block, Borders, Paragraph, Wrap},
  Frame,
};

use crate::components::style::{default_action_block_style, input_block};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
  #[default]
  Text,
  Secret,
  Multiline,
}

#[derive(Debug, Default)]
pub struct Input {
  label: String,
  value: String,
  kind: InputKind,
  is_active: bool,
  has_error: bool,
}

impl Input {
  pub fn new(label: &str, kind: InputKind) -> Self {
    Self { label: label.to_string(), kind, ..Input::default() }
  }

  pub fn height(&self) -> u16 {
    match self.kind {
      InputKind::Multiline => 5,
      _ => 3,
    }
  }

  pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let input_area =
      Layout::vertical(vec![Constraint::Length(1), Constraint::Min(0)]).split(area);

    // Label
    f.render_widget(
      Paragraph::new(self.label.to_string()).block(input_block(self.is_active, self.has_error)),
      input_area[0],
    );

    // Render input area bottom line
    f.render_widget(
      Block::new()
        .borders(Borders::BOTTOM)
        .style(default_action_block_style(self.is_active, self.has_error)),
      input_area[1].inner(&Margin { horizontal: 1, vertical: 0 }),
    );

    // Value
    let value_area = input_area[1].inner(&Margin { horizontal: 2, vertical: 0 });
    let value_area = Rect { height: value_area.height.saturating_sub(1), ..value_area };
    let cursor = if self.is_active { "▏" } else { "" };
    f.render_widget(
      Paragraph::new(format!("{}{cursor}", self.displayed()))
        .wrap(Wrap { trim: false })
        .block(input_block(self.is_active, self.has_error)),
      value_area,
    );
    Ok(())
  }

  /// What the terminal shows, secrets masked.
  pub fn displayed(&self) -> String {
    match self.kind {
      InputKind::Secret => "•".repeat(self.value.chars().count()),
      _ => self.value.clone(),
    }
  }

  /// Returns whether the key edited the value.
  pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char(c)
        if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
      {
        self.value.push(c);
        true
      },
      KeyCode::Backspace => {
        self.value.pop();
        true
      },
      _ => false,
    }
  }

  pub fn paste(&mut self, text: &str) {
    let text = match self.kind {
      InputKind::Multiline => text.to_string(),
      _ => text.replace(['\r', '\n'], " "),
    };
    self.value.push_str(&text);
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

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn set_value(&mut self, value: &str) {
    self.value = value.to_string();
  }

  pub fn clear(&mut self) {
    self.value.clear();
    self.has_error = false;
  }
}
