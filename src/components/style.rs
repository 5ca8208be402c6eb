use ratatui::{
  buffer::Buffer,
  prelude::Rect,
  style::{Color, Modifier, Style},
  widgets::{Block, BorderType, Borders},
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::site::notification::NotificationKind;

#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
  #[default]
  Dark,
  Light,
}

impl ThemeName {
  pub fn toggled(&self) -> ThemeName {
    match self {
      ThemeName::Dark => ThemeName::Light,
      ThemeName::Light => ThemeName::Dark,
    }
  }
}

/// Widgets are styled with the dark palette. [`apply_theme`] recolors the
/// finished frame for the light one.
pub struct Theme {
  bg: Color,
  bg_button: Color,
  bg_button_selected: Color,
  border: Color,
  border_selected: Color,
  text: Color,
  text_muted: Color,
  text_selected: Color,
  text_button: Color,
  text_button_selected: Color,
  accent: Color,
  success: Color,
  error: Color,
  info: Color,
}

static DARK_THEME: Theme = Theme {
  bg: Color::Indexed(234),
  bg_button: Color::Indexed(236),
  bg_button_selected: Color::Indexed(178),
  border: Color::Indexed(250),
  border_selected: Color::Green,
  text: Color::Indexed(252),
  text_muted: Color::Indexed(244),
  text_selected: Color::White,
  text_button: Color::Indexed(252),
  text_button_selected: Color::Black,
  accent: Color::Indexed(75),
  success: Color::Indexed(71),
  error: Color::Indexed(167),
  info: Color::Indexed(74),
};

static LIGHT_THEME: Theme = Theme {
  bg: Color::Indexed(255),
  bg_button: Color::Indexed(252),
  bg_button_selected: Color::Indexed(25),
  border: Color::Indexed(244),
  border_selected: Color::Indexed(25),
  text: Color::Indexed(236),
  text_muted: Color::Indexed(243),
  text_selected: Color::Black,
  text_button: Color::Indexed(236),
  text_button_selected: Color::White,
  accent: Color::Indexed(25),
  success: Color::Indexed(28),
  error: Color::Indexed(124),
  info: Color::Indexed(31),
};

impl Theme {
  fn colors(&self) -> [Color; 14] {
    [
      self.bg,
      self.bg_button,
      self.bg_button_selected,
      self.border,
      self.border_selected,
      self.text,
      self.text_muted,
      self.text_selected,
      self.text_button,
      self.text_button_selected,
      self.accent,
      self.success,
      self.error,
      self.info,
    ]
  }
}

fn theme() -> &'static Theme {
  &DARK_THEME
}

/// Light counterpart of a dark palette color. Colors outside the palette are
/// kept as they are.
fn light_variant(color: Color) -> Color {
  DARK_THEME
    .colors()
    .into_iter()
    .zip(LIGHT_THEME.colors())
    .find_map(|(dark, light)| (dark == color).then_some(light))
    .unwrap_or(color)
}

/// Recolors a drawn buffer for the given theme.
pub fn apply_theme(buffer: &mut Buffer, theme: ThemeName) {
  if theme == ThemeName::Dark {
    return;
  }
  for cell in buffer.content.iter_mut() {
    let (fg, bg) = (light_variant(cell.fg), light_variant(cell.bg));
    cell.set_fg(fg).set_bg(bg);
  }
}

pub fn stylized_block<'a>(selected: bool) -> Block<'a> {
  let border_style = default_border_style(selected);
  let content_style = default_style(selected);
  Block::default()
    .borders(Borders::ALL)
    .style(content_style)
    .border_style(border_style)
    .border_type(BorderType::Rounded)
}

pub fn default_style(selected: bool) -> Style {
  if selected {
    Style::default().bg(theme().bg).fg(theme().text_selected)
  } else {
    Style::default().bg(theme().bg).fg(theme().text)
  }
}

pub fn muted_style() -> Style {
  Style::default().bg(theme().bg).fg(theme().text_muted)
}

pub fn accent_style() -> Style {
  Style::default().bg(theme().bg).fg(theme().accent).add_modifier(Modifier::BOLD)
}

pub fn default_border_style(selected: bool) -> Style {
  if selected {
    Style::default().bg(theme().bg).fg(theme().border_selected)
  } else {
    Style::default().bg(theme().bg).fg(theme().border)
  }
}

pub fn header_style() -> Style {
  Style::default().bg(theme().bg).fg(theme().bg_button_selected)
}

/// Navigation bar once the page has been scrolled past the hero.
pub fn header_scrolled_style() -> Style {
  Style::default().bg(theme().bg_button).fg(theme().text)
}

pub fn stylized_button<'a>(selected: bool) -> Block<'a> {
  let border_style = button_border_style(selected);
  let content_style = button_style(selected);
  Block::default()
    .borders(Borders::ALL)
    .style(content_style)
    .border_style(border_style)
    .border_type(BorderType::Rounded)
}

pub fn button_style(selected: bool) -> Style {
  if selected {
    Style::default()
      .bg(theme().bg_button_selected)
      .fg(theme().text_button_selected)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().bg(theme().bg_button).fg(theme().text_button).add_modifier(Modifier::BOLD)
  }
}

pub fn button_border_style(selected: bool) -> Style {
  if selected {
    Style::default().bg(theme().bg_button_selected).fg(theme().bg_button_selected)
  } else {
    Style::default().bg(theme().bg_button).fg(theme().bg_button)
  }
}

pub fn default_action_block_style(active: bool, has_error: bool) -> Style {
  if has_error {
    Style::default().bg(theme().bg).fg(theme().error)
  } else {
    default_style(active)
  }
}

pub fn input_block<'a>(active: bool, has_error: bool) -> Block<'a> {
  let style = if active {
    default_action_block_style(active, has_error).add_modifier(Modifier::BOLD)
  } else {
    default_action_block_style(active, has_error)
  };
  Block::default().style(style)
}

pub fn notification_style(kind: NotificationKind) -> Style {
  let color = match kind {
    NotificationKind::Success => theme().success,
    NotificationKind::Error => theme().error,
    NotificationKind::Info => theme().info,
  };
  Style::default().bg(theme().bg).fg(color)
}

/// helper function to create a centered rect of fixed size, shrunk to fit `r`
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
  let width = width.min(r.width);
  let height = height.min(r.height);
  Rect::new(r.x + (r.width - width) / 2, r.y + (r.height - height) / 2, width, height)
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
  column >= area.x
    && column < area.x.saturating_add(area.width)
    && row >= area.y
    && row < area.y.saturating_add(area.height)
}
