use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use ratatui::prelude::{Frame, Line, Rect};
use tokio::sync::mpsc::UnboundedSender;

use crate::{action::Action, components::form::FormView, config::Config, site::page::Page};

pub mod about;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod home;
pub mod ride_hack;
pub mod team;
pub mod updates;

/// One page of the site. All pages stay alive for the whole session; the
/// navigator decides which one is drawn and receives actions.
pub trait Screen {
  fn register_action_handler(&mut self, _tx: UnboundedSender<Action>) -> Result<()> {
    Ok(())
  }

  fn register_config_handler(&mut self, _config: Config) -> Result<()> {
    Ok(())
  }

  /// Called when the page becomes the visible one.
  fn show(&mut self, _now: DateTime<Utc>) {}

  /// Called when another page replaces this one.
  fn hide(&mut self) {}

  fn tick(&mut self, _now: DateTime<Utc>) {}

  fn set_scroll(&mut self, _offset: u16) {}

  fn form(&self) -> Option<&FormView> {
    None
  }

  fn form_mut(&mut self) -> Option<&mut FormView> {
    None
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>>;

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}

pub fn for_page(page: Page) -> Box<dyn Screen> {
  match page {
    Page::Home => Box::<home::Home>::default(),
    Page::About => Box::<about::About>::default(),
    Page::Events => Box::<events::Events>::default(),
    Page::Gallery => Box::<gallery::Gallery>::default(),
    Page::Updates => Box::<updates::Updates>::default(),
    Page::Team => Box::<team::Team>::default(),
    Page::Contact => Box::<contact::Contact>::default(),
    Page::RideHackDetail => Box::<ride_hack::RideHack>::default(),
  }
}

/// Clamps a scroll offset so the last line of `content_height` stays on screen.
pub fn clamp_scroll(offset: u16, content_height: u16, viewport: u16) -> u16 {
  offset.min(content_height.saturating_sub(viewport))
}

/// Rows `lines` take once wrapped to `width` columns.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
  if width == 0 {
    return 0;
  }
  lines.iter().map(|line| (line.width() as u16).max(1).div_ceil(width)).sum()
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn scroll_stops_at_the_last_screenful() {
    assert_eq!(clamp_scroll(50, 30, 10), 20);
    assert_eq!(clamp_scroll(5, 8, 10), 0);
  }

  #[test]
  fn long_lines_wrap() {
    let lines = vec![Line::raw("x".repeat(25)), Line::default(), Line::raw("short")];
    assert_eq!(wrapped_height(&lines, 10), 5);
  }
}
