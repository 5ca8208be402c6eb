pub mod form;
pub mod header;
pub mod list;
pub mod modal;
pub mod notification;
pub mod select;
pub mod style;

use color_eyre::eyre::Result;
use ratatui::prelude::*;

/// Something a [`list::List`] can render, highlighted when `active`.
pub trait ListDisplay {
  fn draw(&mut self, f: &mut Frame<'_>, area: Rect, active: bool) -> Result<()>;

  fn height(&self) -> u16 {
    3
  }
}
