use color_eyre::eyre::Result;
use ratatui::{
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style},
  widgets::{Block, Paragraph},
  Frame,
};

use super::{
  select::Select,
  style::{
    accent_style, button_style, contains, default_style, header_scrolled_style, header_style,
    ThemeName,
  },
};
use crate::site::page::{NavLinks, Page};

const LOGO_WIDTH: u16 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
  Page(Page),
  MenuToggle,
  ThemeToggle,
  Login,
  Signup,
}

/// Top navigation bar. Collapses its links into a dropdown below the width
/// breakpoint.
pub struct InnohubHeader {
  breakpoint: u16,
  hits: Vec<(Rect, NavTarget)>,
  menu: Select<Page>,
}

impl InnohubHeader {
  pub fn new(breakpoint: u16) -> Self {
    let menu =
      Select::new(Page::nav_pages().map(|page| (page, page.title().to_string())).collect());
    Self { breakpoint, hits: Vec::new(), menu }
  }

  pub fn is_compact(&self, width: u16) -> bool {
    width < self.breakpoint
  }

  pub fn target_at(&self, column: u16, row: u16) -> Option<NavTarget> {
    if let Some(page) = self.menu.item_at(column, row) {
      return Some(NavTarget::Page(page));
    }
    self.hits.iter().find(|(area, _)| contains(*area, column, row)).map(|(_, target)| *target)
  }

  pub fn menu_contains(&self, column: u16, row: u16) -> bool {
    self.menu.contains(column, row)
  }

  pub fn draw(
    &mut self,
    f: &mut Frame<'_>,
    area: Rect,
    links: &NavLinks,
    scrolled: bool,
    theme: ThemeName,
  ) -> Result<()> {
    self.hits.clear();
    let style = if scrolled { header_scrolled_style() } else { header_style() };
    f.render_widget(Block::new().style(style), area);

    let compact = self.is_compact(area.width);
    let layout =
      Layout::horizontal(vec![Constraint::Length(LOGO_WIDTH), Constraint::Min(0)]).split(area);
    f.render_widget(logo().style(style), layout[0]);

    let row = Rect { y: area.y + area.height / 2, height: 1, ..layout[1] };
    let mut entries: Vec<(String, NavTarget, Style)> = Vec::new();
    if compact {
      let label = if links.mobile_menu_open { "✕ Close" } else { "☰ Menu" };
      entries.push((label.to_string(), NavTarget::MenuToggle, button_style(false)));
    } else {
      for page in Page::nav_pages() {
        let style = if links.desktop == Some(page) {
          accent_style().add_modifier(Modifier::UNDERLINED)
        } else {
          default_style(false)
        };
        entries.push((page.title().to_string(), NavTarget::Page(page), style));
      }
    }
    let theme_icon = match theme {
      ThemeName::Dark => "☾",
      ThemeName::Light => "☀",
    };
    entries.push((theme_icon.to_string(), NavTarget::ThemeToggle, default_style(false)));
    entries.push(("Login".to_string(), NavTarget::Login, button_style(false)));
    entries.push(("Sign up".to_string(), NavTarget::Signup, button_style(true)));

    // Right-aligned, one space of padding around each label.
    let widths: Vec<u16> = entries.iter().map(|(label, ..)| label.chars().count() as u16 + 2).collect();
    let total: u16 = widths.iter().map(|w| w + 1).sum();
    let mut x = row.x + row.width.saturating_sub(total);
    for ((label, target, style), width) in entries.into_iter().zip(widths) {
      if x + width > row.x + row.width {
        break;
      }
      let cell = Rect { x, width, ..row };
      f.render_widget(Paragraph::new(label).alignment(Alignment::Center).style(style), cell);
      self.hits.push((cell, target));
      x += width + 1;
    }

    if compact && links.mobile_menu_open {
      if let Some(page) = links.mobile {
        self.menu.select_item(&page);
      }
      self.menu.open();
    } else {
      self.menu.close();
    }
    Ok(())
  }

  /// Drawn after the page so the dropdown overlaps it.
  pub fn draw_menu(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    if !self.menu.is_displayed() {
      return Ok(());
    }
    let width = 20.min(area.width);
    let height = self.menu.height().min(area.height);
    let menu_area = Rect::new(area.x + area.width - width, area.y, width, height);
    self.menu.draw(f, menu_area)
  }
}

pub fn logo<'a>() -> Paragraph<'a> {
  let title = r#"╦╔╗╔╔╗╔╔═╗╦ ╦╦ ╦╔╗
║║║║║║║║ ║╠═╣║ ║╠╩╗
╩╝╚╝╝╚╝╚═╝╩ ╩╚═╝╚═╝"#;
  Paragraph::new(title).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use ratatui::{backend::TestBackend, Terminal};

  fn links(menu_open: bool) -> NavLinks {
    NavLinks { desktop: Some(Page::Events), mobile: Some(Page::Events), mobile_menu_open: menu_open }
  }

  #[test]
  fn wide_bar_links_every_nav_page() {
    let mut header = InnohubHeader::new(100);
    let mut terminal = Terminal::new(TestBackend::new(140, 3)).unwrap();
    terminal
      .draw(|f| {
        header.draw(f, f.size(), &links(false), false, ThemeName::Dark).unwrap();
      })
      .unwrap();
    let pages: Vec<Page> = header
      .hits
      .iter()
      .filter_map(|(_, target)| match target {
        NavTarget::Page(page) => Some(*page),
        _ => None,
      })
      .collect();
    assert_eq!(pages, Page::nav_pages().collect::<Vec<_>>());
  }

  #[test]
  fn narrow_bar_collapses_into_a_menu() {
    let mut header = InnohubHeader::new(100);
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
      .draw(|f| {
        let area = f.size();
        header.draw(f, Rect { height: 3, ..area }, &links(true), false, ThemeName::Dark).unwrap();
        header.draw_menu(f, Rect { y: 3, height: 17, ..area }).unwrap();
      })
      .unwrap();
    assert!(header.hits.iter().any(|(_, target)| *target == NavTarget::MenuToggle));
    // Dropdown entries start one row below its top border.
    assert_eq!(header.target_at(50, 4), Some(NavTarget::Page(Page::Home)));
    assert!(header.menu_contains(50, 5));
  }
}
