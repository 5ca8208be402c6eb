use super::style::{contains, stylized_block};
use color_eyre::eyre::Result;
use ratatui::{
  prelude::{Alignment, Constraint, Layout, Margin, Rect},
  style::{Modifier, Stylize},
  widgets::{Clear, Paragraph},
  Frame,
};

/// Dropdown menu of labelled entries.
pub struct Select<T> {
  items: Vec<(T, String)>,
  selected: usize,
  is_displayed: bool,
  hits: Vec<(Rect, usize)>,
}

impl<T: Clone> Select<T> {
  pub fn new(items: Vec<(T, String)>) -> Self {
    Select { items, selected: 0, is_displayed: false, hits: Vec::new() }
  }

  pub fn is_displayed(&self) -> bool {
    self.is_displayed
  }

  pub fn next(&mut self) {
    let max_index = self.items.len().saturating_sub(1);
    self.select(max_index.min(self.selected + 1));
  }

  pub fn previous(&mut self) {
    self.select(self.selected.saturating_sub(1));
  }

  pub fn select(&mut self, pos: usize) {
    self.selected = pos
  }

  pub fn open(&mut self) {
    self.is_displayed = true
  }

  pub fn close(&mut self) {
    self.is_displayed = false;
    self.hits.clear();
  }

  pub fn selected(&self) -> Option<T> {
    self.items.get(self.selected).map(|(item, _)| item.clone())
  }

  /// Highlights `item` if it is on the menu.
  pub fn select_item(&mut self, item: &T)
  where
    T: PartialEq,
  {
    if let Some(index) = self.items.iter().position(|(candidate, _)| candidate == item) {
      self.selected = index;
    }
  }

  pub fn height(&self) -> u16 {
    self.items.len() as u16 + 2
  }

  pub fn contains(&self, column: u16, row: u16) -> bool {
    self.is_displayed && self.hits.iter().any(|(area, _)| contains(*area, column, row))
  }

  pub fn item_at(&self, column: u16, row: u16) -> Option<T> {
    self
      .hits
      .iter()
      .find(|(area, _)| contains(*area, column, row))
      .and_then(|(_, index)| self.items.get(*index))
      .map(|(item, _)| item.clone())
  }

  pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    self.hits.clear();
    if !self.is_displayed {
      return Ok(());
    }
    f.render_widget(Clear, area);
    f.render_widget(stylized_block(false), area);
    let layout = area.inner(&Margin { horizontal: 1, vertical: 1 });
    let constraints: Vec<Constraint> = self.items.iter().map(|_| Constraint::Length(1)).collect();
    let layout = Layout::default().constraints(constraints).split(layout);
    for (index, (_, label)) in self.items.iter().enumerate() {
      let mut paragraph = Paragraph::new(label.clone()).alignment(Alignment::Center);
      if self.selected == index {
        paragraph = paragraph.add_modifier(Modifier::REVERSED);
      }
      f.render_widget(paragraph, layout[index]);
      self.hits.push((layout[index], index));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn selection_stays_in_bounds() {
    let mut menu = Select::new(vec![(1, "one".to_string()), (2, "two".to_string())]);
    menu.previous();
    assert_eq!(menu.selected(), Some(1));
    menu.next();
    menu.next();
    assert_eq!(menu.selected(), Some(2));
    menu.select_item(&1);
    assert_eq!(menu.selected(), Some(1));
  }
}
