use super::{style::contains, ListDisplay};
use color_eyre::eyre::Result;
use ratatui::prelude::*;

/// Vertical list with a clamped selection that scrolls to keep it in view.
pub struct List<T: ListDisplay> {
  items: Vec<T>,
  selected: Option<usize>,
  hits: Vec<(Rect, usize)>,
}

impl<T: ListDisplay> List<T> {
  pub fn new(items: Vec<T>) -> Self {
    List { items, selected: None, hits: Vec::new() }
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn items(&self) -> &[T] {
    &self.items
  }

  pub fn next(&mut self) {
    let i = match self.selected {
      _ if self.items.is_empty() => None,
      Some(i) => Some((i + 1).min(self.items.len() - 1)),
      None => Some(0),
    };
    self.select(i);
  }

  pub fn previous(&mut self) {
    let i = match self.selected {
      _ if self.items.is_empty() => None,
      Some(i) => Some(i.saturating_sub(1)),
      None => Some(0),
    };
    self.select(i);
  }

  pub fn unselect(&mut self) {
    self.select(None);
  }

  pub fn select(&mut self, pos: Option<usize>) {
    self.selected = pos.filter(|i| *i < self.items.len());
  }

  pub fn selected(&self) -> Option<usize> {
    self.selected
  }

  pub fn selected_item(&self) -> Option<&T> {
    self.selected.and_then(|i| self.items.get(i))
  }

  /// Index of the item drawn under the given cell during the last frame.
  pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
    self.hits.iter().find(|(area, _)| contains(*area, column, row)).map(|(_, index)| *index)
  }

  pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    self.hits.clear();
    let selected = self.selected.unwrap_or(0);
    let mut start_index = 0;
    while start_index < selected
      && self.items[start_index..=selected].iter().map(ListDisplay::height).sum::<u16>()
        > area.height
    {
      start_index += 1;
    }

    let mut y = area.y;
    for (index, item) in self.items.iter_mut().enumerate().skip(start_index) {
      let height = item.height();
      if y + height > area.y + area.height {
        break;
      }
      let item_area = Rect::new(area.x, y, area.width, height);
      item.draw(f, item_area, self.selected == Some(index))?;
      self.hits.push((item_area, index));
      y += height;
    }

    Ok(())
  }
}

impl<T: ListDisplay> Default for List<T> {
  fn default() -> Self {
    List::new(Vec::new())
  }
}
