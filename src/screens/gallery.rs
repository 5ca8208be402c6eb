use super::Screen;
use crate::{
  action::{Action, MoveDirection},
  components::style::{contains, default_style, muted_style, stylized_block},
  site::gallery::{default_images, LazyImage},
  utils::formatting::truncate,
};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

const COLUMNS: usize = 4;
const THUMBNAIL_HEIGHT: u16 = 6;

pub struct Gallery {
  thumbnails: Vec<LazyImage>,
  selected: usize,
  hits: Vec<(Rect, usize)>,
}

impl Default for Gallery {
  fn default() -> Self {
    Self {
      thumbnails: default_images().into_iter().map(LazyImage::new).collect(),
      selected: 0,
      hits: Vec::new(),
    }
  }
}

impl Gallery {
  #[cfg(test)]
  pub fn loaded_count(&self) -> usize {
    self.thumbnails.iter().filter(|thumbnail| thumbnail.is_loaded()).count()
  }

  fn move_selection(&mut self, direction: MoveDirection) {
    let last = self.thumbnails.len().saturating_sub(1);
    self.selected = match direction {
      MoveDirection::Left => self.selected.saturating_sub(1),
      MoveDirection::Right => (self.selected + 1).min(last),
      MoveDirection::Up => self.selected.saturating_sub(COLUMNS),
      MoveDirection::Down if self.selected + COLUMNS <= last => self.selected + COLUMNS,
      MoveDirection::Down => self.selected,
    };
  }
}

impl Screen for Gallery {
  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::Move(direction) => self.move_selection(direction),
      Action::FocusNext => self.move_selection(MoveDirection::Right),
      Action::FocusPrevious => self.move_selection(MoveDirection::Left),
      Action::Accept if !self.thumbnails.is_empty() => {
        return Ok(Some(Action::OpenLightbox(self.selected)))
      },
      Action::Click(column, row) => {
        if let Some((_, index)) = self.hits.iter().find(|(area, _)| contains(*area, column, row)) {
          self.selected = *index;
          return Ok(Some(Action::OpenLightbox(*index)));
        }
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    self.hits.clear();
    let block = stylized_block(false).title(" Gallery ");
    let inner = block.inner(area).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, area);

    let visible_rows = (inner.height / THUMBNAIL_HEIGHT).max(1) as usize;
    let selected_row = self.selected / COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let width = inner.width / COLUMNS as u16;

    for (index, thumbnail) in self.thumbnails.iter_mut().enumerate() {
      let row = index / COLUMNS;
      if row < first_row || row >= first_row + visible_rows {
        continue;
      }
      let cell = Rect::new(
        inner.x + (index % COLUMNS) as u16 * width,
        inner.y + (row - first_row) as u16 * THUMBNAIL_HEIGHT,
        width,
        THUMBNAIL_HEIGHT.min(inner.height),
      );
      let block = stylized_block(index == self.selected);
      let content = block.inner(cell);
      f.render_widget(block, cell);
      // First time on screen: placeholder now, the image from the next frame on.
      if thumbnail.reveal() {
        f.render_widget(
          Paragraph::new("loading…").alignment(Alignment::Center).style(muted_style()),
          content,
        );
      } else {
        let lines = vec![
          Line::styled("▚▞▚▞▚▞▚▞", default_style(false)),
          Line::styled(
            truncate(&thumbnail.image.caption, content.width as usize),
            default_style(index == self.selected),
          ),
        ];
        f.render_widget(
          Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
          content,
        );
      }
      self.hits.push((cell, index));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use ratatui::{backend::TestBackend, Terminal};

  #[test]
  fn grid_navigation_stays_inside_the_set() {
    let mut gallery = Gallery::default();
    gallery.update(Action::Move(MoveDirection::Down)).unwrap();
    assert_eq!(gallery.selected, 4);
    gallery.update(Action::Move(MoveDirection::Down)).unwrap();
    assert_eq!(gallery.selected, 4);
    gallery.update(Action::Move(MoveDirection::Up)).unwrap();
    gallery.update(Action::Move(MoveDirection::Left)).unwrap();
    assert_eq!(gallery.selected, 0);
  }

  #[test]
  fn accept_opens_the_lightbox_at_the_selection() {
    let mut gallery = Gallery::default();
    gallery.update(Action::Move(MoveDirection::Right)).unwrap();
    assert_eq!(gallery.update(Action::Accept).unwrap(), Some(Action::OpenLightbox(1)));
  }

  #[test]
  fn only_visible_thumbnails_load() {
    let mut gallery = Gallery::default();
    // Room for a single row of thumbnails.
    let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
    terminal.draw(|f| gallery.draw(f, f.size()).unwrap()).unwrap();
    assert_eq!(gallery.loaded_count(), COLUMNS);
  }
}
