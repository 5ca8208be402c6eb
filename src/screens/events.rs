use super::Screen;
use crate::{
  action::{Action, MoveDirection},
  components::{
    list::List,
    style::{accent_style, muted_style, stylized_block},
    ListDisplay,
  },
  site::{
    hackathon::{Hackathon, HACKATHONS, RIDE_HACK_ID},
    page::Page,
  },
};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

struct EventCard(&'static Hackathon);

impl EventCard {
  fn action(&self) -> Action {
    if self.0.id == RIDE_HACK_ID {
      Action::Navigate(Page::RideHackDetail)
    } else {
      Action::OpenHackathonRegister(self.0.id.to_string())
    }
  }
}

impl ListDisplay for EventCard {
  fn draw(&mut self, f: &mut Frame<'_>, area: Rect, active: bool) -> Result<()> {
    let block = stylized_block(active);
    let inner = block.inner(area);
    f.render_widget(block, area);
    let call_to_action = if self.0.id == RIDE_HACK_ID { "Details ›" } else { "Register ›" };
    let lines = vec![
      Line::from(vec![
        Span::styled(self.0.name, accent_style()),
        Span::raw("  "),
        Span::styled(self.0.dates, muted_style()),
      ]),
      Line::raw(self.0.tagline),
      Line::styled(call_to_action, muted_style()).alignment(Alignment::Right),
    ];
    f.render_widget(Paragraph::new(lines), inner.inner(&Margin { horizontal: 1, vertical: 0 }));
    Ok(())
  }

  fn height(&self) -> u16 {
    5
  }
}

pub struct Events {
  list: List<EventCard>,
}

impl Default for Events {
  fn default() -> Self {
    let mut list = List::new(HACKATHONS.iter().map(EventCard).collect());
    list.select(Some(0));
    Self { list }
  }
}

impl Screen for Events {
  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::Move(MoveDirection::Up) | Action::FocusPrevious => self.list.previous(),
      Action::Move(MoveDirection::Down) | Action::FocusNext => self.list.next(),
      Action::Accept => return Ok(self.list.selected_item().map(EventCard::action)),
      Action::Click(column, row) => {
        if let Some(index) = self.list.item_at(column, row) {
          self.list.select(Some(index));
          return Ok(self.list.selected_item().map(EventCard::action));
        }
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let block = stylized_block(false).title(" Events & hackathons ");
    let inner = block.inner(area).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, area);
    self.list.draw(f, inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn accepting_a_hackathon_opens_its_registration() {
    let mut events = Events::default();
    assert_eq!(
      events.update(Action::Accept).unwrap(),
      Some(Action::OpenHackathonRegister("techfest2024".to_string()))
    );
  }

  #[test]
  fn ride_hack_links_to_its_page() {
    let mut events = Events::default();
    for _ in 0..HACKATHONS.len() {
      events.update(Action::Move(MoveDirection::Down)).unwrap();
    }
    assert_eq!(events.update(Action::Accept).unwrap(), Some(Action::Navigate(Page::RideHackDetail)));
  }
}
