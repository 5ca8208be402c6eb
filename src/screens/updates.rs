use super::Screen;
use crate::{
  action::{Action, MoveDirection},
  components::{
    form::FormView,
    list::List,
    style::{accent_style, contains, default_style, muted_style, stylized_block},
    ListDisplay,
  },
  forms::FormKind,
  site::modal::ModalId,
};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

struct Update {
  title: &'static str,
  date: &'static str,
  summary: &'static str,
}

const UPDATES: [Update; 4] = [
  Update {
    title: "Ride Hack 2025 registrations open",
    date: "Feb 2025",
    summary: "Teams of two to five can now sign up for the mobility hackathon.",
  },
  Update {
    title: "New maker space hours",
    date: "Jan 2025",
    summary: "The lab stays open until 22:00 on weekdays during the semester.",
  },
  Update {
    title: "TechFest 2024 winners",
    date: "Mar 2024",
    summary: "Twelve teams shipped working prototypes, three continue in the incubator.",
  },
  Update {
    title: "Mentor programme",
    date: "Dec 2023",
    summary: "Alumni founders hold monthly office hours for student projects.",
  },
];

impl ListDisplay for &'static Update {
  fn draw(&mut self, f: &mut Frame<'_>, area: Rect, active: bool) -> Result<()> {
    let block = stylized_block(active);
    let inner = block.inner(area).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, area);
    let lines = vec![
      Line::from(vec![
        Span::styled(self.title, accent_style()),
        Span::raw("  "),
        Span::styled(self.date, muted_style()),
      ]),
      Line::styled(self.summary, default_style(false)),
      Line::styled("Read more ›", muted_style()).alignment(Alignment::Right),
    ];
    f.render_widget(Paragraph::new(lines), inner);
    Ok(())
  }

  fn height(&self) -> u16 {
    5
  }
}

pub struct Updates {
  list: List<&'static Update>,
  newsletter: FormView,
  newsletter_selected: bool,
  newsletter_area: Rect,
}

impl Default for Updates {
  fn default() -> Self {
    let mut list = List::new(UPDATES.iter().collect());
    list.select(Some(0));
    Self {
      list,
      newsletter: FormView::new(FormKind::Newsletter),
      newsletter_selected: false,
      newsletter_area: Rect::default(),
    }
  }
}

impl Screen for Updates {
  fn form(&self) -> Option<&FormView> {
    Some(&self.newsletter)
  }

  fn form_mut(&mut self) -> Option<&mut FormView> {
    Some(&mut self.newsletter)
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::Move(MoveDirection::Up) => self.list.previous(),
      Action::Move(MoveDirection::Down) => self.list.next(),
      Action::Move(MoveDirection::Right) => self.newsletter_selected = true,
      Action::Move(MoveDirection::Left) => self.newsletter_selected = false,
      Action::FocusNext | Action::FocusPrevious => {
        self.newsletter_selected = !self.newsletter_selected
      },
      Action::Accept if self.newsletter_selected => return Ok(Some(Action::EnterForm)),
      Action::Accept => return Ok(Some(Action::OpenModal(ModalId::SimpleComingSoon))),
      Action::Click(column, row) => {
        if contains(self.newsletter_area, column, row) {
          self.newsletter_selected = true;
          return Ok(Some(Action::EnterForm));
        }
        if let Some(index) = self.list.item_at(column, row) {
          self.list.select(Some(index));
          self.newsletter_selected = false;
          return Ok(Some(Action::OpenModal(ModalId::SimpleComingSoon)));
        }
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let columns =
      Layout::horizontal(vec![Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);

    let block = stylized_block(false).title(" Latest updates ");
    let inner = block.inner(columns[0]).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, columns[0]);
    if self.newsletter_selected {
      let selected = self.list.selected();
      self.list.unselect();
      self.list.draw(f, inner)?;
      self.list.select(selected);
    } else {
      self.list.draw(f, inner)?;
    }

    let highlighted = self.newsletter_selected || self.newsletter.is_active();
    let block = stylized_block(highlighted).title(" Newsletter ");
    let inner = block.inner(columns[1]).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, columns[1]);
    self.newsletter_area = columns[1];
    let rows = Layout::vertical(vec![Constraint::Length(3), Constraint::Min(0)]).split(inner);
    f.render_widget(
      Paragraph::new("Hackathon announcements and event recaps, about twice a month.")
        .wrap(Wrap { trim: true })
        .style(muted_style()),
      rows[0],
    );
    self.newsletter.draw(f, rows[1])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn update_cards_tease_upcoming_content() {
    let mut updates = Updates::default();
    updates.update(Action::Move(MoveDirection::Down)).unwrap();
    assert_eq!(
      updates.update(Action::Accept).unwrap(),
      Some(Action::OpenModal(ModalId::SimpleComingSoon))
    );
  }

  #[test]
  fn newsletter_box_enters_the_form() {
    let mut updates = Updates::default();
    updates.update(Action::FocusNext).unwrap();
    assert_eq!(updates.update(Action::Accept).unwrap(), Some(Action::EnterForm));
    assert_eq!(updates.form().map(FormView::kind), Some(FormKind::Newsletter));
  }
}
