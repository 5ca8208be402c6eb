use super::{clamp_scroll, Screen};
use crate::{
  action::{Action, MoveDirection},
  components::style::{accent_style, default_style, muted_style, stylized_block},
};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

const CARD_HEIGHT: u16 = 5;
const COLUMNS: usize = 2;

struct Member {
  name: &'static str,
  role: &'static str,
  focus: &'static str,
}

const MEMBERS: [Member; 6] = [
  Member { name: "Aisha Verma", role: "President", focus: "Partnerships and sponsors" },
  Member { name: "Daniel Okafor", role: "Vice president", focus: "Hackathon operations" },
  Member { name: "Mei Lin", role: "Technical lead", focus: "Workshops and the maker space" },
  Member { name: "Lucas Ferreira", role: "Design lead", focus: "Brand, site and event visuals" },
  Member { name: "Sofia Rossi", role: "Community manager", focus: "Newsletter and socials" },
  Member { name: "Omar Haddad", role: "Treasurer", focus: "Budgets and prizes" },
];

#[derive(Default)]
pub struct Team {
  scroll: u16,
}

impl Screen for Team {
  fn set_scroll(&mut self, offset: u16) {
    self.scroll = offset;
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    let action = match action {
      Action::Move(MoveDirection::Up) => Some(Action::Scroll(-1)),
      Action::Move(MoveDirection::Down) => Some(Action::Scroll(1)),
      _ => None,
    };
    Ok(action)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let block = stylized_block(false).title(" Meet the team ");
    let inner = block.inner(area).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, area);

    let rows = MEMBERS.len().div_ceil(COLUMNS) as u16;
    let scroll = clamp_scroll(self.scroll, rows * CARD_HEIGHT, inner.height) / CARD_HEIGHT;
    let width = inner.width / COLUMNS as u16;

    for (index, member) in MEMBERS.iter().enumerate() {
      let row = (index / COLUMNS) as u16;
      if row < scroll {
        continue;
      }
      let y = inner.y + (row - scroll) * CARD_HEIGHT;
      if y + CARD_HEIGHT > inner.bottom() {
        break;
      }
      let card = Rect::new(inner.x + (index % COLUMNS) as u16 * width, y, width, CARD_HEIGHT);
      let block = stylized_block(false);
      let content = block.inner(card).inner(&Margin { horizontal: 1, vertical: 0 });
      f.render_widget(block, card);
      let lines = vec![
        Line::styled(member.name, accent_style()),
        Line::styled(member.role, default_style(false)),
        Line::styled(member.focus, muted_style()),
      ];
      f.render_widget(Paragraph::new(lines), content);
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
  fn arrows_scroll_the_page() {
    let mut team = Team::default();
    assert_eq!(team.update(Action::Move(MoveDirection::Down)).unwrap(), Some(Action::Scroll(1)));
    assert_eq!(team.update(Action::Accept).unwrap(), None);
  }

  #[test]
  fn draws_member_cards() {
    let mut team = Team::default();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| team.draw(f, f.size()).unwrap()).unwrap();
    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Aisha Verma"));
    assert!(text.contains("Omar Haddad"));
  }
}
