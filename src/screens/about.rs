use super::{clamp_scroll, wrapped_height, Screen};
use crate::{
  action::{Action, MoveDirection},
  components::style::{accent_style, default_style, stylized_block},
};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

const SECTIONS: [(&str, &str); 4] = [
  (
    "Our mission",
    "Innovation Hub connects students who want to build things. We run hackathons, \
     workshops and demo days so ideas leave the notebook and meet real users.",
  ),
  (
    "What we do",
    "Weekend hackathons with industry mentors, monthly build nights, founder talks and a \
     maker space open to every faculty.",
  ),
  (
    "Who we are",
    "A student-run society backed by the university incubator. Anyone enrolled can join, \
     no prior experience needed.",
  ),
  ("By the numbers", "1,200 members · 40 events a year · 85 shipped projects · 12 startups"),
];

#[derive(Default)]
pub struct About {
  scroll: u16,
}

impl About {
  fn lines(&self) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, body) in SECTIONS {
      lines.push(Line::styled(title, accent_style()));
      lines.push(Line::styled(body, default_style(false)));
      lines.push(Line::default());
    }
    lines
  }
}

impl Screen for About {
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
    let block = stylized_block(false).title(" About ");
    let inner = block.inner(area).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, area);
    let lines = self.lines();
    let scroll = clamp_scroll(self.scroll, wrapped_height(&lines, inner.width), inner.height);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).scroll((scroll, 0)), inner);
    Ok(())
  }
}
