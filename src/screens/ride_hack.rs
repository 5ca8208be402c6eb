use super::Screen;
use crate::{
  action::{Action, MoveDirection},
  components::{
    modal::button_row,
    style::{accent_style, contains, default_style, muted_style, stylized_block},
  },
  config::Config,
  effects::{countdown::Countdown, Animation},
  site::{hackathon::RIDE_HACK_ID, page::Page},
  utils::formatting::dt_to_readable,
};
use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

const BUTTONS: [&str; 2] = ["Register your team", "Back to events"];

const TRACKS: [(&str, &str); 3] = [
  ("Campus shuttles", "Live routing and demand prediction for the night buses"),
  ("Micromobility", "Bike and scooter sharing that survives the exam season"),
  ("Accessible transit", "Step-free journeys across the old and new campus"),
];

pub struct RideHack {
  countdown: Countdown,
  selected_button: usize,
  button_hits: Vec<Rect>,
}

impl Default for RideHack {
  fn default() -> Self {
    Self::starting_at(crate::config::SiteConfig::default().ride_hack_start)
  }
}

impl RideHack {
  fn starting_at(start: DateTime<Utc>) -> Self {
    Self {
      countdown: Countdown::new("Ride Hack starts in", start),
      selected_button: 0,
      button_hits: Vec::new(),
    }
  }

  fn button_action(&self, index: usize) -> Option<Action> {
    match index {
      0 => Some(Action::OpenHackathonRegister(RIDE_HACK_ID.to_string())),
      1 => Some(Action::Navigate(Page::Events)),
      _ => None,
    }
  }

  pub fn countdown(&self) -> &Countdown {
    &self.countdown
  }
}

impl Screen for RideHack {
  fn register_config_handler(&mut self, config: Config) -> Result<()> {
    self.countdown = Countdown::new(self.countdown.label(), config.site.ride_hack_start);
    Ok(())
  }

  fn show(&mut self, now: DateTime<Utc>) {
    self.countdown.start(now);
  }

  fn hide(&mut self) {
    self.countdown.stop();
  }

  fn tick(&mut self, now: DateTime<Utc>) {
    self.countdown.advance(now);
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::Move(MoveDirection::Left) | Action::FocusPrevious => {
        self.selected_button = self.selected_button.saturating_sub(1)
      },
      Action::Move(MoveDirection::Right) | Action::FocusNext => {
        self.selected_button = (self.selected_button + 1).min(BUTTONS.len() - 1)
      },
      Action::Accept => return Ok(self.button_action(self.selected_button)),
      Action::Click(column, row) => {
        if let Some(index) = self.button_hits.iter().position(|hit| contains(*hit, column, row)) {
          self.selected_button = index;
          return Ok(self.button_action(index));
        }
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let block = stylized_block(false).title(" Ride Hack 2025 ");
    let inner = block.inner(area).inner(&Margin { horizontal: 2, vertical: 1 });
    f.render_widget(block, area);

    let rows = Layout::vertical(vec![
      Constraint::Length(2),
      Constraint::Length(3),
      Constraint::Length(2),
      Constraint::Min(0),
      Constraint::Length(3),
    ])
    .split(inner);

    f.render_widget(
      Paragraph::new(vec![
        Line::styled("Rethink how the campus moves", accent_style()),
        Line::styled(format!("Kick-off {}", dt_to_readable(self.countdown.target())), muted_style()),
      ]),
      rows[0],
    );

    let caption = if self.countdown.has_finished() {
      "Hacking is under way!".to_string()
    } else {
      self.countdown.label().to_string()
    };
    f.render_widget(
      Paragraph::new(vec![
        Line::styled(caption, muted_style()),
        Line::styled(self.countdown.parts().to_string(), accent_style().add_modifier(Modifier::BOLD)),
        Line::styled("DD : HH : MM : SS", muted_style()),
      ])
      .alignment(Alignment::Center),
      rows[1],
    );

    let mut lines = vec![Line::styled("Tracks", accent_style()), Line::default()];
    for (track, pitch) in TRACKS {
      lines.push(Line::from(vec![
        Span::styled(format!("• {track}: "), default_style(true)),
        Span::styled(pitch, default_style(false)),
      ]));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[3]);

    self.button_hits = button_row(f, rows[4], &BUTTONS, self.selected_button)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};
  use pretty_assertions::assert_eq;
  use ratatui::{backend::TestBackend, Terminal};

  fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 21, 9, 0, 0).unwrap()
  }

  #[test]
  fn countdown_runs_only_while_visible() {
    let mut page = RideHack::starting_at(start());
    page.show(start() - Duration::days(3));
    assert!(page.countdown().is_running());
    assert_eq!(page.countdown().parts().to_string(), "03:00:00:00");
    page.hide();
    assert!(!page.countdown().is_running());
  }

  #[test]
  fn finished_countdown_shows_zeroes() {
    let mut page = RideHack::starting_at(start());
    page.show(start() + Duration::days(1));
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| page.draw(f, f.size()).unwrap()).unwrap();
    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("00:00:00:00"));
    assert!(text.contains("Hacking is under way!"));
  }

  #[test]
  fn buttons_register_or_go_back() {
    let mut page = RideHack::starting_at(start());
    assert_eq!(
      page.update(Action::Accept).unwrap(),
      Some(Action::OpenHackathonRegister(RIDE_HACK_ID.to_string()))
    );
    page.update(Action::Move(MoveDirection::Right)).unwrap();
    assert_eq!(page.update(Action::Accept).unwrap(), Some(Action::Navigate(Page::Events)));
  }
}
