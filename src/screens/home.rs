use super::Screen;
use crate::{
  action::{Action, MoveDirection},
  components::style::{accent_style, default_style, muted_style, stylized_button},
  config::{Config, SiteConfig},
  effects::{
    cube::CursorCube, normalized_pointer, particles::ParticleField, typewriter::Typewriter,
    Animation,
  },
  site::{modal::ModalId, page::Page},
};
use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use ratatui::{
  prelude::*,
  symbols::Marker,
  widgets::{
    canvas::{Canvas, Line as CanvasLine, Points},
    *,
  },
};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};
use tokio::sync::mpsc::UnboundedSender;

const TAGLINE: &str = "Build, ship and pitch with the campus innovation community.";

pub struct Home {
  command_tx: Option<UnboundedSender<Action>>,
  selected_action: usize,
  typewriter: Typewriter,
  particles: ParticleField,
  cube: CursorCube,
  canvas_area: Rect,
}

impl Default for Home {
  fn default() -> Self {
    Self::with_site_config(&SiteConfig::default())
  }
}

#[derive(EnumIter, EnumCount, Display)]
enum HomeAction {
  #[strum(to_string = "Explore events")]
  Events,
  #[strum(to_string = "Join the hub")]
  Join,
  #[strum(to_string = "Ride Hack 2025")]
  RideHack,
  #[strum(to_string = "What's next")]
  ComingSoon,
}

impl HomeAction {
  fn to_action(&self) -> Action {
    match self {
      Self::Events => Action::Navigate(Page::Events),
      Self::Join => Action::OpenModal(ModalId::Signup),
      Self::RideHack => Action::Navigate(Page::RideHackDetail),
      Self::ComingSoon => Action::OpenModal(ModalId::ComingSoon),
    }
  }
}

impl Home {
  fn with_site_config(site: &SiteConfig) -> Self {
    Self {
      command_tx: None,
      selected_action: 0,
      typewriter: Typewriter::new(TAGLINE, site.typewriter_cps),
      particles: ParticleField::new(site.particle_count),
      cube: CursorCube::default(),
      canvas_area: Rect::default(),
    }
  }

  pub fn effects_running(&self) -> bool {
    self.particles.is_running() && self.cube.is_running()
  }

  fn draw_particles(&mut self, f: &mut Frame<'_>, area: Rect) {
    if self.canvas_area != area {
      self.particles.resize(area.width, area.height);
      self.canvas_area = area;
    }
    let aspect = self.particles.aspect() * 1.2;
    let (near, far): (Vec<_>, Vec<_>) =
      self.particles.projected().into_iter().partition(|(_, _, scale)| *scale >= 0.66);
    let near: Vec<(f64, f64)> = near.into_iter().map(|(x, y, _)| (x, -y)).collect();
    let far: Vec<(f64, f64)> = far.into_iter().map(|(x, y, _)| (x, -y)).collect();
    let near_color = accent_style().fg.unwrap_or(Color::Cyan);
    let far_color = muted_style().fg.unwrap_or(Color::DarkGray);
    let canvas = Canvas::default()
      .marker(Marker::Braille)
      .x_bounds([-aspect, aspect])
      .y_bounds([-1.2, 1.2])
      .background_color(default_style(false).bg.unwrap_or(Color::Reset))
      .paint(move |ctx| {
        ctx.draw(&Points { coords: &far, color: far_color });
        ctx.draw(&Points { coords: &near, color: near_color });
      });
    f.render_widget(canvas, area);
  }

  fn draw_cube(&mut self, f: &mut Frame<'_>, area: Rect) {
    let aspect = if area.height > 0 { area.width as f64 / (area.height as f64 * 2.0) } else { 1.0 };
    let edges = self.cube.edges();
    let color = accent_style().fg.unwrap_or(Color::Cyan);
    let canvas = Canvas::default()
      .marker(Marker::Braille)
      .x_bounds([-aspect, aspect])
      .y_bounds([-1.0, 1.0])
      .paint(move |ctx| {
        for ((x1, y1), (x2, y2)) in &edges {
          ctx.draw(&CanvasLine { x1: *x1, y1: -*y1, x2: *x2, y2: -*y2, color });
        }
      });
    f.render_widget(canvas, area);
  }
}

impl Screen for Home {
  fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
    self.command_tx = Some(tx);
    Ok(())
  }

  fn register_config_handler(&mut self, config: Config) -> Result<()> {
    let command_tx = self.command_tx.take();
    *self = Self::with_site_config(&config.site);
    self.command_tx = command_tx;
    Ok(())
  }

  fn show(&mut self, now: DateTime<Utc>) {
    self.particles.start(now);
    self.cube.start(now);
    self.typewriter.start(now);
  }

  fn hide(&mut self) {
    self.particles.stop();
    self.cube.stop();
    self.typewriter.stop();
  }

  fn tick(&mut self, now: DateTime<Utc>) {
    if !self.effects_running() {
      return;
    }
    self.particles.advance(now);
    self.cube.advance(now);
    self.typewriter.advance(now);
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::Move(direction) => match direction {
        MoveDirection::Up => {
          self.selected_action = self.selected_action.saturating_sub(1);
        },
        MoveDirection::Down => {
          self.selected_action =
            self.selected_action.saturating_add(1).min(HomeAction::COUNT - 1);
        },
        _ => {},
      },
      Action::FocusNext => {
        self.selected_action = (self.selected_action + 1) % HomeAction::COUNT;
      },
      Action::FocusPrevious => {
        self.selected_action = (self.selected_action + HomeAction::COUNT - 1) % HomeAction::COUNT;
      },
      Action::Accept => {
        if let Some(command_tx) = &self.command_tx {
          let action = HomeAction::iter().nth(self.selected_action).map(|a| a.to_action());
          if let Some(action) = action {
            command_tx.send(action)?;
          }
        }
      },
      Action::Pointer(column, row) => {
        let pointer = normalized_pointer(column, row, self.canvas_area);
        self.particles.set_pointer(pointer);
        self.cube.point_at(pointer);
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let columns =
      Layout::horizontal(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut constraints =
      vec![Constraint::Percentage(10), Constraint::Length(2), Constraint::Length(3)];
    constraints.extend(HomeAction::iter().map(|_| Constraint::Length(4)));
    constraints.push(Constraint::Min(0));
    let layout = Layout::default().constraints(constraints).split(columns[0]);

    f.render_widget(
      Paragraph::new("Innovation Hub").alignment(Alignment::Center).style(accent_style()),
      layout[1],
    );
    f.render_widget(
      Paragraph::new(self.typewriter.visible())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(default_style(false)),
      layout[2],
    );

    for (index, action) in HomeAction::iter().enumerate() {
      let inner_area = Layout::default()
        .constraints(vec![Constraint::Min(0), Constraint::Length(1)])
        .split(layout[index + 3]);
      let inner_area = inner_area[0];
      let button_width = 20.min(inner_area.width);
      let padding = (inner_area.width - button_width) / 2;
      let inner_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
          Constraint::Length(padding),
          Constraint::Length(button_width),
          Constraint::Min(padding),
        ])
        .split(inner_area);
      let is_selected = index == self.selected_action;
      let button = Paragraph::new(action.to_string())
        .alignment(Alignment::Center)
        .block(stylized_button(is_selected));
      f.render_widget(button, inner_layout[1]);
    }

    let effects =
      Layout::vertical(vec![Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(columns[1]);
    self.draw_particles(f, effects[0]);
    self.draw_cube(f, effects[1]);
    Ok(())
  }
}
