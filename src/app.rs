use std::sync::Arc;

use chrono::Utc;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info, warn};

use crate::{
  action::{Action, MoveDirection},
  cli::Cli,
  components::style::ThemeName,
  config::Config,
  database::{Preference, Preferences},
  forms::Submission,
  gateway::{supabase::SupabaseStore, SubmissionGateway},
  site::Site,
  tui::{self, Tui},
  utils::{get_data_dir, PREFERENCES_FILE},
};

pub struct App {
  pub config: Config,
  pub tick_rate: f64,
  pub frame_rate: f64,
  pub should_quit: bool,
  pub should_suspend: bool,
  site: Site,
  gateway: SubmissionGateway,
  preferences: Option<Preferences>,
  last_tick_key_events: Vec<KeyEvent>,
  action_tx: UnboundedSender<Action>,
  action_rx: UnboundedReceiver<Action>,
}

impl App {
  pub async fn new(cli: &Cli) -> Result<Self> {
    let config = Config::new()?;
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let mut site = Site::new(config.clone(), Utc::now())?;
    site.register_action_handler(action_tx.clone())?;

    let preferences = open_preferences().await;
    if let Some(preferences) = &preferences {
      let theme = preferences.theme().await.unwrap_or_else(|err| {
        warn!("Falling back to the default theme: {err}");
        ThemeName::default()
      });
      let remembered_email = preferences.remembered_email().await.unwrap_or_else(|err| {
        warn!("Could not read the remembered email: {err}");
        None
      });
      site.apply_preferences(theme, remembered_email);
    }

    let gateway = if cli.offline {
      SubmissionGateway::offline()
    } else {
      match SupabaseStore::from_env_file() {
        Ok(store) => SubmissionGateway::new(Arc::new(store)),
        Err(err) => {
          warn!("Backend not configured, contact and newsletter forms are offline: {err}");
          SubmissionGateway::offline()
        },
      }
    };
    info!(online = gateway.is_online(), "submission gateway ready");

    if let Some(page) = &cli.page {
      // Unknown ids surface as an error banner, home stays visible.
      let _ = site.navigate_to_id(page);
    }
    info!(page = %site.current_page(), "site ready");

    Ok(Self {
      config,
      tick_rate: cli.tick_rate,
      frame_rate: cli.frame_rate,
      should_quit: false,
      should_suspend: false,
      site,
      gateway,
      preferences,
      last_tick_key_events: Vec::new(),
      action_tx,
      action_rx,
    })
  }

  fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
    let action_tx = self.action_tx.clone();
    if let Some(action) = self.site.handle_key_event(key) {
      action_tx.send(action)?;
      return Ok(());
    }
    if let Some(keymap) = self.config.keybindings.get(&self.site.mode()) {
      if let Some(action) = keymap.get(&vec![key]) {
        log::info!("Got action: {action:?}");
        action_tx.send(action.clone())?;
        return Ok(());
      }
      self.last_tick_key_events.push(key);
      if let Some(action) = keymap.get(&self.last_tick_key_events) {
        log::info!("Got action: {action:?}");
        action_tx.send(action.clone())?;
        return Ok(());
      }
    }
    match key.code {
      KeyCode::Up => action_tx.send(Action::Move(MoveDirection::Up))?,
      KeyCode::Down => action_tx.send(Action::Move(MoveDirection::Down))?,
      KeyCode::Left => action_tx.send(Action::Move(MoveDirection::Left))?,
      KeyCode::Right => action_tx.send(Action::Move(MoveDirection::Right))?,
      KeyCode::Enter => action_tx.send(Action::Accept)?,
      _ => {},
    }
    Ok(())
  }

  fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
    let action = match mouse.kind {
      MouseEventKind::Moved => Action::Pointer(mouse.column, mouse.row),
      MouseEventKind::Down(MouseButton::Left) => Action::Click(mouse.column, mouse.row),
      MouseEventKind::ScrollDown => Action::Scroll(1),
      MouseEventKind::ScrollUp => Action::Scroll(-1),
      _ => return Ok(()),
    };
    self.action_tx.send(action)?;
    Ok(())
  }

  /// Runs the submission on the runtime and reports back with its outcome.
  fn spawn_submission(&self, submission: Submission) {
    let gateway = self.gateway.clone();
    let action_tx = self.action_tx.clone();
    tokio::spawn(async move {
      let kind = submission.kind();
      let result = gateway.submit(submission).await.map_err(|err| {
        error!(%kind, "submission failed: {err}");
        err.user_message()
      });
      let _ = action_tx.send(Action::SubmissionFinished(kind, result));
    });
  }

  fn spawn_preference_write(&self, preference: Preference) {
    let Some(preferences) = self.preferences.clone() else {
      return;
    };
    tokio::spawn(async move {
      if let Err(err) = preferences.apply(&preference).await {
        error!(?preference, "could not store preference: {err}");
      }
    });
  }

  fn draw(&mut self, tui: &mut Tui) -> Result<()> {
    let action_tx = self.action_tx.clone();
    tui.draw(|f| {
      if let Err(e) = self.site.draw(f, f.size()) {
        let _ = action_tx.send(Action::Error(format!("Failed to draw: {e:?}")));
      }
    })?;
    Ok(())
  }

  pub async fn run(&mut self) -> Result<()> {
    let mut tui = tui::Tui::new()?
      .tick_rate(self.tick_rate)
      .frame_rate(self.frame_rate)
      .mouse(true)
      .paste(true);
    tui.enter()?;

    loop {
      if let Some(e) = tui.next().await {
        match e {
          tui::Event::Tick => self.action_tx.send(Action::Tick)?,
          tui::Event::Render => self.action_tx.send(Action::Render)?,
          tui::Event::Resize(x, y) => self.action_tx.send(Action::Resize(x, y))?,
          tui::Event::Key(key) => self.handle_key_event(key)?,
          tui::Event::Mouse(mouse) => self.handle_mouse_event(mouse)?,
          tui::Event::Paste(text) => {
            self.site.paste(&text);
            self.action_tx.send(Action::Render)?;
          },
          _ => {},
        }
      }

      while let Ok(action) = self.action_rx.try_recv() {
        if !matches!(action, Action::Tick | Action::Render | Action::Pointer(..)) {
          log::debug!("{action:?}");
        }
        match &action {
          Action::Tick => {
            self.last_tick_key_events.clear();
            self.site.tick(Utc::now());
          },
          Action::Quit => self.should_quit = true,
          Action::Suspend => self.should_suspend = true,
          Action::Resume => self.should_suspend = false,
          Action::Resize(w, h) => {
            tui.resize(Rect::new(0, 0, *w, *h))?;
            self.draw(&mut tui)?;
          },
          Action::Render => self.draw(&mut tui)?,
          Action::Error(message) => error!("{message}"),
          Action::Submit(submission) => self.spawn_submission(submission.clone()),
          Action::SavePreference(preference) => self.spawn_preference_write(preference.clone()),
          _ => {},
        }
        if let Some(action) = self.site.update(action)? {
          self.action_tx.send(action)?
        };
      }
      if self.should_suspend {
        tui.suspend()?;
        self.action_tx.send(Action::Resume)?;
        tui = tui::Tui::new()?
          .tick_rate(self.tick_rate)
          .frame_rate(self.frame_rate)
          .mouse(true)
          .paste(true);
        tui.resume()?;
      } else if self.should_quit {
        tui.stop()?;
        break;
      }
    }
    tui.exit()?;
    Ok(())
  }
}

async fn open_preferences() -> Option<Preferences> {
  let path = get_data_dir().join(PREFERENCES_FILE.as_str());
  match Preferences::open(&path).await {
    Ok(preferences) => Some(preferences),
    Err(err) => {
      warn!("Preferences unavailable, nothing will be remembered: {err}");
      None
    },
  }
}
