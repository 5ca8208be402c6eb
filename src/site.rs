pub mod focus;
pub mod gallery;
pub mod hackathon;
pub mod modal;
pub mod notification;
pub mod page;

use chrono::{DateTime, Duration, Utc};
use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use self::{
  focus::FocusRing,
  gallery::{default_images, Lightbox},
  modal::{ModalController, ModalId},
  notification::{NotificationCenter, NotificationKind},
  page::{NavigationError, Page, PageNavigator},
};
use crate::{
  action::{Action, MoveDirection},
  components::{
    form::{FormAccept, FormView},
    header::{InnohubHeader, NavTarget},
    modal::{button_row, modal_frame},
    notification::draw_notifications,
    style::{accent_style, apply_theme, contains, default_style, muted_style, ThemeName},
  },
  config::Config,
  database::Preference,
  effects::{countdown::Countdown, Animation},
  forms::{submission, FormKind, FormSubmission},
  gateway::{Acceptance, Receipt},
  mode::Mode,
  screens::{self, Screen},
};

const HEADER_HEIGHT: u16 = 3;
const MODAL_WIDTH: u16 = 64;

/// The whole site: pages, overlays, forms and banners. Every user action goes
/// through [`Site::update`]; remote work is requested by returning an action.
pub struct Site {
  config: Config,
  now: DateTime<Utc>,
  navigator: PageNavigator,
  modals: ModalController,
  screens: Vec<Box<dyn Screen>>,
  header: InnohubHeader,
  login: FormView,
  signup: FormView,
  registration: FormView,
  hackathon: Option<String>,
  team_id: Option<String>,
  remembered_email: Option<String>,
  lightbox: Lightbox,
  coming_soon: Countdown,
  notifications: NotificationCenter,
  modal_focus: FocusRing,
  modal_area: Option<Rect>,
  modal_buttons: Vec<Rect>,
  editing: bool,
  theme: ThemeName,
}

impl Site {
  pub fn new(config: Config, now: DateTime<Utc>) -> Result<Self> {
    let mut screens: Vec<Box<dyn Screen>> = Page::iter().map(screens::for_page).collect();
    for screen in screens.iter_mut() {
      screen.register_config_handler(config.clone())?;
    }
    let site_config = config.site.clone();
    let mut site = Self {
      now,
      navigator: PageNavigator::new(),
      modals: ModalController::default(),
      screens,
      header: InnohubHeader::new(site_config.mobile_breakpoint),
      login: FormView::new(FormKind::Login)
        .with_button("Sign in with Google", Action::GoogleSignIn)
        .with_button("Create an account", Action::SwitchModal(ModalId::Login, ModalId::Signup))
        .with_button("Close", Action::CloseModal(ModalId::Login)),
      signup: FormView::new(FormKind::Signup)
        .with_button("Already a member? Log in", Action::SwitchModal(ModalId::Signup, ModalId::Login))
        .with_button("Close", Action::CloseModal(ModalId::Signup)),
      registration: FormView::new(FormKind::HackathonRegistration)
        .with_button("Close", Action::CloseModal(ModalId::HackathonRegister)),
      hackathon: None,
      team_id: None,
      remembered_email: None,
      lightbox: Lightbox::new(default_images()),
      coming_soon: Countdown::coming_soon(now, site_config.coming_soon_days),
      notifications: NotificationCenter::new(Duration::milliseconds(
        site_config.notification_timeout_ms,
      )),
      modal_focus: FocusRing::default(),
      modal_area: None,
      modal_buttons: Vec::new(),
      editing: false,
      theme: ThemeName::default(),
      config,
    };
    site.screens[Page::Home.index()].show(now);
    if site_config.show_ride_hack_popup {
      site.open_modal(ModalId::RideHackPopup);
    }
    Ok(site)
  }

  pub fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
    for screen in self.screens.iter_mut() {
      screen.register_action_handler(tx.clone())?;
    }
    Ok(())
  }

  pub fn mode(&self) -> Mode {
    if self.current_modal().is_some() {
      Mode::Modal
    } else if self.editing {
      Mode::Form
    } else {
      Mode::Browse
    }
  }

  pub fn current_page(&self) -> Page {
    self.navigator.current()
  }

  pub fn theme(&self) -> ThemeName {
    self.theme
  }

  pub fn current_modal(&self) -> Option<ModalId> {
    self.modals.current()
  }

  #[cfg(test)]
  pub fn notifications(&self) -> &NotificationCenter {
    &self.notifications
  }

  /// Theme and remembered login restored from preferences.
  pub fn apply_preferences(&mut self, theme: ThemeName, remembered_email: Option<String>) {
    self.theme = theme;
    self.remembered_email = remembered_email;
  }

  /// Navigation by page identifier. Unknown identifiers leave the state
  /// untouched and raise an error banner.
  pub fn navigate_to_id(&mut self, id: &str) -> Result<Page, NavigationError> {
    match id.parse::<Page>() {
      Ok(page) => {
        self.navigate(page);
        Ok(page)
      },
      Err(_) => {
        let err = NavigationError::UnknownPage(id.to_string());
        warn!(id, "ignoring navigation to unknown page");
        self.notify(NotificationKind::Error, &err.to_string());
        Err(err)
      },
    }
  }

  pub fn tick(&mut self, now: DateTime<Utc>) {
    self.now = now;
    self.notifications.advance(now);
    self.screens[self.navigator.current().index()].tick(now);
    if self.modals.is_open(ModalId::ComingSoon) {
      self.coming_soon.advance(now);
    }
  }

  fn notify(&mut self, kind: NotificationKind, message: &str) {
    self.notifications.push(kind, message, self.now);
  }

  fn screen(&mut self) -> &mut Box<dyn Screen> {
    &mut self.screens[self.navigator.current().index()]
  }

  fn navigate(&mut self, page: Page) {
    self.leave_form();
    self.modals.close_all();
    let previous = self.navigator.navigate_to(page);
    if previous != page {
      self.screens[previous.index()].hide();
      self.screens[page.index()].show(self.now);
    }
    self.screen().set_scroll(0);
  }

  fn leave_form(&mut self) {
    self.editing = false;
    if let Some(form) = self.screen().form_mut() {
      form.set_active(false);
    }
  }

  fn open_modal(&mut self, id: ModalId) {
    self.modals.open(id);
    self.on_modal_opened(id);
  }

  fn on_modal_opened(&mut self, id: ModalId) {
    self.navigator.close_mobile_menu();
    match id {
      ModalId::Login => {
        self.login.set_active(true);
        if let Some(email) = self.remembered_email.clone() {
          if self.login.value("email").unwrap_or_default().is_empty() {
            self.login.set_value("email", &email);
            self.login.set_value("remember_me", "true");
          }
        }
      },
      ModalId::Signup => self.signup.set_active(true),
      ModalId::HackathonRegister => self.registration.set_active(true),
      ModalId::ComingSoon => self.coming_soon.start(self.now),
      _ => {},
    }
    self.modal_focus = FocusRing::new(modal_buttons(id).len());
  }

  fn modal_form_mut(&mut self) -> Option<&mut FormView> {
    match self.modals.current()? {
      ModalId::Login => Some(&mut self.login),
      ModalId::Signup => Some(&mut self.signup),
      ModalId::HackathonRegister => Some(&mut self.registration),
      _ => None,
    }
  }

  /// The form receiving keystrokes: the open modal's, or the page form being edited.
  fn active_form_mut(&mut self) -> Option<&mut FormView> {
    if self.modals.current().is_some() {
      return self.modal_form_mut();
    }
    if self.editing {
      return self.screen().form_mut();
    }
    None
  }

  fn form_for_kind_mut(&mut self, kind: FormKind) -> Option<&mut FormView> {
    match kind {
      FormKind::Login => Some(&mut self.login),
      FormKind::Signup => Some(&mut self.signup),
      FormKind::HackathonRegistration => Some(&mut self.registration),
      FormKind::Contact => self.screens[Page::Contact.index()].form_mut(),
      FormKind::Newsletter => self.screens[Page::Updates.index()].form_mut(),
    }
  }

  /// Typing goes to the active form first. A consumed key only needs a redraw.
  pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
    let form = self.active_form_mut()?;
    form.handle_key_event(key).then_some(Action::Render)
  }

  pub fn paste(&mut self, text: &str) {
    if let Some(form) = self.active_form_mut() {
      form.paste(text);
    }
  }

  pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::Navigate(page) => self.navigate(page),
      Action::OpenModal(id) => self.open_modal(id),
      Action::OpenHackathonRegister(id) => {
        if self.hackathon.as_deref() != Some(id.as_str()) {
          self.registration.reset();
        }
        self.hackathon = Some(id);
        self.open_modal(ModalId::HackathonRegister);
      },
      Action::OpenLightbox(index) => {
        if self.lightbox.open_at(index).is_some() {
          self.open_modal(ModalId::GalleryLightbox);
        }
      },
      Action::SwitchModal(from, to) if from.is_auth() && to.is_auth() => {
        self.modals.switch(from, to);
        self.on_modal_opened(to);
      },
      Action::SwitchModal(_, to) => self.open_modal(to),
      Action::CloseModal(id) => {
        self.modals.close(id);
      },
      Action::CloseAllModals => self.modals.close_all(),
      Action::EnterForm if self.mode() == Mode::Browse => {
        if let Some(form) = self.screen().form_mut() {
          form.set_active(true);
          self.editing = true;
        }
      },
      Action::Blur => self.leave_form(),
      Action::Scroll(delta) => {
        if self.navigator.scroll_by(delta, self.modals.scroll_locked()) {
          let scroll = self.navigator.scroll();
          self.screen().set_scroll(scroll);
        }
      },
      Action::ToggleMobileMenu => {
        self.navigator.toggle_mobile_menu();
      },
      Action::ToggleTheme => {
        let theme = self.theme.toggled();
        self.theme = theme;
        self.notify(NotificationKind::Success, &format!("Switched to {theme} theme!"));
        return Ok(Some(Action::SavePreference(Preference::Theme(theme))));
      },
      Action::GoogleSignIn => self.notify(
        NotificationKind::Info,
        "Google Sign-In integration would be implemented here with actual OAuth.",
      ),
      Action::SubmissionFinished(kind, result) => return Ok(self.finish_submission(kind, result)),
      Action::Notify(kind, message) => self.notify(kind, &message),
      Action::DismissNotification => self.notifications.close_latest(self.now),
      Action::Error(message) => self.notify(NotificationKind::Error, &message),
      Action::Click(column, row) => return self.click(column, row),
      Action::Pointer(..) => {
        if self.mode() != Mode::Modal {
          return self.screen().update(action);
        }
      },
      Action::Move(_) | Action::Accept | Action::FocusNext | Action::FocusPrevious => {
        return match self.mode() {
          Mode::Modal => self.modal_input(action),
          Mode::Form => self.form_input(action),
          Mode::Browse => self.screen().update(action),
        };
      },
      _ => {},
    }
    Ok(None)
  }

  fn modal_input(&mut self, action: Action) -> Result<Option<Action>> {
    let Some(id) = self.modals.current() else {
      return Ok(None);
    };
    if self.modal_form_mut().is_some() {
      return self.form_input(action);
    }
    match action {
      Action::Move(MoveDirection::Left) if id == ModalId::GalleryLightbox => {
        self.lightbox.prev();
      },
      Action::Move(MoveDirection::Right) if id == ModalId::GalleryLightbox => {
        self.lightbox.next();
      },
      Action::Move(MoveDirection::Left | MoveDirection::Up) | Action::FocusPrevious => {
        self.modal_focus.previous();
      },
      Action::Move(MoveDirection::Right | MoveDirection::Down) | Action::FocusNext => {
        self.modal_focus.next();
      },
      Action::Accept if !self.modal_focus.is_empty() => {
        return Ok(self.press_modal_button(id, self.modal_focus.index()));
      },
      _ => {},
    }
    Ok(None)
  }

  fn press_modal_button(&mut self, id: ModalId, index: usize) -> Option<Action> {
    let (_, action) = modal_buttons(id).into_iter().nth(index)?;
    match action {
      // Lightbox arrows stay inside the overlay.
      Action::Move(MoveDirection::Left) => {
        self.lightbox.prev();
        None
      },
      Action::Move(MoveDirection::Right) => {
        self.lightbox.next();
        None
      },
      action => Some(action),
    }
  }

  fn form_input(&mut self, action: Action) -> Result<Option<Action>> {
    let Some(form) = self.active_form_mut() else {
      return Ok(None);
    };
    let accepted = match action {
      Action::Move(MoveDirection::Up) | Action::FocusPrevious => {
        form.focus_previous();
        return Ok(None);
      },
      Action::Move(MoveDirection::Down) | Action::FocusNext => {
        form.focus_next();
        return Ok(None);
      },
      Action::Accept => form.accept(),
      _ => return Ok(None),
    };
    Ok(self.form_accepted(accepted))
  }

  fn form_accepted(&mut self, accepted: FormAccept) -> Option<Action> {
    match accepted {
      FormAccept::Submit(values) => self.submit(values),
      FormAccept::Action(action) => Some(action),
      FormAccept::Busy => {
        debug!("submission already in flight");
        None
      },
      FormAccept::Focused(_) => None,
    }
  }

  /// Validates the active form. Valid input is handed to the gateway through
  /// `Action::Submit`, violations end up in one error banner.
  fn submit(&mut self, values: FormSubmission) -> Option<Action> {
    let hackathon = self.hackathon.clone();
    let now = self.now;
    let form = self.active_form_mut()?;
    let kind = form.kind();
    let hackathon = (kind == FormKind::HackathonRegistration).then_some(hackathon).flatten();
    match submission::prepare(kind, &values, hackathon.as_deref(), now) {
      Ok(submission) => {
        form.set_loading(true);
        info!(%kind, "submitting");
        Some(Action::Submit(submission))
      },
      Err(violations) => {
        form.mark_errors(&violations.fields);
        warn!(%kind, count = violations.messages.len(), "form rejected");
        self.notify(NotificationKind::Error, &violations.to_string());
        None
      },
    }
  }

  fn finish_submission(&mut self, kind: FormKind, result: Result<Receipt, String>) -> Option<Action> {
    let is_page_form = kind.is_remote();
    if let Some(form) = self.form_for_kind_mut(kind) {
      form.set_loading(false);
    }
    let receipt = match result {
      Ok(receipt) => receipt,
      Err(message) => {
        self.notify(NotificationKind::Error, &message);
        return None;
      },
    };
    if let Some(form) = self.form_for_kind_mut(kind) {
      form.reset();
      if is_page_form {
        form.set_active(false);
      }
    }
    if is_page_form && self.navigator.current() == page_of(kind) {
      self.editing = false;
    }
    self.modals.close_all();
    self.notify(NotificationKind::Success, &receipt.message);
    match receipt.acceptance {
      Acceptance::Registered { team_id, .. } => {
        self.team_id = Some(team_id);
        self.open_modal(ModalId::Success);
        None
      },
      Acceptance::Authenticated { email, remember } => {
        let remembered = remember.then_some(email);
        self.remembered_email = remembered.clone();
        Some(Action::SavePreference(Preference::RememberedEmail(remembered)))
      },
      Acceptance::Stored | Acceptance::SignedUp => None,
    }
  }

  fn click(&mut self, column: u16, row: u16) -> Result<Option<Action>> {
    if let Some(id) = self.modals.current() {
      match self.modal_area {
        Some(area) if contains(area, column, row) => {
          if let Some(form) = self.modal_form_mut() {
            let accepted = form.click(column, row);
            return Ok(accepted.and_then(|accepted| self.form_accepted(accepted)));
          }
          let hit = self.modal_buttons.iter().position(|button| contains(*button, column, row));
          if let Some(index) = hit {
            self.modal_focus.focus(index);
            return Ok(self.press_modal_button(id, index));
          }
        },
        // Backdrop.
        _ => {
          self.modals.close_current();
        },
      }
      return Ok(None);
    }

    let menu_open = self.navigator.links().mobile_menu_open;
    if let Some(target) = self.header.target_at(column, row) {
      match target {
        NavTarget::Page(page) => self.navigate(page),
        NavTarget::MenuToggle => {
          self.navigator.toggle_mobile_menu();
        },
        NavTarget::ThemeToggle => return Ok(Some(Action::ToggleTheme)),
        NavTarget::Login => self.open_modal(ModalId::Login),
        NavTarget::Signup => self.open_modal(ModalId::Signup),
      }
      return Ok(None);
    }
    if menu_open && !self.header.menu_contains(column, row) {
      self.navigator.close_mobile_menu();
      return Ok(None);
    }
    if self.editing {
      let accepted = self.screen().form_mut().and_then(|form| form.click(column, row));
      if let Some(accepted) = accepted {
        return Ok(self.form_accepted(accepted));
      }
      self.leave_form();
    }
    self.screen().update(Action::Click(column, row))
  }

  pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let layout = Layout::vertical(vec![
      Constraint::Length(HEADER_HEIGHT),
      Constraint::Min(0),
      Constraint::Length(1),
    ])
    .split(area);

    let scrolled = self.navigator.scroll() > self.config.site.scrolled_threshold;
    self.header.draw(f, layout[0], self.navigator.links(), scrolled, self.theme)?;
    for page in self.navigator.visible_pages() {
      // Sections sit inside a margin, home fills the whole body.
      let body = if page.is_main_content() {
        layout[1]
      } else {
        layout[1].inner(&Margin { horizontal: 1, vertical: 0 })
      };
      self.screens[page.index()].draw(f, body)?;
    }
    f.render_widget(Paragraph::new(self.hint()).style(muted_style()), layout[2]);
    self.header.draw_menu(f, layout[1])?;

    self.modal_area = None;
    self.modal_buttons.clear();
    if let Some(id) = self.modals.current() {
      self.draw_modal(f, area, id)?;
    }
    draw_notifications(f, layout[1], &self.notifications, self.now)?;
    apply_theme(f.buffer_mut(), self.theme);
    Ok(())
  }

  fn hint(&self) -> &'static str {
    match self.mode() {
      Mode::Browse => " 1-7 pages · ↑↓ move · enter select · tab focus · t theme · l login · q quit",
      Mode::Form => " type to fill · tab/↑↓ next field · enter submit · esc leave form",
      Mode::Modal => " tab cycle · enter select · esc close",
    }
  }

  fn draw_modal(&mut self, f: &mut Frame<'_>, area: Rect, id: ModalId) -> Result<()> {
    let title = match id {
      ModalId::HackathonRegister => {
        hackathon::registration_title(self.hackathon.as_deref().unwrap_or_default())
      },
      _ => id.title().to_string(),
    };

    let form = match id {
      ModalId::Login => Some(&mut self.login),
      ModalId::Signup => Some(&mut self.signup),
      ModalId::HackathonRegister => Some(&mut self.registration),
      _ => None,
    };
    if let Some(form) = form {
      let height = (form.height() + 2).min(area.height.saturating_sub(2));
      let (outer, inner) = modal_frame(f, area, MODAL_WIDTH, height, &title);
      self.modal_area = Some(outer);
      return form.draw(f, inner);
    }

    let body = self.modal_body(id);
    let (outer, inner) = modal_frame(f, area, MODAL_WIDTH, body.len() as u16 + 6, &title);
    self.modal_area = Some(outer);
    let rows = Layout::vertical(vec![Constraint::Min(0), Constraint::Length(3)]).split(inner);
    f.render_widget(
      Paragraph::new(body).alignment(Alignment::Center).wrap(Wrap { trim: true }),
      rows[0],
    );
    let labels: Vec<&str> = modal_buttons(id).iter().map(|(label, _)| *label).collect();
    self.modal_buttons = button_row(f, rows[1], &labels, self.modal_focus.index())?;
    Ok(())
  }

  fn modal_body(&self, id: ModalId) -> Vec<Line<'static>> {
    match id {
      ModalId::Success => vec![
        Line::styled("Your team has been registered.", default_style(false)),
        Line::from(vec![
          Span::styled("Team ID: ", muted_style()),
          Span::styled(self.team_id.clone().unwrap_or_default(), accent_style()),
        ]),
        Line::styled("Keep it handy for check-in.", muted_style()),
      ],
      ModalId::ComingSoon => vec![
        Line::styled(self.coming_soon.label().to_string(), muted_style()),
        Line::styled(self.coming_soon.parts().to_string(), accent_style()),
        Line::styled("We're working on something new. Stay tuned!", default_style(false)),
      ],
      ModalId::SimpleComingSoon => {
        vec![Line::styled("This feature is coming soon. Stay tuned!", default_style(false))]
      },
      ModalId::RideHackPopup => vec![
        Line::styled("Ride Hack 2025 registrations are open!", accent_style()),
        Line::styled("Rethink how the campus moves, in teams of two to five.", default_style(false)),
      ],
      ModalId::GalleryLightbox => match self.lightbox.current() {
        Some(image) => vec![
          Line::styled("▚▞▚▞▚▞▚▞▚▞▚▞▚▞▚▞", default_style(false)),
          Line::styled(image.caption.clone(), accent_style()),
          Line::styled(
            format!("{} / {}", self.lightbox.index() + 1, self.lightbox.len()),
            muted_style(),
          ),
        ],
        None => Vec::new(),
      },
      ModalId::Login | ModalId::Signup | ModalId::HackathonRegister => Vec::new(),
    }
  }
}

/// Buttons of the overlays that carry no form, in focus order.
fn modal_buttons(id: ModalId) -> Vec<(&'static str, Action)> {
  match id {
    ModalId::Success => vec![("Continue", Action::CloseModal(ModalId::Success))],
    ModalId::ComingSoon => vec![("Got it", Action::CloseModal(ModalId::ComingSoon))],
    ModalId::SimpleComingSoon => vec![("Close", Action::CloseModal(ModalId::SimpleComingSoon))],
    ModalId::RideHackPopup => vec![
      ("View details", Action::Navigate(Page::RideHackDetail)),
      ("Maybe later", Action::CloseModal(ModalId::RideHackPopup)),
    ],
    ModalId::GalleryLightbox => vec![
      ("‹ Prev", Action::Move(MoveDirection::Left)),
      ("Next ›", Action::Move(MoveDirection::Right)),
      ("Close", Action::CloseModal(ModalId::GalleryLightbox)),
    ],
    ModalId::Login | ModalId::Signup | ModalId::HackathonRegister => Vec::new(),
  }
}

fn page_of(kind: FormKind) -> Page {
  match kind {
    FormKind::Newsletter => Page::Updates,
    _ => Page::Contact,
  }
}
