pub mod checkbox;
pub mod input;
pub mod select;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
  prelude::{Alignment, Constraint, Layout, Rect},
  widgets::Paragraph,
  Frame,
};

use self::{
  checkbox::Checkbox,
  input::{Input, InputKind},
  select::Select,
};
use super::style::{contains, stylized_button};
use crate::{
  action::Action,
  forms::{FieldKind, FieldSpec, FormKind, FormSubmission},
  site::focus::FocusRing,
};

const BUTTON_HEIGHT: u16 = 3;

enum Field {
  Input(Input),
  Select(Select),
  Checkbox(Checkbox),
}

impl Field {
  fn from_spec(spec: &FieldSpec) -> Self {
    match spec.kind {
      FieldKind::Text | FieldKind::Email | FieldKind::Phone => {
        Field::Input(Input::new(spec.label, InputKind::Text))
      },
      FieldKind::Secret => Field::Input(Input::new(spec.label, InputKind::Secret)),
      FieldKind::Multiline => Field::Input(Input::new(spec.label, InputKind::Multiline)),
      FieldKind::Checkbox => Field::Checkbox(Checkbox::new(spec.label)),
      FieldKind::Choice(options) => Field::Select(Select::new(options, spec.label)),
    }
  }

  fn height(&self) -> u16 {
    match self {
      Field::Input(input) => input.height(),
      Field::Select(select) => select.height(),
      Field::Checkbox(checkbox) => checkbox.height(),
    }
  }

  fn set_active(&mut self, val: bool) {
    match self {
      Field::Input(input) => input.set_active(val),
      Field::Select(select) => select.set_active(val),
      Field::Checkbox(checkbox) => checkbox.set_active(val),
    }
  }

  fn value(&self) -> String {
    match self {
      Field::Input(input) => input.value().to_string(),
      Field::Select(select) => select.value().unwrap_or_default().to_string(),
      Field::Checkbox(checkbox) => checkbox.is_checked().to_string(),
    }
  }

  fn set_value(&mut self, value: &str) {
    match self {
      Field::Input(input) => input.set_value(value),
      Field::Select(select) => select.set_value(value),
      Field::Checkbox(checkbox) => checkbox.set_checked(value == "true"),
    }
  }

  fn set_error(&mut self, val: bool) {
    match self {
      Field::Input(input) => input.set_error(val),
      Field::Select(select) => select.set_error(val),
      Field::Checkbox(checkbox) => checkbox.set_error(val),
    }
  }

  #[cfg(test)]
  fn has_error(&self) -> bool {
    match self {
      Field::Input(input) => input.has_error(),
      Field::Select(select) => select.has_error(),
      Field::Checkbox(checkbox) => checkbox.has_error(),
    }
  }

  fn clear(&mut self) {
    match self {
      Field::Input(input) => input.clear(),
      Field::Select(select) => select.clear(),
      Field::Checkbox(checkbox) => {
        checkbox.set_checked(false);
        checkbox.set_error(false);
      },
    }
  }

  /// Editing a field clears its error mark.
  fn handle_key_event(&mut self, key: KeyEvent) -> bool {
    let used = match self {
      Field::Input(input) => input.handle_key_event(key),
      Field::Select(select) => select.handle_key_event(key),
      Field::Checkbox(checkbox) => checkbox.handle_key_event(key),
    };
    if used {
      self.set_error(false);
    }
    used
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    match self {
      Field::Input(input) => input.draw(f, area),
      Field::Select(select) => select.draw(f, area),
      Field::Checkbox(checkbox) => checkbox.draw(f, area),
    }
  }
}

/// Extra button rendered after the submit button, firing `action` when accepted.
#[derive(Debug, Clone)]
pub struct FormButton {
  pub label: String,
  pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Field(usize),
  Submit,
  Button(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAccept {
  Focused(Focus),
  Submit(FormSubmission),
  Action(Action),
  /// Submit pressed while a submission is already in flight.
  Busy,
}

/// Fields, a submit button and optional extra buttons under one focus ring.
pub struct FormView {
  kind: FormKind,
  specs: &'static [FieldSpec],
  fields: Vec<Field>,
  buttons: Vec<FormButton>,
  focus: FocusRing,
  loading: bool,
  is_active: bool,
  /// Drawn rows and buttons with their focus index, for mouse clicks.
  hits: Vec<(Rect, usize)>,
}

impl FormView {
  pub fn new(kind: FormKind) -> Self {
    let specs = kind.fields();
    let fields: Vec<Field> = specs.iter().map(Field::from_spec).collect();
    let focus = FocusRing::new(fields.len() + 1);
    Self {
      kind,
      specs,
      fields,
      buttons: Vec::new(),
      focus,
      loading: false,
      is_active: false,
      hits: Vec::new(),
    }
  }

  pub fn with_button(mut self, label: &str, action: Action) -> Self {
    self.buttons.push(FormButton { label: label.to_string(), action });
    self.focus = FocusRing::new(self.fields.len() + 1 + self.buttons.len());
    self
  }

  pub fn kind(&self) -> FormKind {
    self.kind
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn set_loading(&mut self, loading: bool) {
    self.loading = loading;
  }

  pub fn is_active(&self) -> bool {
    self.is_active
  }

  /// Activation shows the focus highlight, starting from the first field.
  pub fn set_active(&mut self, active: bool) {
    self.is_active = active;
    if active {
      self.focus.reset();
    }
    self.sync_focus();
  }

  pub fn focused(&self) -> Focus {
    let index = self.focus.index();
    if index < self.fields.len() {
      Focus::Field(index)
    } else if index == self.fields.len() {
      Focus::Submit
    } else {
      Focus::Button(index - self.fields.len() - 1)
    }
  }

  pub fn focus_next(&mut self) -> Focus {
    self.focus.next();
    self.sync_focus();
    self.focused()
  }

  pub fn focus_previous(&mut self) -> Focus {
    self.focus.previous();
    self.sync_focus();
    self.focused()
  }

  fn sync_focus(&mut self) {
    let focused = self.focused();
    let active = self.is_active;
    for (index, field) in self.fields.iter_mut().enumerate() {
      field.set_active(active && focused == Focus::Field(index));
    }
  }

  pub fn values(&self) -> FormSubmission {
    self
      .specs
      .iter()
      .zip(self.fields.iter())
      .map(|(spec, field)| (spec.name.to_string(), field.value()))
      .collect()
  }

  pub fn value(&self, name: &str) -> Option<String> {
    self.position(name).map(|index| self.fields[index].value())
  }

  pub fn set_value(&mut self, name: &str, value: &str) {
    if let Some(index) = self.position(name) {
      self.fields[index].set_value(value);
    }
  }

  /// Marks the named fields as invalid and clears the mark on the rest.
  pub fn mark_errors(&mut self, names: &[&str]) {
    for (spec, field) in self.specs.iter().zip(self.fields.iter_mut()) {
      field.set_error(names.contains(&spec.name));
    }
  }

  #[cfg(test)]
  pub fn has_error(&self, name: &str) -> bool {
    self.position(name).is_some_and(|index| self.fields[index].has_error())
  }

  fn position(&self, name: &str) -> Option<usize> {
    self.specs.iter().position(|spec| spec.name == name)
  }

  /// Clears every field and puts focus back on the first one.
  pub fn reset(&mut self) {
    self.fields.iter_mut().for_each(Field::clear);
    self.loading = false;
    self.focus.reset();
    self.sync_focus();
  }

  /// Routes typing to the focused field. Returns whether the key was used.
  pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
    match self.focused() {
      Focus::Field(index) => self.fields[index].handle_key_event(key),
      _ => false,
    }
  }

  pub fn paste(&mut self, text: &str) {
    if let Focus::Field(index) = self.focused() {
      if let Field::Input(input) = &mut self.fields[index] {
        input.paste(text);
      }
    }
  }

  /// Enter: fields advance focus (checkboxes toggle first), buttons fire.
  pub fn accept(&mut self) -> FormAccept {
    match self.focused() {
      Focus::Field(index) => {
        if let Field::Checkbox(checkbox) = &mut self.fields[index] {
          checkbox.toggle();
          checkbox.set_error(false);
          return FormAccept::Focused(Focus::Field(index));
        }
        FormAccept::Focused(self.focus_next())
      },
      Focus::Submit if self.loading => FormAccept::Busy,
      Focus::Submit => FormAccept::Submit(self.values()),
      Focus::Button(index) => FormAccept::Action(self.buttons[index].action.clone()),
    }
  }

  /// Focuses whatever was drawn under the pointer. Buttons fire and
  /// checkboxes toggle as if Enter was pressed on them.
  pub fn click(&mut self, column: u16, row: u16) -> Option<FormAccept> {
    let index =
      self.hits.iter().find(|(area, _)| contains(*area, column, row)).map(|(_, index)| *index)?;
    self.focus.focus(index);
    self.sync_focus();
    match self.focused() {
      Focus::Field(index) if !matches!(self.fields[index], Field::Checkbox(_)) => {
        Some(FormAccept::Focused(Focus::Field(index)))
      },
      _ => Some(self.accept()),
    }
  }

  pub fn submit_label(&self) -> &'static str {
    if self.loading {
      "Loading..."
    } else {
      self.kind.submit_label()
    }
  }

  pub fn height(&self) -> u16 {
    let fields: u16 = self.fields.iter().map(Field::height).sum();
    fields + BUTTON_HEIGHT * (1 + self.buttons.len() as u16)
  }

  pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let focused = self.focused();
    let mut heights: Vec<u16> = self.fields.iter().map(Field::height).collect();
    heights.extend(std::iter::repeat(BUTTON_HEIGHT).take(1 + self.buttons.len()));

    // Skip leading rows until the focused element fits.
    let target = self.focus.index();
    let mut first = 0;
    while first < target && heights[first..=target].iter().sum::<u16>() > area.height {
      first += 1;
    }

    let mut constraints: Vec<Constraint> =
      heights[first..].iter().map(|height| Constraint::Length(*height)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    self.hits.clear();
    for (row, index) in (first..heights.len()).enumerate() {
      let row_area = rows[row];
      if row_area.height == 0 {
        break;
      }
      if index < self.fields.len() {
        self.fields[index].draw(f, row_area)?;
        self.hits.push((row_area, index));
        continue;
      }
      let button = index - self.fields.len();
      let (label, selected) = if button == 0 {
        (self.submit_label().to_string(), self.is_active && focused == Focus::Submit)
      } else {
        let label = self.buttons[button - 1].label.clone();
        (label, self.is_active && focused == Focus::Button(button - 1))
      };
      let width = (label.chars().count() as u16 + 6).min(row_area.width);
      let button_area = Rect { width, ..row_area };
      f.render_widget(
        Paragraph::new(label).alignment(Alignment::Center).block(stylized_button(selected)),
        button_area,
      );
      self.hits.push((button_area, index));
    }
    Ok(())
  }
}
