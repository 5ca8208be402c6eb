use super::Screen;
use crate::{
  action::Action,
  components::{
    form::FormView,
    style::{accent_style, contains, muted_style, stylized_block},
  },
  forms::FormKind,
};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

const DETAILS: [(&str, &str); 3] = [
  ("Visit", "Innovation Hub, Engineering Block B, ground floor"),
  ("Write", "hello@innovationhub.edu"),
  ("Hours", "Mon-Fri 10:00-18:00"),
];

pub struct Contact {
  form: FormView,
  form_area: Rect,
}

impl Default for Contact {
  fn default() -> Self {
    Self { form: FormView::new(FormKind::Contact), form_area: Rect::default() }
  }
}

impl Screen for Contact {
  fn form(&self) -> Option<&FormView> {
    Some(&self.form)
  }

  fn form_mut(&mut self) -> Option<&mut FormView> {
    Some(&mut self.form)
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::Accept | Action::FocusNext => Ok(Some(Action::EnterForm)),
      Action::Click(column, row) if contains(self.form_area, column, row) => {
        Ok(Some(Action::EnterForm))
      },
      _ => Ok(None),
    }
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let columns =
      Layout::horizontal(vec![Constraint::Percentage(35), Constraint::Percentage(65)]).split(area);

    let block = stylized_block(false).title(" Get in touch ");
    let inner = block.inner(columns[0]).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, columns[0]);
    let mut lines = Vec::new();
    for (label, value) in DETAILS {
      lines.push(Line::styled(label, accent_style()));
      lines.push(Line::raw(value));
      lines.push(Line::default());
    }
    if self.form.is_loading() {
      lines.push(Line::styled("Sending…", accent_style()));
    } else if !self.form.is_active() {
      lines.push(Line::styled("Press Enter to write to us.", muted_style()));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

    let block = stylized_block(self.form.is_active()).title(" Send a message ");
    let inner = block.inner(columns[1]).inner(&Margin { horizontal: 1, vertical: 0 });
    f.render_widget(block, columns[1]);
    self.form_area = columns[1];
    self.form.draw(f, inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn enter_starts_editing_the_message() {
    let mut contact = Contact::default();
    assert_eq!(contact.update(Action::Accept).unwrap(), Some(Action::EnterForm));
    assert_eq!(contact.form().map(FormView::kind), Some(FormKind::Contact));
  }
}
