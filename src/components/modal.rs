use color_eyre::eyre::Result;
use ratatui::{
  prelude::{Alignment, Margin, Rect},
  widgets::{Clear, Paragraph},
  Frame,
};

use super::style::{centered_rect, stylized_block, stylized_button};

/// Clears a centred box and frames it with `title`. Returns the outer box
/// (for backdrop hit testing) and the content area.
pub fn modal_frame(
  f: &mut Frame<'_>,
  area: Rect,
  width: u16,
  height: u16,
  title: &str,
) -> (Rect, Rect) {
  let outer = centered_rect(width, height, area);
  f.render_widget(Clear, outer);
  f.render_widget(stylized_block(true).title(format!(" {title} ")), outer);
  (outer, outer.inner(&Margin { horizontal: 2, vertical: 1 }))
}

/// Row of buttons, the focused one highlighted. Returns where each button landed.
pub fn button_row(
  f: &mut Frame<'_>,
  area: Rect,
  labels: &[&str],
  focused: usize,
) -> Result<Vec<Rect>> {
  let mut hits = Vec::with_capacity(labels.len());
  let mut x = area.x;
  for (index, label) in labels.iter().enumerate() {
    let width = (label.chars().count() as u16 + 6).min(area.x + area.width - x);
    if width == 0 {
      break;
    }
    let button = Rect { x, width, height: area.height.min(3), ..area };
    f.render_widget(
      Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .block(stylized_button(index == focused)),
      button,
    );
    hits.push(button);
    x += width + 1;
    if x >= area.x + area.width {
      break;
    }
  }
  Ok(hits)
}
