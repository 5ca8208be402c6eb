use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use ratatui::{
  prelude::{Margin, Rect},
  style::Modifier,
  widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
  Frame,
};

use super::style::{muted_style, notification_style};
use crate::{site::notification::NotificationCenter, utils::formatting::time_ago};

const WIDTH: u16 = 44;

/// Stacks banners in the top right corner, newest on top.
pub fn draw_notifications(
  f: &mut Frame<'_>,
  area: Rect,
  center: &NotificationCenter,
  now: DateTime<Utc>,
) -> Result<()> {
  let width = WIDTH.min(area.width);
  let mut y = area.y;
  for notification in center.items().iter().rev() {
    let height = wrapped_rows(&notification.message, width.saturating_sub(2)) + 3;
    if y + height > area.y + area.height {
      break;
    }
    let banner = Rect::new(area.x + area.width - width, y, width, height);
    let mut style = notification_style(notification.kind);
    if notification.is_closing() {
      style = style.add_modifier(Modifier::DIM);
    }
    f.render_widget(Clear, banner);
    f.render_widget(
      Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style)
        .title(format!(" {} ", notification.kind.icon())),
      banner,
    );
    let inner = banner.inner(&Margin { horizontal: 1, vertical: 1 });
    f.render_widget(
      Paragraph::new(notification.message.clone()).style(style).wrap(Wrap { trim: true }),
      Rect { height: inner.height.saturating_sub(1), ..inner },
    );
    f.render_widget(
      Paragraph::new(time_ago(notification.shown_at, now)).style(muted_style()),
      Rect { y: inner.y + inner.height.saturating_sub(1), height: 1, ..inner },
    );
    y += height;
  }
  Ok(())
}

/// Rows taken by `text` once word-wrapped to `width` columns. Words longer
/// than a row are broken.
fn wrapped_rows(text: &str, width: u16) -> u16 {
  let width = usize::from(width.max(1));
  let rows: usize = text
    .lines()
    .map(|line| {
      let mut rows = 1;
      let mut used = 0;
      for word in line.split_whitespace() {
        let len = word.chars().count();
        if used > 0 && used + 1 + len <= width {
          used += 1 + len;
          continue;
        }
        if used > 0 {
          rows += 1;
        }
        rows += len.saturating_sub(1) / width;
        used = len - len.saturating_sub(1) / width * width;
      }
      rows
    })
    .sum();
  rows.max(1) as u16
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::site::notification::NotificationKind;
  use chrono::{Duration, TimeZone};
  use pretty_assertions::assert_eq;
  use ratatui::{backend::TestBackend, Terminal};

  #[test]
  fn rows_follow_word_wrapping() {
    assert_eq!(wrapped_rows("", 10), 1);
    assert_eq!(wrapped_rows("short", 10), 1);
    assert_eq!(wrapped_rows("aaaa bbbb cccc", 9), 2);
    assert_eq!(wrapped_rows("one\ntwo", 10), 2);
    assert_eq!(wrapped_rows(&"x".repeat(25), 10), 3);
  }

  #[test]
  fn long_messages_are_drawn_in_full() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let mut center = NotificationCenter::new(Duration::seconds(5));
    center.push(
      NotificationKind::Success,
      "Team registered successfully for Ride Hack 2025! Check your email for confirmation.",
      now,
    );
    center.push(
      NotificationKind::Success,
      "Message sent successfully! We'll get back to you soon.",
      now,
    );

    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| draw_notifications(f, f.size(), &center, now).unwrap()).unwrap();
    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("soon."));
    assert!(text.contains("confirmation."));
  }
}
