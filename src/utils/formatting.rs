use chrono::{DateTime, Local, Utc};

const DATETIME_FORMAT_SHAPE: &str = "%e. %b %Y %H:%M";

pub fn dt_to_readable(dt: DateTime<Utc>) -> String {
  dt.with_timezone(&Local).format(DATETIME_FORMAT_SHAPE).to_string().trim().to_string()
}

pub fn time_ago(input_time: DateTime<Utc>, now: DateTime<Utc>) -> String {
  let duration = now.signed_duration_since(input_time);
  if duration.num_seconds() < 60 {
    "Just now".to_string()
  } else if duration.num_minutes() < 60 {
    format!("{}m ago", duration.num_minutes())
  } else if duration.num_hours() < 24 {
    format!("{}h ago", duration.num_hours())
  } else if duration.num_days() == 1 {
    "1 day ago".to_string()
  } else if duration.num_weeks() == 1 {
    "1 week ago".to_string()
  } else {
    format!("{} days ago", duration.num_days())
  }
}

/// Cuts `text` to at most `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
  if text.chars().count() <= width {
    return text.to_string();
  }
  let kept: String = text.chars().take(width.saturating_sub(1)).collect();
  format!("{kept}…")
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};
  use pretty_assertions::assert_eq;

  #[test]
  fn time_ago_buckets() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    assert_eq!(time_ago(now - Duration::seconds(10), now), "Just now");
    assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
    assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
    assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
  }

  #[test]
  fn truncates_with_ellipsis() {
    assert_eq!(truncate("Innovation", 20), "Innovation");
    assert_eq!(truncate("Innovation", 5), "Inno…");
  }
}
