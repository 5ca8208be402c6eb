use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  #[arg(short, long, value_name = "FLOAT", help = "Tick rate, i.e. number of ticks per second", default_value_t = 4.0)]
  pub tick_rate: f64,

  #[arg(
    short,
    long,
    value_name = "FLOAT",
    help = "Frame rate, i.e. number of frames per second",
    default_value_t = 30.0
  )]
  pub frame_rate: f64,

  #[arg(long, help = "Keep submissions local, never contact the backend")]
  pub offline: bool,

  #[arg(short, long, value_name = "PAGE", help = "Page to open first, e.g. events or ride-hack-detail")]
  pub page: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn parses_page_and_offline() {
    let cli = Cli::parse_from(["innohub", "--offline", "--page", "gallery", "-t", "8"]);
    assert!(cli.offline);
    assert_eq!(cli.page.as_deref(), Some("gallery"));
    assert_eq!(cli.tick_rate, 8.0);
    assert_eq!(cli.frame_rate, 30.0);
  }
}
