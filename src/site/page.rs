use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(
  Debug,
  Default,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  EnumCount,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
  #[default]
  Home,
  About,
  Events,
  Gallery,
  Updates,
  Team,
  Contact,
  RideHackDetail,
}

impl Page {
  pub fn title(&self) -> &'static str {
    match self {
      Page::Home => "Home",
      Page::About => "About",
      Page::Events => "Events",
      Page::Gallery => "Gallery",
      Page::Updates => "Updates",
      Page::Team => "Team",
      Page::Contact => "Contact",
      Page::RideHackDetail => "Ride Hack",
    }
  }

  /// Home is the main content of the site, every other page is a section drawn
  /// inside a frame.
  pub fn is_main_content(&self) -> bool {
    matches!(self, Page::Home)
  }

  /// Pages that have a link in the navigation bar.
  pub fn in_nav(&self) -> bool {
    !matches!(self, Page::RideHackDetail)
  }

  pub fn nav_pages() -> impl Iterator<Item = Page> {
    Page::iter().filter(Page::in_nav)
  }

  pub fn index(&self) -> usize {
    *self as usize
  }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
  #[error("Unknown page `{0}`")]
  UnknownPage(String),
}

/// Active link state of both navigation bar variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinks {
  pub desktop: Option<Page>,
  pub mobile: Option<Page>,
  pub mobile_menu_open: bool,
}

impl NavLinks {
  fn highlight(&mut self, page: Page) {
    let active = page.in_nav().then_some(page);
    self.desktop = active;
    self.mobile = active;
  }
}

#[derive(Debug)]
pub struct PageNavigator {
  current: Page,
  scroll: u16,
  links: NavLinks,
}

impl Default for PageNavigator {
  fn default() -> Self {
    Self::new()
  }
}

impl PageNavigator {
  pub fn new() -> Self {
    Self {
      current: Page::Home,
      scroll: 0,
      links: NavLinks {
        desktop: Some(Page::Home),
        mobile: Some(Page::Home),
        mobile_menu_open: false,
      },
    }
  }

  pub fn current(&self) -> Page {
    self.current
  }

  pub fn is_visible(&self, page: Page) -> bool {
    self.current == page
  }

  pub fn visible_pages(&self) -> Vec<Page> {
    Page::iter().filter(|page| self.is_visible(*page)).collect()
  }

  pub fn links(&self) -> &NavLinks {
    &self.links
  }

  pub fn scroll(&self) -> u16 {
    self.scroll
  }

  /// Shows `page` and hides the rest. Returns the page that was visible before.
  pub fn navigate_to(&mut self, page: Page) -> Page {
    let previous = self.current;
    self.current = page;
    self.scroll = 0;
    self.links.highlight(page);
    self.links.mobile_menu_open = false;
    debug!(from = %previous, to = %page, "navigated");
    previous
  }

  /// Navigation by page identifier. Unknown identifiers leave the state untouched.
  pub fn navigate_to_id(&mut self, id: &str) -> Result<Page, NavigationError> {
    match Page::from_str(id) {
      Ok(page) => {
        self.navigate_to(page);
        Ok(page)
      },
      Err(_) => {
        warn!(id, "ignoring navigation to unknown page");
        Err(NavigationError::UnknownPage(id.to_string()))
      },
    }
  }

  /// Moves the page scroll position. Refused while a blocking modal holds the
  /// scroll lock.
  pub fn scroll_by(&mut self, delta: i16, locked: bool) -> bool {
    if locked {
      return false;
    }
    self.scroll = self.scroll.saturating_add_signed(delta);
    true
  }

  pub fn toggle_mobile_menu(&mut self) -> bool {
    self.links.mobile_menu_open = !self.links.mobile_menu_open;
    self.links.mobile_menu_open
  }

  pub fn close_mobile_menu(&mut self) {
    self.links.mobile_menu_open = false;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn starts_on_home() {
    let navigator = PageNavigator::new();
    assert_eq!(navigator.current(), Page::Home);
    assert_eq!(navigator.visible_pages(), vec![Page::Home]);
    assert_eq!(navigator.links().desktop, Some(Page::Home));
  }

  #[test]
  fn exactly_one_page_visible_after_consecutive_navigation() {
    let mut navigator = PageNavigator::new();
    for (first, second) in Page::iter().zip(Page::iter().rev()) {
      navigator.navigate_to(first);
      navigator.navigate_to(second);
      assert_eq!(navigator.visible_pages(), vec![second]);
    }
  }

  #[test]
  fn navigation_resets_scroll_and_syncs_links() {
    let mut navigator = PageNavigator::new();
    navigator.scroll_by(12, false);
    navigator.toggle_mobile_menu();
    let previous = navigator.navigate_to(Page::Gallery);
    assert_eq!(previous, Page::Home);
    assert_eq!(navigator.scroll(), 0);
    assert_eq!(
      navigator.links(),
      &NavLinks {
        desktop: Some(Page::Gallery),
        mobile: Some(Page::Gallery),
        mobile_menu_open: false
      }
    );
  }

  #[test]
  fn detail_page_has_no_active_link() {
    let mut navigator = PageNavigator::new();
    navigator.navigate_to(Page::RideHackDetail);
    assert_eq!(navigator.links().desktop, None);
    assert_eq!(navigator.links().mobile, None);
  }

  #[test]
  fn navigates_by_identifier() {
    let mut navigator = PageNavigator::new();
    assert_eq!(navigator.navigate_to_id("ride-hack-detail"), Ok(Page::RideHackDetail));
    assert_eq!(navigator.current(), Page::RideHackDetail);
  }

  #[test]
  fn unknown_identifier_is_a_typed_no_op() {
    let mut navigator = PageNavigator::new();
    navigator.navigate_to(Page::Team);
    navigator.scroll_by(3, false);
    assert_eq!(
      navigator.navigate_to_id("sponsors"),
      Err(NavigationError::UnknownPage("sponsors".to_string()))
    );
    assert_eq!(navigator.current(), Page::Team);
    assert_eq!(navigator.scroll(), 3);
  }

  #[test]
  fn scroll_is_refused_while_locked() {
    let mut navigator = PageNavigator::new();
    assert!(!navigator.scroll_by(5, true));
    assert_eq!(navigator.scroll(), 0);
    assert!(navigator.scroll_by(5, false));
    assert!(navigator.scroll_by(-9, false));
    assert_eq!(navigator.scroll(), 0);
  }
}
