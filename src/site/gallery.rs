use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
  pub src: String,
  pub caption: String,
}

impl GalleryImage {
  pub fn new(src: &str, caption: &str) -> Self {
    Self { src: src.to_string(), caption: caption.to_string() }
  }
}

pub fn default_images() -> Vec<GalleryImage> {
  vec![
    GalleryImage::new("images/gallery/techfest-opening.jpg", "TechFest 2024 opening night"),
    GalleryImage::new("images/gallery/hack-floor.jpg", "36 hours on the hack floor"),
    GalleryImage::new("images/gallery/startup-pitch.jpg", "StartupWeekend pitch finals"),
    GalleryImage::new("images/gallery/greentech-demo.jpg", "GreenTech Challenge demo day"),
    GalleryImage::new("images/gallery/robotics-lab.jpg", "Robotics lab open house"),
    GalleryImage::new("images/gallery/ride-hack-kickoff.jpg", "Ride Hack kickoff"),
    GalleryImage::new("images/gallery/mentor-hours.jpg", "Mentor office hours"),
    GalleryImage::new("images/gallery/awards.jpg", "Awards ceremony"),
  ]
}

/// Single image viewer over a fixed image set. The cursor wraps in both
/// directions.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
  images: Vec<GalleryImage>,
  index: usize,
}

impl Lightbox {
  pub fn new(images: Vec<GalleryImage>) -> Self {
    Self { images, index: 0 }
  }

  pub fn len(&self) -> usize {
    self.images.len()
  }

  pub fn is_empty(&self) -> bool {
    self.images.is_empty()
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn images(&self) -> &[GalleryImage] {
    &self.images
  }

  pub fn current(&self) -> Option<&GalleryImage> {
    self.images.get(self.index)
  }

  /// Points the cursor at `index mod N`. An empty set cannot be opened.
  pub fn open_at(&mut self, index: usize) -> Option<&GalleryImage> {
    if self.images.is_empty() {
      return None;
    }
    self.index = index % self.images.len();
    self.current()
  }

  pub fn next(&mut self) -> Option<&GalleryImage> {
    let n = self.images.len();
    if n == 0 {
      return None;
    }
    self.index = (self.index + 1) % n;
    self.current()
  }

  pub fn prev(&mut self) -> Option<&GalleryImage> {
    let n = self.images.len();
    if n == 0 {
      return None;
    }
    self.index = (self.index + n - 1) % n;
    self.current()
  }
}

/// Thumbnail that is only "loaded" once it has been visible.
#[derive(Debug, Clone)]
pub struct LazyImage {
  pub image: GalleryImage,
  loaded: bool,
}

impl LazyImage {
  pub fn new(image: GalleryImage) -> Self {
    Self { image, loaded: false }
  }

  pub fn is_loaded(&self) -> bool {
    self.loaded
  }

  /// Marks the image as seen. Returns true the first time only.
  pub fn reveal(&mut self) -> bool {
    let first = !self.loaded;
    self.loaded = true;
    first
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn lightbox() -> Lightbox {
    Lightbox::new(default_images())
  }

  #[test]
  fn prev_n_times_returns_to_start() {
    let mut lightbox = lightbox();
    lightbox.open_at(0);
    for _ in 0..lightbox.len() {
      lightbox.prev();
    }
    assert_eq!(lightbox.index(), 0);
  }

  #[test]
  fn next_wraps_past_the_end() {
    let mut lightbox = lightbox();
    let last = lightbox.len() - 1;
    lightbox.open_at(last);
    lightbox.next();
    assert_eq!(lightbox.index(), 0);
  }

  #[test]
  fn prev_wraps_before_the_start() {
    let mut lightbox = lightbox();
    lightbox.open_at(0);
    lightbox.prev();
    assert_eq!(lightbox.index(), lightbox.len() - 1);
  }

  #[test]
  fn open_at_takes_index_modulo_len() {
    let mut lightbox = lightbox();
    let n = lightbox.len();
    let caption = lightbox.open_at(n + 2).map(|image| image.caption.clone());
    assert_eq!(lightbox.index(), 2);
    assert_eq!(caption, Some(default_images()[2].caption.clone()));
  }

  #[test]
  fn empty_set_cannot_be_opened() {
    let mut lightbox = Lightbox::new(vec![]);
    assert!(lightbox.open_at(3).is_none());
    assert!(lightbox.next().is_none());
    assert!(lightbox.prev().is_none());
  }

  #[test]
  fn lazy_image_reveals_once() {
    let mut image = LazyImage::new(default_images().remove(0));
    assert!(!image.is_loaded());
    assert!(image.reveal());
    assert!(!image.reveal());
    assert!(image.is_loaded());
  }
}
