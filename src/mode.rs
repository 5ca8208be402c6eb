use serde::{Deserialize, Serialize};

/// Which keymap applies: browsing pages, typing into a page form, or inside
/// an open modal.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
  #[default]
  #[serde(alias = "browse")]
  Browse,
  #[serde(alias = "form")]
  Form,
  #[serde(alias = "modal")]
  Modal,
}
