use super::*;

/// The slice of the DOM a [`VoteBinder`] reads and writes.
///
/// Class names and attribute names are passed bare, without selector syntax.
pub trait Element: Clone + Debug {
  fn has_class(&self, class: &str) -> bool;

  fn add_class(&self, class: &str);

  fn remove_class(&self, class: &str);

  /// Nearest inclusive ancestor carrying `class`.
  fn closest(&self, class: &str) -> Option<Self>;

  /// First descendant carrying `class`, in document order.
  fn find(&self, class: &str) -> Option<Self>;

  fn attribute(&self, name: &str) -> Option<String>;

  fn set_text(&self, text: &str);
}
