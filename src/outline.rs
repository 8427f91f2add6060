use super::*;

/// One table of contents entry; `id` is also written onto the heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
  pub id: String,
  pub text: String,
  pub level: u8,
}

/// Sanitized html with heading ids assigned, and its table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedContent {
  pub html: String,
  pub toc: Vec<HeadingEntry>,
}

impl PreparedContent {
  /// Visible text of the html, whitespace-normalized.
  #[must_use]
  pub fn text(&self) -> String {
    if self.html.is_empty() {
      return String::new();
    }

    Fragment::parse(&self.html).text()
  }

  #[must_use]
  pub fn word_count(&self) -> usize {
    self.text().split_whitespace().count()
  }
}
