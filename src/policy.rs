use super::*;

type TagTable = &'static [(&'static str, &'static [&'static str])];

const GLOBAL_ATTRIBUTES: &[&str] = &["class", "dir", "id", "lang"];

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

const DEFAULT_TAGS: TagTable = &[
  ("a", &["href", "title"]),
  ("abbr", &["title"]),
  ("b", &[]),
  ("blockquote", &[]),
  ("br", &[]),
  ("caption", &[]),
  ("cite", &[]),
  ("code", &[]),
  ("del", &["datetime"]),
  ("div", &[]),
  ("em", &[]),
  ("figcaption", &[]),
  ("figure", &[]),
  ("h1", &[]),
  ("h2", &[]),
  ("h3", &[]),
  ("h4", &[]),
  ("h5", &[]),
  ("h6", &[]),
  ("hr", &[]),
  ("i", &[]),
  (
    "img",
    &["alt", "decoding", "height", "loading", "src", "title", "width"],
  ),
  ("ins", &["datetime"]),
  ("kbd", &[]),
  ("li", &[]),
  ("mark", &[]),
  ("ol", &["reversed", "start"]),
  ("p", &[]),
  ("pre", &[]),
  ("q", &[]),
  ("s", &[]),
  ("small", &[]),
  ("span", &[]),
  ("strong", &[]),
  ("sub", &[]),
  ("sup", &[]),
  ("table", &[]),
  ("tbody", &[]),
  ("td", &["colspan", "rowspan"]),
  ("tfoot", &[]),
  ("th", &["colspan", "rowspan", "scope"]),
  ("thead", &[]),
  ("time", &["datetime"]),
  ("tr", &[]),
  ("u", &[]),
  ("ul", &[]),
];

/// Read-only table of the tags and attributes rich content may keep.
///
/// Lookups are two-level: a tag maps to its own attribute list, and the
/// global list applies to every allowed tag. A tag present with an empty
/// list keeps only global attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowListPolicy {
  global_attributes: &'static [&'static str],
  tags: TagTable,
}

impl Default for AllowListPolicy {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl AllowListPolicy {
  pub const DEFAULT: Self = Self {
    global_attributes: GLOBAL_ATTRIBUTES,
    tags: DEFAULT_TAGS,
  };

  #[must_use]
  pub const fn new(
    tags: &'static [(&'static str, &'static [&'static str])],
    global_attributes: &'static [&'static str],
  ) -> Self {
    Self {
      global_attributes,
      tags,
    }
  }

  /// Returns true when `attribute` may stay on an allowed `tag`.
  #[must_use]
  pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
    self.global_attributes.contains(&attribute)
      || self
        .tag_attributes(tag)
        .unwrap_or_default()
        .contains(&attribute)
  }

  /// Returns true for HTML-namespace elements listed in the table.
  pub(crate) fn allows_element(&self, element: &Element) -> bool {
    &*element.name.ns == HTML_NAMESPACE && self.allows_tag(element.name())
  }

  #[must_use]
  pub fn allows_tag(&self, tag: &str) -> bool {
    self.tag_attributes(tag).is_some()
  }

  /// Returns true when `value` contains a script-capable scheme anywhere.
  #[must_use]
  pub fn has_dangerous_scheme(value: &str) -> bool {
    re::DANGEROUS_SCHEMES.is_match(value)
  }

  /// Returns true when an `href`/`src` value may be kept.
  ///
  /// Only `http:`, `https:`, `mailto:`, `tel:`, root-relative and fragment
  /// references qualify. Anything else, including document-relative paths
  /// and values with leading whitespace, is rejected.
  #[must_use]
  pub fn is_safe_url(value: &str) -> bool {
    re::SAFE_URL_PREFIX.is_match(value)
  }

  fn tag_attributes(&self, tag: &str) -> Option<&'static [&'static str]> {
    self
      .tags
      .iter()
      .find(|(name, _)| *name == tag)
      .map(|(_, attributes)| *attributes)
  }
}
