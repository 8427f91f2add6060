/// Untrusted author input as handed over by callers.
///
/// `None` models absent content (a null field coming back from the backend)
/// and reads exactly like the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawContent<'a>(Option<&'a str>);

impl<'a> RawContent<'a> {
  #[must_use]
  pub fn as_str(&self) -> &'a str {
    self.0.unwrap_or_default()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.as_str().is_empty()
  }
}

impl<'a> From<&'a str> for RawContent<'a> {
  fn from(value: &'a str) -> Self {
    Self(Some(value))
  }
}

impl<'a> From<&'a String> for RawContent<'a> {
  fn from(value: &'a String) -> Self {
    Self(Some(value.as_str()))
  }
}

impl<'a> From<Option<&'a str>> for RawContent<'a> {
  fn from(value: Option<&'a str>) -> Self {
    Self(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent_content_reads_as_empty() {
    let raw = RawContent::from(None::<&str>);

    assert!(raw.is_empty());
    assert_eq!(raw.as_str(), "");
  }

  #[test]
  fn borrowed_strings_pass_through() {
    let owned = String::from("<p>hi</p>");

    assert_eq!(RawContent::from(&owned).as_str(), "<p>hi</p>");
    assert_eq!(RawContent::from("text").as_str(), "text");
    assert_eq!(RawContent::from(Some("text")).as_str(), "text");
  }
}
