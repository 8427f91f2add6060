use super::*;

pub(crate) const DEFAULT_FALLBACK: &str = "section";

pub(crate) const DEFAULT_MAX_LENGTH: usize = 80;

/// Derives an anchor-safe slug from free text.
///
/// Letters and digits from any script survive lowercased; every other run of
/// characters becomes a single `-`. The result is capped at 80 characters
/// and falls back to `section` when nothing is left.
#[must_use]
pub fn create_slug(text: &str) -> String {
  slugify(text, DEFAULT_MAX_LENGTH, DEFAULT_FALLBACK)
}

pub(crate) fn slugify(text: &str, max_length: usize, fallback: &str) -> String {
  let lowered = text.trim().to_lowercase();

  let hyphenated = re::NON_ALPHANUMERIC_RUNS.replace_all(&lowered, "-");

  let slug: String = hyphenated
    .trim_matches('-')
    .chars()
    .take(max_length)
    .collect();

  if slug.is_empty() {
    fallback.to_string()
  } else {
    slug
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_text_falls_back() {
    assert_eq!(create_slug(""), "section");
    assert_eq!(create_slug("   "), "section");
    assert_eq!(create_slug("?!…"), "section");
  }

  #[test]
  fn punctuation_collapses_to_single_hyphens() {
    assert_eq!(create_slug("Hello World!"), "hello-world");
    assert_eq!(create_slug("  Rust -- the  Book  "), "rust-the-book");
    assert_eq!(create_slug("C++ & Rust: 2024"), "c-rust-2024");
  }

  #[test]
  fn unicode_letters_and_digits_are_kept() {
    assert_eq!(create_slug("Привет, мир"), "привет-мир");
    assert_eq!(create_slug("Ünïcode Straße ٣"), "ünïcode-straße-٣");
  }

  #[test]
  fn truncates_to_eighty_characters() {
    let slug = create_slug(&"a".repeat(200));

    assert_eq!(slug.chars().count(), 80);
  }

  #[test]
  fn truncation_counts_characters_not_bytes() {
    let slug = create_slug(&"é".repeat(100));

    assert_eq!(slug, "é".repeat(80));
  }

  #[test]
  fn custom_length_and_fallback() {
    assert_eq!(slugify("Hello World", 5, "part"), "hello");
    assert_eq!(slugify("!!!", 5, "part"), "part");
  }
}
