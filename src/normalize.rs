use super::*;

/// Turns raw author input into markup.
///
/// Input that already contains a tag is returned as is. Anything else is
/// treated as plain multi-line text: every line is escaped and wrapped in its
/// own `<p>`.
pub fn normalize_content<'a>(raw: impl Into<RawContent<'a>>) -> String {
  let raw = raw.into().as_str();

  if raw.is_empty() {
    return String::new();
  }

  if re::HTML_TAG_HINT.is_match(raw) {
    return raw.to_string();
  }

  re::LINE_BREAK
    .split(raw)
    .map(|line| format!("<p>{}</p>", escape_html(line)))
    .collect()
}

/// Escapes the five characters that are significant in html text and
/// attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());

  for ch in text.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(ch),
    }
  }

  escaped
}
