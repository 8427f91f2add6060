use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new($pat).unwrap())
  };
}

macro_rules! block {
  ($tag:literal) => {
    re!(concat!(
      r"(?is)<",
      $tag,
      r"\b[^>]*>.*?</",
      $tag,
      r"\s*>"
    ))
  };
}

pub(crate) static DANGEROUS_BLOCKS: [LazyLock<Regex>; 4] = [
  block!("script"),
  block!("iframe"),
  block!("object"),
  block!("embed"),
];

pub(crate) static DANGEROUS_SCHEMES: LazyLock<Regex> =
  re!(r"(?i)javascript:|vbscript:|data:text/html");

pub(crate) static DANGEROUS_TAG_FRAGMENT: LazyLock<Regex> =
  re!(r"(?i)</?(?:script|iframe|object|embed)\b");

pub(crate) static HTML_TAG_HINT: LazyLock<Regex> =
  re!(r"(?i)</?[a-z][^>]*>");

pub(crate) static LINE_BREAK: LazyLock<Regex> = re!(r"\r?\n");

pub(crate) static NON_ALPHANUMERIC_RUNS: LazyLock<Regex> =
  re!(r"[^\p{L}\p{N}]+");

pub(crate) static SAFE_URL_PREFIX: LazyLock<Regex> =
  re!(r"(?i)^(?:https?:|mailto:|tel:|/|#)");

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> = re!(r"\s+");
