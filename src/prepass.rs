use super::*;

const MAX_ROUNDS: usize = 8;

const SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:text/html"];

/// Regex pass that runs before parsing.
///
/// Removes whole `script`, `iframe`, `object` and `embed` blocks and every
/// occurrence of a script-capable scheme, repeating until nothing changes so
/// fragments split around a removed block cannot join back into a payload.
/// Each nesting layer costs a round; input still changing after
/// `MAX_ROUNDS` rounds is dropped entirely. The tree stages remain the real
/// filter.
pub(crate) fn strip_dangerous_markup(markup: &str) -> String {
  let mut current = markup.to_string();

  for _ in 0..MAX_ROUNDS {
    let stripped = strip_once(&current);

    if stripped == current {
      return current;
    }

    trace!(
      removed = current.len() - stripped.len(),
      "pre-pass removed dangerous markup"
    );

    current = stripped;
  }

  debug!(rounds = MAX_ROUNDS, "pre-pass did not settle; dropping input");

  String::new()
}

/// Removes every script-capable scheme in a single pass.
///
/// Characters are appended one at a time and a scheme ending at the tail is
/// cut off as soon as it completes, so text joined across a removal is
/// checked again without rescanning the whole string. The result never
/// contains a scheme.
pub(crate) fn strip_dangerous_schemes(text: &str) -> String {
  let mut output = String::with_capacity(text.len());

  for ch in text.chars() {
    output.push(ch);

    if let Some(scheme) = SCHEMES.iter().find(|scheme| {
      output.len() >= scheme.len()
        && output.as_bytes()[output.len() - scheme.len()..]
          .eq_ignore_ascii_case(scheme.as_bytes())
    }) {
      output.truncate(output.len() - scheme.len());
    }
  }

  output
}

fn strip_once(markup: &str) -> String {
  let without_blocks = re::DANGEROUS_BLOCKS
    .iter()
    .fold(markup.to_string(), |text, pattern| {
      pattern.replace_all(&text, "").into_owned()
    });

  strip_dangerous_schemes(&without_blocks)
}

/// Returns true when `value` holds a script-capable scheme or either end of
/// a block the pre-pass removes.
///
/// Checking single tag ends, not whole blocks, keeps two attribute values
/// from forming a block between them once serialized.
pub(crate) fn contains_dangerous_markup(value: &str) -> bool {
  re::DANGEROUS_SCHEMES.is_match(value)
    || re::DANGEROUS_TAG_FRAGMENT.is_match(value)
}
