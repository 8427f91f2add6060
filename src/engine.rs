use super::*;

const MAX_SANITIZE_ROUNDS: usize = 8;

/// Runs the sanitizer and outline pipelines with a fixed set of options.
///
/// The engine holds no per-call state, so one instance can serve any number
/// of threads.
#[derive(Debug, Clone, Default)]
pub struct ContentEngine {
  options: ContentOptions,
}

impl ContentEngine {
  /// Assigns heading ids and builds the table of contents for html that has
  /// already been sanitized.
  pub fn extract_outline(&self, sanitized: &str) -> Result<PreparedContent> {
    if sanitized.is_empty() {
      return Ok(PreparedContent::default());
    }

    let context = Pipeline::outline(Context::new(
      Fragment::parse(sanitized),
      &self.options,
    ))
    .run()?;

    let (fragment, toc) = context.into_parts();

    let html = if toc.is_empty() {
      sanitized.to_string()
    } else {
      fragment.into_markup()
    };

    Ok(PreparedContent { html, toc })
  }

  fn filter(&self, markup: &str) -> Result<String> {
    let context =
      Pipeline::sanitizer(Context::new(Fragment::parse(markup), &self.options))
        .run()?;

    let (fragment, _) = context.into_parts();

    Ok(fragment.into_markup())
  }

  #[must_use]
  pub fn new(options: ContentOptions) -> Self {
    Self { options }
  }

  #[must_use]
  pub fn options(&self) -> &ContentOptions {
    &self.options
  }

  /// Normalizes, sanitizes and outlines raw content.
  pub fn prepare<'a>(
    &self,
    raw: impl Into<RawContent<'a>>,
  ) -> Result<PreparedContent> {
    let normalized = normalize_content(raw);

    let sanitized = self.sanitize(&normalized)?;

    self.extract_outline(&sanitized)
  }

  /// Filters raw markup down to the allow-list.
  ///
  /// Some trees the parser builds (foster-parented links, a `<pre>` whose
  /// text starts with a newline) do not survive being serialized and parsed
  /// again. The filtered markup is therefore parsed and filtered again until
  /// it stops changing, which makes the result a fixed point. Markup that
  /// has not settled after `MAX_SANITIZE_ROUNDS` rounds is dropped.
  pub fn sanitize<'a>(&self, raw: impl Into<RawContent<'a>>) -> Result<String> {
    let raw = raw.into();

    if raw.is_empty() {
      return Ok(String::new());
    }

    let mut markup = if self.options.strip_dangerous_blocks {
      prepass::strip_dangerous_markup(raw.as_str())
    } else {
      raw.as_str().to_string()
    };

    for round in 1..=MAX_SANITIZE_ROUNDS {
      if markup.is_empty() {
        return Ok(markup);
      }

      let filtered = self.filter(&markup)?;

      if filtered == markup {
        return Ok(filtered);
      }

      trace!(round, "sanitized markup changed on reparse");

      markup = filtered;
    }

    debug!(
      rounds = MAX_SANITIZE_ROUNDS,
      "sanitized markup did not settle; dropping it"
    );

    Ok(String::new())
  }

  /// Slugifies `text` with this engine's length and fallback settings.
  #[must_use]
  pub fn slug(&self, text: &str) -> String {
    slug::slugify(
      text,
      self.options.max_slug_length,
      &self.options.slug_fallback,
    )
  }
}
