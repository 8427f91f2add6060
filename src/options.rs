use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentOptions {
  pub max_elems_to_parse: Option<usize>,
  pub max_slug_length: usize,
  pub policy: AllowListPolicy,
  pub slug_fallback: String,
  pub strip_dangerous_blocks: bool,
  pub toc_levels: RangeInclusive<u8>,
}

impl Default for ContentOptions {
  fn default() -> Self {
    Self {
      max_elems_to_parse: None,
      max_slug_length: slug::DEFAULT_MAX_LENGTH,
      policy: AllowListPolicy::DEFAULT,
      slug_fallback: slug::DEFAULT_FALLBACK.to_string(),
      strip_dangerous_blocks: true,
      toc_levels: 2..=4,
    }
  }
}

impl ContentOptions {
  #[must_use]
  pub fn builder() -> ContentOptionsBuilder {
    ContentOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct ContentOptionsBuilder {
  inner: ContentOptions,
}

impl ContentOptionsBuilder {
  #[must_use]
  pub fn build(self) -> ContentOptions {
    self.inner
  }

  #[must_use]
  pub fn max_elems_to_parse(self, max_elems_to_parse: Option<usize>) -> Self {
    Self {
      inner: ContentOptions {
        max_elems_to_parse,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_slug_length(self, max_slug_length: usize) -> Self {
    Self {
      inner: ContentOptions {
        max_slug_length,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn policy(self, policy: AllowListPolicy) -> Self {
    Self {
      inner: ContentOptions {
        policy,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn slug_fallback(self, slug_fallback: impl Into<String>) -> Self {
    Self {
      inner: ContentOptions {
        slug_fallback: slug_fallback.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn strip_dangerous_blocks(self, strip_dangerous_blocks: bool) -> Self {
    Self {
      inner: ContentOptions {
        strip_dangerous_blocks,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn toc_levels(self, toc_levels: RangeInclusive<u8>) -> Self {
    Self {
      inner: ContentOptions {
        toc_levels,
        ..self.inner
      },
    }
  }
}
