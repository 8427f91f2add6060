use super::*;

/// Aborts when the parsed fragment holds more elements than configured.
pub(crate) struct ElementLimitStage;

impl Stage for ElementLimitStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if let Some(limit) = context.options().max_elems_to_parse {
      let found = context.fragment().element_count();

      if found > limit {
        debug!(found, limit, "element limit exceeded");

        return Err(Error::ElementLimitExceeded { found, limit });
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run_with_limit(markup: &str, limit: Option<usize>) -> Result {
    let options = ContentOptions::builder().max_elems_to_parse(limit).build();

    let mut context = Context::new(Fragment::parse(markup), &options);

    ElementLimitStage.run(&mut context)
  }

  #[test]
  fn passes_without_a_limit() {
    assert!(run_with_limit("<p><b>a</b></p>", None).is_ok());
  }

  #[test]
  fn passes_at_the_limit() {
    assert!(run_with_limit("<p><b>a</b></p>", Some(2)).is_ok());
  }

  #[test]
  fn fails_above_the_limit() {
    let error = run_with_limit("<p><b>a</b><i>b</i></p>", Some(2)).unwrap_err();

    assert!(matches!(
      error,
      Error::ElementLimitExceeded { found: 3, limit: 2 }
    ));
  }
}
