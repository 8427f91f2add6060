use super::*;

/// Removes script-capable containers together with their content, and every
/// comment, doctype and processing instruction.
pub(crate) struct RemoveDisallowedNodesStage;

impl Stage for RemoveDisallowedNodesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let fragment = context.fragment_mut();

    let to_remove = fragment.collect_ids(Self::is_disallowed);

    for id in to_remove {
      trace!(?id, "removing disallowed node");

      fragment.remove(id);
    }

    Ok(())
  }
}

impl RemoveDisallowedNodesStage {
  const DROPPED_WITH_CONTENT: &'static [&'static str] =
    &["embed", "iframe", "object", "script"];

  fn is_disallowed(node: &Node) -> bool {
    match node {
      Node::Element(element) => {
        Self::DROPPED_WITH_CONTENT.contains(&element.name())
      }
      Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_) => {
        true
      }
      _ => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn removes_unclosed_script_with_content() {
    assert_eq!(
      run_stage(&mut RemoveDisallowedNodesStage, "<p>a</p><script>alert(1)"),
      "<p>a</p>"
    );
  }

  #[test]
  fn removes_frames_and_plugins() {
    assert_eq!(
      run_stage(
        &mut RemoveDisallowedNodesStage,
        "<p>a<iframe src=\"x\">fallback</iframe>b</p><object><embed></object>"
      ),
      "<p>ab</p>"
    );
  }

  #[test]
  fn removes_comments() {
    assert_eq!(
      run_stage(
        &mut RemoveDisallowedNodesStage,
        "<p>a<!-- <img src=x onerror=alert(1)> -->b</p>"
      ),
      "<p>ab</p>"
    );
  }

  #[test]
  fn leaves_other_elements_alone() {
    assert_eq!(
      run_stage(&mut RemoveDisallowedNodesStage, "<p><b>a</b></p><style>x</style>"),
      "<p><b>a</b></p><style>x</style>"
    );
  }
}
