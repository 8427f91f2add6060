use super::*;

/// Replaces every element outside the allow-list with its text content.
///
/// Ids are collected before any mutation. An element whose ancestor was
/// already unwrapped is skipped, since its text went out with the ancestor.
pub(crate) struct UnwrapDisallowedElementsStage;

impl Stage for UnwrapDisallowedElementsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let policy = context.options().policy;

    let fragment = context.fragment_mut();

    for id in fragment.element_ids() {
      if !fragment.is_attached(id) {
        continue;
      }

      let Some(node) = fragment.html.tree.get(id) else {
        continue;
      };

      let Node::Element(element) = node.value() else {
        continue;
      };

      if policy.allows_element(element) {
        continue;
      }

      debug!(tag = element.name(), "unwrapping disallowed element");

      let text = fragment.text_content(id);

      fragment.replace_with_text(id, text);
    }

    Ok(())
  }
}
