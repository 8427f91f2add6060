use super::*;

/// Forces lazy, asynchronous image decoding and guarantees an `alt`.
pub(crate) struct NormalizeImagesStage;

impl Stage for NormalizeImagesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let fragment = context.fragment_mut();

    for id in elements_named(fragment, "img") {
      let Some(mut node) = fragment.html.tree.get_mut(id) else {
        continue;
      };

      let Node::Element(element) = node.value() else {
        continue;
      };

      set_attribute(element, "loading", "lazy");
      set_attribute(element, "decoding", "async");

      if element.attr("alt").is_none() {
        set_attribute(element, "alt", "");
      }
    }

    Ok(())
  }
}
