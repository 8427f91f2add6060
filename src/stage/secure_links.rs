use super::*;

/// Opens external links in a new tab without handing over `window.opener`.
pub(crate) struct SecureLinksStage;

impl Stage for SecureLinksStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let fragment = context.fragment_mut();

    for id in elements_named(fragment, "a") {
      let Some(mut node) = fragment.html.tree.get_mut(id) else {
        continue;
      };

      let Node::Element(element) = node.value() else {
        continue;
      };

      if !element.attr("href").is_some_and(Self::is_external) {
        continue;
      }

      set_attribute(element, "target", "_blank");
      set_attribute(element, "rel", "noopener noreferrer");
    }

    Ok(())
  }
}

impl SecureLinksStage {
  fn is_external(href: &str) -> bool {
    href.starts_with("http")
  }
}
