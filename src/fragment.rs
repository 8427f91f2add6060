use super::*;

/// A parsed markup fragment and the id of the node whose children are the
/// content.
///
/// Fragment parsing puts everything under a synthetic `<html>` element; stray
/// `</body>` or `</html>` tags in the input cannot close it, so serializing
/// its children always yields the whole fragment.
#[derive(Debug)]
pub(crate) struct Fragment {
  pub(crate) html: Html,
  pub(crate) root_id: NodeId,
}

impl Fragment {
  /// Ids of every node under the root matching `predicate`, in document
  /// order. The root itself is never included.
  pub(crate) fn collect_ids(
    &self,
    predicate: impl Fn(&Node) -> bool,
  ) -> Vec<NodeId> {
    let Some(root) = self.root() else {
      return Vec::new();
    };

    root
      .descendants()
      .skip(1)
      .filter(|node| predicate(node.value()))
      .map(|node| node.id())
      .collect()
  }

  pub(crate) fn element_count(&self) -> usize {
    self.element_ids().len()
  }

  pub(crate) fn element_ids(&self) -> Vec<NodeId> {
    self.collect_ids(Node::is_element)
  }

  pub(crate) fn into_markup(self) -> String {
    self
      .root()
      .and_then(ElementRef::wrap)
      .map(|root| root.inner_html())
      .unwrap_or_default()
  }

  /// Returns false once the node, or one of its ancestors, was detached.
  pub(crate) fn is_attached(&self, node_id: NodeId) -> bool {
    self.html.tree.get(node_id).is_some_and(|node| {
      node.ancestors().any(|ancestor| ancestor.id() == self.root_id)
    })
  }

  pub(crate) fn parse(markup: &str) -> Self {
    let html = Html::parse_fragment(markup);

    let root_id = html
      .tree
      .root()
      .children()
      .find(|node| node.value().is_element())
      .map_or_else(|| html.tree.root().id(), |node| node.id());

    Self { html, root_id }
  }

  pub(crate) fn remove(&mut self, node_id: NodeId) {
    if let Some(mut node) = self.html.tree.get_mut(node_id) {
      node.detach();
    }
  }

  /// Swaps a node for a single text node holding `text`.
  pub(crate) fn replace_with_text(&mut self, node_id: NodeId, text: String) {
    if !self.is_attached(node_id) {
      return;
    }

    let Some(mut node) = self.html.tree.get_mut(node_id) else {
      return;
    };

    if !text.is_empty() {
      node.insert_before(Node::Text(Text { text: text.into() }));
    }

    node.detach();
  }

  pub(crate) fn root(&self) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(self.root_id)
  }

  /// Whitespace-normalized visible text, with a space between text nodes.
  pub(crate) fn text(&self) -> String {
    let Some(root) = self.root() else {
      return String::new();
    };

    let text = root
      .descendants()
      .filter_map(|node| node.value().as_text())
      .map(|text| text.trim())
      .filter(|text| !text.is_empty())
      .collect::<Vec<&str>>()
      .join(" ");

    re::WHITESPACE_RUNS.replace_all(&text, " ").into_owned()
  }

  /// Concatenated text of every descendant text node, like `textContent`.
  pub(crate) fn text_content(&self, node_id: NodeId) -> String {
    self
      .html
      .tree
      .get(node_id)
      .and_then(ElementRef::wrap)
      .map(|element| element.text().collect())
      .unwrap_or_default()
  }
}
