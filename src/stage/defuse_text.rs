use super::*;

/// Strips script-capable schemes from text.
///
/// Entity-encoded schemes only decode during parsing, after the pre-pass has
/// run, so the same substrings are removed again here. Adjacent text nodes
/// serialize as one run and reparse as one node, so each run is checked as a
/// whole and collapsed into its first node when it needs defusing.
pub(crate) struct DefuseTextStage;

impl Stage for DefuseTextStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let fragment = context.fragment_mut();

    for id in fragment.collect_ids(Node::is_text) {
      if !fragment.is_attached(id) {
        continue;
      }

      let run = Self::text_run(fragment, id);

      if run.is_empty() {
        continue;
      }

      let mut joined = String::new();

      for text in run
        .iter()
        .filter_map(|id| fragment.html.tree.get(*id))
        .filter_map(|node| node.value().as_text())
      {
        joined.push_str(text);
      }

      if !AllowListPolicy::has_dangerous_scheme(&joined) {
        continue;
      }

      let defused = prepass::strip_dangerous_schemes(&joined);

      if let Some(mut first) = fragment.html.tree.get_mut(run[0]) {
        if let Node::Text(text) = first.value() {
          text.text = defused.into();
        }
      }

      for id in &run[1..] {
        fragment.remove(*id);
      }
    }

    Ok(())
  }
}

impl DefuseTextStage {
  /// Ids of the text run starting at `id`, or nothing when `id` continues a
  /// run that started earlier.
  fn text_run(fragment: &Fragment, id: NodeId) -> Vec<NodeId> {
    let Some(node) = fragment.html.tree.get(id) else {
      return Vec::new();
    };

    if node
      .prev_sibling()
      .is_some_and(|sibling| sibling.value().is_text())
    {
      return Vec::new();
    }

    std::iter::successors(Some(node), |node| {
      node
        .next_sibling()
        .filter(|sibling| sibling.value().is_text())
    })
    .map(|node| node.id())
    .collect()
  }
}
