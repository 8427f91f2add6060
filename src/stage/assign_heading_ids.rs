use super::*;

/// Gives every non-empty heading in the configured levels a unique id and
/// records it in the table of contents.
///
/// An existing non-blank `id` is kept verbatim as the candidate, otherwise
/// the heading text is slugified. Collisions get `-1`, `-2`, ... appended. The set of used ids
/// lives for one run only.
pub(crate) struct AssignHeadingIdsStage;

impl Stage for AssignHeadingIdsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let options = context.options();

    let headings = Self::headings(context.fragment(), &options.toc_levels);

    let mut used = HashSet::new();

    for (node_id, level) in headings {
      let text = context.fragment().text_content(node_id).trim().to_string();

      if text.is_empty() {
        continue;
      }

      let candidate = Self::existing_id(context.fragment(), node_id)
        .unwrap_or_else(|| {
          slug::slugify(&text, options.max_slug_length, &options.slug_fallback)
        });

      let id = Self::reserve(&mut used, candidate);

      if let Some(mut node) = context.fragment_mut().html.tree.get_mut(node_id)
        && let Node::Element(element) = node.value()
      {
        set_attribute(element, "id", &id);
      }

      context.push_heading(HeadingEntry { id, text, level });
    }

    Ok(())
  }
}

impl AssignHeadingIdsStage {
  fn existing_id(fragment: &Fragment, node_id: NodeId) -> Option<String> {
    fragment
      .html
      .tree
      .get(node_id)?
      .value()
      .as_element()?
      .attr("id")
      .filter(|id| !id.trim().is_empty())
      .map(str::to_string)
  }

  fn heading_level(element: &Element) -> Option<u8> {
    match element.name() {
      "h1" => Some(1),
      "h2" => Some(2),
      "h3" => Some(3),
      "h4" => Some(4),
      "h5" => Some(5),
      "h6" => Some(6),
      _ => None,
    }
  }

  fn headings(
    fragment: &Fragment,
    levels: &RangeInclusive<u8>,
  ) -> Vec<(NodeId, u8)> {
    fragment
      .element_ids()
      .into_iter()
      .filter_map(|node_id| {
        let level = fragment
          .html
          .tree
          .get(node_id)?
          .value()
          .as_element()
          .and_then(Self::heading_level)?;

        levels.contains(&level).then_some((node_id, level))
      })
      .collect()
  }

  fn reserve(used: &mut HashSet<String>, candidate: String) -> String {
    if used.insert(candidate.clone()) {
      return candidate;
    }

    let mut suffix = 1;

    loop {
      let id = format!("{candidate}-{suffix}");

      if used.insert(id.clone()) {
        debug!(%candidate, %id, "heading id collision");
        return id;
      }

      suffix += 1;
    }
  }
}
