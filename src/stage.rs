use super::*;

mod assign_heading_ids;
mod defuse_text;
mod element_limit;
mod filter_attributes;
mod normalize_images;
mod remove_disallowed_nodes;
mod secure_links;
mod unwrap_disallowed_elements;

pub(crate) use {
  assign_heading_ids::AssignHeadingIdsStage, defuse_text::DefuseTextStage,
  element_limit::ElementLimitStage, filter_attributes::FilterAttributesStage,
  normalize_images::NormalizeImagesStage,
  remove_disallowed_nodes::RemoveDisallowedNodesStage,
  secure_links::SecureLinksStage,
  unwrap_disallowed_elements::UnwrapDisallowedElementsStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}

/// Sets an attribute in the no-namespace, overwriting any previous value.
///
/// Attribute lists are kept sorted by name because element lookups
/// binary-search them.
pub(crate) fn set_attribute(element: &mut Element, name: &str, value: &str) {
  let name = QualName::new(None, Namespace::from(""), LocalName::from(name));

  match element
    .attrs
    .binary_search_by(|(existing, _)| existing.cmp(&name))
  {
    Ok(index) => element.attrs[index].1 = value.into(),
    Err(index) => element.attrs.insert(index, (name, value.into())),
  }
}

/// Ids of the elements named `tag` under the fragment root.
pub(crate) fn elements_named(fragment: &Fragment, tag: &str) -> Vec<NodeId> {
  fragment.collect_ids(
    |node| matches!(node, Node::Element(element) if element.name() == tag),
  )
}

#[cfg(test)]
pub(crate) fn run_stage(stage: &mut dyn Stage, markup: &str) -> String {
  let options = ContentOptions::default();

  let mut context = Context::new(Fragment::parse(markup), &options);

  stage.run(&mut context).unwrap();

  let (fragment, _) = context.into_parts();

  fragment.into_markup()
}
