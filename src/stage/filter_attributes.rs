use super::*;

/// Drops every attribute an allowed element may not carry.
///
/// An attribute goes when its name starts with `on`, when its value holds a
/// script-capable scheme or either end of a dangerous block, when the policy
/// does not list it for the tag, or when it is namespaced. `href` and `src` additionally
/// need a safe URL.
pub(crate) struct FilterAttributesStage;

impl Stage for FilterAttributesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let policy = context.options().policy;

    let fragment = context.fragment_mut();

    for id in fragment.element_ids() {
      let Some(mut node) = fragment.html.tree.get_mut(id) else {
        continue;
      };

      let Node::Element(element) = node.value() else {
        continue;
      };

      let tag = element.name().to_string();

      element.attrs.retain(|(name, value)| {
        let keep = Self::keeps(&policy, &tag, name, value);

        if !keep {
          debug!(
            tag = %tag,
            attribute = %name.local,
            "dropping attribute"
          );
        }

        keep
      });
    }

    Ok(())
  }
}

impl FilterAttributesStage {
  fn keeps(
    policy: &AllowListPolicy,
    tag: &str,
    name: &QualName,
    value: &str,
  ) -> bool {
    if name.prefix.is_some() || !name.ns.is_empty() {
      return false;
    }

    let attribute = name.local.as_ref();

    if attribute.to_ascii_lowercase().starts_with("on")
      || prepass::contains_dangerous_markup(value)
      || !policy.allows_attribute(tag, attribute)
    {
      return false;
    }

    !matches!(attribute, "href" | "src") || AllowListPolicy::is_safe_url(value)
  }
}
