use super::*;

pub(crate) struct Context<'a> {
  fragment: Fragment,
  options: &'a ContentOptions,
  toc: Vec<HeadingEntry>,
}

impl<'a> Context<'a> {
  pub(crate) fn fragment(&self) -> &Fragment {
    &self.fragment
  }

  pub(crate) fn fragment_mut(&mut self) -> &mut Fragment {
    &mut self.fragment
  }

  pub(crate) fn into_parts(self) -> (Fragment, Vec<HeadingEntry>) {
    (self.fragment, self.toc)
  }

  pub(crate) fn new(fragment: Fragment, options: &'a ContentOptions) -> Self {
    Self {
      fragment,
      options,
      toc: Vec::new(),
    }
  }

  pub(crate) fn options(&self) -> &'a ContentOptions {
    self.options
  }

  pub(crate) fn push_heading(&mut self, entry: HeadingEntry) {
    self.toc.push(entry);
  }
}
