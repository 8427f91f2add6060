use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  /// Heading id assignment and table of contents collection.
  pub(crate) fn outline(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(AssignHeadingIdsStage));

    pipeline
  }

  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for stage in &mut self.stages {
      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }

  /// Tree filtering applied to parsed, untrusted markup.
  pub(crate) fn sanitizer(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(ElementLimitStage));
    pipeline.add_stage(Box::new(RemoveDisallowedNodesStage));
    pipeline.add_stage(Box::new(UnwrapDisallowedElementsStage));
    pipeline.add_stage(Box::new(FilterAttributesStage));
    pipeline.add_stage(Box::new(DefuseTextStage));
    pipeline.add_stage(Box::new(SecureLinksStage));
    pipeline.add_stage(Box::new(NormalizeImagesStage));

    pipeline
  }
}
