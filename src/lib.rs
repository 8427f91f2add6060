use {
  context::Context,
  ego_tree::{NodeId, NodeRef},
  fragment::Fragment,
  html5ever::{LocalName, Namespace, QualName},
  pipeline::Pipeline,
  regex::Regex,
  scraper::{
    ElementRef, Html, Node,
    node::{Element, Text},
  },
  serde::{Deserialize, Serialize},
  stage::{
    AssignHeadingIdsStage, DefuseTextStage, ElementLimitStage,
    FilterAttributesStage, NormalizeImagesStage, RemoveDisallowedNodesStage,
    SecureLinksStage, Stage, UnwrapDisallowedElementsStage,
  },
  std::{collections::HashSet, ops::RangeInclusive, sync::LazyLock},
  tracing::{debug, trace},
};

pub use crate::{
  engine::ContentEngine,
  error::Error,
  normalize::{escape_html, normalize_content},
  options::{ContentOptions, ContentOptionsBuilder},
  outline::{HeadingEntry, PreparedContent},
  policy::AllowListPolicy,
  raw_content::RawContent,
  schema::{
    Author, BlogPosting, BlogPostingFields, BreadcrumbItem, BreadcrumbList,
    ListItem, WebPageRef, build_blog_posting_schema, build_breadcrumb_schema,
    to_json_ld,
  },
  slug::create_slug,
};

mod context;
mod engine;
mod error;
mod fragment;
mod normalize;
mod options;
mod outline;
mod pipeline;
mod policy;
mod prepass;
mod raw_content;
mod re;
mod schema;
mod slug;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Sanitizes untrusted markup with the default allow-list.
///
/// Never fails: empty or absent input yields an empty string, and any
/// internal failure yields an empty string rather than unfiltered markup.
pub fn sanitize_html<'a>(raw: impl Into<RawContent<'a>>) -> String {
  ContentEngine::default().sanitize(raw).unwrap_or_default()
}

/// Normalizes, sanitizes and outlines raw author content.
///
/// Returns the sanitized html with heading ids written in, plus the table of
/// contents built from those headings.
pub fn prepare_content<'a>(raw: impl Into<RawContent<'a>>) -> PreparedContent {
  ContentEngine::default().prepare(raw).unwrap_or_default()
}
