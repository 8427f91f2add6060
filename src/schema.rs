use super::*;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Known fields of a blog post, as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostingFields {
  pub title: String,
  pub description: Option<String>,
  pub canonical_url: Option<String>,
  pub image: Option<String>,
  pub published_at: Option<String>,
  pub modified_at: Option<String>,
  pub author: Option<String>,
  pub category: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  pub word_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub headline: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub main_entity_of_page: Option<WebPageRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub date_published: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub date_modified: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<Author>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub article_section: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub keywords: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub word_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPageRef {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  #[serde(rename = "@id")]
  pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
  pub name: String,
  pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub position: usize,
  pub name: String,
  pub item: String,
}

/// Maps blog post fields onto a schema.org `BlogPosting`.
///
/// Blank optional fields are left out entirely, and `dateModified` falls
/// back to the publication date.
#[must_use]
pub fn build_blog_posting_schema(fields: &BlogPostingFields) -> BlogPosting {
  let canonical_url = present(fields.canonical_url.as_deref());

  let date_published = present(fields.published_at.as_deref());

  let tags = fields
    .tags
    .iter()
    .map(|tag| tag.trim())
    .filter(|tag| !tag.is_empty())
    .collect::<Vec<&str>>();

  BlogPosting {
    context: SCHEMA_CONTEXT,
    kind: "BlogPosting",
    headline: fields.title.clone(),
    description: present(fields.description.as_deref()),
    url: canonical_url.clone(),
    main_entity_of_page: canonical_url.map(|id| WebPageRef {
      kind: "WebPage",
      id,
    }),
    image: present(fields.image.as_deref()),
    date_modified: present(fields.modified_at.as_deref())
      .or_else(|| date_published.clone()),
    date_published,
    author: present(fields.author.as_deref()).map(|name| Author {
      kind: "Person",
      name,
    }),
    article_section: present(fields.category.as_deref()),
    keywords: (!tags.is_empty()).then(|| tags.join(", ")),
    word_count: fields.word_count,
  }
}

/// Maps an ordered trail onto a schema.org `BreadcrumbList` with 1-based
/// positions.
#[must_use]
pub fn build_breadcrumb_schema(items: &[BreadcrumbItem]) -> BreadcrumbList {
  BreadcrumbList {
    context: SCHEMA_CONTEXT,
    kind: "BreadcrumbList",
    item_list_element: items
      .iter()
      .enumerate()
      .map(|(index, item)| ListItem {
        kind: "ListItem",
        position: index + 1,
        name: item.name.clone(),
        item: item.url.clone(),
      })
      .collect(),
  }
}

/// Serializes a schema for embedding inside
/// `<script type="application/ld+json">`.
///
/// `<`, `>`, `&`, U+2028 and U+2029 are written as JSON escapes so no string
/// value can close the script element.
pub fn to_json_ld<T: Serialize>(schema: &T) -> Result<String> {
  let json = serde_json::to_string(schema)?;

  let mut escaped = String::with_capacity(json.len());

  for ch in json.chars() {
    match ch {
      '<' => escaped.push_str("\\u003c"),
      '>' => escaped.push_str("\\u003e"),
      '&' => escaped.push_str("\\u0026"),
      '\u{2028}' => escaped.push_str("\\u2028"),
      '\u{2029}' => escaped.push_str("\\u2029"),
      _ => escaped.push(ch),
    }
  }

  Ok(escaped)
}

fn present(value: Option<&str>) -> Option<String> {
  value
    .filter(|value| !value.trim().is_empty())
    .map(str::to_string)
}
