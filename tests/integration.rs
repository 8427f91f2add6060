use {
  pretty_assertions::assert_eq,
  richcontent::{
    BlogPostingFields, ContentEngine, ContentOptions, HeadingEntry,
    build_blog_posting_schema, create_slug, prepare_content, sanitize_html,
    to_json_ld,
  },
  scraper::Html,
  std::{fs, path::PathBuf},
};

macro_rules! test {
  ($name:expr) => {
    paste::paste! {
      #[test]
      fn [<test_ $name>]() {
        TestFixture::load($name).run();
      }
    }
  };
}

struct TestFixture {
  expected_html: String,
  expected_toc: Vec<HeadingEntry>,
  source_html: String,
}

impl TestFixture {
  fn load(name: &str) -> Self {
    let base_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
      .join("tests/fixtures")
      .join(name);

    let source_html = fs::read_to_string(base_path.join("source.html"))
      .expect("Failed to read source.html")
      .trim_end()
      .to_string();

    let expected_html = fs::read_to_string(base_path.join("expected.html"))
      .expect("Failed to read expected.html");

    let expected_toc = match fs::read_to_string(
      base_path.join("expected-toc.json"),
    ) {
      Ok(json) => {
        serde_json::from_str(&json).expect("Failed to parse toc JSON")
      }
      Err(_) => Vec::new(),
    };

    Self {
      expected_html,
      expected_toc,
      source_html,
    }
  }

  fn run(&self) {
    let prepared = prepare_content(self.source_html.as_str());

    assert_eq!(prepared.toc, self.expected_toc, "TOC mismatch");

    let expected_html = Html::parse_fragment(&self.expected_html);
    let actual_html = Html::parse_fragment(&prepared.html);

    assert_same_markup(&actual_html, &expected_html, "HTML content mismatch");

    assert_eq!(
      sanitize_html(prepared.html.as_str()),
      prepared.html,
      "Sanitizing prepared output changed it"
    );
  }
}

/// Compares two parsed fragments by element names, attribute sets and
/// whitespace-normalized text, ignoring whitespace-only text nodes.
fn assert_same_markup(actual: &Html, expected: &Html, message: &str) {
  use scraper::{ElementRef, Node};

  fn significant_children<'a>(
    element: &ElementRef<'a>,
  ) -> Vec<ego_tree::NodeRef<'a, Node>> {
    element
      .children()
      .filter(|child| {
        !matches!(child.value(), Node::Text(text) if text.trim().is_empty())
      })
      .collect()
  }

  fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
  }

  fn compare(actual: ElementRef, expected: ElementRef) -> Result<(), String> {
    let tag = actual.value().name();

    if tag != expected.value().name() {
      return Err(format!(
        "expected <{}>, found <{tag}>",
        expected.value().name()
      ));
    }

    let mut actual_attributes: Vec<_> = actual.value().attrs().collect();
    let mut expected_attributes: Vec<_> = expected.value().attrs().collect();

    actual_attributes.sort_unstable();
    expected_attributes.sort_unstable();

    if actual_attributes != expected_attributes {
      return Err(format!(
        "attributes of <{tag}>: found {actual_attributes:?}, expected \
         {expected_attributes:?}"
      ));
    }

    let actual_children = significant_children(&actual);
    let expected_children = significant_children(&expected);

    if actual_children.len() != expected_children.len() {
      return Err(format!(
        "<{tag}> has {} significant children, expected {}",
        actual_children.len(),
        expected_children.len()
      ));
    }

    for (found, wanted) in actual_children.into_iter().zip(expected_children)
    {
      match (found.value(), wanted.value()) {
        (Node::Element(_), Node::Element(_)) => compare(
          ElementRef::wrap(found).unwrap(),
          ElementRef::wrap(wanted).unwrap(),
        )?,
        (Node::Text(found_text), Node::Text(wanted_text)) => {
          let found_text = collapse_whitespace(found_text);
          let wanted_text = collapse_whitespace(wanted_text);

          if found_text != wanted_text {
            return Err(format!(
              "text in <{tag}>: found '{found_text}', expected '{wanted_text}'"
            ));
          }
        }
        _ => return Err(format!("node kinds differ inside <{tag}>")),
      }
    }

    Ok(())
  }

  if let Err(difference) =
    compare(actual.root_element(), expected.root_element())
  {
    panic!("{message}: {difference}");
  }
}

test!("basic-formatting");
test!("disallowed-tags-unwrapped");
test!("duplicate-headings");
test!("images");
test!("nested-payloads");
test!("plain-text");
test!("script-removal");
test!("unsafe-links");

#[test]
fn script_blocks_are_removed_entirely() {
  assert_eq!(
    sanitize_html("<p>Safe</p><script>alert(1)</script>"),
    "<p>Safe</p>"
  );
}

#[test]
fn javascript_links_keep_their_text() {
  assert_eq!(
    sanitize_html("<a href=\"javascript:alert(1)\">Click me</a>"),
    "<a>Click me</a>"
  );
}

#[test]
fn leading_newlines_in_pre_settle_after_one_call() {
  let once = sanitize_html("<pre>\n\nx</pre>");

  assert_eq!(once, "<pre>x</pre>");
  assert_eq!(sanitize_html(once.as_str()), once);
}

#[test]
fn links_moved_out_of_tables_settle_after_one_call() {
  let once =
    sanitize_html("<a href=\"/a\"><table><a href=\"/b\">x</a></table></a>");

  assert!(once.contains("href=\"/b\""), "{once}");
  assert_eq!(sanitize_html(once.as_str()), once);
}

#[test]
fn event_handlers_are_removed_from_images() {
  let output = sanitize_html("<img src=\"/x.png\" onerror=\"alert(1)\">");

  assert!(!output.contains("onerror"));
  assert!(output.contains("src=\"/x.png\""));
  assert!(output.contains("loading=\"lazy\""));
  assert!(output.contains("decoding=\"async\""));
}

#[test]
fn absent_and_empty_input() {
  assert_eq!(sanitize_html(None::<&str>), "");
  assert_eq!(sanitize_html(""), "");
  assert_eq!(prepare_content(None::<&str>).html, "");
  assert!(prepare_content(None::<&str>).toc.is_empty());
}

#[test]
fn plain_lines_become_paragraphs() {
  let prepared = prepare_content("A\nB");

  assert!(prepared.html.contains("<p>A</p>"));
  assert!(prepared.html.contains("<p>B</p>"));
  assert!(prepared.toc.is_empty());
}

#[test]
fn repeated_headings_get_suffixed_ids() {
  let prepared = prepare_content("<h2>Setup</h2><h2>Setup</h2>");

  let ids: Vec<&str> = prepared.toc.iter().map(|e| e.id.as_str()).collect();

  assert_eq!(ids, vec!["setup", "setup-1"]);
  assert_eq!(
    prepared.html,
    "<h2 id=\"setup\">Setup</h2><h2 id=\"setup-1\">Setup</h2>"
  );
}

#[test]
fn slugs() {
  assert_eq!(create_slug(""), "section");
  assert_eq!(create_slug("Hello World!"), "hello-world");
}

#[test]
fn word_count_feeds_the_blog_posting_schema() {
  let prepared =
    prepare_content("<h2>Ownership</h2><p>Every value has one owner.</p>");

  let schema = build_blog_posting_schema(&BlogPostingFields {
    title: "Ownership".into(),
    word_count: Some(prepared.word_count()),
    ..BlogPostingFields::default()
  });

  let json = to_json_ld(&schema).unwrap();

  assert!(json.contains("\"wordCount\":6"));
}

#[test]
fn engine_is_shareable_across_threads() {
  let engine = ContentEngine::new(ContentOptions::default());

  std::thread::scope(|scope| {
    let handles: Vec<_> = (0..4)
      .map(|index| {
        let engine = &engine;

        scope.spawn(move || {
          let markup = format!("<h2>Part {index}</h2><h2>Part {index}</h2>");

          engine.prepare(markup.as_str()).unwrap()
        })
      })
      .collect();

    for (index, handle) in handles.into_iter().enumerate() {
      let prepared = handle.join().unwrap();

      assert_eq!(prepared.toc[0].id, format!("part-{index}"));
      assert_eq!(prepared.toc[1].id, format!("part-{index}-1"));
    }
  });
}
