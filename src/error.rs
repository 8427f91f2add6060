#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("aborting sanitization; {found} elements found (limit: {limit})")]
  ElementLimitExceeded { found: usize, limit: usize },
  #[error("failed to serialize structured data: {source}")]
  Json {
    #[from]
    source: serde_json::Error,
  },
}
