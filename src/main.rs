use {
  anyhow::Context,
  arguments::Arguments,
  clap::{Parser, Subcommand},
  richcontent::{ContentEngine, ContentOptions},
  std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
  },
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(io::stderr)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
