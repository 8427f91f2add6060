use super::*;

#[derive(Parser)]
#[command(name = "richcontent")]
#[command(
  about = "Sanitize untrusted rich content and derive its table of contents",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    global = true,
    value_name = "N",
    help = "Abort when the parsed markup holds more than N elements"
  )]
  max_elements: Option<usize>,
  #[arg(
    long,
    global = true,
    help = "Skip the regex pre-pass and rely on tree filtering alone"
  )]
  skip_prepass: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  #[command(about = "Print the sanitized markup")]
  Sanitize {
    #[arg(value_name = "FILE", help = "Input file, `-` or nothing for stdin")]
    input: Option<PathBuf>,
  },
  #[command(about = "Print sanitized markup and table of contents as JSON")]
  Prepare {
    #[arg(value_name = "FILE", help = "Input file, `-` or nothing for stdin")]
    input: Option<PathBuf>,
  },
  #[command(about = "Print the anchor slug for a piece of text")]
  Slug {
    #[arg(value_name = "TEXT")]
    text: String,
  },
}

impl Arguments {
  fn engine(&self) -> ContentEngine {
    ContentEngine::new(
      ContentOptions::builder()
        .max_elems_to_parse(self.max_elements)
        .strip_dangerous_blocks(!self.skip_prepass)
        .build(),
    )
  }

  fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
      Some(path) if path != Path::new("-") => fs::read_to_string(path)
        .with_context(|| {
          format!("failed to read file from `{}`", path.display())
        }),
      _ => {
        let mut buffer = String::new();

        io::stdin()
          .read_to_string(&mut buffer)
          .context("failed to read stdin")?;

        Ok(buffer)
      }
    }
  }

  pub(crate) fn run(self) -> Result {
    let engine = self.engine();

    match &self.command {
      Command::Sanitize { input } => {
        let raw = Self::read_input(input.as_deref())?;

        println!(
          "{}",
          engine.sanitize(&raw).context("failed to sanitize content")?
        );
      }
      Command::Prepare { input } => {
        let raw = Self::read_input(input.as_deref())?;

        let prepared =
          engine.prepare(&raw).context("failed to prepare content")?;

        println!("{}", serde_json::to_string_pretty(&prepared)?);
      }
      Command::Slug { text } => println!("{}", engine.slug(text)),
    }

    Ok(())
  }
}
