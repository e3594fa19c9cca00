//! CLI entry point for topiclens.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use futures::StreamExt;

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::generation::StreamCoordinator;
use crate::types::{DataUri, GenerationMode, LanguageCode, LookupResult, StreamEvent};

/// Look up a topic and stream an explanation plus an illustration.
#[derive(Parser, Debug)]
#[command(name = "topiclens", version, about = "topiclens: streamed topic lookups")]
pub struct Cli {
    /// Topic to explain
    pub topic: String,

    /// Response language code (en, es, fr, ...)
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Generation mode (encyclopedia, eli5, practicalExamples, stepByStep, summary, funFacts)
    #[arg(short, long, default_value = "encyclopedia")]
    pub mode: String,

    /// Write the illustration to this path
    #[arg(short, long)]
    pub image_out: Option<PathBuf>,

    /// Override the model id
    #[arg(long)]
    pub model: Option<String>,
}

/// Run one lookup, printing text as it arrives.
///
/// Returns the collected result so the caller can pick an exit code.
pub async fn run(cli: Cli) -> Result<LookupResult, LookupError> {
    let mut config = LookupConfig::from_env();
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    let coordinator = StreamCoordinator::from_config(&config)?;
    let language = LanguageCode::from_code(&cli.lang);
    let mode = GenerationMode::from_tag(&cli.mode);

    let mut events = coordinator.generate(cli.topic, language, mode);
    let mut result = LookupResult::default();
    let mut stdout = std::io::stdout();

    while let Some(event) = events.next().await {
        match &event {
            StreamEvent::TextDelta { text } => {
                write!(stdout, "{text}")?;
                stdout.flush()?;
            }
            StreamEvent::ImageReady { url } => {
                tracing::debug!(bytes = url.len(), "image received");
            }
            StreamEvent::Failed { message } => {
                eprintln!("\n{message}");
            }
        }
        result.apply(event);
    }
    writeln!(stdout)?;

    if let (Some(path), Some(url)) = (cli.image_out, result.image()) {
        let image = DataUri::parse(url)?;
        std::fs::write(&path, image.decode()?)?;
        eprintln!("image ({}) written to {}", image.mime_type, path.display());
    }

    Ok(result)
}
