//! topiclens CLI binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use topiclens::cli::Cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match topiclens::cli::run(cli).await {
        Ok(result) if result.is_complete() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
