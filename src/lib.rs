//! topiclens: streamed topic lookups.
//!
//! Sends one combined text + image generation request for a topic and turns
//! the provider's chunked response into a stream of [`types::StreamEvent`]s:
//! running text, a late-arriving illustration, and at most one terminal
//! failure that never retracts what was already delivered.
//!
//! # Quick Start
//!
//! ```no_run
//! use futures::StreamExt;
//! use topiclens::prelude::*;
//!
//! # async fn example() -> topiclens::error::Result<()> {
//! let coordinator = StreamCoordinator::from_config(&LookupConfig::from_env())?;
//! let mut events = coordinator.generate("Photosynthesis", LanguageCode::En, GenerationMode::Eli5);
//! while let Some(event) = events.next().await {
//!     match event {
//!         StreamEvent::TextDelta { text } => print!("{text}"),
//!         StreamEvent::ImageReady { url } => println!("\n[image: {} bytes]", url.len()),
//!         StreamEvent::Failed { message } => eprintln!("{message}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod prelude;
pub mod prompt;
pub mod provider;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
