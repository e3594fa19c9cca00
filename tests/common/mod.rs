//! Shared test helpers and scripted provider.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use topiclens::error::LookupError;
use topiclens::provider::{ChunkStream, ContentProvider};
use topiclens::types::*;

/// One scripted upstream item.
pub enum Step {
    Chunk(ContentChunk),
    Fail(String),
}

/// A provider that replays a fixed script of chunks.
pub struct ScriptedProvider {
    steps: Mutex<Vec<Step>>,
    connect_error: Option<String>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps),
            connect_error: None,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider whose request is rejected before any chunk arrives.
    pub fn refusing(message: &str) -> Self {
        let mut provider = Self::new(Vec::new());
        provider.connect_error = Some(message.to_string());
        provider
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContentProvider for ScriptedProvider {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }

    async fn stream_content(&self, prompt: &str) -> Result<ChunkStream, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(message) = &self.connect_error {
            return Err(LookupError::api(503, message.clone()));
        }

        let steps = std::mem::take(&mut *self.steps.lock().unwrap());
        let stream = async_stream::stream! {
            for step in steps {
                match step {
                    Step::Chunk(chunk) => yield Ok(chunk),
                    Step::Fail(message) => yield Err(LookupError::Stream(message)),
                }
            }
        };
        Ok(Box::pin(stream))
    }
}

pub fn text(text: &str) -> Step {
    Step::Chunk(ContentChunk::from_text(text))
}

pub fn text_with_image(text: &str, data: &str, mime_type: &str) -> Step {
    Step::Chunk(ContentChunk::from_text(text).with_part(ChunkPart::inline(data, mime_type)))
}
