//! External generation and analysis services.
//!
//! Every collaborator call is infallible from the caller's side: failures are logged
//! and replaced by a fallback value at this boundary, so the creative flow never
//! blocks on a remote service.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::{
    effects::mode::EffectMode,
    foundation::{config::StudioConfig, core::VideoRef},
};

pub mod analysis;
pub mod gemini;
pub mod offline;
pub mod poll;

pub use analysis::ViralAnalysis;
pub use gemini::GeminiStudio;
pub use offline::OfflineStudio;

/// Creative prompt offered when no API key is configured.
pub const OFFLINE_PROMPT: &str =
    "A surreal landscape of melting clocks and floating islands, digital art style.";
/// Creative prompt used when the model answers with no text.
pub const EMPTY_PROMPT_FALLBACK: &str = "A glowing orb pulsating with rhythmic energy in a void.";
/// Creative prompt used when the prompt request fails.
pub const FAILED_PROMPT_FALLBACK: &str = "A futuristic city skyline at sunset with flying cars.";

/// Receives human-readable status lines while a long-running call progresses.
pub trait ProgressSink: Send + Sync {
    fn report(&self, status: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, status: &str) {
        self(status)
    }
}

/// Discards progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _status: &str) {}
}

/// Forwards progress lines into a channel; a dropped receiver is ignored.
#[derive(Clone, Debug)]
pub struct ChannelProgress(pub tokio::sync::mpsc::UnboundedSender<String>);

impl ProgressSink for ChannelProgress {
    fn report(&self, status: &str) {
        let _ = self.0.send(status.to_string());
    }
}

/// Where a studio source clip came from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum VideoOrigin {
    Generated,
    /// Placeholder substituted; carries why.
    Fallback(String),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedVideo {
    pub video: VideoRef,
    pub origin: VideoOrigin,
}

impl GeneratedVideo {
    pub fn fallback(video: VideoRef, reason: impl Into<String>) -> Self {
        Self {
            video,
            origin: VideoOrigin::Fallback(reason.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, VideoOrigin::Fallback(_))
    }
}

#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// Turn `prompt` into a playable clip, falling back to a placeholder on timeout,
    /// failure or cancellation.
    async fn request_video(
        &self,
        prompt: &str,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> GeneratedVideo;
}

#[async_trait]
pub trait ViralityAnalyst: Send + Sync {
    async fn request_analysis(
        &self,
        title: &str,
        description: &str,
        mode: EffectMode,
    ) -> ViralAnalysis;
}

#[async_trait]
pub trait PromptWriter: Send + Sync {
    async fn request_creative_prompt(&self) -> String;
}

/// Everything a studio session needs from the outside world.
pub trait Collaborators: VideoGenerator + ViralityAnalyst + PromptWriter {}

impl<T> Collaborators for T where T: VideoGenerator + ViralityAnalyst + PromptWriter {}

/// Gemini-backed collaborators when an API key is configured, offline ones otherwise.
pub fn studio_collaborators(config: &StudioConfig) -> Arc<dyn Collaborators> {
    if config.has_credentials() {
        match GeminiStudio::new(config.clone()) {
            Ok(gemini) => return Arc::new(gemini),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "gemini client unavailable, using offline collaborators"
                );
            }
        }
    }
    Arc::new(OfflineStudio::new(config))
}
