use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::{
    collab::{
        GeneratedVideo, OFFLINE_PROMPT, ProgressSink, PromptWriter, VideoGenerator,
        ViralAnalysis, ViralityAnalyst,
    },
    effects::mode::EffectMode,
    foundation::config::StudioConfig,
    project::seed::placeholder_for,
};

/// Collaborators used without credentials: simulated latency, placeholder clips,
/// mock analysis.
#[derive(Clone, Debug)]
pub struct OfflineStudio {
    generation_latency: Duration,
    analysis_latency: Duration,
}

impl OfflineStudio {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            generation_latency: config.mock_generation_latency(),
            analysis_latency: config.mock_analysis_latency(),
        }
    }

    /// No simulated latency at all.
    pub fn instant() -> Self {
        Self {
            generation_latency: Duration::ZERO,
            analysis_latency: Duration::ZERO,
        }
    }
}

#[async_trait]
impl VideoGenerator for OfflineStudio {
    async fn request_video(
        &self,
        prompt: &str,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> GeneratedVideo {
        progress.report("Generating base clip...");
        let video = placeholder_for(prompt);
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("offline generation cancelled");
                GeneratedVideo::fallback(video, "generation cancelled")
            }
            _ = tokio::time::sleep(self.generation_latency) => {
                progress.report("Base clip ready.");
                GeneratedVideo::fallback(video, "no API key configured")
            }
        }
    }
}

#[async_trait]
impl ViralityAnalyst for OfflineStudio {
    async fn request_analysis(
        &self,
        _title: &str,
        _description: &str,
        _mode: EffectMode,
    ) -> ViralAnalysis {
        tokio::time::sleep(self.analysis_latency).await;
        let mut rng = rand::thread_rng();
        ViralAnalysis::mock(&mut rng)
    }
}

#[async_trait]
impl PromptWriter for OfflineStudio {
    async fn request_creative_prompt(&self) -> String {
        OFFLINE_PROMPT.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collab/offline.rs"]
mod tests;
