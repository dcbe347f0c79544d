//! Collaborators backed by the Gemini REST API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    collab::{
        EMPTY_PROMPT_FALLBACK, FAILED_PROMPT_FALLBACK, GeneratedVideo, ProgressSink,
        PromptWriter, VideoGenerator, VideoOrigin, ViralAnalysis, ViralityAnalyst,
        analysis::{analysis_prompt, analysis_response_schema, parse_analysis},
        poll::{PollPolicy, PollStatus, poll_until},
    },
    effects::mode::EffectMode,
    foundation::{
        config::StudioConfig,
        core::VideoRef,
        error::{FractalError, FractalResult},
    },
    project::seed::placeholder_for,
};

const API_KEY_HEADER: &str = "x-goog-api-key";
const CREATIVE_PROMPT_INSTRUCTION: &str = "Generate a single, highly descriptive, creative \
    text-to-video prompt for a viral, abstract, or surreal short video. \
    Output ONLY the prompt string.";

#[derive(Clone, Debug)]
pub struct GeminiStudio {
    client: Client,
    api_key: String,
    config: StudioConfig,
}

impl GeminiStudio {
    /// Build a client from `config`. Requires an API key.
    pub fn new(config: StudioConfig) -> FractalResult<Self> {
        config.validate()?;
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| FractalError::validation("gemini collaborators need an API key"))?;
        let mut builder = Client::builder().timeout(config.request_timeout());
        if targets_loopback(&config.api_base) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| FractalError::Other(anyhow::Error::new(e)))?;
        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.api_base.trim_end_matches('/'))
    }

    fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(self.config.poll_interval(), self.config.max_poll_attempts)
    }

    /// Text of the first candidate; `None` when the model answered without any.
    async fn generate_text(
        &self,
        prompt: &str,
        response_schema: Option<serde_json::Value>,
    ) -> FractalResult<Option<String>> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: response_schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        };
        let url = self.url(&format!("models/{}:generateContent", self.config.text_model));
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;
        let parsed: GenerateContentResponse = read_json(response).await?;
        Ok(first_candidate_text(parsed))
    }

    async fn start_video(&self, prompt: &str) -> FractalResult<String> {
        let body = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
        };
        let url = self.url(&format!("models/{}:predictLongRunning", self.config.video_model));
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;
        let op: Operation = read_json(response).await?;
        if op.name.trim().is_empty() {
            return Err(FractalError::collaborator(
                "video generation returned no operation name",
            ));
        }
        Ok(op.name)
    }

    async fn video_status(&self, operation: &str) -> FractalResult<PollStatus<VideoRef>> {
        let response = self
            .client
            .get(self.url(operation))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let op: Operation = read_json(response).await?;
        operation_status(op)
    }

    #[tracing::instrument(skip(self, progress, cancel))]
    async fn generate_video(
        &self,
        prompt: &str,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> FractalResult<VideoRef> {
        progress.report("Submitting prompt to the video model...");
        let operation = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(FractalError::Cancelled),
            op = self.start_video(prompt) => op?,
        };
        tracing::debug!(%operation, "video generation started");

        let operation = operation.as_str();
        let video = poll_until(self.poll_policy(), cancel, progress, |_| {
            self.video_status(operation)
        })
        .await?;
        progress.report("Video ready.");
        Ok(video)
    }
}

#[async_trait]
impl VideoGenerator for GeminiStudio {
    async fn request_video(
        &self,
        prompt: &str,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> GeneratedVideo {
        match self.generate_video(prompt, progress, cancel).await {
            Ok(video) => GeneratedVideo {
                video,
                origin: VideoOrigin::Generated,
            },
            Err(FractalError::Cancelled) => {
                tracing::info!("video generation cancelled");
                GeneratedVideo::fallback(placeholder_for(prompt), "generation cancelled")
            }
            Err(err) => {
                tracing::warn!(error = %err, "video generation failed, using placeholder");
                progress.report("Generation unavailable, using a placeholder clip.");
                GeneratedVideo::fallback(placeholder_for(prompt), err.to_string())
            }
        }
    }
}

#[async_trait]
impl ViralityAnalyst for GeminiStudio {
    async fn request_analysis(
        &self,
        title: &str,
        description: &str,
        mode: EffectMode,
    ) -> ViralAnalysis {
        let prompt = analysis_prompt(title, description, mode);
        let result = self
            .generate_text(&prompt, Some(analysis_response_schema()))
            .await
            .and_then(|text| parse_analysis(text.as_deref().unwrap_or_default()));
        match result {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!(error = %err, "virality analysis failed, using fallback");
                ViralAnalysis::fallback()
            }
        }
    }
}

#[async_trait]
impl PromptWriter for GeminiStudio {
    async fn request_creative_prompt(&self) -> String {
        match self.generate_text(CREATIVE_PROMPT_INSTRUCTION, None).await {
            Ok(Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => EMPTY_PROMPT_FALLBACK.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "creative prompt failed, using fallback");
                FAILED_PROMPT_FALLBACK.to_string()
            }
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> FractalResult<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(map_http_error(status, &body));
    }
    Ok(serde_json::from_str(&body)?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
}

#[derive(Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Deserialize)]
struct Operation {
    #[serde(default)]
    name: String,
    #[serde(default)]
    done: bool,
    error: Option<ErrorBody>,
    response: Option<OperationResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationResponse {
    generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateVideoResponse {
    #[serde(default)]
    generated_samples: Vec<GeneratedSample>,
}

#[derive(Deserialize)]
struct GeneratedSample {
    video: Option<VideoFile>,
}

#[derive(Deserialize)]
struct VideoFile {
    uri: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

impl ErrorBody {
    fn describe(self, fallback: &str) -> String {
        let msg = self.message.unwrap_or_else(|| fallback.to_string());
        match self.status.filter(|s| !s.is_empty()) {
            Some(status) => format!("{status}: {msg}"),
            None => msg,
        }
    }
}

/// Local endpoints (emulators, stubs) are reached directly, never via a system proxy.
fn targets_loopback(api_base: &str) -> bool {
    reqwest::Url::parse(api_base)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
        .is_some_and(|host| host == "localhost" || host == "127.0.0.1" || host == "[::1]")
}

fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates?
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|part| part.text)
}

fn operation_status(op: Operation) -> FractalResult<PollStatus<VideoRef>> {
    if let Some(error) = op.error {
        return Err(FractalError::collaborator(
            error.describe("video generation failed"),
        ));
    }
    if !op.done {
        return Ok(PollStatus::Pending);
    }
    op.response
        .and_then(|r| r.generate_video_response)
        .and_then(|r| r.generated_samples.into_iter().next())
        .and_then(|s| s.video)
        .and_then(|v| v.uri)
        .filter(|uri| !uri.trim().is_empty())
        .map(|uri| PollStatus::Ready(VideoRef::new(uri)))
        .ok_or_else(|| FractalError::collaborator("finished operation carried no video uri"))
}

fn map_http_error(status: StatusCode, body: &str) -> FractalError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| wrapper.error.describe(body))
        .unwrap_or_else(|_| body.to_string());
    FractalError::collaborator(format!("HTTP {}: {message}", status.as_u16()))
}

#[cfg(test)]
#[path = "../../tests/unit/collab/gemini.rs"]
mod tests;
