use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    collab::{Collaborators, GeneratedVideo, ProgressSink, ViralAnalysis},
    compose::{compositor::Compositor, layer::Preview},
    effects::mode::EffectMode,
    foundation::{
        core::ProjectId,
        error::{FractalError, FractalResult},
    },
    project::{
        model::{ProjectRecord, ViralityScore},
        store::{SessionStore, SharedSessionStore},
    },
};

const UPLOADED_TITLE: &str = "Uploaded Video";
const ANALYSIS_DESCRIPTION: &str = "A generated fractal video";
const UNTITLED: &str = "Untitled Fractal";
const DEFAULT_DESCRIPTION: &str = "Remixed fractal video";
const PUBLISHED_THUMBNAIL: &str = "https://picsum.photos/400/225";
const TITLE_CHARS: usize = 30;
const ID_SUFFIX_LEN: usize = 9;

/// Where a session is in the create flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudioStep {
    Source,
    Remix,
    Review,
    Published,
}

impl std::fmt::Display for StudioStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Source => "source",
            Self::Remix => "remix",
            Self::Review => "review",
            Self::Published => "published",
        };
        f.write_str(name)
    }
}

/// One pass through the create flow: prompt, generate, remix, analyze, publish.
///
/// Steps run strictly in order. A call made in the wrong step returns
/// [`FractalError::Workflow`] and leaves the session untouched.
pub struct StudioSession {
    collaborators: Arc<dyn Collaborators>,
    step: StudioStep,
    prompt: String,
    source: Option<GeneratedVideo>,
    mode: EffectMode,
    analysis: Option<ViralAnalysis>,
    published: Option<ProjectId>,
    cancel: CancellationToken,
}

impl std::fmt::Debug for StudioSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioSession")
            .field("step", &self.step)
            .field("prompt", &self.prompt)
            .field("source", &self.source)
            .field("mode", &self.mode)
            .field("analysis", &self.analysis)
            .field("published", &self.published)
            .finish_non_exhaustive()
    }
}

impl StudioSession {
    pub fn new(collaborators: Arc<dyn Collaborators>) -> Self {
        Self {
            collaborators,
            step: StudioStep::Source,
            prompt: String::new(),
            source: None,
            mode: EffectMode::None,
            analysis: None,
            published: None,
            cancel: CancellationToken::new(),
        }
    }

    pub fn step(&self) -> StudioStep {
        self.step
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn source(&self) -> Option<&GeneratedVideo> {
        self.source.as_ref()
    }

    pub fn mode(&self) -> EffectMode {
        self.mode
    }

    pub fn analysis(&self) -> Option<&ViralAnalysis> {
        self.analysis.as_ref()
    }

    /// Id of the record created by [`StudioSession::publish`].
    pub fn published(&self) -> Option<&ProjectId> {
        self.published.as_ref()
    }

    /// Token that aborts an in-flight generation. Clone it before calling
    /// [`StudioSession::generate`].
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    fn expect_step(&self, wanted: StudioStep, action: &str) -> FractalResult<()> {
        if self.step == wanted {
            Ok(())
        } else {
            Err(FractalError::workflow(format!(
                "cannot {action} during the {} step (needs {wanted})",
                self.step
            )))
        }
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) -> FractalResult<()> {
        self.expect_step(StudioStep::Source, "edit the prompt")?;
        self.prompt = prompt.into();
        Ok(())
    }

    /// Replace the prompt with one written by the prompt collaborator.
    pub async fn auto_prompt(&mut self) -> FractalResult<&str> {
        self.expect_step(StudioStep::Source, "write a prompt")?;
        self.prompt = self.collaborators.request_creative_prompt().await;
        Ok(&self.prompt)
    }

    /// Produce the source clip and move to the remix step.
    ///
    /// A failed or cancelled generation still advances, with a placeholder clip.
    #[tracing::instrument(skip(self, progress), fields(prompt = %self.prompt))]
    pub async fn generate(
        &mut self,
        progress: &dyn ProgressSink,
    ) -> FractalResult<&GeneratedVideo> {
        self.expect_step(StudioStep::Source, "generate")?;
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(FractalError::validation("prompt must be non-empty"));
        }
        let generated = self
            .collaborators
            .request_video(prompt, progress, &self.cancel)
            .await;
        if generated.is_fallback() {
            tracing::info!(video = %generated.video, "continuing with placeholder clip");
        }
        self.step = StudioStep::Remix;
        Ok(&*self.source.insert(generated))
    }

    pub fn select_mode(&mut self, mode: EffectMode) -> FractalResult<()> {
        self.expect_step(StudioStep::Remix, "select a mode")?;
        self.mode = mode;
        Ok(())
    }

    /// What the studio shows right now. Available in every step.
    pub fn preview(&self) -> Preview {
        Compositor::preview(self.source.as_ref().map(|s| &s.video), self.mode)
    }

    /// Score the remix and move to review. Requires a mode other than `None`.
    #[tracing::instrument(skip(self), fields(mode = %self.mode))]
    pub async fn analyze(&mut self) -> FractalResult<&ViralAnalysis> {
        self.expect_step(StudioStep::Remix, "analyze")?;
        if self.mode == EffectMode::None {
            return Err(FractalError::workflow("select an effect mode before analysis"));
        }
        let title = match self.prompt.trim() {
            "" => UPLOADED_TITLE,
            p => p,
        };
        let analysis = self
            .collaborators
            .request_analysis(title, ANALYSIS_DESCRIPTION, self.mode)
            .await;
        self.step = StudioStep::Review;
        Ok(&*self.analysis.insert(analysis))
    }

    fn finished_record(&self) -> FractalResult<ProjectRecord> {
        self.expect_step(StudioStep::Review, "publish")?;
        let (Some(source), Some(analysis)) = (&self.source, &self.analysis) else {
            return Err(FractalError::workflow("review step is missing its source or analysis"));
        };
        Ok(published_record(
            new_project_id(),
            &self.prompt,
            source,
            self.mode,
            analysis,
        ))
    }

    fn mark_published(&mut self, record: &ProjectRecord) {
        tracing::info!(id = %record.id, mode = %record.fractal_mode, "project published");
        self.published = Some(record.id.clone());
        self.step = StudioStep::Published;
    }

    /// Insert the finished project into `store` and return a copy of it.
    pub fn publish(&mut self, store: &mut SessionStore) -> FractalResult<ProjectRecord> {
        let record = self.finished_record()?;
        store.insert(record.clone());
        self.mark_published(&record);
        Ok(record)
    }

    /// [`StudioSession::publish`] against a store shared between sessions.
    pub async fn publish_shared(
        &mut self,
        store: &SharedSessionStore,
    ) -> FractalResult<ProjectRecord> {
        let record = self.finished_record()?;
        store.insert(record.clone()).await;
        self.mark_published(&record);
        Ok(record)
    }

    /// Back to an empty source step. Cancels any generation still holding the old token.
    pub fn reset(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.step = StudioStep::Source;
        self.prompt.clear();
        self.source = None;
        self.mode = EffectMode::None;
        self.analysis = None;
        self.published = None;
    }
}

/// `<unix-millis>-<9 lowercase alphanumerics>`.
pub fn new_project_id() -> ProjectId {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ID_SUFFIX_LEN)
        .collect();
    ProjectId::new(format!("{millis}-{suffix}"))
}

fn published_record(
    id: ProjectId,
    prompt: &str,
    source: &GeneratedVideo,
    mode: EffectMode,
    analysis: &ViralAnalysis,
) -> ProjectRecord {
    let prompt = prompt.trim();
    let (title, description) = if prompt.is_empty() {
        (UNTITLED.to_string(), DEFAULT_DESCRIPTION.to_string())
    } else {
        let head: String = prompt.chars().take(TITLE_CHARS).collect();
        (format!("{head}..."), prompt.to_string())
    };
    ProjectRecord {
        id,
        title,
        description,
        thumbnail_url: PUBLISHED_THUMBNAIL.to_string(),
        video_url: source.video.clone(),
        created_at: "Just now".to_string(),
        views: 0,
        remixes: 0,
        virality_score: ViralityScore::new(i64::from(analysis.score)),
        author: "Me".to_string(),
        fractal_mode: mode,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/session.rs"]
mod tests;
