//! FractalFlow turns a source video into layered "fractal" remixes and carries a
//! creative session from prompt to published project.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: prompt -> source clip via a [`VideoGenerator`] (Gemini or offline)
//! 2. **Compose**: `(VideoRef, EffectMode) -> LayerStack` via the static recipe table
//! 3. **Sample** (optional): `LayerStack + t -> SampledFrame` with concrete geometry
//! 4. **Analyze**: virality score and suggestions via a [`ViralityAnalyst`]
//! 5. **Publish**: a [`ProjectRecord`] lands at the head of the [`SessionStore`]
//!
//! Composition and sampling are pure and deterministic. Collaborator calls never fail:
//! errors are logged and replaced by fallback values. [`StudioSession`] enforces the
//! step order and exposes a cancellation token for in-flight generation.
#![forbid(unsafe_code)]

mod collab;
mod compose;
mod effects;
mod foundation;
mod project;
mod studio;

pub use collab::analysis::{
    FALLBACK_SCORE, ViralAnalysis, analysis_prompt, analysis_response_schema, parse_analysis,
};
pub use collab::gemini::GeminiStudio;
pub use collab::offline::OfflineStudio;
pub use collab::poll::{PollPolicy, PollStatus, poll_until};
pub use collab::{
    ChannelProgress, Collaborators, EMPTY_PROMPT_FALLBACK, FAILED_PROMPT_FALLBACK,
    GeneratedVideo, NoProgress, OFFLINE_PROMPT, ProgressSink, PromptWriter, VideoGenerator,
    VideoOrigin, ViralityAnalyst, studio_collaborators,
};
pub use compose::compositor::{Compositor, render};
pub use compose::ease::{Ease, loop_phase, there_and_back};
pub use compose::layer::{
    Animation, BlendMode, Border, GRID_DIM, LayerStack, Mask, Placement, Preview, RenderLayer,
    SpinDirection, VisualTransform,
};
pub use compose::sample::{SampledFrame, SampledLayer, sample};
pub use effects::mode::{EffectMode, is_valid, list_modes};
pub use effects::recipe::{LayerSpec, RECIPES, Recipe, recipe_for};
pub use foundation::config::{API_KEY_ENV_VARS, StudioConfig};
pub use foundation::core::{
    Affine, Canvas, Point, ProjectId, Rect, Rgba8, UnitRect, Vec2, VideoRef,
};
pub use foundation::error::{FractalError, FractalResult};
pub use project::model::{ProjectRecord, ViralityScore, ViralityTier};
pub use project::seed::{EXAMPLE_PROMPTS, PLACEHOLDER_VIDEOS, placeholder_for, seed_projects};
pub use project::store::{SessionStore, SharedSessionStore};
pub use studio::session::{StudioSession, StudioStep, new_project_id};
