use crate::{
    compose::layer::{LayerStack, Preview, RenderLayer},
    effects::{
        mode::EffectMode,
        recipe::{LayerSpec, recipe_for},
    },
    foundation::core::VideoRef,
};

/// Interprets the static recipe table into concrete layer trees.
///
/// Rendering is pure: it never fetches, decodes or inspects the video, and the same
/// `(video, mode)` pair always produces an equal [`LayerStack`].
pub struct Compositor;

impl Compositor {
    #[tracing::instrument(skip(video), fields(video = %video))]
    pub fn render(video: &VideoRef, mode: EffectMode) -> LayerStack {
        let recipe = recipe_for(mode);
        let layers = recipe
            .layers
            .iter()
            .map(|spec| instantiate(spec, video))
            .collect();
        LayerStack {
            mode: recipe.mode,
            badge: (recipe.mode != EffectMode::None).then(|| recipe.mode.tag().to_string()),
            layers,
        }
    }

    /// Render from a raw mode tag. Unknown tags render as [`EffectMode::None`].
    pub fn render_tag(video: &VideoRef, tag: &str) -> LayerStack {
        Self::render(video, EffectMode::parse_lossy(tag))
    }

    /// Preview surface content; a missing source video yields a placeholder.
    pub fn preview(video: Option<&VideoRef>, mode: EffectMode) -> Preview {
        match video {
            Some(v) => Preview::Composite(Self::render(v, mode)),
            None => Preview::Placeholder,
        }
    }
}

/// Shorthand for [`Compositor::render`].
pub fn render(video: &VideoRef, mode: EffectMode) -> LayerStack {
    Compositor::render(video, mode)
}

fn instantiate(spec: &LayerSpec, video: &VideoRef) -> RenderLayer {
    RenderLayer {
        video: video.clone(),
        placement: spec.placement,
        transform: spec.transform,
        border: spec.border,
        mask: spec.mask,
        blend: spec.blend,
        animation: spec.animation,
        children: spec
            .children
            .iter()
            .map(|child| instantiate(child, video))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
