use crate::{
    compose::{
        ease::{Ease, loop_phase, there_and_back},
        layer::{Animation, BlendMode, Border, LayerStack, Mask, RenderLayer},
    },
    effects::mode::EffectMode,
    foundation::{
        core::{Affine, Canvas, Rect, VideoRef},
        error::{FractalError, FractalResult},
    },
};

/// A layer resolved at one instant onto a pixel canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SampledLayer {
    pub video: VideoRef,
    /// 1 for root layers.
    pub depth: usize,
    /// Layout box before `transform` is applied.
    pub bounds: Rect,
    /// Absolute transform, parents included.
    pub transform: Affine,
    pub rotation_deg: f64,
    pub scale: f64,
    /// Effective opacity, parents included.
    pub opacity: f64,
    pub blur_px: f64,
    pub hue_rotate_deg: f64,
    pub blend: BlendMode,
    pub mask: Mask,
    pub border: Option<Border>,
}

/// Flat back-to-front draw list for one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SampledFrame {
    pub t_secs: f64,
    pub canvas: Canvas,
    pub mode: EffectMode,
    pub badge: Option<String>,
    pub layers: Vec<SampledLayer>,
}

#[derive(Clone, Copy, Debug)]
struct ParentCtx {
    bounds: Rect,
    transform: Affine,
    opacity: f64,
}

/// Resolve `stack` at `t_secs` on `canvas`.
#[tracing::instrument(skip(stack), fields(mode = %stack.mode))]
pub fn sample(stack: &LayerStack, canvas: Canvas, t_secs: f64) -> FractalResult<SampledFrame> {
    if !t_secs.is_finite() || t_secs < 0.0 {
        return Err(FractalError::validation(
            "sample time must be finite and >= 0",
        ));
    }
    if canvas.width == 0 || canvas.height == 0 {
        return Err(FractalError::validation("canvas width/height must be > 0"));
    }

    let root = ParentCtx {
        bounds: canvas.bounds(),
        transform: Affine::IDENTITY,
        opacity: 1.0,
    };
    let mut out = Vec::with_capacity(stack.layer_count());
    for layer in &stack.layers {
        sample_layer(layer, root, 1, t_secs, &mut out);
    }

    Ok(SampledFrame {
        t_secs,
        canvas,
        mode: stack.mode,
        badge: stack.badge.clone(),
        layers: out,
    })
}

fn sample_layer(
    layer: &RenderLayer,
    parent: ParentCtx,
    depth: usize,
    t_secs: f64,
    out: &mut Vec<SampledLayer>,
) {
    let bounds = layer.placement.unit_rect().within(parent.bounds);
    let motion = Motion::at(layer.animation, t_secs);

    let scale = layer.transform.scale * motion.scale_mul;
    let sx = if layer.transform.flip_x { -scale } else { scale };
    let sy = if layer.transform.flip_y { -scale } else { scale };
    let center = bounds.center().to_vec2();

    // T(center) * R(rot) * S(flip * scale) * T(-center)
    let local = Affine::translate(center)
        * Affine::rotate(motion.rotation_deg.to_radians())
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate(-center);
    let transform = parent.transform * local;
    let opacity = (parent.opacity * layer.transform.opacity * motion.opacity_mul).clamp(0.0, 1.0);

    out.push(SampledLayer {
        video: layer.video.clone(),
        depth,
        bounds,
        transform,
        rotation_deg: motion.rotation_deg,
        scale,
        opacity,
        blur_px: layer.transform.blur_px,
        hue_rotate_deg: layer.transform.hue_rotate_deg,
        blend: layer.blend,
        mask: layer.mask,
        border: layer.border,
    });

    let ctx = ParentCtx {
        bounds,
        transform,
        opacity,
    };
    for child in &layer.children {
        sample_layer(child, ctx, depth + 1, t_secs, out);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Motion {
    rotation_deg: f64,
    scale_mul: f64,
    opacity_mul: f64,
}

impl Motion {
    const REST: Self = Self {
        rotation_deg: 0.0,
        scale_mul: 1.0,
        opacity_mul: 1.0,
    };

    fn at(animation: Option<Animation>, t_secs: f64) -> Self {
        let Some(animation) = animation else {
            return Self::REST;
        };
        let phase = loop_phase(t_secs, animation.period_secs());
        match animation {
            Animation::Spin { direction, .. } => Self {
                rotation_deg: direction.sign() * 360.0 * Ease::Linear.apply(phase),
                ..Self::REST
            },
            Animation::Pulse {
                min_opacity,
                peak_scale,
                ..
            } => {
                let w = there_and_back(phase, Ease::InOutQuad);
                Self {
                    rotation_deg: 0.0,
                    scale_mul: 1.0 + (peak_scale - 1.0) * w,
                    opacity_mul: 1.0 - (1.0 - min_opacity) * w,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/sample.rs"]
mod tests;
