use crate::{
    effects::mode::EffectMode,
    foundation::core::{Rgba8, UnitRect, VideoRef},
};

/// Side length of the grid used by [`Placement::GridCell`].
pub const GRID_DIM: u8 = 2;

/// Where a layer sits inside its parent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Covers the parent.
    FullBleed,
    /// Fractional rectangle of the parent.
    Inset { rect: UnitRect },
    /// One cell of the fixed `GRID_DIM` x `GRID_DIM` grid, row-major.
    GridCell { row: u8, col: u8 },
}

impl Placement {
    /// Placement in the parent's unit space.
    pub fn unit_rect(self) -> UnitRect {
        match self {
            Self::FullBleed => UnitRect::FULL,
            Self::Inset { rect } => rect,
            Self::GridCell { row, col } => {
                let step = 1.0 / f64::from(GRID_DIM);
                let x0 = f64::from(col) * step;
                let y0 = f64::from(row) * step;
                UnitRect::new(x0, y0, x0 + step, y0 + step)
            }
        }
    }

    pub fn is_full_bleed(self) -> bool {
        matches!(self, Self::FullBleed)
    }
}

/// Static per-layer filter and geometry adjustments.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualTransform {
    pub flip_x: bool,
    pub flip_y: bool,
    pub hue_rotate_deg: f64,
    pub blur_px: f64,
    pub opacity: f64, // 0..1
    pub scale: f64,   // uniform, about the layer center
}

impl VisualTransform {
    pub const IDENTITY: Self = Self {
        flip_x: false,
        flip_y: false,
        hue_rotate_deg: 0.0,
        blur_px: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for VisualTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Border {
    pub width_px: f64,
    pub color: Rgba8,
}

impl Border {
    pub const fn new(width_px: f64, color: Rgba8) -> Self {
        Self { width_px, color }
    }
}

/// Clip shape applied to a layer's box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mask {
    #[default]
    Rect,
    Circle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Normal,
    /// Lighten-style screen blend.
    Screen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinDirection {
    Clockwise,
    CounterClockwise,
}

impl SpinDirection {
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Continuous, looping animation attached to a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    /// Full turn every `period_secs`.
    Spin {
        period_secs: f64,
        direction: SpinDirection,
    },
    /// Opacity dips to `min_opacity` and scale swells to `peak_scale` at mid-period.
    Pulse {
        period_secs: f64,
        min_opacity: f64,
        peak_scale: f64,
    },
}

impl Animation {
    pub fn period_secs(self) -> f64 {
        match self {
            Self::Spin { period_secs, .. } | Self::Pulse { period_secs, .. } => period_secs,
        }
    }

    /// Angular speed in degrees per second, signed by direction. Zero for pulses.
    pub fn angular_rate_deg(self) -> f64 {
        match self {
            Self::Spin {
                period_secs,
                direction,
            } => direction.sign() * 360.0 / period_secs,
            Self::Pulse { .. } => 0.0,
        }
    }
}

/// One displayed instance of the source video.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderLayer {
    pub video: VideoRef,
    pub placement: Placement,
    pub transform: VisualTransform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default)]
    pub mask: Mask,
    #[serde(default)]
    pub blend: BlendMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderLayer>,
}

impl RenderLayer {
    /// A full-bleed, untransformed instance of `video`.
    pub fn full_bleed(video: VideoRef) -> Self {
        Self {
            video,
            placement: Placement::FullBleed,
            transform: VisualTransform::IDENTITY,
            border: None,
            mask: Mask::Rect,
            blend: BlendMode::Normal,
            animation: None,
            children: Vec::new(),
        }
    }

    /// Nesting depth including this layer.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Number of layers in this subtree including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    pub fn is_unmodified(&self) -> bool {
        self.placement.is_full_bleed()
            && self.transform.is_identity()
            && self.border.is_none()
            && self.mask == Mask::Rect
            && self.blend == BlendMode::Normal
            && self.animation.is_none()
            && self.children.is_empty()
    }
}

/// Compositor output: sibling root layers, back to front.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerStack {
    pub mode: EffectMode,
    /// Overlay label shown on top of the composite; absent for `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub layers: Vec<RenderLayer>,
}

impl LayerStack {
    /// Total number of layers, nested ones included.
    pub fn layer_count(&self) -> usize {
        self.layers.iter().map(RenderLayer::count).sum()
    }

    /// Deepest nesting among the root layers.
    pub fn max_depth(&self) -> usize {
        self.layers.iter().map(RenderLayer::depth).max().unwrap_or(0)
    }

    /// Depth-first, back-to-front walk yielding `(depth, layer)` with roots at depth 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RenderLayer)> + '_ {
        let mut pending: Vec<(usize, &RenderLayer)> =
            self.layers.iter().rev().map(|l| (1, l)).collect();
        std::iter::from_fn(move || {
            let (depth, layer) = pending.pop()?;
            pending.extend(layer.children.iter().rev().map(|c| (depth + 1, c)));
            Some((depth, layer))
        })
    }
}

/// What the preview surface shows.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Preview {
    /// No source video yet.
    Placeholder,
    Composite(LayerStack),
}

impl Preview {
    pub fn stack(&self) -> Option<&LayerStack> {
        match self {
            Self::Placeholder => None,
            Self::Composite(stack) => Some(stack),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layer.rs"]
mod tests;
