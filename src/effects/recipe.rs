//! Static layer descriptors for every [`EffectMode`].
//!
//! Each recipe is plain data; [`crate::compose::compositor`] instantiates it against a
//! video reference. Adding a mode means adding a table entry, not a branch.

use crate::{
    compose::layer::{
        Animation, BlendMode, Border, Mask, Placement, SpinDirection, VisualTransform,
    },
    effects::mode::EffectMode,
    foundation::core::{Rgba8, UnitRect},
};

/// Descriptor for one layer (and its nested children) of a recipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSpec {
    pub placement: Placement,
    pub transform: VisualTransform,
    pub border: Option<Border>,
    pub mask: Mask,
    pub blend: BlendMode,
    pub animation: Option<Animation>,
    pub children: &'static [LayerSpec],
}

impl LayerSpec {
    /// Full-bleed, untransformed, childless.
    pub const BASE: Self = Self {
        placement: Placement::FullBleed,
        transform: VisualTransform::IDENTITY,
        border: None,
        mask: Mask::Rect,
        blend: BlendMode::Normal,
        animation: None,
        children: &[],
    };
}

#[derive(Clone, Copy, Debug)]
pub struct Recipe {
    pub mode: EffectMode,
    /// Root layers, back to front.
    pub layers: &'static [LayerSpec],
}

const INDIGO_HALF: Rgba8 = Rgba8::new(99, 102, 241, 128);
const PURPLE_HALF: Rgba8 = Rgba8::new(168, 85, 247, 128);
const WHITE_FAINT: Rgba8 = Rgba8::new(255, 255, 255, 51);

static IDENTITY: [LayerSpec; 1] = [LayerSpec::BASE];

// Depth is fixed at three: root, inset, inset-of-inset.
static PIP_INNERMOST: [LayerSpec; 1] = [LayerSpec {
    placement: Placement::Inset {
        rect: UnitRect::centered(0.5),
    },
    border: Some(Border::new(1.0, PURPLE_HALF)),
    ..LayerSpec::BASE
}];

static PIP_INSET: [LayerSpec; 1] = [LayerSpec {
    placement: Placement::Inset {
        rect: UnitRect::centered(0.5),
    },
    border: Some(Border::new(2.0, INDIGO_HALF)),
    animation: Some(Animation::Pulse {
        period_secs: 2.0,
        min_opacity: 0.5,
        peak_scale: 1.02,
    }),
    children: &PIP_INNERMOST,
    ..LayerSpec::BASE
}];

static RECURSIVE_PIP: [LayerSpec; 1] = [LayerSpec {
    children: &PIP_INSET,
    ..LayerSpec::BASE
}];

// Tile order and filter assignment are observable; keep row-major.
static GRID_REMIX: [LayerSpec; 4] = [
    LayerSpec {
        placement: Placement::GridCell { row: 0, col: 0 },
        transform: VisualTransform {
            flip_x: true,
            hue_rotate_deg: 90.0,
            ..VisualTransform::IDENTITY
        },
        ..LayerSpec::BASE
    },
    LayerSpec {
        placement: Placement::GridCell { row: 0, col: 1 },
        ..LayerSpec::BASE
    },
    LayerSpec {
        placement: Placement::GridCell { row: 1, col: 0 },
        transform: VisualTransform {
            flip_y: true,
            ..VisualTransform::IDENTITY
        },
        ..LayerSpec::BASE
    },
    LayerSpec {
        placement: Placement::GridCell { row: 1, col: 1 },
        transform: VisualTransform {
            hue_rotate_deg: 180.0,
            ..VisualTransform::IDENTITY
        },
        ..LayerSpec::BASE
    },
];

static KALEIDOSCOPE: [LayerSpec; 3] = [
    LayerSpec {
        transform: VisualTransform {
            opacity: 0.5,
            scale: 1.5,
            ..VisualTransform::IDENTITY
        },
        animation: Some(Animation::Spin {
            period_secs: 15.0,
            direction: SpinDirection::Clockwise,
        }),
        ..LayerSpec::BASE
    },
    LayerSpec {
        transform: VisualTransform {
            opacity: 0.5,
            scale: 1.25,
            ..VisualTransform::IDENTITY
        },
        blend: BlendMode::Screen,
        animation: Some(Animation::Spin {
            period_secs: 10.0,
            direction: SpinDirection::CounterClockwise,
        }),
        ..LayerSpec::BASE
    },
    LayerSpec {
        placement: Placement::Inset {
            rect: UnitRect::centered(0.75),
        },
        border: Some(Border::new(4.0, WHITE_FAINT)),
        mask: Mask::Circle,
        animation: Some(Animation::Pulse {
            period_secs: 6.0,
            min_opacity: 1.0,
            peak_scale: 1.04,
        }),
        ..LayerSpec::BASE
    },
];

static TIME_ECHO: [LayerSpec; 3] = [
    LayerSpec {
        transform: VisualTransform {
            opacity: 0.3,
            blur_px: 4.0,
            scale: 1.05,
            ..VisualTransform::IDENTITY
        },
        ..LayerSpec::BASE
    },
    LayerSpec {
        transform: VisualTransform {
            opacity: 0.5,
            blur_px: 2.0,
            scale: 1.02,
            ..VisualTransform::IDENTITY
        },
        ..LayerSpec::BASE
    },
    LayerSpec::BASE,
];

/// Recipe table, indexed in [`EffectMode::ALL`] order.
pub static RECIPES: [Recipe; 5] = [
    Recipe {
        mode: EffectMode::None,
        layers: &IDENTITY,
    },
    Recipe {
        mode: EffectMode::RecursivePiP,
        layers: &RECURSIVE_PIP,
    },
    Recipe {
        mode: EffectMode::Kaleidoscope,
        layers: &KALEIDOSCOPE,
    },
    Recipe {
        mode: EffectMode::TimeEcho,
        layers: &TIME_ECHO,
    },
    Recipe {
        mode: EffectMode::GridRemix,
        layers: &GRID_REMIX,
    },
];

/// Recipe for `mode`; the identity recipe if the table has no entry.
pub fn recipe_for(mode: EffectMode) -> &'static Recipe {
    RECIPES
        .iter()
        .find(|r| r.mode == mode)
        .unwrap_or(&RECIPES[0])
}

#[cfg(test)]
#[path = "../../tests/unit/effects/recipe.rs"]
mod tests;
