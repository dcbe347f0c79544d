use super::*;
use crate::compose::layer::{Animation, BlendMode, Mask, Placement, SpinDirection};
use crate::foundation::core::UnitRect;

fn clip() -> VideoRef {
    VideoRef::new("https://example.test/clip.mp4")
}

#[test]
fn layer_counts_and_depths_are_fixed_per_mode() {
    let expected = [
        (EffectMode::None, 1, 1),
        (EffectMode::RecursivePiP, 3, 3),
        (EffectMode::Kaleidoscope, 3, 1),
        (EffectMode::TimeEcho, 3, 1),
        (EffectMode::GridRemix, 4, 1),
    ];
    for (mode, count, depth) in expected {
        let stack = Compositor::render(&clip(), mode);
        assert_eq!(stack.mode, mode);
        assert_eq!(stack.layer_count(), count, "{mode}");
        assert_eq!(stack.max_depth(), depth, "{mode}");
    }
}

#[test]
fn render_is_deterministic() {
    for mode in EffectMode::ALL {
        assert_eq!(render(&clip(), mode), render(&clip(), mode));
    }
}

#[test]
fn none_is_a_single_unmodified_layer_even_for_empty_ref() {
    for video in [VideoRef::new(""), clip()] {
        let stack = Compositor::render(&video, EffectMode::None);
        assert_eq!(stack.layers.len(), 1);
        assert!(stack.layers[0].is_unmodified());
        assert_eq!(stack.layers[0].video, video);
        assert_eq!(stack.badge, None);
    }
}

#[test]
fn unknown_tag_renders_like_none() {
    assert_eq!(
        Compositor::render_tag(&clip(), "Mandelbrot Zoom"),
        Compositor::render(&clip(), EffectMode::None)
    );
}

#[test]
fn grid_remix_assigns_tile_filters_in_fixed_order() {
    let stack = Compositor::render(&clip(), EffectMode::GridRemix);
    let tiles: Vec<_> = stack
        .layers
        .iter()
        .map(|l| {
            let Placement::GridCell { row, col } = l.placement else {
                panic!("grid layer without a cell placement");
            };
            (
                (row, col),
                l.transform.flip_x,
                l.transform.flip_y,
                l.transform.hue_rotate_deg,
            )
        })
        .collect();
    assert_eq!(
        tiles,
        vec![
            ((0, 0), true, false, 90.0),
            ((0, 1), false, false, 0.0),
            ((1, 0), false, true, 0.0),
            ((1, 1), false, false, 180.0),
        ]
    );
    assert!(stack.layers.iter().all(|l| l.children.is_empty()));
}

#[test]
fn recursive_pip_nests_half_size_insets_with_distinct_borders() {
    let stack = Compositor::render(&clip(), EffectMode::RecursivePiP);
    let root = &stack.layers[0];
    assert!(root.placement.is_full_bleed());
    assert_eq!(root.children.len(), 1);

    let inset = &root.children[0];
    assert_eq!(inset.placement.unit_rect(), UnitRect::centered(0.5));
    assert!(matches!(inset.animation, Some(Animation::Pulse { .. })));

    let innermost = &inset.children[0];
    assert_eq!(innermost.placement.unit_rect(), UnitRect::centered(0.5));
    assert!(innermost.children.is_empty());

    let outer_border = inset.border.unwrap();
    let inner_border = innermost.border.unwrap();
    assert_ne!(outer_border.color, inner_border.color);
    assert_eq!(stack.badge.as_deref(), Some("Recursive PiP"));
}

#[test]
fn kaleidoscope_has_a_circular_foreground_over_two_spins() {
    let stack = Compositor::render(&clip(), EffectMode::Kaleidoscope);
    let [back, mid, front] = stack.layers.as_slice() else {
        panic!("expected three layers");
    };
    assert!(matches!(
        back.animation,
        Some(Animation::Spin {
            direction: SpinDirection::Clockwise,
            ..
        })
    ));
    assert!(matches!(
        mid.animation,
        Some(Animation::Spin {
            direction: SpinDirection::CounterClockwise,
            ..
        })
    ));
    assert_eq!(mid.blend, BlendMode::Screen);
    assert_eq!(front.mask, Mask::Circle);
    assert_eq!(front.placement.unit_rect(), UnitRect::centered(0.75));
    assert!(front.border.is_some());
}

#[test]
fn time_echo_front_layer_is_sharp_and_opaque() {
    let stack = Compositor::render(&clip(), EffectMode::TimeEcho);
    let front = stack.layers.last().unwrap();
    assert_eq!(front.transform.opacity, 1.0);
    assert_eq!(front.transform.blur_px, 0.0);
    assert_eq!(front.transform.scale, 1.0);
    assert!(stack.layers.iter().all(|l| l.placement.is_full_bleed()));
}

#[test]
fn preview_without_video_is_placeholder() {
    assert_eq!(
        Compositor::preview(None, EffectMode::GridRemix),
        Preview::Placeholder
    );
    let preview = Compositor::preview(Some(&clip()), EffectMode::GridRemix);
    assert_eq!(preview.stack().map(LayerStack::layer_count), Some(4));
}
