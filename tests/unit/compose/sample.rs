use super::*;
use crate::compose::compositor::Compositor;
use crate::foundation::core::Point;

fn canvas() -> Canvas {
    Canvas::new(400, 800).unwrap()
}

fn render(mode: EffectMode) -> LayerStack {
    Compositor::render(&VideoRef::new("clip.mp4"), mode)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn none_resolves_to_canvas_bounds_with_identity() {
    let frame = sample(&render(EffectMode::None), canvas(), 1.25).unwrap();
    assert_eq!(frame.layers.len(), 1);
    let l = &frame.layers[0];
    assert_eq!(l.bounds, Rect::new(0.0, 0.0, 400.0, 800.0));
    assert_eq!(l.transform, Affine::IDENTITY);
    assert_eq!(l.opacity, 1.0);
}

#[test]
fn recursive_pip_bounds_compose_through_nesting() {
    let frame = sample(&render(EffectMode::RecursivePiP), canvas(), 0.0).unwrap();
    let bounds: Vec<(usize, Rect)> = frame.layers.iter().map(|l| (l.depth, l.bounds)).collect();
    assert_eq!(
        bounds,
        vec![
            (1, Rect::new(0.0, 0.0, 400.0, 800.0)),
            (2, Rect::new(100.0, 200.0, 300.0, 600.0)),
            (3, Rect::new(150.0, 300.0, 250.0, 500.0)),
        ]
    );
}

#[test]
fn pulse_dims_the_inset_and_its_child_at_mid_period() {
    let frame = sample(&render(EffectMode::RecursivePiP), canvas(), 1.0).unwrap();
    assert!(approx(frame.layers[1].opacity, 0.5));
    assert!(approx(frame.layers[2].opacity, 0.5));
    assert!(approx(frame.layers[1].scale, 1.02));
}

#[test]
fn spin_reaches_quarter_turn_at_quarter_period() {
    let frame = sample(&render(EffectMode::Kaleidoscope), canvas(), 3.75).unwrap();
    assert!(approx(frame.layers[0].rotation_deg, 90.0));
    // 10 s counter-clockwise layer: 3.75 s is 135 degrees the other way.
    assert!(approx(frame.layers[1].rotation_deg, -135.0));
}

#[test]
fn grid_flip_mirrors_about_the_cell_center() {
    let frame = sample(&render(EffectMode::GridRemix), canvas(), 0.0).unwrap();
    let tile = &frame.layers[0];
    assert_eq!(tile.bounds, Rect::new(0.0, 0.0, 200.0, 400.0));
    let mapped = tile.transform * Point::new(0.0, 0.0);
    assert!(approx(mapped.x, 200.0));
    assert!(approx(mapped.y, 0.0));
}

#[test]
fn time_echo_opacity_rises_toward_front() {
    let frame = sample(&render(EffectMode::TimeEcho), canvas(), 0.0).unwrap();
    let opacities: Vec<f64> = frame.layers.iter().map(|l| l.opacity).collect();
    assert_eq!(opacities, vec![0.3, 0.5, 1.0]);
}

#[test]
fn rejects_negative_time() {
    assert!(sample(&render(EffectMode::None), canvas(), -1.0).is_err());
    assert!(sample(&render(EffectMode::None), canvas(), f64::NAN).is_err());
}
