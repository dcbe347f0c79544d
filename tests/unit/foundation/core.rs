use super::*;

#[test]
fn centered_unit_rect_is_symmetric() {
    let r = UnitRect::centered(0.5);
    assert_eq!(r, UnitRect::new(0.25, 0.25, 0.75, 0.75));
    assert_eq!(r.width(), 0.5);
    assert!(UnitRect::centered(1.0).is_full());
}

#[test]
fn unit_rect_maps_into_parent_bounds() {
    let parent = Rect::new(100.0, 200.0, 300.0, 600.0);
    let inner = UnitRect::centered(0.5).within(parent);
    assert_eq!(inner, Rect::new(150.0, 300.0, 250.0, 500.0));
    assert_eq!(UnitRect::FULL.within(parent), parent);
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(4, 2).unwrap();
    assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 4.0, 2.0));
}

#[test]
fn video_ref_accepts_any_string() {
    let empty = VideoRef::new("");
    assert_eq!(empty.as_str(), "");
    let json = serde_json::to_string(&VideoRef::from("not a url")).unwrap();
    assert_eq!(json, "\"not a url\"");
}

#[test]
fn rgba_hex_is_lowercase_with_alpha() {
    assert_eq!(Rgba8::new(99, 102, 241, 128).to_hex(), "#6366f180");
}
