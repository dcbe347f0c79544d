use super::*;

#[test]
fn picker_lists_four_modes_in_display_order() {
    let modes = list_modes();
    assert_eq!(
        modes,
        [
            (EffectMode::RecursivePiP, "Recursive PiP"),
            (EffectMode::Kaleidoscope, "Kaleidoscope"),
            (EffectMode::GridRemix, "Grid Glitch"),
            (EffectMode::TimeEcho, "Time Echo"),
        ]
    );
    assert!(modes.iter().all(|(m, _)| *m != EffectMode::None));
}

#[test]
fn parse_accepts_tags_and_identifiers() {
    for mode in EffectMode::ALL {
        assert_eq!(EffectMode::parse(mode.tag()), Some(mode));
    }
    assert_eq!(EffectMode::parse("RecursivePiP"), Some(EffectMode::RecursivePiP));
    assert_eq!(EffectMode::parse("grid_remix"), Some(EffectMode::GridRemix));
    assert_eq!(EffectMode::parse("time-echo"), Some(EffectMode::TimeEcho));
    assert_eq!(EffectMode::parse("Grid Glitch"), Some(EffectMode::GridRemix));
}

#[test]
fn unknown_tags_fail_soft_to_none() {
    assert!(!is_valid("Hyperdrive"));
    assert!(!is_valid(""));
    assert_eq!(EffectMode::parse_lossy("Hyperdrive"), EffectMode::None);
    assert_eq!(EffectMode::parse_lossy(""), EffectMode::None);
    assert!(is_valid("None"));
}

#[test]
fn serde_uses_wire_tags_and_is_lossy() {
    let json = serde_json::to_string(&EffectMode::RecursivePiP).unwrap();
    assert_eq!(json, "\"Recursive PiP\"");
    let de: EffectMode = serde_json::from_str("\"Time Echo\"").unwrap();
    assert_eq!(de, EffectMode::TimeEcho);
    let unknown: EffectMode = serde_json::from_str("\"Vortex\"").unwrap();
    assert_eq!(unknown, EffectMode::None);
}
