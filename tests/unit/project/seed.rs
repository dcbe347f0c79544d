use super::*;

#[test]
fn placeholder_pick_is_stable_and_from_pool() {
    let a = placeholder_for("neon rain");
    let b = placeholder_for("neon rain");
    assert_eq!(a, b);
    assert!(PLACEHOLDER_VIDEOS.contains(&a.as_str()));
    assert!(PLACEHOLDER_VIDEOS.contains(&placeholder_for("").as_str()));
}

#[test]
fn seed_projects_carry_their_modes() {
    let modes: Vec<EffectMode> = seed_projects().iter().map(|p| p.fractal_mode).collect();
    assert_eq!(
        modes,
        vec![
            EffectMode::RecursivePiP,
            EffectMode::TimeEcho,
            EffectMode::GridRemix
        ]
    );
    assert_eq!(seed_projects()[2].virality_score.get(), 94);
}
