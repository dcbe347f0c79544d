use super::*;

#[test]
fn score_clamps_into_range() {
    assert_eq!(ViralityScore::new(-5).get(), 0);
    assert_eq!(ViralityScore::new(250).get(), 100);
    assert_eq!(ViralityScore::new(65).get(), 65);
}

#[test]
fn tier_is_hot_above_eighty() {
    assert_eq!(ViralityScore::new(81).tier(), ViralityTier::Hot);
    assert_eq!(ViralityScore::new(80).tier(), ViralityTier::Warm);
}

#[test]
fn json_uses_camel_case_and_clamps_score() {
    let json = serde_json::json!({
        "id": "x1",
        "title": "t",
        "description": "d",
        "thumbnailUrl": "thumb",
        "videoUrl": "video",
        "createdAt": "Just now",
        "views": 3,
        "remixes": 1,
        "viralityScore": 140,
        "author": "Me",
        "fractalMode": "Grid Remix"
    });
    let record: ProjectRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.virality_score.get(), 100);
    assert_eq!(record.fractal_mode, EffectMode::GridRemix);

    let back = serde_json::to_value(&record).unwrap();
    assert_eq!(back["viralityScore"], 100);
    assert_eq!(back["fractalMode"], "Grid Remix");
    assert_eq!(back["videoUrl"], "video");
}
