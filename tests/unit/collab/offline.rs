use super::*;
use crate::collab::{NoProgress, VideoOrigin};
use std::sync::Mutex;

#[tokio::test(start_paused = true)]
async fn video_is_a_placeholder_after_simulated_latency() {
    let studio = OfflineStudio::new(&StudioConfig::default());
    let seen = Mutex::new(Vec::<String>::new());
    let sink = |s: &str| seen.lock().unwrap().push(s.to_string());

    let started = tokio::time::Instant::now();
    let out = studio
        .request_video("neon rain", &sink, &CancellationToken::new())
        .await;

    assert_eq!(out.video, placeholder_for("neon rain"));
    assert!(out.is_fallback());
    assert!(started.elapsed() >= Duration::from_millis(2_500));
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn cancelled_generation_returns_immediately() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let started = tokio::time::Instant::now();
    let out = OfflineStudio::new(&StudioConfig::default())
        .request_video("x", &NoProgress, &cancel)
        .await;
    assert_eq!(
        out.origin,
        VideoOrigin::Fallback("generation cancelled".to_string())
    );
    assert!(started.elapsed() < Duration::from_millis(1));
}

#[tokio::test]
async fn analysis_is_mock_scored() {
    let a = OfflineStudio::instant()
        .request_analysis("t", "d", EffectMode::Kaleidoscope)
        .await;
    assert!((70..100).contains(&a.score));
}

#[tokio::test]
async fn prompt_is_fixed() {
    assert_eq!(
        OfflineStudio::instant().request_creative_prompt().await,
        OFFLINE_PROMPT
    );
}
