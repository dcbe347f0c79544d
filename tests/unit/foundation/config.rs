use super::*;

#[test]
fn defaults_match_poll_constants() {
    let cfg = StudioConfig::default();
    assert_eq!(cfg.poll_interval(), Duration::from_secs(10));
    assert_eq!(cfg.max_poll_attempts, 60);
    assert!(!cfg.has_credentials());
    cfg.validate().unwrap();
}

#[test]
fn env_lookup_prefers_gemini_key_and_skips_blank() {
    let cfg = StudioConfig::default().with_env_lookup(|k| match k {
        "GEMINI_API_KEY" => Some("   ".to_string()),
        "API_KEY" => Some("abc".to_string()),
        _ => None,
    });
    assert_eq!(cfg.api_key.as_deref(), Some("abc"));
    assert!(cfg.has_credentials());
}

#[test]
fn env_lookup_keeps_explicit_key() {
    let cfg = StudioConfig {
        api_key: Some("file".to_string()),
        ..StudioConfig::default()
    }
    .with_env_lookup(|_| Some("env".to_string()));
    assert_eq!(cfg.api_key.as_deref(), Some("file"));
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: StudioConfig = serde_json::from_str(r#"{ "max_poll_attempts": 3 }"#).unwrap();
    assert_eq!(cfg.max_poll_attempts, 3);
    assert_eq!(cfg.text_model, "gemini-3-flash-preview");
}

#[test]
fn validate_rejects_zero_attempts() {
    let cfg = StudioConfig {
        max_poll_attempts: 0,
        ..StudioConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn instant_clears_simulated_latency() {
    let cfg = StudioConfig::default().instant();
    assert_eq!(cfg.mock_generation_latency(), Duration::ZERO);
    assert_eq!(cfg.mock_analysis_latency(), Duration::ZERO);
}
