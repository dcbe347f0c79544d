use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FractalError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FractalError::workflow("x")
            .to_string()
            .contains("workflow error:")
    );
    assert!(
        FractalError::collaborator("x")
            .to_string()
            .contains("collaborator error:")
    );
    assert!(
        FractalError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn timeout_reports_attempts() {
    let err = FractalError::Timeout { attempts: 60 };
    assert_eq!(err.to_string(), "timed out after 60 poll attempts");
}

#[test]
fn json_errors_map_to_serde() {
    let err: FractalError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, FractalError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FractalError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
