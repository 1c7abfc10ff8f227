use netgrow_core::errors::{ErrorInfo, NetError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("label", 1)
        .with_context("reason", "example")
}

#[test]
fn invalid_configuration_surface() {
    let err =
        NetError::InvalidConfiguration(sample_info("zero-initial-nodes", "m0 must be positive"));
    assert_eq!(err.info().code, "zero-initial-nodes");
    assert!(err.info().context.contains_key("label"));
    assert!(!err.is_retryable());
}

#[test]
fn insufficient_candidates_surface() {
    let err = NetError::InsufficientCandidates(sample_info("short-candidates", "not enough"));
    assert_eq!(err.info().code, "short-candidates");
    assert!(err.is_retryable());
}

#[test]
fn empty_statistics_surface() {
    let err = NetError::EmptyNetworkStatistics(sample_info("empty-network", "no nodes"));
    assert_eq!(err.info().context.get("reason"), Some(&"example".to_string()));
}

#[test]
fn context_is_appended_for_every_family() {
    let err = NetError::invalid("bad-plan", "plan rejected").with_context("networks", 9);
    assert_eq!(err.info().context.get("networks"), Some(&"9".to_string()));
    let rendered = err.to_string();
    assert!(rendered.starts_with("invalid configuration: plan rejected (code: bad-plan)"));
    assert!(rendered.contains("networks=9"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = NetError::Serde(ErrorInfo::new("S001", "schema mismatch").with_hint("regenerate"));
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Serde");
    assert_eq!(json["detail"]["hint"], "regenerate");
    let back: NetError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}
