use std::time::Duration;

use pagekit::{ConfigError, InteractionConfig};

#[test]
fn test_defaults() {
    let config = InteractionConfig::default();
    assert_eq!(config.swipe_threshold, 50.0);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_root_margin_bottom, -50.0);
    assert_eq!(config.reveal_selector, ".glass-card, .document-card");
    assert_eq!(config.slow_load_limit(), Duration::from_millis(3000));
    assert_eq!(config.toast_timeout(), Duration::from_millis(3000));
    assert_eq!(config.toast_exit(), Duration::from_millis(300));
    assert_eq!(config.error_toast_timeout(), Duration::from_millis(5000));
    assert_eq!(config.min_password_length, 6);
    assert!(config.block_invalid_submit);
}

#[test]
fn test_builder() {
    let config = InteractionConfig::new()
        .swipe_threshold(80.0)
        .toast_duration(Duration::from_secs(5))
        .min_password_length(10)
        .allow_invalid_submit();

    assert_eq!(config.swipe_threshold, 80.0);
    assert_eq!(config.toast_duration_ms, 5000);
    assert_eq!(config.min_password_length, 10);
    assert!(!config.block_invalid_submit);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_partial_json_fills_defaults() {
    let json = r#"{ "swipe_threshold": 75.0, "date_format": "%d.%m.%Y" }"#;
    let config: InteractionConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.swipe_threshold, 75.0);
    assert_eq!(config.date_format, "%d.%m.%Y");
    assert_eq!(config.toast_duration_ms, 3000);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_json_with_bad_values_fails_validation() {
    let json = r#"{ "min_password_length": 0 }"#;
    let config: InteractionConfig = serde_json::from_str(json).unwrap();

    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange {
            field: "min_password_length",
            ..
        })
    ));
}

#[test]
fn test_serializes_every_field() {
    let value = serde_json::to_value(InteractionConfig::default()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 13);
    assert_eq!(object["ripple_selector"], ".btn");
}
