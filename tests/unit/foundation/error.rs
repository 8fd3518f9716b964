use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RaysceneError::value("x")
            .to_string()
            .contains("value error:")
    );
    assert!(
        RaysceneError::unknown_key("finish", "shine")
            .to_string()
            .contains("key error: unknown finish property 'shine'")
    );
    assert!(
        RaysceneError::MissingCamera
            .to_string()
            .contains("missing camera")
    );
    assert!(
        RaysceneError::internal("x")
            .to_string()
            .contains("internal error:")
    );
    assert!(
        RaysceneError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn validation_class_excludes_defects() {
    assert!(RaysceneError::value("x").is_validation());
    assert!(RaysceneError::unknown_key("pigment", "y").is_validation());
    assert!(RaysceneError::MissingCamera.is_validation());
    assert!(!RaysceneError::internal("x").is_validation());
    assert!(!RaysceneError::config("x").is_validation());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RaysceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
