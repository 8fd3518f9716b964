use super::*;

#[test]
fn defaults_match_documented_values() {
    let opts = SdlOptions::default();
    assert_eq!(opts.indent, 2);
    assert_eq!(opts.precision, None);
    assert!(opts.inline_single);
    assert!(opts.validate().is_ok());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let opts = SdlOptions::from_json_str(r#"{ "precision": 5 }"#).unwrap();
    assert_eq!(opts.precision, Some(5));
    assert_eq!(opts.indent, 2);

    let opts = SdlOptions::from_json_str("{}").unwrap();
    assert_eq!(opts, SdlOptions::default());
}

#[test]
fn json_rejects_unknown_and_out_of_range_fields() {
    let err = SdlOptions::from_json_str(r#"{ "tabs": true }"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));

    let err = SdlOptions::from_json_str(r#"{ "precision": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("precision"));

    assert!(SdlOptions::from_json_str(r#"{ "indent": 64 }"#).is_err());
}

#[test]
fn json_roundtrip() {
    let opts = SdlOptions {
        indent: 4,
        precision: Some(6),
        inline_single: false,
    };
    let s = serde_json::to_string(&opts).unwrap();
    assert_eq!(SdlOptions::from_json_str(&s).unwrap(), opts);
}
