use super::*;
use crate::serialize::options::SdlOptions;

#[test]
fn check_accepts_matching_types() {
    assert!(ValueType::Float.check("finish", "phong", 0.9.into()).is_ok());
    assert!(
        ValueType::FloatOrColor
            .check("finish", "ambient", Color::rgb(0.1, 0.1, 0.1).unwrap().into())
            .is_ok()
    );
    assert!(
        ValueType::FloatOrVector
            .check("pigment", "turbulence", Vector::xyz(0.1, 0.2, 0.3).unwrap().into())
            .is_ok()
    );
    assert!(ValueType::Flag.check("finish", "conserve_energy", true.into()).is_ok());
    assert!(ValueType::Count.check("media", "samples", 4_i32.into()).is_ok());
}

#[test]
fn check_rejects_mismatched_types() {
    let err = ValueType::Float
        .check("finish", "phong", Color::rgb(1.0, 1.0, 1.0).unwrap().into())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "value error: finish phong expects a float, got color"
    );
    assert!(
        ValueType::FloatOrVector
            .check("pigment", "turbulence", Vector::uv(0.1, 0.2).unwrap().into())
            .is_err()
    );
    assert!(ValueType::Color.check("interior", "fade_color", 1.0.into()).is_err());
}

#[test]
fn check_rejects_non_finite_and_fractional_counts() {
    assert!(ValueType::Float.check("finish", "phong", f64::NAN.into()).is_err());
    assert!(ValueType::Count.check("media", "samples", 2.5.into()).is_err());
    assert!(ValueType::Count.check("media", "samples", (-1_i32).into()).is_err());
}

#[test]
fn flags_encode_without_literal() {
    let enc = Encoder::new(&SdlOptions::default());
    assert_eq!(Value::Flag(true).encode(&enc), None);
    assert_eq!(Value::Float(2.0).encode(&enc).as_deref(), Some("2"));
}

#[test]
fn counts_keep_every_digit_at_low_precision() {
    let counted = ValueType::Count
        .check("media", "samples", 123_i32.into())
        .unwrap();
    assert_eq!(counted, Value::Count(123));

    let enc = Encoder::new(&SdlOptions::with_precision(1));
    assert_eq!(counted.encode(&enc).as_deref(), Some("123"));
    assert_eq!(Value::Float(123.0).encode(&enc).as_deref(), Some("1e2"));
}
