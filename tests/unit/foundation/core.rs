use super::*;

#[test]
fn vector_accepts_two_to_four_components() {
    assert_eq!(Vector::uv(1.0, 2.0).unwrap().arity(), 2);
    assert_eq!(Vector::xyz(1.0, 2.0, 3.0).unwrap().arity(), 3);
    assert_eq!(Vector::xyzw(1.0, 2.0, 3.0, 4.0).unwrap().arity(), 4);
    assert!(Vector::new(&[1.0]).is_err());
    assert!(Vector::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
}

#[test]
fn vector_rejects_non_finite_components() {
    let err = Vector::xyz(1.0, f64::NAN, 0.0).unwrap_err();
    assert!(err.to_string().contains("vector component 1"));
    assert!(Vector::xyz(f64::INFINITY, 0.0, 0.0).is_err());
}

#[test]
fn into_vector_accepts_common_shapes() {
    let a = [1.0, 2.0, 3.0].into_vector().unwrap();
    let b = (1.0, 2.0, 3.0).into_vector().unwrap();
    let c = vec![1.0, 2.0, 3.0].into_vector().unwrap();
    let d = glam::DVec3::new(1.0, 2.0, 3.0).into_vector().unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
    assert_eq!(a.components(), &[1.0, 2.0, 3.0]);
}

#[test]
fn expect_3d_reports_arity() {
    let v = Vector::uv(0.0, 1.0).unwrap();
    let err = v.expect_3d("center").unwrap_err();
    assert!(err.to_string().contains("center must be a 3-component vector"));
}

#[test]
fn scalar_validators() {
    assert!(positive("radius", 0.0).is_err());
    assert!(positive("radius", 0.5).is_ok());
    assert!(non_negative("radius", 0.0).is_ok());
    assert!(non_negative("radius", -0.1).is_err());
    assert!(unit_interval("filter", 1.0).is_ok());
    assert!(unit_interval("filter", 1.01).is_err());
    assert!(finite("x", f64::NEG_INFINITY).is_err());
}
