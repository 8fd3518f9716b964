use super::*;
use crate::serialize::options::SdlOptions;
use crate::serialize::sdl::{Emit, Encoder};

fn render(o: &Object) -> String {
    let opts = SdlOptions::default();
    let mut out = String::new();
    o.emit(&Encoder::new(&opts)).write(&mut out, 0, &opts).unwrap();
    out
}

fn ball(x: f64) -> Object {
    Object::sphere([x, 0.0, 0.0], 1.0).unwrap()
}

#[test]
fn arity_minimums() {
    assert!(Object::difference([ball(0.0)]).is_err());
    assert!(Object::intersection([ball(0.0)]).is_err());
    assert!(Object::union(Vec::new()).is_err());
    assert!(Object::union([ball(0.0)]).is_ok());
    assert!(Object::merge([ball(0.0)]).is_ok());
    assert!(Object::difference([ball(0.0), ball(1.0)]).is_ok());
}

#[test]
fn difference_keeps_child_order() {
    let d = Object::difference([ball(0.0), ball(1.0), ball(2.0)]).unwrap();
    assert_eq!(
        render(&d),
        "difference {\n  sphere { <0, 0, 0>, 1 }\n  sphere { <1, 0, 0>, 1 }\n  sphere { <2, 0, 0>, 1 }\n}\n"
    );

    let swapped = Object::difference([ball(1.0), ball(0.0), ball(2.0)]).unwrap();
    assert_ne!(render(&d), render(&swapped));
}

#[test]
fn operators_build_and_extend_nodes() {
    let d = ball(0.0) - ball(1.0) - ball(2.0);
    assert_eq!(d.csg_op(), Some(CsgOp::Difference));
    assert_eq!(d.children().len(), 3);

    let u = ball(0.0) + ball(1.0);
    assert_eq!(u.csg_op(), Some(CsgOp::Union));
    let i = ball(0.0) * ball(1.0) * ball(2.0);
    assert_eq!(i.children().len(), 3);
    let m = ball(0.0) | ball(1.0);
    assert_eq!(m.keyword(), "merge");

    // A different operator nests instead of extending.
    let mixed = (ball(0.0) + ball(1.0)) - ball(2.0);
    assert_eq!(mixed.children().len(), 2);
    assert_eq!(mixed.children()[0].csg_op(), Some(CsgOp::Union));
}

#[test]
fn operators_do_not_extend_decorated_nodes() {
    let base = (ball(0.0) - ball(1.0)).translate([0.0, 1.0, 0.0]).unwrap();
    let d = base - ball(2.0);
    assert_eq!(d.children().len(), 2);
    assert_eq!(d.children()[0].attachment_count(), 1);
}

#[test]
fn with_child_appends() {
    let u = Object::union([ball(0.0)])
        .unwrap()
        .with_child(ball(5.0))
        .unwrap();
    assert_eq!(u.children().len(), 2);
    assert!(ball(0.0).with_child(ball(1.0)).is_err());
}
