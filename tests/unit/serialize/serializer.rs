use super::*;
use crate::scene::{Camera, LightSource};
use crate::value::Color;

fn camera() -> Camera {
    Camera::new([0.0, 0.0, -5.0], [0.0, 0.0, 0.0]).unwrap()
}

#[test]
fn missing_camera_is_reported() {
    let scene = Scene::new().object(Object::sphere([0.0, 0.0, 0.0], 1.0).unwrap());
    let err = Serializer::default().serialize(&scene).unwrap_err();
    assert!(matches!(err, RaysceneError::MissingCamera));
    assert!(err.to_string().contains("missing camera"));
}

#[test]
fn camera_without_lights_serializes() {
    let scene = Scene::new().camera(camera()).unwrap();
    let doc = Serializer::default().serialize(&scene).unwrap();
    assert_eq!(
        doc,
        "#version 3.7;\nglobal_settings { assumed_gamma 1 }\ncamera {\n  location <0, 0, -5>\n  look_at <0, 0, 0>\n}\n"
    );
}

#[test]
fn indentation_and_inlining_follow_options() {
    let scene = Scene::new()
        .camera(camera())
        .unwrap()
        .light(LightSource::new([1.0, 1.0, 1.0]).unwrap());
    let opts = SdlOptions {
        indent: 4,
        precision: None,
        inline_single: false,
    };
    let doc = Serializer::new(opts).unwrap().serialize(&scene).unwrap();
    assert!(doc.contains("global_settings {\n    assumed_gamma 1\n}\n"));
    assert!(doc.ends_with("light_source {\n    <1, 1, 1>\n}\n"));
}

#[test]
fn invalid_options_are_rejected_up_front() {
    let opts = SdlOptions {
        precision: Some(0),
        ..SdlOptions::default()
    };
    assert!(matches!(
        Serializer::new(opts),
        Err(RaysceneError::Config(_))
    ));
}

#[test]
fn serialize_object_writes_one_block() {
    let o = Object::sphere([0.0, 0.0, 0.0], 1.0)
        .unwrap()
        .color(Color::rgb(1.0, 0.0, 0.0).unwrap());
    assert_eq!(
        Serializer::default().serialize_object(&o).unwrap(),
        "sphere {\n  <0, 0, 0>, 1\n  pigment { color rgb <1, 0, 0> }\n}\n"
    );
}

#[test]
fn fingerprint_tracks_document_text() {
    let a = Scene::new().camera(camera()).unwrap();
    let b = Scene::new().camera(camera()).unwrap();
    let c = a
        .clone()
        .background(Color::rgb(1.0, 1.0, 1.0).unwrap());
    let s = Serializer::default();

    assert_eq!(s.fingerprint(&a).unwrap(), s.fingerprint(&b).unwrap());
    assert_ne!(s.fingerprint(&a).unwrap(), s.fingerprint(&c).unwrap());
    assert_eq!(s.fingerprint(&a).unwrap().to_string().len(), 32);
}

#[test]
fn serialize_all_keeps_input_order_and_fails_on_first_bad_scene() {
    let scenes: Vec<Scene> = (1..=4)
        .map(|i| {
            Scene::new()
                .camera(camera())
                .unwrap()
                .object(Object::sphere([f64::from(i), 0.0, 0.0], 1.0).unwrap())
        })
        .collect();
    let s = Serializer::default();
    let docs = s.serialize_all(&scenes).unwrap();
    for (doc, scene) in docs.iter().zip(&scenes) {
        assert_eq!(doc, &s.serialize(scene).unwrap());
    }

    let mut with_bad = scenes;
    with_bad.insert(2, Scene::new());
    assert!(matches!(
        s.serialize_all(&with_bad),
        Err(RaysceneError::MissingCamera)
    ));
}
