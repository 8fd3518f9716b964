use super::*;
use crate::object::Object;
use crate::serialize::options::SdlOptions;

fn camera() -> Camera {
    Camera::new([0.0, 1.0, -4.0], [0.0, 0.0, 0.0]).unwrap()
}

#[test]
fn second_camera_is_rejected() {
    let scene = Scene::new().camera(camera()).unwrap();
    assert!(matches!(
        scene.camera(camera()),
        Err(RaysceneError::Value(_))
    ));
}

#[test]
fn header_and_global_settings() {
    let scene = Scene::new()
        .include("colors.inc")
        .unwrap()
        .assumed_gamma(2.2)
        .unwrap()
        .ambient_light(Color::rgb(0.1, 0.1, 0.1).unwrap())
        .background(Color::parse("white").unwrap())
        .camera(camera())
        .unwrap();
    let doc = scene.to_sdl().unwrap();
    let lines: Vec<&str> = doc.lines().collect();
    assert_eq!(lines[0], "#version 3.7;");
    assert_eq!(lines[1], "#include \"colors.inc\"");
    assert_eq!(lines[2], "global_settings {");
    assert_eq!(lines[3], "  assumed_gamma 2.2");
    assert_eq!(lines[4], "  ambient_light rgb <0.1, 0.1, 0.1>");
    assert_eq!(lines[5], "}");
    assert_eq!(lines[6], "background { color rgb <1, 1, 1> }");
    assert_eq!(lines[7], "camera {");
}

#[test]
fn lights_and_objects_keep_declaration_order() {
    let scene = Scene::new()
        .camera(camera())
        .unwrap()
        .object(Object::sphere([0.0, 0.0, 0.0], 1.0).unwrap())
        .light(LightSource::new([5.0, 5.0, 5.0]).unwrap())
        .objects([
            Object::torus(1.0, 0.2).unwrap(),
            Object::plane([0.0, 1.0, 0.0], -1.0).unwrap(),
        ]);
    assert_eq!(scene.items().len(), 4);
    assert_eq!(scene.light_count(), 1);

    let doc = scene.to_sdl().unwrap();
    let tail: Vec<&str> = doc.lines().rev().take(4).collect();
    assert_eq!(
        tail,
        [
            "plane { <0, 1, 0>, -1 }",
            "torus { 1, 0.2 }",
            "light_source { <5, 5, 5> }",
            "sphere { <0, 0, 0>, 1 }",
        ]
    );
}

#[test]
fn emit_document_requires_a_camera() {
    let enc = Encoder::new(&SdlOptions::default());
    assert!(matches!(
        Scene::new().emit_document(&enc),
        Err(RaysceneError::MissingCamera)
    ));
}

#[test]
fn validation() {
    assert!(Scene::new().assumed_gamma(0.0).is_err());
    assert!(Scene::new().include("").is_err());
    assert!(Scene::new().include("bad\nname").is_err());
}
