use super::*;
use crate::foundation::core::Vector;
use crate::serialize::options::SdlOptions;

fn render(m: &Modifier) -> String {
    let opts = SdlOptions::default();
    let mut out = String::new();
    m.emit(&Encoder::new(&opts)).write(&mut out, 0, &opts).unwrap();
    out
}

fn red() -> Color {
    Color::rgb(1.0, 0.0, 0.0).unwrap()
}

fn blue() -> Color {
    Color::rgb(0.0, 0.0, 1.0).unwrap()
}

#[test]
fn same_key_keeps_only_the_last_write() {
    let m = Modifier::finish()
        .set("phong", 1.0)
        .unwrap()
        .set("ambient", 0.1)
        .unwrap()
        .set("phong", 2.0)
        .unwrap();

    assert_eq!(m.get("phong"), Some(&Value::Float(2.0)));
    assert_eq!(render(&m), "finish {\n  ambient 0.1\n  phong 2\n}\n");
}

#[test]
fn keys_follow_insertion_order() {
    let m = Modifier::from_pairs(
        ModifierKind::Finish,
        [("specular", 0.3), ("diffuse", 0.7), ("roughness", 0.01)],
    )
    .unwrap();
    assert_eq!(
        render(&m),
        "finish {\n  specular 0.3\n  diffuse 0.7\n  roughness 0.01\n}\n"
    );
}

#[test]
fn unknown_key_is_rejected_with_kind() {
    let err = Modifier::finish().set("shininess", 1.0).unwrap_err();
    match err {
        RaysceneError::UnknownKey { kind, key } => {
            assert_eq!(kind, "finish");
            assert_eq!(key, "shininess");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wrong_value_type_is_a_value_error() {
    let err = Modifier::finish().set("phong", red()).unwrap_err();
    assert!(matches!(err, RaysceneError::Value(_)));
    assert!(err.to_string().contains("finish phong expects a float"));

    assert!(Modifier::media().set("samples", 2.5).is_err());
    assert!(Modifier::media().set("samples", 4_i32).is_ok());
    assert!(Modifier::pigment().set("color", 1.0).is_err());
}

#[test]
fn whole_number_properties_ignore_precision() {
    let m = Modifier::media()
        .set("samples", 123_i32)
        .unwrap()
        .set("intervals", 25.0)
        .unwrap()
        .set("ratio", 0.84)
        .unwrap();
    assert_eq!(m.get("samples"), Some(&Value::Count(123)));

    let opts = SdlOptions::with_precision(1);
    let mut out = String::new();
    m.emit(&Encoder::new(&opts)).write(&mut out, 0, &opts).unwrap();
    assert_eq!(
        out,
        "media {\n  samples 123\n  intervals 25\n  ratio 0.8\n}\n"
    );
}

#[test]
fn float_or_color_and_float_or_vector() {
    let m = Modifier::finish()
        .set("reflection", 0.2)
        .unwrap()
        .set("ambient", red())
        .unwrap();
    assert_eq!(
        render(&m),
        "finish {\n  reflection 0.2\n  ambient rgb <1, 0, 0>\n}\n"
    );

    let turb = Vector::xyz(0.1, 0.2, 0.3).unwrap();
    let p = Modifier::pigment().set("turbulence", turb).unwrap();
    assert_eq!(render(&p), "pigment { turbulence <0.1, 0.2, 0.3> }\n");
    assert!(
        Modifier::pigment()
            .set("turbulence", Vector::uv(1.0, 2.0).unwrap())
            .is_err()
    );
}

#[test]
fn flags_emit_bare_keywords() {
    let on = Modifier::finish().flag("conserve_energy").unwrap();
    assert_eq!(render(&on), "finish { conserve_energy }\n");

    let off = Modifier::finish().set("conserve_energy", false).unwrap();
    assert_eq!(render(&off), "finish {}\n");
}

#[test]
fn color_shorthand_is_a_pigment() {
    let m = Modifier::from(red());
    assert_eq!(m.kind(), ModifierKind::Pigment);
    assert_eq!(render(&m), "pigment { color rgb <1, 0, 0> }\n");
}

#[test]
fn nested_blocks_do_not_inherit() {
    let tex = Modifier::texture()
        .flag("uv_mapping")
        .unwrap()
        .nest(Modifier::from(red()))
        .unwrap()
        .nest(Modifier::finish().set("phong", 0.9).unwrap())
        .unwrap();
    assert_eq!(
        render(&tex),
        "texture {\n  uv_mapping\n  pigment { color rgb <1, 0, 0> }\n  finish { phong 0.9 }\n}\n"
    );
}

#[test]
fn second_nested_block_of_a_kind_replaces_the_first() {
    let tex = Modifier::texture()
        .nest(Modifier::from(red()))
        .unwrap()
        .nest(Modifier::from(blue()))
        .unwrap();
    assert_eq!(render(&tex), "texture { pigment { color rgb <0, 0, 1> } }\n");
}

#[test]
fn nesting_rules() {
    assert!(Modifier::pigment().nest(Modifier::finish()).is_err());
    assert!(Modifier::finish().nest(Modifier::pigment()).is_err());

    let interior = Modifier::interior()
        .set("ior", 1.5)
        .unwrap()
        .nest(
            Modifier::media()
                .set("absorption", red())
                .unwrap()
                .nest(
                    Modifier::density()
                        .pattern(Pattern::new(PatternKind::Spherical))
                        .unwrap(),
                )
                .unwrap(),
        )
        .unwrap();
    assert_eq!(
        render(&interior),
        "interior {\n  ior 1.5\n  media {\n    absorption rgb <1, 0, 0>\n    density { spherical }\n  }\n}\n"
    );
}

#[test]
fn pattern_leads_the_block_and_is_replaced() {
    let m = Modifier::normal()
        .scale(0.2)
        .unwrap()
        .pattern(Pattern::new(PatternKind::Dents).depth(0.1).unwrap())
        .unwrap()
        .pattern(Pattern::new(PatternKind::Bumps).depth(0.5).unwrap())
        .unwrap();
    assert_eq!(render(&m), "normal {\n  bumps 0.5\n  scale 0.2\n}\n");
}

#[test]
fn pattern_placement_rules() {
    assert!(
        Modifier::finish()
            .pattern(Pattern::new(PatternKind::Bozo))
            .is_err()
    );
    assert!(
        Modifier::pigment()
            .pattern(Pattern::new(PatternKind::Bumps).depth(0.5).unwrap())
            .is_err()
    );
    let checker = Pattern::new(PatternKind::Checker)
        .with_colors(vec![red(), blue()])
        .unwrap();
    assert!(Modifier::normal().pattern(checker.clone()).is_err());
    assert_eq!(
        render(&Modifier::pigment().pattern(checker).unwrap()),
        "pigment { checker color rgb <1, 0, 0>, color rgb <0, 0, 1> }\n"
    );
}

#[test]
fn list_pattern_color_limits() {
    let three = vec![red(), blue(), red()];
    assert!(
        Pattern::new(PatternKind::Checker)
            .with_colors(three.clone())
            .is_err()
    );
    assert!(Pattern::new(PatternKind::Hexagon).with_colors(three).is_ok());
    assert!(
        Pattern::new(PatternKind::Bozo)
            .with_colors(vec![red()])
            .is_err()
    );
    assert!(Pattern::new(PatternKind::Brick).with_colors(vec![]).is_err());
}

#[test]
fn gradient_and_image_map_patterns() {
    assert!(Pattern::gradient([0.0, 0.0, 0.0]).is_err());

    let img = Pattern::image_map(ImageFormat::Png, "tex.png")
        .unwrap()
        .interpolate(2)
        .unwrap()
        .uv_mapped()
        .unwrap();
    let m = Modifier::pigment().pattern(img.clone()).unwrap();
    assert_eq!(
        render(&m),
        "pigment { uv_mapping image_map { png \"tex.png\" interpolate 2 } }\n"
    );
    assert!(Modifier::normal().pattern(img).is_err());

    assert!(
        Pattern::image_map(ImageFormat::Png, "a.png")
            .unwrap()
            .interpolate(5)
            .is_err()
    );
    assert!(Pattern::new(PatternKind::Wood).interpolate(2).is_err());
    assert!(Pattern::image_map(ImageFormat::Tga, "").is_err());
}

#[test]
fn color_map_under_gradient() {
    let map = BlendMap::new(MapKind::Color)
        .color(0.0, red())
        .unwrap()
        .color(1.0, blue())
        .unwrap();
    let m = Modifier::pigment()
        .pattern(Pattern::gradient([0.0, 1.0, 0.0]).unwrap())
        .unwrap()
        .map(map)
        .unwrap();
    assert_eq!(
        render(&m),
        "pigment {\n  gradient <0, 1, 0>\n  color_map {\n    [0 color rgb <1, 0, 0>]\n    [1 color rgb <0, 0, 1>]\n  }\n}\n"
    );
}

#[test]
fn body_entries_are_written_inline() {
    let checker = Modifier::pigment()
        .pattern(
            Pattern::new(PatternKind::Checker)
                .with_colors(vec![red(), blue()])
                .unwrap(),
        )
        .unwrap()
        .scale(0.5)
        .unwrap();
    let map = BlendMap::new(MapKind::Pigment)
        .body(0.25, Modifier::from(red()))
        .unwrap()
        .body(0.75, checker)
        .unwrap();
    let m = Modifier::pigment()
        .pattern(Pattern::new(PatternKind::Marble))
        .unwrap()
        .map(map)
        .unwrap();
    assert_eq!(
        render(&m),
        "pigment {\n  marble\n  pigment_map {\n    [0.25 color rgb <1, 0, 0>]\n    [0.75 checker color rgb <1, 0, 0>, color rgb <0, 0, 1> scale 0.5]\n  }\n}\n"
    );
}

#[test]
fn map_validation() {
    assert!(BlendMap::new(MapKind::Color).color(1.5, red()).is_err());
    assert!(
        BlendMap::new(MapKind::Color)
            .color(0.6, red())
            .unwrap()
            .color(0.4, blue())
            .is_err()
    );
    assert!(
        BlendMap::new(MapKind::Pigment)
            .body(0.0, Modifier::finish())
            .is_err()
    );
    assert!(BlendMap::new(MapKind::Pigment).color(0.0, red()).is_err());
    assert!(BlendMap::new(MapKind::Color).slope(0.0, 0.0, 1.0).is_err());

    let full = (0..BlendMap::MAX_ENTRIES).try_fold(BlendMap::new(MapKind::Color), |m, _| {
        m.color(0.5, red())
    });
    let full = full.unwrap();
    assert_eq!(full.len(), BlendMap::MAX_ENTRIES);
    assert!(full.color(0.5, red()).is_err());
}

#[test]
fn map_placement_and_replacement() {
    let colors = BlendMap::new(MapKind::Color).color(0.0, red()).unwrap();
    assert!(Modifier::finish().map(colors.clone()).is_err());
    assert!(Modifier::normal().map(colors.clone()).is_err());
    assert!(Modifier::density().map(colors.clone()).is_ok());
    assert!(Modifier::pigment().map(BlendMap::new(MapKind::Color)).is_err());

    let slopes = BlendMap::new(MapKind::Slope)
        .slope(0.0, 0.0, 1.0)
        .unwrap()
        .slope(1.0, 1.0, 0.0)
        .unwrap();
    let n = Modifier::normal()
        .map(slopes)
        .unwrap()
        .map(
            BlendMap::new(MapKind::Slope)
                .slope(0.5, 0.5, 0.0)
                .unwrap(),
        )
        .unwrap();
    assert_eq!(render(&n), "normal { slope_map { [0.5 <0.5, 0>] } }\n");
}

#[test]
fn transforms_append_in_order() {
    let m = Modifier::pigment()
        .pattern(Pattern::new(PatternKind::Wood))
        .unwrap()
        .rotate(Axis::X, 90.0)
        .unwrap()
        .translate([0.0, 1.0, 0.0])
        .unwrap();
    assert_eq!(
        render(&m),
        "pigment {\n  wood\n  rotate <90, 0, 0>\n  translate <0, 1, 0>\n}\n"
    );
}

#[test]
fn property_names_expose_the_capability_set() {
    let names: Vec<&str> = ModifierKind::Interior.property_names().collect();
    assert!(names.contains(&"ior"));
    assert!(names.contains(&"fade_power"));
    assert!(!names.contains(&"phong"));
}
