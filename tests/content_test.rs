use discforge::content::{format_body, write_json, Body};
use discforge::context::Context;
use discforge::error::Error;

fn context() -> Context {
    Context::new()
        .insert("name", "dusk")
        .unwrap()
        .insert("num_discs", 2)
        .unwrap()
}

fn sample_body() -> Body {
    Body::map([
        ("description", Body::text("Adds {num_discs} custom music discs")),
        ("pack_format", Body::int(15)),
        (
            "overrides",
            Body::seq([
                Body::map([("model", Body::text("item/music_disc_{name}"))]),
                Body::Bool(true),
            ]),
        ),
    ])
}

#[test]
fn test_format_substitutes_string_leaves() {
    let formatted = format_body(&sample_body(), &context()).unwrap();

    let Body::Mapping(map) = &formatted else { panic!("Expected Mapping variant") };
    assert_eq!(map["description"], Body::text("Adds 2 custom music discs"));

    let Body::Sequence(overrides) = &map["overrides"] else {
        panic!("Expected Sequence variant")
    };
    let Body::Mapping(first) = &overrides[0] else { panic!("Expected Mapping variant") };
    assert_eq!(first["model"], Body::text("item/music_disc_dusk"));
}

#[test]
fn test_format_leaves_non_strings_unchanged() {
    let formatted = format_body(&sample_body(), &context()).unwrap();

    let Body::Mapping(map) = &formatted else { panic!("Expected Mapping variant") };
    assert_eq!(map["pack_format"], Body::int(15));

    let Body::Sequence(overrides) = &map["overrides"] else {
        panic!("Expected Sequence variant")
    };
    assert_eq!(overrides[1], Body::Bool(true));
}

#[test]
fn test_format_preserves_shape() {
    let formatted = format_body(&sample_body(), &context()).unwrap();

    let Body::Mapping(map) = &formatted else { panic!("Expected Mapping variant") };
    let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["description", "pack_format", "overrides"]);

    let Body::Sequence(overrides) = &map["overrides"] else {
        panic!("Expected Sequence variant")
    };
    assert_eq!(overrides.len(), 2);
}

#[test]
fn test_format_does_not_mutate_input() {
    let body = sample_body();
    let snapshot = body.clone();

    format_body(&body, &context()).unwrap();
    assert_eq!(body, snapshot);
}

#[test]
fn test_format_is_idempotent_on_resolved_input() {
    let body = Body::map([
        ("model", Body::text("item/music_disc_{name}")),
        ("weight", Body::int(1)),
    ]);

    let once = format_body(&body, &context()).unwrap();
    let twice = format_body(&once, &context()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_format_missing_key_aborts() {
    let body = Body::map([
        ("ok", Body::text("{name}")),
        ("bad", Body::seq([Body::text("{undefined_field}")])),
    ]);

    match format_body(&body, &context()) {
        Err(Error::MissingKeyError { placeholder }) => {
            assert_eq!(placeholder, "undefined_field")
        }
        _ => panic!("Expected MissingKeyError variant"),
    }
}

#[test]
fn test_write_json_uses_four_space_indent() {
    let body = Body::map([(
        "pack",
        Body::map([
            ("pack_format", Body::int(15)),
            ("description", Body::text("two discs")),
        ]),
    )]);

    let mut out = Vec::new();
    write_json(&mut out, &body).unwrap();

    let expected = "{\n    \"pack\": {\n        \"pack_format\": 15,\n        \"description\": \"two discs\"\n    }\n}";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_write_json_keeps_insertion_order() {
    let body = Body::map([
        ("zebra", Body::int(1)),
        ("apple", Body::int(2)),
        ("mango", Body::int(3)),
    ]);

    let mut out = Vec::new();
    write_json(&mut out, &body).unwrap();
    let text = String::from_utf8(out).unwrap();

    let zebra = text.find("zebra").unwrap();
    let apple = text.find("apple").unwrap();
    let mango = text.find("mango").unwrap();
    assert!(zebra < apple && apple < mango);
}
