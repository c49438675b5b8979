use std::path::PathBuf;

use discforge::config::DiscSpec;
use discforge::entry::{sanitize_name, EntryList};

fn spec(title: &str, name: Option<&str>) -> DiscSpec {
    DiscSpec {
        title: title.to_string(),
        track: PathBuf::from("track.ogg"),
        texture: PathBuf::from("texture.png"),
        name: name.map(|n| n.to_string()),
    }
}

#[test]
fn test_model_data_is_contiguous_from_offset() {
    let specs = [spec("One", None), spec("Two", None), spec("Three", None)];
    let entries = EntryList::from_specs(&specs, 4);

    let indices: Vec<u32> = entries.iter().map(|e| e.custom_model_data).collect();
    assert_eq!(indices, vec![5, 6, 7]);
}

#[test]
fn test_order_is_preserved() {
    let specs = [spec("Zulu", None), spec("Alpha", None)];
    let entries = EntryList::from_specs(&specs, 0);

    let names: Vec<&str> = entries.internal_names().collect();
    assert_eq!(names, vec!["zulu", "alpha"]);
}

#[test]
fn test_explicit_name_overrides_title() {
    let specs = [spec("Some Long Title", Some("shorty"))];
    let entries = EntryList::from_specs(&specs, 0);
    assert_eq!(entries.entries[0].internal_name, "shorty");
    assert_eq!(entries.entries[0].title, "Some Long Title");
}

#[test]
fn test_sanitize_name() {
    assert_eq!(sanitize_name("Pigstep (Remix)"), "pigstep_remix");
    assert_eq!(sanitize_name("  Aria Math!  "), "aria_math");
    assert_eq!(sanitize_name("already_safe_01"), "already_safe_01");
    assert_eq!(sanitize_name("Déjà Vu"), "d_j_vu");
}

#[test]
fn test_sanitize_name_never_empty() {
    assert_eq!(sanitize_name("???"), "disc");
    assert_eq!(sanitize_name(""), "disc");
}
