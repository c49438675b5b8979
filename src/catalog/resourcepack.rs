//! File templates for the generated resourcepack.

use indexmap::IndexMap;

use crate::content::Body;
use crate::entry::EntryList;
use crate::error::Result;
use crate::template::{PackFile, Repeat};

/// Builds the resourcepack catalog for one generation run.
pub fn resourcepack_files(pack_format: u32, entries: &EntryList) -> Result<Vec<PackFile>> {
    Ok(vec![
        pack_mcmeta(pack_format),
        sounds_json(entries),
        base_disc_model(entries),
        disc_model(),
    ])
}

fn pack_mcmeta(pack_format: u32) -> PackFile {
    PackFile::new(
        &["pack.mcmeta"],
        Body::map([(
            "pack",
            Body::map([
                ("pack_format", Body::int(i64::from(pack_format))),
                (
                    "description",
                    Body::text("Adds {num_discs} custom music disc sounds and textures"),
                ),
            ]),
        )]),
        Repeat::Single,
    )
}

// Mapping keys are never substituted, so the per-disc sound registry is
// assembled here and written verbatim.
fn sounds_json(entries: &EntryList) -> PackFile {
    let mut sounds = IndexMap::new();
    for name in entries.internal_names() {
        sounds.insert(
            format!("music_disc.{name}"),
            Body::map([(
                "sounds",
                Body::seq([Body::map([
                    ("name", Body::text(format!("records/{name}"))),
                    ("stream", Body::Bool(true)),
                ])]),
            )]),
        );
    }

    PackFile::raw(
        &["assets", "minecraft", "sounds.json"],
        Body::Mapping(sounds),
        Repeat::Single,
    )
}

// The vanilla disc model carries one override per custom disc, keyed by
// its integer model data index.
fn base_disc_model(entries: &EntryList) -> PackFile {
    let overrides = entries
        .iter()
        .map(|entry| {
            Body::map([
                (
                    "predicate",
                    Body::map([(
                        "custom_model_data",
                        Body::int(i64::from(entry.custom_model_data)),
                    )]),
                ),
                ("model", Body::text(format!("item/music_disc_{}", entry.internal_name))),
            ])
        })
        .collect();

    PackFile::raw(
        &["assets", "minecraft", "models", "item", "music_disc_11.json"],
        Body::map([
            ("parent", Body::text("item/generated")),
            ("textures", Body::map([("layer0", Body::text("item/music_disc_11"))])),
            ("overrides", Body::Sequence(overrides)),
        ]),
        Repeat::Single,
    )
}

fn disc_model() -> PackFile {
    PackFile::new(
        &["assets", "minecraft", "models", "item", "music_disc_{entry.internal_name}.json"],
        Body::map([
            ("parent", Body::text("item/generated")),
            (
                "textures",
                Body::map([("layer0", Body::text("item/music_disc_{entry.internal_name}"))]),
            ),
        ]),
        Repeat::Copy,
    )
}
