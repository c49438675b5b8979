//! File templates for the generated datapack.

use crate::content::{format_body, Body};
use crate::context::Context;
use crate::entry::EntryList;
use crate::error::Result;
use crate::template::{PackFile, Repeat};

/// Builds the datapack catalog for one generation run.
///
/// The pack format and the creeper drop-pool entries cannot come from
/// string substitution (they are integer leaves and whole subtrees), so
/// they are injected while the catalog is assembled.
pub fn datapack_files(pack_format: u32, entries: &EntryList) -> Result<Vec<PackFile>> {
    Ok(vec![
        pack_mcmeta(pack_format),
        load_tag(),
        tick_tag(),
        setup_load_function(),
        jukebox_tick_function(),
        give_all_function(),
        give_disc_function(),
        creeper_loot_table(entries)?,
    ])
}

fn pack_mcmeta(pack_format: u32) -> PackFile {
    PackFile::new(
        &["pack.mcmeta"],
        Body::map([(
            "pack",
            Body::map([
                ("pack_format", Body::int(i64::from(pack_format))),
                ("description", Body::text("Adds {num_discs} custom music discs")),
            ]),
        )]),
        Repeat::Single,
    )
}

fn load_tag() -> PackFile {
    PackFile::new(
        &["data", "minecraft", "tags", "functions", "load.json"],
        Body::map([("values", Body::seq([Body::text("{namespace}:setup_load")]))]),
        Repeat::Single,
    )
}

fn tick_tag() -> PackFile {
    PackFile::new(
        &["data", "minecraft", "tags", "functions", "tick.json"],
        Body::map([("values", Body::seq([Body::text("{namespace}:jukebox_tick")]))]),
        Repeat::Single,
    )
}

fn setup_load_function() -> PackFile {
    PackFile::new(
        &["data", "{namespace}", "functions", "setup_load.mcfunction"],
        Body::text(
            r#"
scoreboard objectives add music_disc_played minecraft.custom:minecraft.play_record
tellraw @a [{{"text":"{pack_name} ","color":"gold"}},{{"text":"{version} loaded with {num_discs} discs","color":"gray"}}]
"#,
        ),
        Repeat::Single,
    )
}

// Selector braces stay literal, so this one opts out of substitution.
fn jukebox_tick_function() -> PackFile {
    PackFile::raw(
        &["data", "{namespace}", "functions", "jukebox_tick.mcfunction"],
        Body::text(
            r#"
execute as @a[scores={music_disc_played=1..}] run scoreboard players reset @s music_disc_played
"#,
        ),
        Repeat::Single,
    )
}

const GIVE_DISC_LINE: &str = "give @s minecraft:music_disc_11{{display:{{Name:'{{\"text\":\"{entry.title}\"}}'}},CustomModelData:{entry.custom_model_data}}}\n";

fn give_all_function() -> PackFile {
    PackFile::new(
        &["data", "{namespace}", "functions", "give_all_discs.mcfunction"],
        Body::text(GIVE_DISC_LINE),
        Repeat::CopyWithin,
    )
}

fn give_disc_function() -> PackFile {
    PackFile::new(
        &["data", "{namespace}", "functions", "give_{entry.internal_name}.mcfunction"],
        Body::text(GIVE_DISC_LINE),
        Repeat::Copy,
    )
}

// Drop-pool entry for one custom disc; formatted per entry before the
// loot table is assembled.
fn creeper_disc_pool_entry() -> Body {
    Body::map([
        ("type", Body::text("minecraft:item")),
        ("name", Body::text("minecraft:music_disc_11")),
        ("weight", Body::int(1)),
        (
            "functions",
            Body::seq([Body::map([
                ("function", Body::text("minecraft:set_nbt")),
                ("tag", Body::text("{{CustomModelData:{entry.custom_model_data},HideFlags:32}}")),
            ])]),
        ),
    ])
}

fn rotten_flesh_pool() -> Body {
    Body::map([
        ("rolls", Body::int(1)),
        (
            "entries",
            Body::seq([Body::map([
                ("type", Body::text("minecraft:item")),
                ("name", Body::text("minecraft:rotten_flesh")),
                (
                    "functions",
                    Body::seq([
                        Body::map([
                            ("function", Body::text("minecraft:set_count")),
                            (
                                "count",
                                Body::map([("min", Body::int(0)), ("max", Body::int(2))]),
                            ),
                        ]),
                        Body::map([
                            ("function", Body::text("minecraft:looting_enchant")),
                            (
                                "count",
                                Body::map([("min", Body::int(0)), ("max", Body::int(1))]),
                            ),
                        ]),
                    ]),
                ),
            ])]),
        ),
    ])
}

fn creeper_loot_table(entries: &EntryList) -> Result<PackFile> {
    let mut disc_entries = vec![Body::map([
        ("type", Body::text("minecraft:tag")),
        ("name", Body::text("minecraft:creeper_drop_music_discs")),
        ("weight", Body::int(1)),
        ("expand", Body::Bool(true)),
    ])];

    for entry in entries.iter() {
        let context = Context::new().insert("entry", entry)?;
        disc_entries.push(format_body(&creeper_disc_pool_entry(), &context)?);
    }

    let disc_pool = Body::map([
        ("rolls", Body::int(1)),
        ("entries", Body::Sequence(disc_entries)),
        (
            "conditions",
            Body::seq([Body::map([
                ("condition", Body::text("minecraft:entity_properties")),
                ("predicate", Body::map([("type", Body::text("#minecraft:skeletons"))])),
                ("entity", Body::text("killer")),
            ])]),
        ),
    ]);

    Ok(PackFile::raw(
        &["data", "minecraft", "loot_tables", "entities", "creeper.json"],
        Body::map([
            ("type", Body::text("minecraft:entity")),
            ("pools", Body::seq([rotten_flesh_pool(), disc_pool])),
        ]),
        Repeat::Single,
    ))
}
