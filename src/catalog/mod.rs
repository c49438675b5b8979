//! Static file-template catalogs for the generated packs.
//! The engine consumes these lists; everything game-specific lives here.

pub mod datapack;
pub mod resourcepack;

pub use datapack::datapack_files;
pub use resourcepack::resourcepack_files;
