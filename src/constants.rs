//! Common constants used throughout the discforge application.

/// Supported manifest file names, tried in order when none is given
pub const MANIFEST_FILES: [&str; 3] = ["discs.json", "discs.yml", "discs.yaml"];

/// Marker file whose presence identifies a directory as generated pack output
pub const PACK_MARKER_FILE: &str = "pack.mcmeta";

/// Suffix appended to the pack name for the datapack directory
pub const DATAPACK_SUFFIX: &str = "_dp";

/// Suffix appended to the pack name for the resourcepack directory
pub const RESOURCEPACK_SUFFIX: &str = "_rp";

/// Suffix for zipped pack archives
pub const ZIP_SUFFIX: &str = ".zip";

/// Pack format used when the manifest does not set one
pub const DEFAULT_PACK_FORMAT: u32 = 15;

/// Datapack layout version, surfaced in generated load messages
pub const VERSION_MAJOR: u32 = 2;
pub const VERSION_MINOR: u32 = 0;
